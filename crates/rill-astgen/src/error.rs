//! Declaration error definitions.

use thiserror::Error;

/// A malformed kind declaration.
///
/// These only ever surface while checking declaration tables, never while an
/// interpreter is running; every variant names the offending declaration so
/// the table can be fixed by hand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeclError {
    #[error("malformed kind declaration: `{decl}`")]
    Malformed { decl: String },

    #[error("unknown field type `{ty}` in declaration `{decl}`")]
    UnknownFieldType { ty: String, decl: String },

    #[error("duplicate kind name `{name}` in declaration `{decl}`")]
    DuplicateKind { name: String, decl: String },

    #[error("duplicate field name `{field}` in declaration `{decl}`")]
    DuplicateField { field: String, decl: String },
}

impl DeclError {
    /// The declaration text this error refers to.
    pub fn declaration(&self) -> &str {
        match self {
            DeclError::Malformed { decl } => decl,
            DeclError::UnknownFieldType { decl, .. } => decl,
            DeclError::DuplicateKind { decl, .. } => decl,
            DeclError::DuplicateField { decl, .. } => decl,
        }
    }
}
