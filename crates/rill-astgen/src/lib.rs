//! # Rill astgen
//!
//! The declarative front end for the Rill AST: kind-declaration parsing,
//! validation, and the canonical `Expr`/`Stmt` tables.
//!
//! The node definitions in `rill-ast` are written by hand rather than
//! generated from these tables, so this crate's job is narrow: keep
//! the declaration format checked, resolve each declared field type to its
//! ownership/container contract, and give `rill-ast` an oracle to test its
//! hand-written inventory against. All errors here are build-tool errors;
//! nothing in this crate runs inside an interpreter.

mod decl;
mod error;
mod tables;

pub use decl::{FamilyDecl, FieldDecl, FieldType, KindDecl};
pub use error::DeclError;
pub use tables::{expr_family, stmt_family, EXPR_DECLS, STMT_DECLS};
