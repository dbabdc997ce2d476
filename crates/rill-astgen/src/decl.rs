//! The kind-declaration language.
//!
//! A family is declared as an ordered list of lines of the form
//!
//! ```text
//! Assign^   : Token name, Expr value
//! ```
//!
//! where the optional trailing `^` on the kind name flags "needs resolving"
//! (the node carries a resolve-depth slot). Field types are drawn from a
//! closed grammar: `Token` (copied by value), `Atom` (shared runtime
//! constant), a node type (required shared child), `Type?` (optional child),
//! and `List<Type>` (ordered, possibly empty sequence of children).
//!
//! The Rill node definitions are hand-written; these tables exist so the
//! hand-written families can be checked against the declared inventory, and
//! so the declaration format itself stays a validated input rather than
//! folklore.

use crate::DeclError;
use smol_str::SmolStr;
use std::fmt;

/// A declared field type, resolved to its ownership/container contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Shared runtime constant: `Atom`.
    Atom,
    /// Lexical token, copied by value.
    Token,
    /// Required child node (a family or a concrete kind).
    Node(SmolStr),
    /// Optional child node: `Type?`.
    Optional(SmolStr),
    /// Ordered, possibly empty sequence of children: `List<Type>`.
    List(SmolStr),
}

impl FieldType {
    /// Parse a declared type. `decl` is the surrounding declaration, used in
    /// diagnostics.
    pub fn parse(text: &str, decl: &str) -> Result<Self, DeclError> {
        let unknown = || DeclError::UnknownFieldType {
            ty: text.to_string(),
            decl: decl.to_string(),
        };

        if text == "Atom" {
            return Ok(FieldType::Atom);
        }
        if text == "Token" {
            return Ok(FieldType::Token);
        }
        if let Some(inner) = text.strip_suffix('?') {
            if !is_type_name(inner) {
                return Err(unknown());
            }
            return Ok(FieldType::Optional(inner.into()));
        }
        if let Some(rest) = text.strip_prefix("List<") {
            let inner = rest.strip_suffix('>').ok_or_else(unknown)?;
            if !is_type_name(inner) {
                return Err(unknown());
            }
            return Ok(FieldType::List(inner.into()));
        }
        if is_type_name(text) {
            return Ok(FieldType::Node(text.into()));
        }
        Err(unknown())
    }

    /// The Rust type a field of this declared type is stored (and passed) as.
    pub fn rust_type(&self) -> String {
        match self {
            FieldType::Atom => "Rc<Atom>".to_string(),
            FieldType::Token => "Token".to_string(),
            FieldType::Node(name) => name.to_string(),
            FieldType::Optional(name) => format!("Option<{}>", name),
            FieldType::List(name) => format!("Vec<{}>", name),
        }
    }

    /// The ownership/container contract this type resolves to.
    pub fn contract(&self) -> &'static str {
        match self {
            FieldType::Atom => "shared, required",
            FieldType::Token => "copied by value",
            FieldType::Node(_) => "shared child, required",
            FieldType::Optional(_) => "shared child, optional",
            FieldType::List(_) => "ordered sequence of shared children",
        }
    }
}

fn is_type_name(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_field_name(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// One declared field: `Type name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: SmolStr,
    pub ty: FieldType,
}

/// One declared kind within a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindDecl {
    /// Kind name without the family suffix (`Assign`, not `AssignExpr`).
    pub name: SmolStr,
    /// Whether this kind carries a resolve-depth slot.
    pub resolving: bool,
    /// Fields in declaration order; never empty.
    pub fields: Vec<FieldDecl>,
}

impl KindDecl {
    /// Parse a single declaration line.
    pub fn parse(line: &str) -> Result<Self, DeclError> {
        let decl = line.trim();
        let malformed = || DeclError::Malformed {
            decl: decl.to_string(),
        };

        let (head, tail) = decl.split_once(':').ok_or_else(malformed)?;

        let mut name = head.trim();
        let resolving = if let Some(stripped) = name.strip_suffix('^') {
            name = stripped.trim_end();
            true
        } else {
            false
        };
        if !is_type_name(name) {
            return Err(malformed());
        }

        let mut fields = Vec::new();
        for part in tail.split(',') {
            let part = part.trim();
            let (ty, field_name) = part.split_once(' ').ok_or_else(malformed)?;
            let field_name = field_name.trim();
            if !is_field_name(field_name) {
                return Err(malformed());
            }
            if fields.iter().any(|f: &FieldDecl| f.name == field_name) {
                return Err(DeclError::DuplicateField {
                    field: field_name.to_string(),
                    decl: decl.to_string(),
                });
            }
            fields.push(FieldDecl {
                name: field_name.into(),
                ty: FieldType::parse(ty.trim(), decl)?,
            });
        }
        if fields.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            name: name.into(),
            resolving,
            fields,
        })
    }

    /// Full node name for a family base: `Assign` + `Expr` = `AssignExpr`.
    pub fn node_name(&self, base: &str) -> String {
        format!("{}{}", self.name, base)
    }
}

/// A whole declared family (`Expr` or `Stmt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyDecl {
    pub base: SmolStr,
    pub kinds: Vec<KindDecl>,
}

impl FamilyDecl {
    /// Parse a declaration table: one kind per line, blank lines and `#`
    /// comments skipped.
    pub fn parse(base: &str, text: &str) -> Result<Self, DeclError> {
        let mut kinds: Vec<KindDecl> = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let kind = KindDecl::parse(line)?;
            if kinds.iter().any(|k| k.name == kind.name) {
                return Err(DeclError::DuplicateKind {
                    name: kind.name.to_string(),
                    decl: line.to_string(),
                });
            }
            kinds.push(kind);
        }
        tracing::debug!(base, kinds = kinds.len(), "parsed family declaration");
        Ok(Self {
            base: base.into(),
            kinds,
        })
    }

    /// Look up a kind by its bare name.
    pub fn kind(&self, name: &str) -> Option<&KindDecl> {
        self.kinds.iter().find(|k| k.name == name)
    }

    /// Bare kind names in declaration order.
    pub fn kind_names(&self) -> Vec<&str> {
        self.kinds.iter().map(|k| k.name.as_str()).collect()
    }

    /// Names of the kinds flagged as resolving, in declaration order.
    pub fn resolving_kinds(&self) -> Vec<&str> {
        self.kinds
            .iter()
            .filter(|k| k.resolving)
            .map(|k| k.name.as_str())
            .collect()
    }
}

impl fmt::Display for FamilyDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} kinds)", self.base, self.kinds.len())?;
        for kind in &self.kinds {
            if kind.resolving {
                writeln!(f, "  {} [resolving]", kind.node_name(&self.base))?;
            } else {
                writeln!(f, "  {}", kind.node_name(&self.base))?;
            }
            for field in &kind.fields {
                writeln!(
                    f,
                    "    {}: {} ({})",
                    field.name,
                    field.ty.rust_type(),
                    field.ty.contract()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolving_kind() {
        let kind = KindDecl::parse("Assign^   : Token name, Expr value").unwrap();
        assert_eq!(kind.name, "Assign");
        assert!(kind.resolving);
        assert_eq!(kind.fields.len(), 2);
        assert_eq!(kind.fields[0].ty, FieldType::Token);
        assert_eq!(kind.fields[1].ty, FieldType::Node("Expr".into()));
        assert_eq!(kind.node_name("Expr"), "AssignExpr");
    }

    #[test]
    fn test_parse_optional_and_list_types() {
        let kind =
            KindDecl::parse("Class : Token name, VariableExpr? superclass, List<FunStmt> methods")
                .unwrap();
        assert!(!kind.resolving);
        assert_eq!(kind.fields[1].ty, FieldType::Optional("VariableExpr".into()));
        assert_eq!(kind.fields[2].ty, FieldType::List("FunStmt".into()));
        assert_eq!(kind.fields[1].ty.rust_type(), "Option<VariableExpr>");
        assert_eq!(kind.fields[2].ty.rust_type(), "Vec<FunStmt>");
    }

    #[test]
    fn test_contract_table() {
        let decl = "x : T f";
        assert_eq!(
            FieldType::parse("Atom", decl).unwrap().contract(),
            "shared, required"
        );
        assert_eq!(
            FieldType::parse("Token", decl).unwrap().contract(),
            "copied by value"
        );
        assert_eq!(
            FieldType::parse("Stmt", decl).unwrap().contract(),
            "shared child, required"
        );
        assert_eq!(
            FieldType::parse("Expr?", decl).unwrap().contract(),
            "shared child, optional"
        );
        assert_eq!(
            FieldType::parse("List<Expr>", decl).unwrap().contract(),
            "ordered sequence of shared children"
        );
        assert_eq!(FieldType::parse("Atom", decl).unwrap().rust_type(), "Rc<Atom>");
    }

    #[test]
    fn test_unknown_field_type() {
        let err = KindDecl::parse("Weird : L*st items").unwrap_err();
        match err {
            DeclError::UnknownFieldType { ty, decl } => {
                assert_eq!(ty, "L*st");
                assert_eq!(decl, "Weird : L*st items");
            }
            other => panic!("expected unknown field type, got {:?}", other),
        }

        let err = KindDecl::parse("Weird : List<> items").unwrap_err();
        match err {
            DeclError::UnknownFieldType { ty, decl } => {
                assert_eq!(ty, "List<>");
                assert_eq!(decl, "Weird : List<> items");
            }
            other => panic!("expected unknown field type, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_declarations() {
        assert!(matches!(
            KindDecl::parse("NoColonHere"),
            Err(DeclError::Malformed { .. })
        ));
        assert!(matches!(
            KindDecl::parse("Lonely : "),
            Err(DeclError::Malformed { .. })
        ));
        assert!(matches!(
            KindDecl::parse("Odd : Token"),
            Err(DeclError::Malformed { .. })
        ));
    }

    #[test]
    fn test_duplicate_field() {
        let err = KindDecl::parse("Binary : Token op, Expr left, Expr left").unwrap_err();
        match err {
            DeclError::DuplicateField { field, .. } => assert_eq!(field, "left"),
            other => panic!("expected duplicate field, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_kind() {
        let text = "If : Expr cond, Stmt body\nIf : Expr cond, Stmt body\n";
        let err = FamilyDecl::parse("Stmt", text).unwrap_err();
        match err {
            DeclError::DuplicateKind { name, .. } => assert_eq!(name, "If"),
            other => panic!("expected duplicate kind, got {:?}", other),
        }
    }

    #[test]
    fn test_family_skips_comments_and_blanks() {
        let text = "# loop kinds\n\nWhile : Expr cond, Stmt body\n";
        let family = FamilyDecl::parse("Stmt", text).unwrap();
        assert_eq!(family.kind_names(), vec!["While"]);
        assert!(family.resolving_kinds().is_empty());
        assert!(family.kind("While").is_some());
        assert!(family.kind("For").is_none());
    }
}
