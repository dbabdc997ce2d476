//! Canonical declaration tables for the Rill AST.
//!
//! These are the authoritative inventories the hand-written node definitions
//! in `rill-ast` must agree with; its tests cross-check names, order, and
//! resolving flags against what parses out of here.

use crate::{DeclError, FamilyDecl};

/// Expression kinds. `^` marks the kinds carrying a resolve-depth slot.
pub const EXPR_DECLS: &str = "\
Assign^   : Token name, Expr value
Binary    : Token op, Expr left, Expr right
Call      : Expr callee, Token paren, List<Expr> args
Get       : Expr object, Token name
Grouping  : Expr expr
Literal   : Atom value
Logical   : Token op, Expr left, Expr right
Set       : Expr object, Token name, Expr value
Super^    : Token keyword, Token method
This^     : Token keyword
Unary     : Token op, Expr right
Variable^ : Token name
";

/// Statement kinds. Statements may reference expression kinds, never the
/// other way around.
pub const STMT_DECLS: &str = "\
Block    : List<Stmt> stmts
Break    : Token keyword
Class    : Token name, VariableExpr? superclass, List<FunStmt> methods
Continue : Token keyword
Expr     : Expr expr
For      : Stmt? initializer, Expr? condition, Stmt? increment, Stmt body
Fun      : Token name, List<Token> params, List<Stmt> body
If       : Expr cond, Stmt then_branch, Stmt? else_branch
Return   : Token keyword, Expr? value
Var      : Token name, Expr? initializer
";

/// Parse the canonical expression family.
pub fn expr_family() -> Result<FamilyDecl, DeclError> {
    FamilyDecl::parse("Expr", EXPR_DECLS)
}

/// Parse the canonical statement family.
pub fn stmt_family() -> Result<FamilyDecl, DeclError> {
    FamilyDecl::parse("Stmt", STMT_DECLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tables_parse() {
        let exprs = expr_family().unwrap();
        let stmts = stmt_family().unwrap();
        assert_eq!(exprs.kinds.len(), 12);
        assert_eq!(stmts.kinds.len(), 10);
    }

    #[test]
    fn test_resolving_kinds_are_expression_only() {
        let exprs = expr_family().unwrap();
        assert_eq!(
            exprs.resolving_kinds(),
            vec!["Assign", "Super", "This", "Variable"]
        );

        let stmts = stmt_family().unwrap();
        assert!(stmts.resolving_kinds().is_empty());
    }

    #[test]
    fn test_no_statement_fields_inside_expressions() {
        // The directionality invariant the parser relies on: expression kinds
        // never declare a statement-typed field.
        let exprs = expr_family().unwrap();
        for kind in &exprs.kinds {
            for field in &kind.fields {
                let referenced = field.ty.rust_type();
                assert!(
                    !referenced.contains("Stmt"),
                    "{} declares a statement-typed field {}",
                    kind.node_name("Expr"),
                    field.name
                );
            }
        }
    }
}
