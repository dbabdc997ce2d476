//! Parenthesized AST dump.
//!
//! A visitor pair producing a compact, fully parenthesized rendering of a
//! tree. This is the debug surface the interpreter passes use when tracing,
//! and doubles as the reference example of adding an operation to the closed
//! families without touching the node definitions.

use crate::{
    AssignExpr, BinaryExpr, BlockStmt, BreakStmt, CallExpr, ClassStmt, ContinueStmt, Expr,
    ExprStmt, ExprVisitor, ForStmt, FunStmt, GetExpr, GroupingExpr, IfStmt, LiteralExpr,
    LogicalExpr, ReturnStmt, SetExpr, Stmt, StmtVisitor, SuperExpr, ThisExpr, UnaryExpr, VarStmt,
    VariableExpr,
};

/// Renders expressions and statements as Lisp-style strings.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_assign(&mut self, expr: &AssignExpr) -> String {
        format!("(= {} {})", expr.name().lexeme, expr.value().accept(self))
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        format!(
            "({} {} {})",
            expr.op().lexeme,
            expr.left().accept(self),
            expr.right().accept(self)
        )
    }

    fn visit_call(&mut self, expr: &CallExpr) -> String {
        let mut out = format!("(call {}", expr.callee().accept(self));
        for arg in expr.args() {
            out.push(' ');
            out.push_str(&arg.accept(self));
        }
        out.push(')');
        out
    }

    fn visit_get(&mut self, expr: &GetExpr) -> String {
        format!("(get {} {})", expr.object().accept(self), expr.name().lexeme)
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr) -> String {
        format!("(group {})", expr.expr().accept(self))
    }

    fn visit_literal(&mut self, expr: &LiteralExpr) -> String {
        expr.value().to_string()
    }

    fn visit_logical(&mut self, expr: &LogicalExpr) -> String {
        format!(
            "({} {} {})",
            expr.op().lexeme,
            expr.left().accept(self),
            expr.right().accept(self)
        )
    }

    fn visit_set(&mut self, expr: &SetExpr) -> String {
        format!(
            "(set {} {} {})",
            expr.object().accept(self),
            expr.name().lexeme,
            expr.value().accept(self)
        )
    }

    fn visit_super(&mut self, expr: &SuperExpr) -> String {
        format!("(super {})", expr.method().lexeme)
    }

    fn visit_this(&mut self, _expr: &ThisExpr) -> String {
        "this".to_string()
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        format!("({} {})", expr.op().lexeme, expr.right().accept(self))
    }

    fn visit_variable(&mut self, expr: &VariableExpr) -> String {
        expr.name().lexeme.to_string()
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_block(&mut self, stmt: &BlockStmt) -> String {
        let mut out = String::from("(block");
        for inner in stmt.stmts() {
            out.push(' ');
            out.push_str(&inner.accept(self));
        }
        out.push(')');
        out
    }

    fn visit_break(&mut self, _stmt: &BreakStmt) -> String {
        "(break)".to_string()
    }

    fn visit_class(&mut self, stmt: &ClassStmt) -> String {
        let mut out = format!("(class {}", stmt.name().lexeme);
        if let Some(superclass) = stmt.superclass() {
            out.push_str(&format!(" (< {})", superclass.name().lexeme));
        }
        for method in stmt.methods() {
            out.push(' ');
            out.push_str(&self.visit_fun(method));
        }
        out.push(')');
        out
    }

    fn visit_continue(&mut self, _stmt: &ContinueStmt) -> String {
        "(continue)".to_string()
    }

    fn visit_expr(&mut self, stmt: &ExprStmt) -> String {
        format!("(; {})", stmt.expr().accept(self))
    }

    fn visit_for(&mut self, stmt: &ForStmt) -> String {
        let mut out = String::from("(for");
        if let Some(initializer) = stmt.initializer() {
            out.push(' ');
            out.push_str(&initializer.accept(self));
        }
        if let Some(condition) = stmt.condition() {
            out.push(' ');
            out.push_str(&condition.accept(self));
        }
        if let Some(increment) = stmt.increment() {
            out.push(' ');
            out.push_str(&increment.accept(self));
        }
        out.push(' ');
        out.push_str(&stmt.body().accept(self));
        out.push(')');
        out
    }

    fn visit_fun(&mut self, stmt: &FunStmt) -> String {
        let mut out = format!("(fun {} (", stmt.name().lexeme);
        for (index, param) in stmt.params().iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            out.push_str(&param.lexeme);
        }
        out.push(')');
        for inner in stmt.body() {
            out.push(' ');
            out.push_str(&inner.accept(self));
        }
        out.push(')');
        out
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> String {
        match stmt.else_branch() {
            Some(else_branch) => format!(
                "(if-else {} {} {})",
                stmt.cond().accept(self),
                stmt.then_branch().accept(self),
                else_branch.accept(self)
            ),
            None => format!(
                "(if {} {})",
                stmt.cond().accept(self),
                stmt.then_branch().accept(self)
            ),
        }
    }

    fn visit_return(&mut self, stmt: &ReturnStmt) -> String {
        match stmt.value() {
            Some(value) => format!("(return {})", value.accept(self)),
            None => "(return)".to_string(),
        }
    }

    fn visit_var(&mut self, stmt: &VarStmt) -> String {
        match stmt.initializer() {
            Some(initializer) => {
                format!("(var {} {})", stmt.name().lexeme, initializer.accept(self))
            }
            None => format!("(var {})", stmt.name().lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Atom, Token, TokenKind};
    use std::rc::Rc;

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name, 1)
    }

    fn number(value: f64) -> Expr {
        LiteralExpr::new(Rc::new(Atom::Number(value))).into()
    }

    #[test]
    fn test_print_binary() {
        let expr: Expr = BinaryExpr::new(
            Token::new(TokenKind::Star, "*", 1),
            UnaryExpr::new(Token::new(TokenKind::Minus, "-", 1), number(123.0)).into(),
            GroupingExpr::new(number(45.67)).into(),
        )
        .into();

        let mut printer = AstPrinter::new();
        assert_eq!(printer.print_expr(&expr), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn test_print_for_skips_absent_clauses() {
        let body: Stmt = BlockStmt::new(vec![BreakStmt::new(Token::new(
            TokenKind::Break,
            "break",
            2,
        ))
        .into()])
        .into();
        let stmt: Stmt = ForStmt::new(None, None, None, body).into();

        let mut printer = AstPrinter::new();
        assert_eq!(printer.print_stmt(&stmt), "(for (block (break)))");
    }

    #[test]
    fn test_print_class() {
        let class: Stmt = ClassStmt::new(
            ident("Dog"),
            Some(VariableExpr::new(ident("Animal"))),
            vec![FunStmt::new(ident("speak"), vec![ident("volume")], Vec::new())],
        )
        .into();

        let mut printer = AstPrinter::new();
        assert_eq!(
            printer.print_stmt(&class),
            "(class Dog (< Animal) (fun speak (volume)))"
        );
    }

    #[test]
    fn test_print_assignment() {
        let stmt: Stmt = ExprStmt::new(AssignExpr::new(ident("x"), number(42.0)).into()).into();
        let mut printer = AstPrinter::new();
        assert_eq!(printer.print_stmt(&stmt), "(; (= x 42))");
    }
}
