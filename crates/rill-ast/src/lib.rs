//! # Rill AST
//!
//! Abstract syntax tree definitions for the Rill scripting language.
//!
//! Nodes are cheap value-semantics handles over shared backing storage: the
//! parser builds concrete handles bottom-up and widens them into the [`Expr`]
//! and [`Stmt`] family enums, the resolver writes scope depths through the
//! same aliased nodes, and the evaluator reads them back. Cloning any handle
//! aliases the original node; nothing here deep-copies.
//!
//! Downstream passes either pattern-match on the family enums directly or
//! implement [`ExprVisitor`]/[`StmtVisitor`] and go through `accept`.

mod atom;
mod expr;
mod printer;
mod stmt;
mod token;

pub use atom::Atom;
pub use expr::*;
pub use printer::AstPrinter;
pub use stmt::*;
pub use token::{Token, TokenKind};
