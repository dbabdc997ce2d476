//! Statement nodes for Rill.
//!
//! Same representation scheme as [`crate::expr`]: one shared-storage handle
//! per kind, a closed [`Stmt`] family enum, checked `as_*` narrowing, and
//! visitor dispatch through [`StmtVisitor`].
//!
//! Statements may hold expression-family fields (and the `Class` kind holds
//! concrete `VariableExpr`/`FunStmt` children), but no expression kind holds
//! a statement. The parser relies on that direction; nothing here enforces
//! it beyond the field types themselves.

use crate::{Expr, Token, VariableExpr};
use std::rc::Rc;

/// Visitor over the closed set of statement kinds.
pub trait StmtVisitor {
    type Output;

    fn visit_block(&mut self, stmt: &BlockStmt) -> Self::Output;
    fn visit_break(&mut self, stmt: &BreakStmt) -> Self::Output;
    fn visit_class(&mut self, stmt: &ClassStmt) -> Self::Output;
    fn visit_continue(&mut self, stmt: &ContinueStmt) -> Self::Output;
    fn visit_expr(&mut self, stmt: &ExprStmt) -> Self::Output;
    fn visit_for(&mut self, stmt: &ForStmt) -> Self::Output;
    fn visit_fun(&mut self, stmt: &FunStmt) -> Self::Output;
    fn visit_if(&mut self, stmt: &IfStmt) -> Self::Output;
    fn visit_return(&mut self, stmt: &ReturnStmt) -> Self::Output;
    fn visit_var(&mut self, stmt: &VarStmt) -> Self::Output;
}

/// A statement of any kind.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    Block(BlockStmt),
    Break(BreakStmt),
    Class(ClassStmt),
    Continue(ContinueStmt),
    Expr(ExprStmt),
    For(ForStmt),
    Fun(FunStmt),
    If(IfStmt),
    Return(ReturnStmt),
    Var(VarStmt),
}

impl Stmt {
    /// Kind names in declaration order.
    pub const KIND_NAMES: [&'static str; 10] = [
        "Block", "Break", "Class", "Continue", "Expr", "For", "Fun", "If", "Return", "Var",
    ];

    /// Dispatch to the visitor method matching this statement's kind.
    pub fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Block(stmt) => visitor.visit_block(stmt),
            Stmt::Break(stmt) => visitor.visit_break(stmt),
            Stmt::Class(stmt) => visitor.visit_class(stmt),
            Stmt::Continue(stmt) => visitor.visit_continue(stmt),
            Stmt::Expr(stmt) => visitor.visit_expr(stmt),
            Stmt::For(stmt) => visitor.visit_for(stmt),
            Stmt::Fun(stmt) => visitor.visit_fun(stmt),
            Stmt::If(stmt) => visitor.visit_if(stmt),
            Stmt::Return(stmt) => visitor.visit_return(stmt),
            Stmt::Var(stmt) => visitor.visit_var(stmt),
        }
    }

    /// The name of this statement's dynamic kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Block(_) => "Block",
            Stmt::Break(_) => "Break",
            Stmt::Class(_) => "Class",
            Stmt::Continue(_) => "Continue",
            Stmt::Expr(_) => "Expr",
            Stmt::For(_) => "For",
            Stmt::Fun(_) => "Fun",
            Stmt::If(_) => "If",
            Stmt::Return(_) => "Return",
            Stmt::Var(_) => "Var",
        }
    }

    /// Whether `self` and `other` alias the same backing node.
    pub fn ptr_eq(&self, other: &Stmt) -> bool {
        match (self, other) {
            (Stmt::Block(a), Stmt::Block(b)) => a.ptr_eq(b),
            (Stmt::Break(a), Stmt::Break(b)) => a.ptr_eq(b),
            (Stmt::Class(a), Stmt::Class(b)) => a.ptr_eq(b),
            (Stmt::Continue(a), Stmt::Continue(b)) => a.ptr_eq(b),
            (Stmt::Expr(a), Stmt::Expr(b)) => a.ptr_eq(b),
            (Stmt::For(a), Stmt::For(b)) => a.ptr_eq(b),
            (Stmt::Fun(a), Stmt::Fun(b)) => a.ptr_eq(b),
            (Stmt::If(a), Stmt::If(b)) => a.ptr_eq(b),
            (Stmt::Return(a), Stmt::Return(b)) => a.ptr_eq(b),
            (Stmt::Var(a), Stmt::Var(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_block(&self) -> Option<BlockStmt> {
        match self {
            Stmt::Block(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_break(&self) -> Option<BreakStmt> {
        match self {
            Stmt::Break(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<ClassStmt> {
        match self {
            Stmt::Class(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_continue(&self) -> Option<ContinueStmt> {
        match self {
            Stmt::Continue(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_expr(&self) -> Option<ExprStmt> {
        match self {
            Stmt::Expr(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_for(&self) -> Option<ForStmt> {
        match self {
            Stmt::For(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_fun(&self) -> Option<FunStmt> {
        match self {
            Stmt::Fun(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_if(&self) -> Option<IfStmt> {
        match self {
            Stmt::If(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_return(&self) -> Option<ReturnStmt> {
        match self {
            Stmt::Return(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }

    pub fn as_var(&self) -> Option<VarStmt> {
        match self {
            Stmt::Var(stmt) => Some(stmt.clone()),
            _ => None,
        }
    }
}

impl From<BlockStmt> for Stmt {
    fn from(stmt: BlockStmt) -> Self {
        Stmt::Block(stmt)
    }
}

impl From<BreakStmt> for Stmt {
    fn from(stmt: BreakStmt) -> Self {
        Stmt::Break(stmt)
    }
}

impl From<ClassStmt> for Stmt {
    fn from(stmt: ClassStmt) -> Self {
        Stmt::Class(stmt)
    }
}

impl From<ContinueStmt> for Stmt {
    fn from(stmt: ContinueStmt) -> Self {
        Stmt::Continue(stmt)
    }
}

impl From<ExprStmt> for Stmt {
    fn from(stmt: ExprStmt) -> Self {
        Stmt::Expr(stmt)
    }
}

impl From<ForStmt> for Stmt {
    fn from(stmt: ForStmt) -> Self {
        Stmt::For(stmt)
    }
}

impl From<FunStmt> for Stmt {
    fn from(stmt: FunStmt) -> Self {
        Stmt::Fun(stmt)
    }
}

impl From<IfStmt> for Stmt {
    fn from(stmt: IfStmt) -> Self {
        Stmt::If(stmt)
    }
}

impl From<ReturnStmt> for Stmt {
    fn from(stmt: ReturnStmt) -> Self {
        Stmt::Return(stmt)
    }
}

impl From<VarStmt> for Stmt {
    fn from(stmt: VarStmt) -> Self {
        Stmt::Var(stmt)
    }
}

// ============================================================================
// Block
// ============================================================================

/// Braced statement list: `{ stmts... }`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockStmt {
    data: Rc<BlockData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct BlockData {
    stmts: Vec<Stmt>,
}

impl BlockStmt {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self {
            data: Rc::new(BlockData { stmts }),
        }
    }

    /// Statements in source order; may be empty.
    pub fn stmts(&self) -> &[Stmt] {
        &self.data.stmts
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Break
// ============================================================================

/// `break;`
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakStmt {
    data: Rc<BreakData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct BreakData {
    keyword: Token,
}

impl BreakStmt {
    pub fn new(keyword: Token) -> Self {
        Self {
            data: Rc::new(BreakData { keyword }),
        }
    }

    pub fn keyword(&self) -> &Token {
        &self.data.keyword
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Class
// ============================================================================

/// Class declaration. The superclass clause, when present, is the concrete
/// `VariableExpr` naming it; methods are concrete `FunStmt` nodes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassStmt {
    data: Rc<ClassData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ClassData {
    name: Token,
    superclass: Option<VariableExpr>,
    methods: Vec<FunStmt>,
}

impl ClassStmt {
    pub fn new(name: Token, superclass: Option<VariableExpr>, methods: Vec<FunStmt>) -> Self {
        Self {
            data: Rc::new(ClassData {
                name,
                superclass,
                methods,
            }),
        }
    }

    pub fn name(&self) -> &Token {
        &self.data.name
    }

    pub fn superclass(&self) -> Option<&VariableExpr> {
        self.data.superclass.as_ref()
    }

    /// Methods in declaration order; may be empty.
    pub fn methods(&self) -> &[FunStmt] {
        &self.data.methods
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Continue
// ============================================================================

/// `continue;`
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinueStmt {
    data: Rc<ContinueData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ContinueData {
    keyword: Token,
}

impl ContinueStmt {
    pub fn new(keyword: Token) -> Self {
        Self {
            data: Rc::new(ContinueData { keyword }),
        }
    }

    pub fn keyword(&self) -> &Token {
        &self.data.keyword
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Expr
// ============================================================================

/// Expression evaluated for its side effects: `expr;`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprStmt {
    data: Rc<ExprStmtData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ExprStmtData {
    expr: Expr,
}

impl ExprStmt {
    pub fn new(expr: Expr) -> Self {
        Self {
            data: Rc::new(ExprStmtData { expr }),
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.data.expr
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// For
// ============================================================================

/// `for (initializer; condition; increment) body`. Every clause except the
/// body may be absent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForStmt {
    data: Rc<ForData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ForData {
    initializer: Option<Stmt>,
    condition: Option<Expr>,
    increment: Option<Stmt>,
    body: Stmt,
}

impl ForStmt {
    pub fn new(
        initializer: Option<Stmt>,
        condition: Option<Expr>,
        increment: Option<Stmt>,
        body: Stmt,
    ) -> Self {
        Self {
            data: Rc::new(ForData {
                initializer,
                condition,
                increment,
                body,
            }),
        }
    }

    pub fn initializer(&self) -> Option<&Stmt> {
        self.data.initializer.as_ref()
    }

    pub fn condition(&self) -> Option<&Expr> {
        self.data.condition.as_ref()
    }

    pub fn increment(&self) -> Option<&Stmt> {
        self.data.increment.as_ref()
    }

    pub fn body(&self) -> &Stmt {
        &self.data.body
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Fun
// ============================================================================

/// Function declaration: `fun name(params) { body }`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunStmt {
    data: Rc<FunData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct FunData {
    name: Token,
    params: Vec<Token>,
    body: Vec<Stmt>,
}

impl FunStmt {
    pub fn new(name: Token, params: Vec<Token>, body: Vec<Stmt>) -> Self {
        Self {
            data: Rc::new(FunData { name, params, body }),
        }
    }

    pub fn name(&self) -> &Token {
        &self.data.name
    }

    /// Parameter tokens in declaration order; may be empty.
    pub fn params(&self) -> &[Token] {
        &self.data.params
    }

    /// Body statements in source order; may be empty.
    pub fn body(&self) -> &[Stmt] {
        &self.data.body
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// If
// ============================================================================

/// `if (cond) then_branch else else_branch`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStmt {
    data: Rc<IfData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct IfData {
    cond: Expr,
    then_branch: Stmt,
    else_branch: Option<Stmt>,
}

impl IfStmt {
    pub fn new(cond: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Self {
            data: Rc::new(IfData {
                cond,
                then_branch,
                else_branch,
            }),
        }
    }

    pub fn cond(&self) -> &Expr {
        &self.data.cond
    }

    pub fn then_branch(&self) -> &Stmt {
        &self.data.then_branch
    }

    pub fn else_branch(&self) -> Option<&Stmt> {
        self.data.else_branch.as_ref()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Return
// ============================================================================

/// `return value;` — the value is absent for a bare `return;`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStmt {
    data: Rc<ReturnData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ReturnData {
    keyword: Token,
    value: Option<Expr>,
}

impl ReturnStmt {
    pub fn new(keyword: Token, value: Option<Expr>) -> Self {
        Self {
            data: Rc::new(ReturnData { keyword, value }),
        }
    }

    pub fn keyword(&self) -> &Token {
        &self.data.keyword
    }

    pub fn value(&self) -> Option<&Expr> {
        self.data.value.as_ref()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Var
// ============================================================================

/// Variable declaration: `var name = initializer;`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarStmt {
    data: Rc<VarData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct VarData {
    name: Token,
    initializer: Option<Expr>,
}

impl VarStmt {
    pub fn new(name: Token, initializer: Option<Expr>) -> Self {
        Self {
            data: Rc::new(VarData { name, initializer }),
        }
    }

    pub fn name(&self) -> &Token {
        &self.data.name
    }

    pub fn initializer(&self) -> Option<&Expr> {
        self.data.initializer.as_ref()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name, 1)
    }

    #[test]
    fn test_optional_fields_absent() {
        let body: Stmt = BlockStmt::new(Vec::new()).into();
        let stmt = ForStmt::new(None, None, None, body);

        assert!(stmt.initializer().is_none());
        assert!(stmt.condition().is_none());
        assert!(stmt.increment().is_none());
        assert!(stmt.body().as_block().is_some());
    }

    #[test]
    fn test_class_holds_concrete_children() {
        let superclass = VariableExpr::new(ident("Animal"));
        let speak = FunStmt::new(ident("speak"), Vec::new(), Vec::new());
        let class = ClassStmt::new(ident("Dog"), Some(superclass.clone()), vec![speak.clone()]);

        assert!(class.superclass().unwrap().ptr_eq(&superclass));
        assert_eq!(class.methods().len(), 1);
        assert!(class.methods()[0].ptr_eq(&speak));
    }

    #[test]
    fn test_downcast_mismatch_is_none() {
        let stmt: Stmt = BreakStmt::new(Token::new(TokenKind::Break, "break", 4)).into();
        assert!(stmt.as_return().is_none());
        assert!(stmt.as_block().is_none());
        let narrowed = stmt.as_break().unwrap();
        assert_eq!(narrowed.keyword().line, 4);
    }

    #[test]
    fn test_block_preserves_statement_order() {
        let stmts: Vec<Stmt> = ["a", "b", "c"]
            .iter()
            .map(|name| VarStmt::new(ident(name), None).into())
            .collect();
        let block = BlockStmt::new(stmts);

        let names: Vec<String> = block
            .stmts()
            .iter()
            .map(|stmt| stmt.as_var().unwrap().name().lexeme.to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
