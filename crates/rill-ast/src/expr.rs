//! Expression nodes for Rill.
//!
//! Every concrete kind is a cheap handle over shared backing storage: cloning
//! a handle clones an `Rc`, never the fields. [`Expr`] is the closed family
//! enum wrapping one handle per kind; narrowing back out goes through the
//! checked `as_*` accessors, which return `None` on a kind mismatch.
//!
//! The four kinds that name a variable use site (`Assign`, `Super`, `This`,
//! `Variable`) carry a resolve-depth slot written by the resolver pass and
//! read by the evaluator. The slot is the only mutable state in the tree, and
//! mutation through any aliasing handle is visible through all of them.

use crate::{Atom, Token};
use std::cell::Cell;
use std::rc::Rc;

/// Visitor over the closed set of expression kinds.
///
/// One method per kind, no defaults: adding a kind is meant to break every
/// visitor until it handles the new case.
pub trait ExprVisitor {
    type Output;

    fn visit_assign(&mut self, expr: &AssignExpr) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_call(&mut self, expr: &CallExpr) -> Self::Output;
    fn visit_get(&mut self, expr: &GetExpr) -> Self::Output;
    fn visit_grouping(&mut self, expr: &GroupingExpr) -> Self::Output;
    fn visit_literal(&mut self, expr: &LiteralExpr) -> Self::Output;
    fn visit_logical(&mut self, expr: &LogicalExpr) -> Self::Output;
    fn visit_set(&mut self, expr: &SetExpr) -> Self::Output;
    fn visit_super(&mut self, expr: &SuperExpr) -> Self::Output;
    fn visit_this(&mut self, expr: &ThisExpr) -> Self::Output;
    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_variable(&mut self, expr: &VariableExpr) -> Self::Output;
}

/// An expression of any kind.
///
/// Construct one by widening a concrete handle with `From`/`Into`; the
/// dynamic kind is fixed at that point and never changes. Cloning aliases the
/// same backing node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Assign(AssignExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    Get(GetExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Logical(LogicalExpr),
    Set(SetExpr),
    Super(SuperExpr),
    This(ThisExpr),
    Unary(UnaryExpr),
    Variable(VariableExpr),
}

impl Expr {
    /// Kind names in declaration order.
    pub const KIND_NAMES: [&'static str; 12] = [
        "Assign", "Binary", "Call", "Get", "Grouping", "Literal", "Logical", "Set", "Super",
        "This", "Unary", "Variable",
    ];

    /// Dispatch to the visitor method matching this expression's kind.
    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Assign(expr) => visitor.visit_assign(expr),
            Expr::Binary(expr) => visitor.visit_binary(expr),
            Expr::Call(expr) => visitor.visit_call(expr),
            Expr::Get(expr) => visitor.visit_get(expr),
            Expr::Grouping(expr) => visitor.visit_grouping(expr),
            Expr::Literal(expr) => visitor.visit_literal(expr),
            Expr::Logical(expr) => visitor.visit_logical(expr),
            Expr::Set(expr) => visitor.visit_set(expr),
            Expr::Super(expr) => visitor.visit_super(expr),
            Expr::This(expr) => visitor.visit_this(expr),
            Expr::Unary(expr) => visitor.visit_unary(expr),
            Expr::Variable(expr) => visitor.visit_variable(expr),
        }
    }

    /// The name of this expression's dynamic kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Assign(_) => "Assign",
            Expr::Binary(_) => "Binary",
            Expr::Call(_) => "Call",
            Expr::Get(_) => "Get",
            Expr::Grouping(_) => "Grouping",
            Expr::Literal(_) => "Literal",
            Expr::Logical(_) => "Logical",
            Expr::Set(_) => "Set",
            Expr::Super(_) => "Super",
            Expr::This(_) => "This",
            Expr::Unary(_) => "Unary",
            Expr::Variable(_) => "Variable",
        }
    }

    /// Whether `self` and `other` alias the same backing node.
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Assign(a), Expr::Assign(b)) => a.ptr_eq(b),
            (Expr::Binary(a), Expr::Binary(b)) => a.ptr_eq(b),
            (Expr::Call(a), Expr::Call(b)) => a.ptr_eq(b),
            (Expr::Get(a), Expr::Get(b)) => a.ptr_eq(b),
            (Expr::Grouping(a), Expr::Grouping(b)) => a.ptr_eq(b),
            (Expr::Literal(a), Expr::Literal(b)) => a.ptr_eq(b),
            (Expr::Logical(a), Expr::Logical(b)) => a.ptr_eq(b),
            (Expr::Set(a), Expr::Set(b)) => a.ptr_eq(b),
            (Expr::Super(a), Expr::Super(b)) => a.ptr_eq(b),
            (Expr::This(a), Expr::This(b)) => a.ptr_eq(b),
            (Expr::Unary(a), Expr::Unary(b)) => a.ptr_eq(b),
            (Expr::Variable(a), Expr::Variable(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_assign(&self) -> Option<AssignExpr> {
        match self {
            Expr::Assign(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<BinaryExpr> {
        match self {
            Expr::Binary(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<CallExpr> {
        match self {
            Expr::Call(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_get(&self) -> Option<GetExpr> {
        match self {
            Expr::Get(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_grouping(&self) -> Option<GroupingExpr> {
        match self {
            Expr::Grouping(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<LiteralExpr> {
        match self {
            Expr::Literal(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_logical(&self) -> Option<LogicalExpr> {
        match self {
            Expr::Logical(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<SetExpr> {
        match self {
            Expr::Set(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_super(&self) -> Option<SuperExpr> {
        match self {
            Expr::Super(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_this(&self) -> Option<ThisExpr> {
        match self {
            Expr::This(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_unary(&self) -> Option<UnaryExpr> {
        match self {
            Expr::Unary(expr) => Some(expr.clone()),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<VariableExpr> {
        match self {
            Expr::Variable(expr) => Some(expr.clone()),
            _ => None,
        }
    }
}

impl From<AssignExpr> for Expr {
    fn from(expr: AssignExpr) -> Self {
        Expr::Assign(expr)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<CallExpr> for Expr {
    fn from(expr: CallExpr) -> Self {
        Expr::Call(expr)
    }
}

impl From<GetExpr> for Expr {
    fn from(expr: GetExpr) -> Self {
        Expr::Get(expr)
    }
}

impl From<GroupingExpr> for Expr {
    fn from(expr: GroupingExpr) -> Self {
        Expr::Grouping(expr)
    }
}

impl From<LiteralExpr> for Expr {
    fn from(expr: LiteralExpr) -> Self {
        Expr::Literal(expr)
    }
}

impl From<LogicalExpr> for Expr {
    fn from(expr: LogicalExpr) -> Self {
        Expr::Logical(expr)
    }
}

impl From<SetExpr> for Expr {
    fn from(expr: SetExpr) -> Self {
        Expr::Set(expr)
    }
}

impl From<SuperExpr> for Expr {
    fn from(expr: SuperExpr) -> Self {
        Expr::Super(expr)
    }
}

impl From<ThisExpr> for Expr {
    fn from(expr: ThisExpr) -> Self {
        Expr::This(expr)
    }
}

impl From<UnaryExpr> for Expr {
    fn from(expr: UnaryExpr) -> Self {
        Expr::Unary(expr)
    }
}

impl From<VariableExpr> for Expr {
    fn from(expr: VariableExpr) -> Self {
        Expr::Variable(expr)
    }
}

// ============================================================================
// Assign
// ============================================================================

/// Assignment to a variable: `name = value`. Resolving.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignExpr {
    data: Rc<AssignData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct AssignData {
    name: Token,
    value: Expr,
    depth: Cell<Option<usize>>,
}

impl AssignExpr {
    pub fn new(name: Token, value: Expr) -> Self {
        Self {
            data: Rc::new(AssignData {
                name,
                value,
                depth: Cell::new(None),
            }),
        }
    }

    pub fn name(&self) -> &Token {
        &self.data.name
    }

    pub fn value(&self) -> &Expr {
        &self.data.value
    }

    /// Lexical distance to the declaring scope, or `None` until the resolver
    /// has run on this node.
    pub fn depth(&self) -> Option<usize> {
        self.data.depth.get()
    }

    /// Record the resolved scope distance, visible through every alias.
    pub fn resolve(&self, depth: usize) {
        self.data.depth.set(Some(depth));
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Binary
// ============================================================================

/// Binary operation: `left op right`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpr {
    data: Rc<BinaryData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct BinaryData {
    op: Token,
    left: Expr,
    right: Expr,
}

impl BinaryExpr {
    pub fn new(op: Token, left: Expr, right: Expr) -> Self {
        Self {
            data: Rc::new(BinaryData { op, left, right }),
        }
    }

    pub fn op(&self) -> &Token {
        &self.data.op
    }

    pub fn left(&self) -> &Expr {
        &self.data.left
    }

    pub fn right(&self) -> &Expr {
        &self.data.right
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Call
// ============================================================================

/// Call expression: `callee(args...)`. The closing parenthesis token is kept
/// for error reporting.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpr {
    data: Rc<CallData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct CallData {
    callee: Expr,
    paren: Token,
    args: Vec<Expr>,
}

impl CallExpr {
    pub fn new(callee: Expr, paren: Token, args: Vec<Expr>) -> Self {
        Self {
            data: Rc::new(CallData {
                callee,
                paren,
                args,
            }),
        }
    }

    pub fn callee(&self) -> &Expr {
        &self.data.callee
    }

    pub fn paren(&self) -> &Token {
        &self.data.paren
    }

    /// Arguments in call order; may be empty.
    pub fn args(&self) -> &[Expr] {
        &self.data.args
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Get
// ============================================================================

/// Property read: `object.name`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GetExpr {
    data: Rc<GetData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct GetData {
    object: Expr,
    name: Token,
}

impl GetExpr {
    pub fn new(object: Expr, name: Token) -> Self {
        Self {
            data: Rc::new(GetData { object, name }),
        }
    }

    pub fn object(&self) -> &Expr {
        &self.data.object
    }

    pub fn name(&self) -> &Token {
        &self.data.name
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Grouping
// ============================================================================

/// Parenthesized expression: `(expr)`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingExpr {
    data: Rc<GroupingData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct GroupingData {
    expr: Expr,
}

impl GroupingExpr {
    pub fn new(expr: Expr) -> Self {
        Self {
            data: Rc::new(GroupingData { expr }),
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
// Literal
// ============================================================================

/// Literal constant. The atom is shared so evaluation can alias it instead of
/// copying.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiteralExpr {
    data: Rc<LiteralData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct LiteralData {
    value: Rc<Atom>,
}

impl LiteralExpr {
    pub fn new(value: Rc<Atom>) -> Self {
        Self {
            data: Rc::new(LiteralData { value }),
        }
    }

    pub fn value(&self) -> &Rc<Atom> {
        &self.data.value
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Logical
// ============================================================================

/// Short-circuiting operation: `left and right`, `left or right`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalExpr {
    data: Rc<LogicalData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct LogicalData {
    op: Token,
    left: Expr,
    right: Expr,
}

impl LogicalExpr {
    pub fn new(op: Token, left: Expr, right: Expr) -> Self {
        Self {
            data: Rc::new(LogicalData { op, left, right }),
        }
    }

    pub fn op(&self) -> &Token {
        &self.data.op
    }

    pub fn left(&self) -> &Expr {
        &self.data.left
    }

    pub fn right(&self) -> &Expr {
        &self.data.right
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Set
// ============================================================================

/// Property write: `object.name = value`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetExpr {
    data: Rc<SetData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct SetData {
    object: Expr,
    name: Token,
    value: Expr,
}

impl SetExpr {
    pub fn new(object: Expr, name: Token, value: Expr) -> Self {
        Self {
            data: Rc::new(SetData {
                object,
                name,
                value,
            }),
        }
    }

    pub fn object(&self) -> &Expr {
        &self.data.object
    }

    pub fn name(&self) -> &Token {
        &self.data.name
    }

    pub fn value(&self) -> &Expr {
        &self.data.value
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Super
// ============================================================================

/// Superclass method access: `super.method`. Resolving.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperExpr {
    data: Rc<SuperData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct SuperData {
    keyword: Token,
    method: Token,
    depth: Cell<Option<usize>>,
}

impl SuperExpr {
    pub fn new(keyword: Token, method: Token) -> Self {
        Self {
            data: Rc::new(SuperData {
                keyword,
                method,
                depth: Cell::new(None),
            }),
        }
    }

    pub fn keyword(&self) -> &Token {
        &self.data.keyword
    }

    pub fn method(&self) -> &Token {
        &self.data.method
    }

    /// Lexical distance to the scope binding `super`, or `None` until
    /// resolved.
    pub fn depth(&self) -> Option<usize> {
        self.data.depth.get()
    }

    pub fn resolve(&self, depth: usize) {
        self.data.depth.set(Some(depth));
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// This
// ============================================================================

/// The `this` keyword. Resolving.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThisExpr {
    data: Rc<ThisData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ThisData {
    keyword: Token,
    depth: Cell<Option<usize>>,
}

impl ThisExpr {
    pub fn new(keyword: Token) -> Self {
        Self {
            data: Rc::new(ThisData {
                keyword,
                depth: Cell::new(None),
            }),
        }
    }

    pub fn keyword(&self) -> &Token {
        &self.data.keyword
    }

    /// Lexical distance to the scope binding `this`, or `None` until
    /// resolved.
    pub fn depth(&self) -> Option<usize> {
        self.data.depth.get()
    }

    pub fn resolve(&self, depth: usize) {
        self.data.depth.set(Some(depth));
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Unary
// ============================================================================

/// Unary operation: `op right`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpr {
    data: Rc<UnaryData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct UnaryData {
    op: Token,
    right: Expr,
}

impl UnaryExpr {
    pub fn new(op: Token, right: Expr) -> Self {
        Self {
            data: Rc::new(UnaryData { op, right }),
        }
    }

    pub fn op(&self) -> &Token {
        &self.data.op
    }

    pub fn right(&self) -> &Expr {
        &self.data.right
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

// ============================================================================
// Variable
// ============================================================================

/// Variable reference: `name`. Resolving.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableExpr {
    data: Rc<VariableData>,
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct VariableData {
    name: Token,
    depth: Cell<Option<usize>>,
}

impl VariableExpr {
    pub fn new(name: Token) -> Self {
        Self {
            data: Rc::new(VariableData {
                name,
                depth: Cell::new(None),
            }),
        }
    }

    pub fn name(&self) -> &Token {
        &self.data.name
    }

    /// Lexical distance to the declaring scope, or `None` until resolved.
    pub fn depth(&self) -> Option<usize> {
        self.data.depth.get()
    }

    pub fn resolve(&self, depth: usize) {
        self.data.depth.set(Some(depth));
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

    fn number(value: f64) -> Expr {
        LiteralExpr::new(Rc::new(Atom::Number(value))).into()
    }

    #[test]
    fn test_downcast_matches_dynamic_kind() {
        let variable = VariableExpr::new(ident("x"));
        let expr: Expr = variable.clone().into();

        let narrowed = expr.as_variable().unwrap();
        assert!(narrowed.ptr_eq(&variable));
        assert!(expr.as_binary().is_none());
        assert!(expr.as_literal().is_none());
        assert_eq!(expr.kind_name(), "Variable");
    }

    #[test]
    fn test_clone_aliases_storage() {
        let this = ThisExpr::new(Token::new(TokenKind::This, "this", 2));
        let copies: Vec<ThisExpr> = (0..4).map(|_| this.clone()).collect();

        copies.last().unwrap().resolve(3);
        assert_eq!(this.depth(), Some(3));
        assert_eq!(copies[0].depth(), Some(3));
    }

    #[test]
    fn test_depth_unset_until_resolved() {
        let sup = SuperExpr::new(
            Token::new(TokenKind::Super, "super", 1),
            ident("speak"),
        );
        assert_eq!(sup.depth(), None);
        sup.resolve(2);
        assert_eq!(sup.depth(), Some(2));
    }

    #[test]
    fn test_separate_nodes_are_not_identical() {
        let a: Expr = VariableExpr::new(ident("a")).into();
        let b: Expr = VariableExpr::new(ident("a")).into();
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
    }

    #[test]
    fn test_call_preserves_argument_order() {
        let args = vec![number(1.0), number(2.0), number(3.0)];
        let call = CallExpr::new(
            VariableExpr::new(ident("f")).into(),
            Token::new(TokenKind::RightParen, ")", 1),
            args,
        );

        assert_eq!(call.args().len(), 3);
        let values: Vec<f64> = call
            .args()
            .iter()
            .map(|arg| match arg.as_literal().unwrap().value().as_ref() {
                Atom::Number(n) => *n,
                other => panic!("expected number, got {:?}", other),
            })
            .collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }
}
