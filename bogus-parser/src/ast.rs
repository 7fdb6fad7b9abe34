use std::rc::Rc;

use crate::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Str(String),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// An identifier (e.g. `foo`).
    Identifier(String),
    /// A prefix expression (e.g. `-1` or `!cond`).
    Unary { op: TokenKind, arg: Box<Expr> },
    /// A binary expression (e.g. `1+1`).
    Binary {
        lhs: Box<Expr>,
        op: TokenKind,
        rhs: Box<Expr>,
    },
    /// A parenthesized expression (e.g. `(1+1)`).
    Grouping(Box<Expr>),
    /// A call expression (e.g. `foo(1, bar)`). The callee can be any expression.
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// Re-binds an existing variable (e.g. `x = 1`).
    Assign { ident: String, value: Box<Expr> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    LetDeclaration {
        ident: String,
        initializer: Expr,
    },
    FnDeclaration {
        ident: String,
        params: Vec<String>,
        /// Shared with every function value created from this declaration.
        body: Rc<Vec<Stmt>>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        /// `else if` is represented as an `else` branch holding a single [`Stmt::If`].
        else_branch: Option<Vec<Stmt>>,
    },
    ExprStmt(Expr),
    ReturnStmt(Expr),
}
