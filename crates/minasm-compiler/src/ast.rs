//! AST node shapes delivered by the front end.
//!
//! The parser is a separate component; this crate receives an
//! already-validated tree and never re-checks grammar-level constraints
//! (arity of `draw`, assignment targets being identifiers, and so on).
//! Serde derives make these types the interchange contract a front end
//! targets.
//!
//! Literals and identifiers carry their verbatim source text. The generator
//! splices that text directly into operand positions, so nothing is ever
//! reformatted: `"hello"` keeps its quotes, `2.5` stays `2.5`.

use serde::{Deserialize, Serialize};

use minasm_mlog::Op;

/// Root node: the top-level statement sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

/// An ordered sequence of statements. Blocks add no scope of their own.
pub type Block = Vec<Stmt>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// Expression evaluated for its side effects; the result is discarded.
    Expr(Expr),
    /// Print each argument, then flush to the message sink.
    Print(Vec<Expr>),
    /// Drawing primitive: shape plus six atom arguments, forwarded verbatim.
    Draw { shape: String, args: [String; 6] },
    /// Flush the drawing buffer to the display sink.
    DrawFlush,
    /// Inline raw instruction line, as written in the source (quotes
    /// included); emitted verbatim once the quotes are stripped.
    Asm(String),
    /// Named function declaration. Compiled into the function table;
    /// emits nothing where it is declared.
    Function { name: String, body: Block },
    /// Conditional; `else_body` is absent for a naked `if`.
    If {
        cond: Expr,
        then_body: Block,
        else_body: Option<Block>,
    },
    /// User-written label definition.
    Label(String),
    /// Unconditional jump to a user-written label.
    Goto(String),
    While { cond: Expr, body: Block },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric or quoted-string literal, verbatim source text.
    Literal(String),
    /// Bare identifier.
    Ident(String),
    /// Call of a previously declared function (no arguments).
    Call(String),
    /// Parenthesized expression. Transparent, but defeats atomicity.
    Paren(Box<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `target = value`.
    Assign {
        target: String,
        value: Box<Expr>,
    },
    /// `target += value` / `target -= value`.
    AssignOp {
        target: String,
        op: AssignOp,
        value: Box<Expr>,
    },
    /// Query `attr` off `entity`.
    Sensor {
        entity: String,
        attr: String,
    },
}

impl Expr {
    /// Operand text of a bare literal or identifier.
    ///
    /// Atoms need no computation and are referenced directly by their text;
    /// every other expression (parenthesized atoms included) compiles through
    /// the accumulator.
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Self::Literal(text) | Self::Ident(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Arithmetic negation, realized as multiply-by-negative-one.
    Neg,
    /// Bitwise not, realized with the `null` second operand slot.
    BitNot,
}

/// The two supported compound self-assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    AddAssign,
    SubAssign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    Pow,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    BitAnd,
    BitXor,
    BitOr,
    And,
}

impl BinOp {
    /// ISA mnemonic for this operator. Total over the operator set.
    pub fn mnemonic(self) -> Op {
        match self {
            Self::Pow => Op::Pow,
            Self::Mul => Op::Mul,
            Self::Div => Op::Div,
            Self::Mod => Op::Mod,
            Self::Add => Op::Add,
            Self::Sub => Op::Sub,
            Self::Shl => Op::Lshift,
            Self::Shr => Op::Rshift,
            Self::Lt => Op::LessThan,
            Self::Gt => Op::GreaterThan,
            Self::Le => Op::LessThanEq,
            Self::Ge => Op::GreaterThanEq,
            Self::Eq => Op::Equal,
            Self::Ne => Op::NotEqual,
            Self::BitAnd => Op::And,
            Self::BitXor => Op::Xor,
            Self::BitOr => Op::Or,
            Self::And => Op::Land,
        }
    }
}
