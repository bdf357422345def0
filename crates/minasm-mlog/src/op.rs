//! Operator mnemonics and jump conditions of the target ISA.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mnemonic field of an `op` instruction.
///
/// Covers the binary operators the source language maps onto, plus the unary
/// `not`, whose second operand slot carries the literal `null` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    Pow,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Lshift,
    Rshift,
    LessThan,
    GreaterThan,
    LessThanEq,
    GreaterThanEq,
    Equal,
    NotEqual,
    And,
    Xor,
    Or,
    Land,
    Not,
}

impl Op {
    /// Mnemonic as it appears in instruction text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pow => "pow",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Lshift => "lshift",
            Self::Rshift => "rshift",
            Self::LessThan => "lessThan",
            Self::GreaterThan => "greaterThan",
            Self::LessThanEq => "lessThanEq",
            Self::GreaterThanEq => "greaterThanEq",
            Self::Equal => "equal",
            Self::NotEqual => "notEqual",
            Self::And => "and",
            Self::Xor => "xor",
            Self::Or => "or",
            Self::Land => "land",
            Self::Not => "not",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition field of a `jump` instruction.
///
/// The ISA defines the full set; generated code uses only [`Equal`]
/// (branch-on-zero) and [`Always`].
///
/// [`Equal`]: JumpCond::Equal
/// [`Always`]: JumpCond::Always
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpCond {
    Equal,
    NotEqual,
    LessThan,
    LessThanEq,
    GreaterThan,
    GreaterThanEq,
    StrictEqual,
    Always,
}

impl JumpCond {
    /// Condition as it appears in instruction text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "notEqual",
            Self::LessThan => "lessThan",
            Self::LessThanEq => "lessThanEq",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanEq => "greaterThanEq",
            Self::StrictEqual => "strictEqual",
            Self::Always => "always",
        }
    }
}

impl fmt::Display for JumpCond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
