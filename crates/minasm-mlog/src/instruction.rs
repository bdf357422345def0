//! The instruction set, one tagged variant per opcode.
//!
//! Operands are operand text: register names, literals spliced verbatim from
//! the source, or the `null` placeholder. `Label` is a pseudo-instruction and
//! `Jump` targets start out symbolic; the resolver removes the former and
//! rewrites the latter to absolute line indices.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::op::{JumpCond, Op};

/// Target of a `jump`: symbolic until the resolver assigns a line index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpTarget {
    /// Named label, resolved against `label` pseudo-instructions.
    Symbolic(String),
    /// Absolute zero-based line index into the resolved stream.
    Resolved(usize),
}

impl fmt::Display for JumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbolic(name) => f.write_str(name),
            Self::Resolved(line) => write!(f, "{line}"),
        }
    }
}

/// A single line of the target ISA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Load a literal or name into `dst`.
    Set { dst: String, value: String },
    /// Apply a binary or unary operation: `op <mnemonic> <dst> <a> <b>`.
    Op { op: Op, dst: String, a: String, b: String },
    /// Store `value` into the spill bank at `addr`.
    Write { value: String, bank: String, addr: String },
    /// Load from the spill bank at `addr` into `dst`.
    Read { dst: String, bank: String, addr: String },
    /// Conditional or unconditional control transfer.
    Jump {
        target: JumpTarget,
        cond: JumpCond,
        a: String,
        b: String,
    },
    /// Label definition. Pseudo-instruction, removed by the resolver.
    Label(String),
    /// Buffer a value for output.
    Print(String),
    /// Flush the print buffer to a message sink.
    PrintFlush(String),
    /// Drawing primitive: shape plus six arguments.
    Draw { shape: String, args: [String; 6] },
    /// Flush the drawing buffer to a display sink.
    DrawFlush(String),
    /// Query a named attribute off a named entity into `dst`.
    Sensor {
        dst: String,
        entity: String,
        attr: String,
    },
    /// Terminate the program.
    End,
    /// Raw instruction text emitted unmodified (inline-assembly escape hatch).
    Verbatim(String),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { dst, value } => write!(f, "set {dst} {value}"),
            Self::Op { op, dst, a, b } => write!(f, "op {op} {dst} {a} {b}"),
            Self::Write { value, bank, addr } => write!(f, "write {value} {bank} {addr}"),
            Self::Read { dst, bank, addr } => write!(f, "read {dst} {bank} {addr}"),
            Self::Jump { target, cond, a, b } => write!(f, "jump {target} {cond} {a} {b}"),
            Self::Label(name) => write!(f, "label {name}"),
            Self::Print(value) => write!(f, "print {value}"),
            Self::PrintFlush(sink) => write!(f, "printflush {sink}"),
            Self::Draw { shape, args } => {
                write!(f, "draw {shape}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
            Self::DrawFlush(sink) => write!(f, "drawflush {sink}"),
            Self::Sensor { dst, entity, attr } => write!(f, "sensor {dst} {entity} @{attr}"),
            Self::End => f.write_str("end"),
            Self::Verbatim(text) => f.write_str(text),
        }
    }
}

/// Render a program as text, one instruction per line.
pub fn render(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
