//! minasm compiler: instruction generation and label resolution.
//!
//! This crate lowers a validated AST to flat logic-assembly instructions:
//! - `ast` - the node shapes delivered by the external front end
//! - `codegen` - AST → instruction stream with symbolic labels
//! - `link` - two-pass resolution of labels to absolute line indices
//!
//! The two stages run in strict sequence with no feedback loop; the resolver
//! never sees the AST. Everything is fatal on error: no warnings, no
//! partial output.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod codegen;
pub mod link;

#[cfg(test)]
pub mod test_utils;

pub use codegen::{Codegen, CodegenError};
pub use link::{LinkError, resolve_labels};

use minasm_mlog::Instruction;

/// Errors that can occur during compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error(transparent)]
    Link(#[from] LinkError),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile a program end to end: generate instructions, then resolve labels.
///
/// The returned stream is numeric-only (no label pseudo-instructions, no
/// symbolic targets), ready for `minasm_mlog::render`.
pub fn compile(program: &ast::Program) -> Result<Vec<Instruction>> {
    let code = Codegen::new().compile_program(program)?;
    Ok(resolve_labels(code)?)
}
