//! Instruction generation from the AST.
//!
//! One depth-first, left-to-right traversal producing a flat instruction
//! stream with symbolic labels, plus a side table of pre-compiled function
//! bodies spliced at call sites. Labels are resolved by the `link` pass.
//!
//! The interesting decisions live in expression compilation:
//! - atom operands are spliced as text, emitting zero instructions
//! - binary operations split four ways on operand atomicity, with the
//!   destination parameterized so assignments can target the variable
//!   directly
//! - both-compound operands spill the left result to the bank and reload it
//!   after the right side is computed, with net-zero stack-pointer effect

mod error;
mod generator;


pub use error::CodegenError;
pub use generator::Codegen;
