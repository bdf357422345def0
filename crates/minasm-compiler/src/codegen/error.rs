//! Code generation errors.

/// Fatal errors raised while generating instructions.
///
/// The AST is a closed union dispatched by exhaustive `match`, so the only
/// runtime failure left in generation is a call site naming a function the
/// table does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    /// A call expression referenced a function with no prior declaration.
    #[error("unknown function: {0}")]
    UnknownFunction(String),
}
