//! Label resolution: symbolic jump targets to absolute line indices.
//!
//! Two passes, in this order:
//! 1. Strip every `label` pseudo-instruction, recording the index it would
//!    occupy in the final numbering, i.e. the index of the next surviving
//!    instruction; a trailing label resolves to the stream length.
//! 2. Rewrite every symbolic jump target to the recorded index.
//!
//! Already-resolved streams contain no label definitions and no symbolic
//! targets, so the pass is idempotent. The resolver knows nothing about the
//! AST; it consumes and produces instruction streams only.

use std::collections::BTreeMap;

use minasm_mlog::{Instruction, JumpTarget};


/// Fatal errors raised while resolving labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// A jump referenced a label never defined in the stream.
    #[error("invalid jump to label '{0}'")]
    UndefinedLabel(String),
}

/// Resolve all symbolic jump targets, removing label definitions.
///
/// Duplicate definitions of one label are not rejected; the later
/// definition's position wins.
pub fn resolve_labels(instructions: Vec<Instruction>) -> Result<Vec<Instruction>, LinkError> {
    let mut positions: BTreeMap<String, usize> = BTreeMap::new();
    let mut resolved = Vec::with_capacity(instructions.len());

    for instr in instructions {
        match instr {
            Instruction::Label(name) => {
                positions.insert(name, resolved.len());
            }
            other => resolved.push(other),
        }
    }

    for instr in &mut resolved {
        let Instruction::Jump { target, .. } = instr else {
            continue;
        };
        let JumpTarget::Symbolic(name) = target else {
            continue;
        };
        let line = positions
            .get(name.as_str())
            .copied()
            .ok_or_else(|| LinkError::UndefinedLabel(name.clone()))?;
        *target = JumpTarget::Resolved(line);
    }

    Ok(resolved)
}
