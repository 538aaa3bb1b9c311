//! IR emitter for E Minor.
//!
//! Translates a validated (or not — this crate does not require it)
//! `eminor_ast::Program` into a compact, position-independent bytecode
//! stream plus the symbol/constant sidecar described in spec §3: an
//! ordered constant pool, a function name table, and a label table.
//!
//! This crate has no notion of lexing, parsing, linking, or running the
//! emitted bytecode — see `eminor-validator` for the companion static
//! checks that should normally run before `compile` is called.

mod compile;
mod emit;
mod error;

use eminor_ast::{ConstValue, Program};

pub use crate::error::EmitError;

/// The output of one emission: the byte stream and everything a
/// downstream tool needs to interpret it without re-running the emitter.
#[derive(Debug, Clone, Default)]
pub struct CompiledUnit {
    pub bytecode: Vec<u8>,
    pub constants: Vec<ConstValue>,
    pub functions: Vec<(String, u16)>,
    pub labels: Vec<(String, usize)>,
}

/// Compiles `program`'s entry block into bytecode plus its sidecar.
///
/// Returns `Err` on the first fatal condition: a branch displacement that
/// doesn't fit in 16 bits, a `goto` targeting an undefined label, an
/// unrecognized operator, or a literal whose value doesn't match its
/// declared kind. None of these abort gracefully — unlike the validator's
/// `Diagnostic`s, an `EmitError` always means compilation did not finish.
pub fn compile(program: &Program) -> Result<CompiledUnit, EmitError> {
    let emitter = compile::compile_to_emitter(program)?;
    Ok(into_compiled_unit(emitter))
}

fn into_compiled_unit(emitter: emit::Emitter) -> CompiledUnit {
    let bytecode = emitter.bytecode().to_vec();
    let constants = emitter.consts_snapshot();
    let functions = emitter.functions_snapshot();
    let labels = emitter.labels_snapshot();
    CompiledUnit {
        bytecode,
        constants,
        functions,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eminor_ast::{Block, EntryPoint, ExitStmt, Item};

    #[test]
    fn compile_public_api_returns_sidecar_alongside_bytecode() {
        let program = Program {
            entry: EntryPoint {
                block: Block {
                    items: vec![Item::ExitStmt(ExitStmt { line: 1, column: 1 })],
                },
            },
        };
        let unit = compile(&program).unwrap();
        assert_eq!(unit.bytecode, vec![0x05, 0xFF]);
        assert!(unit.constants.is_empty());
        assert!(unit.functions.is_empty());
        assert!(unit.labels.is_empty());
    }
}
