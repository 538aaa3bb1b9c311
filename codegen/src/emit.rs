//! Low-level bytecode emitter.
//!
//! Owns the output byte buffer and the three sidecar tables (constant
//! pool, function table, label table) plus the pending fixup list. Higher
//! emission (statement/expression compilation) happens in `compile`; this
//! module only knows how to append bytes and patch branch displacements.

use eminor_container::{capsule_id, ConstantPool, Fixup, FunctionTable, LabelTable};
use eminor_ast::ConstValue;
use log::debug;

use crate::error::EmitError;

/// Accumulates bytecode and the tables that go with it.
pub struct Emitter {
    bytecode: Vec<u8>,
    pub(crate) consts: ConstantPool,
    pub(crate) functions: FunctionTable,
    pub(crate) labels: LabelTable,
    pub(crate) fixups: Vec<Fixup>,
}

impl Emitter {
    pub fn new() -> Self {
        Emitter {
            bytecode: Vec::new(),
            consts: ConstantPool::new(),
            functions: FunctionTable::new(),
            labels: LabelTable::new(),
            fixups: Vec::new(),
        }
    }

    /// Current byte offset — the offset the next emitted byte will land at.
    pub fn here(&self) -> usize {
        self.bytecode.len()
    }

    pub fn push_u8(&mut self, byte: u8) {
        self.bytecode.push(byte);
    }

    pub fn push_u16_be(&mut self, value: u16) {
        self.bytecode.extend_from_slice(&value.to_be_bytes());
    }

    pub fn push_capsule(&mut self, name: &str) {
        self.push_u8(capsule_id::encode(name));
    }

    /// Emits an opcode followed by a two-byte placeholder displacement,
    /// returning the offset of the placeholder slot (for a later
    /// `patch_rel16` or `fixups` entry).
    pub fn push_branch_placeholder(&mut self, opcode: u8) -> usize {
        self.push_u8(opcode);
        let at = self.here();
        self.push_u16_be(0);
        at
    }

    /// Patches the two-byte displacement slot at `at` (as returned by
    /// `push_branch_placeholder`) so that it branches to `target`.
    ///
    /// Per spec §4.1: for a branch opcode at offset `B`, the displacement
    /// slot is `B+1..B+2` (i.e. `at == B+1`) and the stored value is
    /// `target - (B+3)`, i.e. `target - (at+2)`.
    pub fn patch_rel16(&mut self, at: usize, target: usize) -> Result<(), EmitError> {
        let rel = target as i64 - (at as i64 + 2);
        if rel < i16::MIN as i64 || rel > i16::MAX as i64 {
            return Err(EmitError::DisplacementOverflow(rel));
        }
        let bytes = (rel as i16).to_be_bytes();
        self.bytecode[at] = bytes[0];
        self.bytecode[at + 1] = bytes[1];
        Ok(())
    }

    pub fn define_label(&mut self, name: &str) {
        self.labels.define(name, self.here());
    }

    pub fn record_fixup(&mut self, at: usize, target_name: impl Into<String>) {
        self.fixups.push(Fixup::label(at, target_name));
    }

    pub fn intern(&mut self, value: ConstValue) -> u16 {
        self.consts.intern(value)
    }

    pub fn function_index(&mut self, name: &str) -> u16 {
        self.functions.index_of(name)
    }

    /// Resolves every pending fixup against the label table. Called once,
    /// after the entire entry block has been compiled.
    pub fn resolve_fixups(&mut self) -> Result<(), EmitError> {
        let fixups = std::mem::take(&mut self.fixups);
        for fixup in fixups {
            let target = self
                .labels
                .offset_of(&fixup.target_name)
                .ok_or_else(|| EmitError::UndefinedLabel(fixup.target_name.clone()))?;
            self.patch_rel16(fixup.offset, target)?;
            debug!(
                "resolved fixup at {} -> label {:?} (offset {})",
                fixup.offset, fixup.target_name, target
            );
        }
        Ok(())
    }

    pub fn into_bytecode(self) -> Vec<u8> {
        self.bytecode
    }

    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    pub fn consts_snapshot(&self) -> Vec<ConstValue> {
        self.consts.as_slice().to_vec()
    }

    pub fn functions_snapshot(&self) -> Vec<(String, u16)> {
        self.functions
            .entries()
            .map(|(name, idx)| (name.to_string(), idx))
            .collect()
    }

    pub fn labels_snapshot(&self) -> Vec<(String, usize)> {
        self.labels
            .entries()
            .map(|(name, offset)| (name.to_string(), offset))
            .collect()
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Emitter::new()
    }
}
