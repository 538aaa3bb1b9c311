//! Function table and label table (spec §3).
//!
//! Both are simple name→value maps, but they're populated at different
//! times and serve different consumers: the function table is built as
//! names are first referenced (declaration or call) and never mutated
//! after; the label table records the current emission offset each time a
//! `LabelStmt` is encountered, and a re-declaration overwrites the prior
//! offset (spec §9: "last wins").

use std::collections::HashMap;

use crate::error::ContainerError;

/// Ordered, deduplicated function name → index assignment.
///
/// Indices are assigned on first reference and are stable for the
/// lifetime of one emission. Maximum cardinality is `u16::MAX + 1`
/// (65536), matching the `fidx:u16` operand width.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    index: HashMap<String, u16>,
    names: Vec<String>,
}

impl FunctionTable {
    pub fn new() -> Self {
        FunctionTable::default()
    }

    /// Returns the index for `name`, assigning the next index if this is
    /// the first reference.
    ///
    /// Panics if this would exceed the 65536-entry cardinality limit.
    pub fn index_of(&mut self, name: &str) -> u16 {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = u16::try_from(self.names.len()).expect("function table exceeded 65536 entries");
        self.index.insert(name.to_string(), idx);
        self.names.push(name.to_string());
        idx
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the table as name→index pairs, in assignment order, for
    /// the emitter's sidecar output.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u16)> {
        self.names.iter().map(move |n| (n.as_str(), self.index[n]))
    }

    /// Resolves `index` back to its function name.
    ///
    /// For a downstream reader reconstructing `CALL`/`CALLA`/`SPAWN` targets
    /// from the emitted `fidx` operand against the symbol sidecar (spec §8
    /// "Round-trip").
    pub fn name_at(&self, index: u16) -> Result<&str, ContainerError> {
        self.names
            .get(index as usize)
            .map(String::as_str)
            .ok_or(ContainerError::InvalidFunctionIndex(index))
    }
}

/// Label name → absolute byte offset within the emitted stream.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    offsets: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> Self {
        LabelTable::default()
    }

    /// Records `name` at `offset`. A prior definition of the same name is
    /// silently overwritten — redeclaration is a validator warning
    /// (`SC041`), not an emitter error.
    pub fn define(&mut self, name: &str, offset: usize) {
        self.offsets.insert(name.to_string(), offset);
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.offsets.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.offsets.contains_key(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.offsets.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
