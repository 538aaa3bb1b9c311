//! The evolving state Pass 1 populates and Pass 2 reads and mutates.
//!
//! No global mutable state: one `ValidatorState` lives for the duration
//! of a single `validate` call (spec §9 "Two-pass state").

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ValidatorState {
    /// Capsule names declared via `LetDecl` (Pass 1).
    pub declared_caps: HashSet<String>,
    /// Capsule names seen in an `InitStmt` so far (Pass 2, monotonically
    /// non-decreasing per spec §8).
    pub inited_caps: HashSet<String>,
    /// Capsule names currently under lease (Pass 2).
    pub leased_caps: HashSet<String>,
    /// Label names declared via `LabelStmt` (Pass 1).
    pub labels: HashSet<String>,
}

impl ValidatorState {
    pub fn is_known(&self, name: &str) -> bool {
        self.inited_caps.contains(name) || self.declared_caps.contains(name)
    }
}
