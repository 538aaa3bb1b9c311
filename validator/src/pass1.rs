//! Pass 1: collection. Populates `declared_caps` and `labels` before any
//! check runs, so Pass 2 checks can answer "was this ever declared?"
//! without caring about declaration order relative to use (spec §4.2).

use eminor_ast::Item;

use crate::state::ValidatorState;

pub fn collect(item: &Item, state: &mut ValidatorState) {
    match item {
        Item::LetDecl(decl) => {
            state.declared_caps.insert(decl.name.name.clone());
        }
        Item::LabelStmt(stmt) => {
            state.labels.insert(stmt.name.clone());
        }
        _ => {}
    }
}
