//! Star-Code: the static validator for E Minor programs.
//!
//! `validate` runs a two-pass traversal over a `Program`'s entry block:
//!
//! - Pass 1 (`pass1::collect`) walks the whole tree once to record every
//!   declared capsule and label, so Pass 2's checks don't care whether a
//!   use precedes or follows its declaration in source order.
//! - Pass 2 walks the tree again in pre-order (spec §8 "diagnostic
//!   ordering"), running each rule module against every item and
//!   threading `ValidatorState` through as lease/init bookkeeping
//!   accumulates. `goto` targets are collected during this pass and
//!   resolved against the Pass 1 label set once the walk finishes, since
//!   a `goto` may legally target a label declared later in the block.
//!
//! No rule ever aborts the walk — `validate` always returns every
//! diagnostic found, left to right, top to bottom.

mod pass1;
mod rule_capsule_usage;
mod rule_duration_values;
mod rule_goto_labels;
mod rule_if_condition_type;
mod rule_lease_lifecycle;
mod state;
mod walk;

pub use eminor_ast::{Diagnostic, Severity};

use eminor_ast::Program;
use state::ValidatorState;

pub fn validate(program: &Program) -> Vec<Diagnostic> {
    let mut state = ValidatorState::default();
    let block = &program.entry.block;

    walk::for_each_preorder(block, &mut |item| {
        pass1::collect(item, &mut state);
    });

    let mut diagnostics = Vec::new();
    let mut gotos = Vec::new();

    walk::for_each_preorder(block, &mut |item| {
        rule_capsule_usage::check(item, &mut state, &mut diagnostics);
        rule_lease_lifecycle::check(item, &mut state, &mut diagnostics);
        rule_duration_values::check(item, &mut diagnostics);
        rule_if_condition_type::check(item, &mut diagnostics);
        rule_goto_labels::collect(item, &mut gotos);
    });

    rule_goto_labels::check_undefined(&gotos, &state.labels, &mut diagnostics);

    diagnostics
}

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
