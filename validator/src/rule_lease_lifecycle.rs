//! SC010/SC011/SC012: lease/sublease/release must form a sane sequence
//! on a capsule — no double-lease without an intervening release, and no
//! sublease or release on a capsule that isn't currently leased.

use eminor_ast::{Diagnostic, Item};
use eminor_problems::Problem;
use log::debug;

use crate::state::ValidatorState;

pub fn check(item: &Item, state: &mut ValidatorState, diagnostics: &mut Vec<Diagnostic>) {
    match item {
        Item::LeaseStmt(stmt) => {
            let name = &stmt.target.name;
            if state.leased_caps.contains(name) {
                debug!("{} fired on '{}'", Problem::CapsuleDoubleLeased.code(), name);
                diagnostics.push(Diagnostic::from_problem(
                    Problem::CapsuleDoubleLeased,
                    stmt.target.loc(),
                ));
            }
            state.leased_caps.insert(name.clone());
        }
        Item::SubleaseStmt(stmt) => {
            if !state.leased_caps.contains(&stmt.target.name) {
                debug!(
                    "{} fired on '{}'",
                    Problem::SubleaseWithoutLease.code(),
                    stmt.target.name
                );
                diagnostics.push(Diagnostic::from_problem(
                    Problem::SubleaseWithoutLease,
                    stmt.target.loc(),
                ));
            }
        }
        Item::ReleaseStmt(stmt) => {
            if !state.leased_caps.contains(&stmt.target.name) {
                debug!(
                    "{} fired on '{}'",
                    Problem::ReleaseWithoutLease.code(),
                    stmt.target.name
                );
                diagnostics.push(Diagnostic::from_problem(
                    Problem::ReleaseWithoutLease,
                    stmt.target.loc(),
                ));
            }
            state.leased_caps.remove(&stmt.target.name);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eminor_ast::{CapsuleRef, LeaseStmt, ReleaseStmt, SubleaseStmt};

    fn cap(name: &str) -> CapsuleRef {
        CapsuleRef::new(name, 1, 1)
    }

    #[test]
    fn check_when_lease_twice_without_release_then_sc010_on_second() {
        let mut state = ValidatorState::default();
        let mut diagnostics = Vec::new();
        let stmt = Item::LeaseStmt(LeaseStmt {
            target: cap("X"),
            line: 1,
            column: 1,
        });
        check(&stmt, &mut state, &mut diagnostics);
        assert!(diagnostics.is_empty());
        check(&stmt, &mut state, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "SC010");
    }

    #[test]
    fn check_when_sublease_without_lease_then_sc011() {
        let mut state = ValidatorState::default();
        let mut diagnostics = Vec::new();
        check(
            &Item::SubleaseStmt(SubleaseStmt {
                target: cap("X"),
                line: 1,
                column: 1,
            }),
            &mut state,
            &mut diagnostics,
        );
        assert_eq!(diagnostics[0].code, "SC011");
    }

    #[test]
    fn check_when_release_without_lease_then_sc012() {
        let mut state = ValidatorState::default();
        let mut diagnostics = Vec::new();
        check(
            &Item::ReleaseStmt(ReleaseStmt {
                target: cap("X"),
                line: 1,
                column: 1,
            }),
            &mut state,
            &mut diagnostics,
        );
        assert_eq!(diagnostics[0].code, "SC012");
    }

    #[test]
    fn check_when_release_after_lease_then_removed_from_leased() {
        let mut state = ValidatorState::default();
        let mut diagnostics = Vec::new();
        check(
            &Item::LeaseStmt(LeaseStmt {
                target: cap("X"),
                line: 1,
                column: 1,
            }),
            &mut state,
            &mut diagnostics,
        );
        check(
            &Item::ReleaseStmt(ReleaseStmt {
                target: cap("X"),
                line: 2,
                column: 1,
            }),
            &mut state,
            &mut diagnostics,
        );
        assert!(diagnostics.is_empty());
        assert!(!state.leased_caps.contains("X"));
    }
}
