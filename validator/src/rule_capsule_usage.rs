//! SC001/SC002/SC003: a capsule, channel, or packet must be declared
//! (`let`) or initialized (`init`) before it is used elsewhere.
//!
//! `InitStmt` itself is the one node that mutates `inited_caps` rather
//! than reading it — it has no failure mode of its own.

use eminor_ast::{CapsuleRef, Diagnostic, Item};
use eminor_problems::Problem;
use log::debug;

use crate::state::ValidatorState;

pub fn check(item: &Item, state: &mut ValidatorState, diagnostics: &mut Vec<Diagnostic>) {
    match item {
        Item::InitStmt(stmt) => {
            state.inited_caps.insert(stmt.target.name.clone());
        }
        Item::LoadStmt(stmt) => {
            check_used(&stmt.target, state, diagnostics, Problem::CapsuleUsedBeforeInit)
        }
        Item::RenderStmt(stmt) => {
            check_used(&stmt.target, state, diagnostics, Problem::CapsuleUsedBeforeInit)
        }
        Item::InputStmt(stmt) => {
            check_used(&stmt.target, state, diagnostics, Problem::CapsuleUsedBeforeInit)
        }
        Item::OutputStmt(stmt) => {
            check_used(&stmt.target, state, diagnostics, Problem::CapsuleUsedBeforeInit)
        }
        Item::StampStmt(stmt) => {
            check_used(&stmt.target, state, diagnostics, Problem::CapsuleUsedBeforeInit)
        }
        Item::ExpireStmt(stmt) => {
            check_used(&stmt.target, state, diagnostics, Problem::CapsuleUsedBeforeInit)
        }
        Item::SendStmt(stmt) => {
            check_used(&stmt.chan, state, diagnostics, Problem::ChannelUsedBeforeInit);
            check_used(&stmt.pkt, state, diagnostics, Problem::PacketUsedBeforeInit);
        }
        Item::RecvStmt(stmt) => {
            check_used(&stmt.chan, state, diagnostics, Problem::ChannelUsedBeforeInit);
            check_used(&stmt.pkt, state, diagnostics, Problem::PacketUsedBeforeInit);
        }
        _ => {}
    }
}

fn check_used(
    target: &CapsuleRef,
    state: &ValidatorState,
    diagnostics: &mut Vec<Diagnostic>,
    problem: Problem,
) {
    if !state.is_known(&target.name) {
        debug!("{} fired on '{}'", problem.code(), target.name);
        diagnostics.push(Diagnostic::from_problem(problem, target.loc()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eminor_ast::{LoadStmt, SendStmt};

    fn cap(name: &str) -> CapsuleRef {
        CapsuleRef::new(name, 3, 5)
    }

    #[test]
    fn check_when_load_stmt_on_undeclared_capsule_then_sc001() {
        let mut state = ValidatorState::default();
        let mut diagnostics = Vec::new();
        check(
            &Item::LoadStmt(LoadStmt {
                target: cap("A7"),
                value: eminor_ast::ExprKind::Literal(eminor_ast::Literal::new(
                    eminor_ast::ConstKind::Int,
                    serde_json::json!(1),
                    3,
                    9,
                )),
                line: 3,
                column: 5,
            }),
            &mut state,
            &mut diagnostics,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "SC001");
    }

    #[test]
    fn check_when_load_stmt_on_declared_capsule_then_no_diagnostic() {
        let mut state = ValidatorState::default();
        state.declared_caps.insert("A7".to_string());
        let mut diagnostics = Vec::new();
        check(
            &Item::LoadStmt(LoadStmt {
                target: cap("A7"),
                value: eminor_ast::ExprKind::Literal(eminor_ast::Literal::new(
                    eminor_ast::ConstKind::Int,
                    serde_json::json!(1),
                    3,
                    9,
                )),
                line: 3,
                column: 5,
            }),
            &mut state,
            &mut diagnostics,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn check_when_init_stmt_then_marks_inited_and_no_diagnostic() {
        let mut state = ValidatorState::default();
        let mut diagnostics = Vec::new();
        check(
            &Item::InitStmt(eminor_ast::InitStmt {
                target: cap("A7"),
                line: 1,
                column: 1,
            }),
            &mut state,
            &mut diagnostics,
        );
        assert!(state.inited_caps.contains("A7"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn check_when_send_stmt_both_undeclared_then_two_diagnostics() {
        let mut state = ValidatorState::default();
        let mut diagnostics = Vec::new();
        check(
            &Item::SendStmt(SendStmt {
                chan: cap("c1"),
                pkt: cap("p1"),
                line: 1,
                column: 1,
            }),
            &mut state,
            &mut diagnostics,
        );
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].code, "SC002");
        assert_eq!(diagnostics[1].code, "SC003");
    }
}
