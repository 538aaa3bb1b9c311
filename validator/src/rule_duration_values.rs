//! SC020/SC021: a `sleep`/`expire` duration must resolve to a
//! non-negative integer number of nanoseconds.
//!
//! This runs independently of `rule_capsule_usage`'s `ExpireStmt` check —
//! both apply to the same node (spec §4.2 lists them as separate rules by
//! node type, not a single exclusive dispatch).

use eminor_ast::{Diagnostic, Item, Located};
use eminor_problems::Problem;
use log::debug;

pub fn check(item: &Item, diagnostics: &mut Vec<Diagnostic>) {
    match item {
        Item::SleepStmt(stmt) => check_duration(stmt, &stmt.duration, diagnostics, Problem::SleepDurationInvalid),
        Item::ExpireStmt(stmt) => check_duration(stmt, &stmt.duration, diagnostics, Problem::ExpireDurationInvalid),
        _ => {}
    }
}

fn check_duration(
    node: &impl Located,
    duration: &eminor_ast::Literal,
    diagnostics: &mut Vec<Diagnostic>,
    problem: Problem,
) {
    let valid = matches!(duration.resolve(), Ok(eminor_ast::ConstValue::Duration(_)));
    if !valid {
        debug!("{} fired", problem.code());
        diagnostics.push(Diagnostic::from_problem(problem, node.loc()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eminor_ast::{CapsuleRef, ConstKind, ExpireStmt, Literal, SleepStmt};
    use serde_json::json;

    #[test]
    fn check_when_sleep_duration_negative_then_sc020() {
        let mut diagnostics = Vec::new();
        check(
            &Item::SleepStmt(SleepStmt {
                duration: Literal::new(ConstKind::Duration, json!(-1), 1, 1),
                line: 1,
                column: 1,
            }),
            &mut diagnostics,
        );
        assert_eq!(diagnostics[0].code, "SC020");
    }

    #[test]
    fn check_when_sleep_duration_valid_then_no_diagnostic() {
        let mut diagnostics = Vec::new();
        check(
            &Item::SleepStmt(SleepStmt {
                duration: Literal::new(ConstKind::Duration, json!(5_000_000), 1, 1),
                line: 1,
                column: 1,
            }),
            &mut diagnostics,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn check_when_expire_duration_not_an_integer_then_sc021() {
        let mut diagnostics = Vec::new();
        check(
            &Item::ExpireStmt(ExpireStmt {
                target: CapsuleRef::new("A7", 1, 1),
                duration: Literal::new(ConstKind::Duration, json!("soon"), 1, 1),
                line: 1,
                column: 1,
            }),
            &mut diagnostics,
        );
        assert_eq!(diagnostics[0].code, "SC021");
    }
}
