//! SC030: an `if` condition that is a literal should be a `BOOL` literal.
//!
//! This is a shallow check — it only fires when the condition is itself a
//! literal node; a general expression or identifier condition is assumed
//! fine, matching the reference validator's "shallow type-ish check".

use eminor_ast::{ConstKind, Diagnostic, ExprKind, Item, Located};
use eminor_problems::Problem;
use log::debug;

pub fn check(item: &Item, diagnostics: &mut Vec<Diagnostic>) {
    if let Item::IfStmt(stmt) = item {
        if let ExprKind::Literal(lit) = &stmt.cond {
            if lit.kind != ConstKind::Bool {
                debug!("{} fired", Problem::NonBooleanIfCondition.code());
                diagnostics.push(Diagnostic::from_problem(
                    Problem::NonBooleanIfCondition,
                    stmt.loc(),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eminor_ast::{Block, IfStmt, Literal};
    use serde_json::json;

    fn if_with_cond(cond: ExprKind) -> Item {
        Item::IfStmt(IfStmt {
            cond,
            then_block: Block::default(),
            else_block: None,
            line: 1,
            column: 1,
        })
    }

    #[test]
    fn check_when_cond_is_int_literal_then_sc030() {
        let mut diagnostics = Vec::new();
        let item = if_with_cond(ExprKind::Literal(Literal::new(ConstKind::Int, json!(1), 1, 1)));
        check(&item, &mut diagnostics);
        assert_eq!(diagnostics[0].code, "SC030");
    }

    #[test]
    fn check_when_cond_is_bool_literal_then_no_diagnostic() {
        let mut diagnostics = Vec::new();
        let item = if_with_cond(ExprKind::Literal(Literal::new(
            ConstKind::Bool,
            json!(true),
            1,
            1,
        )));
        check(&item, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn check_when_cond_is_identifier_then_no_diagnostic() {
        let mut diagnostics = Vec::new();
        let item = if_with_cond(ExprKind::Identifier(eminor_ast::Identifier::dollar(
            "A7", 1, 1,
        )));
        check(&item, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
