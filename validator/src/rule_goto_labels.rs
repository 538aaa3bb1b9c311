//! SC040: a `goto` must target a label that is declared somewhere in the
//! program. Checked once, after the full walk, against the label set
//! Pass 1 collected — a `goto` may legally target a label declared later
//! in the entry block.
//!
//! SC041 is reserved for label redeclaration but is never emitted by
//! default (spec §9 open question); see `eminor_problems::Problem::LabelRedeclared`.

use eminor_ast::{Diagnostic, Item, Located, SourceLoc};
use eminor_problems::Problem;
use log::debug;

/// Collects `(label, loc)` pairs for every `goto` seen during the walk.
pub fn collect(item: &Item, gotos: &mut Vec<(String, SourceLoc)>) {
    if let Item::GotoStmt(stmt) = item {
        gotos.push((stmt.label.clone(), stmt.loc()));
    }
}

/// Resolves every collected goto against the declared label set.
pub fn check_undefined(
    gotos: &[(String, SourceLoc)],
    labels: &std::collections::HashSet<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for (label, loc) in gotos {
        if !labels.contains(label) {
            debug!("{} fired on goto ':{}'", Problem::UndefinedGotoLabel.code(), label);
            diagnostics.push(Diagnostic::from_problem(Problem::UndefinedGotoLabel, *loc));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eminor_ast::GotoStmt;
    use std::collections::HashSet;

    #[test]
    fn check_undefined_when_label_missing_then_sc040() {
        let gotos = vec![("nowhere".to_string(), SourceLoc::new(4, 1))];
        let labels = HashSet::new();
        let mut diagnostics = Vec::new();
        check_undefined(&gotos, &labels, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "SC040");
    }

    #[test]
    fn check_undefined_when_label_declared_then_no_diagnostic() {
        let gotos = vec![("loop_top".to_string(), SourceLoc::new(4, 1))];
        let mut labels = HashSet::new();
        labels.insert("loop_top".to_string());
        let mut diagnostics = Vec::new();
        check_undefined(&gotos, &labels, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn collect_when_goto_stmt_then_recorded() {
        let mut gotos = Vec::new();
        collect(
            &Item::GotoStmt(GotoStmt {
                label: "done".to_string(),
                line: 1,
                column: 1,
            }),
            &mut gotos,
        );
        assert_eq!(gotos, vec![("done".to_string(), SourceLoc::new(1, 1))]);
    }
}
