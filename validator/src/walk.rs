//! Pre-order traversal over a program's items.
//!
//! `Block`s nest only through `IfStmt.then_block`/`else_block` and
//! `LoopStmt.body`; everything else is flat. Visiting the node itself
//! before recursing into its nested blocks gives pre-order traversal,
//! which is what spec §8's "diagnostic ordering" invariant requires.

use eminor_ast::{Block, Item};

pub fn for_each_preorder<'a, F: FnMut(&'a Item)>(block: &'a Block, visit: &mut F) {
    for item in &block.items {
        visit(item);
        match item {
            Item::IfStmt(stmt) => {
                for_each_preorder(&stmt.then_block, visit);
                if let Some(else_block) = &stmt.else_block {
                    for_each_preorder(else_block, visit);
                }
            }
            Item::LoopStmt(stmt) => {
                for_each_preorder(&stmt.body, visit);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eminor_ast::{ExitStmt, IfStmt, YieldStmt};

    fn exit(line: u32) -> Item {
        Item::ExitStmt(ExitStmt { line, column: 1 })
    }

    #[test]
    fn for_each_preorder_visits_if_before_its_branches() {
        let block = Block {
            items: vec![Item::IfStmt(IfStmt {
                cond: eminor_ast::ExprKind::Literal(eminor_ast::Literal::new(
                    eminor_ast::ConstKind::Bool,
                    serde_json::json!(true),
                    1,
                    1,
                )),
                then_block: Block {
                    items: vec![exit(2)],
                },
                else_block: Some(Block {
                    items: vec![Item::YieldStmt(YieldStmt { line: 3, column: 1 })],
                }),
                line: 1,
                column: 1,
            })],
        };

        let mut seen = Vec::new();
        for_each_preorder(&block, &mut |item| {
            seen.push(match item {
                Item::IfStmt(_) => "if",
                Item::ExitStmt(_) => "exit",
                Item::YieldStmt(_) => "yield",
                _ => "other",
            });
        });
        assert_eq!(seen, vec!["if", "exit", "yield"]);
    }
}
