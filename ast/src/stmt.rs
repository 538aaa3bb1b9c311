//! Statement nodes, per spec §4.1's statement compilation contract.
//!
//! Most statements carry a `CapsuleRef` target plus their own `line`/
//! `column`; a handful carry an `ExprKind` operand that goes through the
//! emitter's expression or value-compilation path. Field names mirror the
//! JSON shape that an upstream parser would hand off (e.g. `target`,
//! `chan`/`pkt`, `func`/`arg`), matching the original validator/emitter's
//! field access.

use serde::{Deserialize, Serialize};

use crate::core::{located_by_field, SourceLoc};
use crate::expr::{CapsuleRef, ExprKind, Identifier, Literal};
use crate::program::Block;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStmt {
    pub name: String,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitStmt {
    pub target: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

/// `load $target <- value`. `value` is compiled with the "value
/// compilation" contract, not full expression compilation (spec §4.1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadStmt {
    pub target: CapsuleRef,
    pub value: ExprKind,
    pub line: u32,
    pub column: u32,
}

/// `call NAME` or `call NAME($arg)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallStmt {
    pub func: Identifier,
    #[serde(default)]
    pub arg: Option<CapsuleRef>,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitStmt {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseStmt {
    pub target: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubleaseStmt {
    pub target: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseStmt {
    pub target: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckExpStmt {
    pub target: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStmt {
    pub target: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputStmt {
    pub target: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputStmt {
    pub target: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendStmt {
    pub chan: CapsuleRef,
    pub pkt: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecvStmt {
    pub chan: CapsuleRef,
    pub pkt: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

/// `spawn NAME(args...)`. Each argument is compiled per spec §4.1's SPAWN
/// argument encoding, not the ordinary expression path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnStmt {
    pub func: Identifier,
    #[serde(default)]
    pub args: Vec<ExprKind>,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinStmt {
    pub thread: CapsuleRef,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampStmt {
    pub target: CapsuleRef,
    pub value: ExprKind,
    pub line: u32,
    pub column: u32,
}

/// `expire $target after DURATION`. `duration` is always a `DURATION`
/// literal; unlike `value` fields elsewhere it is never a general
/// expression (spec §4.1, §8 scenario 5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpireStmt {
    pub target: CapsuleRef,
    pub duration: Literal,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepStmt {
    pub duration: Literal,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldStmt {
    pub line: u32,
    pub column: u32,
}

/// `error $target code MSG`. `code` is value-compiled; `message` is
/// always interned directly as a `STRING` constant (spec/original emitter
/// never runs it through value-compilation's literal/identifier dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorStmt {
    pub target: CapsuleRef,
    pub code: ExprKind,
    pub message: Literal,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub cond: ExprKind,
    pub then_block: Block,
    #[serde(default)]
    pub else_block: Option<Block>,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopStmt {
    pub cond: ExprKind,
    pub body: Block,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GotoStmt {
    pub label: String,
    pub line: u32,
    pub column: u32,
}

located_by_field!(LabelStmt);
located_by_field!(InitStmt);
located_by_field!(LoadStmt);
located_by_field!(CallStmt);
located_by_field!(ExitStmt);
located_by_field!(LeaseStmt);
located_by_field!(SubleaseStmt);
located_by_field!(ReleaseStmt);
located_by_field!(CheckExpStmt);
located_by_field!(RenderStmt);
located_by_field!(InputStmt);
located_by_field!(OutputStmt);
located_by_field!(SendStmt);
located_by_field!(RecvStmt);
located_by_field!(SpawnStmt);
located_by_field!(JoinStmt);
located_by_field!(StampStmt);
located_by_field!(ExpireStmt);
located_by_field!(SleepStmt);
located_by_field!(YieldStmt);
located_by_field!(ErrorStmt);
located_by_field!(IfStmt);
located_by_field!(LoopStmt);
located_by_field!(GotoStmt);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Located;

    #[test]
    fn if_stmt_deserialize_without_else_then_none() {
        let json = serde_json::json!({
            "cond": {"_type": "Literal", "kind": "BOOL", "value": true, "line": 1, "column": 4},
            "then_block": {"items": []},
            "line": 1,
            "column": 1
        });
        let stmt: IfStmt = serde_json::from_value(json).unwrap();
        assert!(stmt.else_block.is_none());
        assert_eq!(stmt.loc(), SourceLoc::new(1, 1));
    }

    #[test]
    fn spawn_stmt_deserialize_without_args_then_empty() {
        let json = serde_json::json!({
            "func": {"name": "worker_a", "is_dollar": false, "line": 1, "column": 1},
            "line": 1,
            "column": 1
        });
        let stmt: SpawnStmt = serde_json::from_value(json).unwrap();
        assert!(stmt.args.is_empty());
    }
}
