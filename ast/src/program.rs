//! The program root and the flat, tagged `Item` that a `Block` holds.
//!
//! The source AST does not nest statements inside a `Stmt` wrapper and
//! declarations inside a separate `Decl` wrapper — a block's `items` list
//! is a flat mix of both, dispatched purely by `_type`. `Item` models that
//! shape directly rather than inventing an extra layer of nesting.

use serde::{Deserialize, Serialize};

use crate::core::{Located, SourceLoc};
use crate::decl::{ExportDecl, FunctionDecl, ImportDecl, LetDecl, ModuleDecl, WorkerDecl};
use crate::stmt::{
    CallStmt, CheckExpStmt, ErrorStmt, ExitStmt, ExpireStmt, GotoStmt, IfStmt, InitStmt,
    InputStmt, JoinStmt, LabelStmt, LeaseStmt, LoadStmt, LoopStmt, OutputStmt, RecvStmt,
    ReleaseStmt, RenderStmt, SendStmt, SleepStmt, SpawnStmt, StampStmt, SubleaseStmt, YieldStmt,
};

/// One entry of a `Block`'s `items` list: either a declaration (which
/// registers a name but emits no code) or a statement (which does).
///
/// `LabelStmt` is a statement conceptually, but the reference emitter
/// dispatches it through the same "declaration" branch as `FunctionDecl`/
/// `WorkerDecl`/`LetDecl` because all four only ever touch the symbol
/// tables. `compile_item` in the codegen crate handles it the same way
/// regardless of which match arm it lands in here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Item {
    FunctionDecl(FunctionDecl),
    WorkerDecl(WorkerDecl),
    LetDecl(LetDecl),
    ModuleDecl(ModuleDecl),
    ExportDecl(ExportDecl),
    ImportDecl(ImportDecl),

    LabelStmt(LabelStmt),
    InitStmt(InitStmt),
    LoadStmt(LoadStmt),
    CallStmt(CallStmt),
    ExitStmt(ExitStmt),
    LeaseStmt(LeaseStmt),
    SubleaseStmt(SubleaseStmt),
    ReleaseStmt(ReleaseStmt),
    CheckExpStmt(CheckExpStmt),
    RenderStmt(RenderStmt),
    InputStmt(InputStmt),
    OutputStmt(OutputStmt),
    SendStmt(SendStmt),
    RecvStmt(RecvStmt),
    SpawnStmt(SpawnStmt),
    JoinStmt(JoinStmt),
    StampStmt(StampStmt),
    ExpireStmt(ExpireStmt),
    SleepStmt(SleepStmt),
    YieldStmt(YieldStmt),
    ErrorStmt(ErrorStmt),
    IfStmt(IfStmt),
    LoopStmt(LoopStmt),
    GotoStmt(GotoStmt),
}

impl Item {
    /// True for the six declaration variants: these register a name but
    /// never emit code into the entry stream (spec §4.1).
    pub fn is_decl(&self) -> bool {
        matches!(
            self,
            Item::FunctionDecl(_)
                | Item::WorkerDecl(_)
                | Item::LetDecl(_)
                | Item::ModuleDecl(_)
                | Item::ExportDecl(_)
                | Item::ImportDecl(_)
        )
    }
}

impl Located for Item {
    fn loc(&self) -> SourceLoc {
        match self {
            Item::FunctionDecl(n) => n.loc(),
            Item::WorkerDecl(n) => n.loc(),
            Item::LetDecl(n) => n.loc(),
            Item::ModuleDecl(n) => n.loc(),
            Item::ExportDecl(n) => n.loc(),
            Item::ImportDecl(n) => n.loc(),
            Item::LabelStmt(n) => n.loc(),
            Item::InitStmt(n) => n.loc(),
            Item::LoadStmt(n) => n.loc(),
            Item::CallStmt(n) => n.loc(),
            Item::ExitStmt(n) => n.loc(),
            Item::LeaseStmt(n) => n.loc(),
            Item::SubleaseStmt(n) => n.loc(),
            Item::ReleaseStmt(n) => n.loc(),
            Item::CheckExpStmt(n) => n.loc(),
            Item::RenderStmt(n) => n.loc(),
            Item::InputStmt(n) => n.loc(),
            Item::OutputStmt(n) => n.loc(),
            Item::SendStmt(n) => n.loc(),
            Item::RecvStmt(n) => n.loc(),
            Item::SpawnStmt(n) => n.loc(),
            Item::JoinStmt(n) => n.loc(),
            Item::StampStmt(n) => n.loc(),
            Item::ExpireStmt(n) => n.loc(),
            Item::SleepStmt(n) => n.loc(),
            Item::YieldStmt(n) => n.loc(),
            Item::ErrorStmt(n) => n.loc(),
            Item::IfStmt(n) => n.loc(),
            Item::LoopStmt(n) => n.loc(),
            Item::GotoStmt(n) => n.loc(),
        }
    }
}

/// An ordered sequence of items, the body of an entry point, `if`/`else`
/// branch, or loop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub items: Vec<Item>,
}

/// The program's single entry point: `entry { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub block: Block,
}

/// The root of a deserialized E Minor AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub entry: EntryPoint,
}
