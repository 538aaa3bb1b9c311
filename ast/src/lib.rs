//! Abstract syntax tree types for E Minor programs, and the diagnostic
//! model shared between the validator and (optionally) the emitter.
//!
//! This crate owns only data: deserializing an upstream AST into typed
//! Rust and describing where in the source it came from. Parsing text
//! into this tree, and turning a `Diagnostic` back into rendered text,
//! both happen outside this crate.

pub mod core;
pub mod decl;
pub mod diagnostic;
pub mod expr;
pub mod program;
pub mod stmt;

pub use core::{Located, SourceLoc};
pub use diagnostic::{Diagnostic, Severity};
pub use expr::{BinaryOp, CapsuleRef, ConstKind, ConstValue, ExprKind, Identifier, InvalidLiteral, Literal, UnaryOp};
pub use program::{Block, EntryPoint, Item, Program};

pub use decl::{ExportDecl, FunctionDecl, ImportDecl, LetDecl, ModuleDecl, WorkerDecl};
pub use stmt::{
    CallStmt, CheckExpStmt, ErrorStmt, ExitStmt, ExpireStmt, GotoStmt, IfStmt, InitStmt,
    InputStmt, JoinStmt, LabelStmt, LeaseStmt, LoadStmt, LoopStmt, OutputStmt, RecvStmt,
    ReleaseStmt, RenderStmt, SendStmt, SleepStmt, SpawnStmt, StampStmt, SubleaseStmt, YieldStmt,
};
