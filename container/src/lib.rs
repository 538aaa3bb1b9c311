//! The sidecar data model produced alongside E Minor bytecode.
//!
//! This crate owns the opcode table, the capsule id encoding, and the
//! three tables the emitter builds up during compilation: the constant
//! pool, the function table, and the label table. It has no knowledge of
//! the AST or of compilation itself — `eminor-codegen` is the crate that
//! walks a program and drives these structures.

pub mod capsule_id;
mod constant_pool;
mod error;
mod fixup;
pub mod opcode;
mod symbol_table;

pub use constant_pool::ConstantPool;
pub use error::ContainerError;
pub use fixup::{Fixup, FixupKind};
pub use symbol_table::{FunctionTable, LabelTable};
