//! Expression and literal-constant AST nodes.
//!
//! Expressions are the only AST shape that can nest arbitrarily (via
//! `UnaryOp`/`BinaryOp`); every other node is either a flat statement or a
//! flat declaration. See `ConstKind`/`ConstValue` for how a `Literal`'s
//! untyped JSON payload is resolved against its declared `kind`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{located_by_field, Located, SourceLoc};

/// The kind tag carried by a `Literal` node, per spec §3's Constant model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConstKind {
    Int,
    Hex,
    Duration,
    String,
    Bool,
}

/// A resolved constant value, typed according to its `ConstKind`.
///
/// `Int` and `Hex` share the same numeric domain but are kept as distinct
/// variants: the constant pool's dedup key is `(kind, value)`, so a `HEX`
/// literal and an `INT` literal with the same numeric value are deliberately
/// different pool entries (spec §3).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
#[serde(rename_all = "UPPERCASE")]
pub enum ConstValue {
    Int(i64),
    Hex(i64),
    Duration(u64),
    String(String),
    Bool(bool),
}

impl ConstValue {
    pub fn kind(&self) -> ConstKind {
        match self {
            ConstValue::Int(_) => ConstKind::Int,
            ConstValue::Hex(_) => ConstKind::Hex,
            ConstValue::Duration(_) => ConstKind::Duration,
            ConstValue::String(_) => ConstKind::String,
            ConstValue::Bool(_) => ConstKind::Bool,
        }
    }
}

/// Raised when a `Literal` node's `value` payload does not match its
/// declared `kind` (e.g. a negative number tagged `DURATION`).
///
/// This is a boundary validation error: the AST is external input, so the
/// emitter must check this where it reads the literal rather than trust it.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("literal of kind {kind:?} has an invalid value: {detail}")]
pub struct InvalidLiteral {
    pub kind: ConstKind,
    pub detail: String,
}

/// A literal constant. `value` is deserialized loosely (as JSON) because
/// its shape depends on `kind`; call `resolve` to get a typed `ConstValue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub kind: ConstKind,
    pub value: serde_json::Value,
    pub line: u32,
    pub column: u32,
}

impl Literal {
    pub fn new(kind: ConstKind, value: serde_json::Value, line: u32, column: u32) -> Self {
        Literal {
            kind,
            value,
            line,
            column,
        }
    }

    /// Resolves this literal's JSON `value` against its declared `kind`.
    pub fn resolve(&self) -> Result<ConstValue, InvalidLiteral> {
        match self.kind {
            ConstKind::Int => self
                .value
                .as_i64()
                .map(ConstValue::Int)
                .ok_or_else(|| self.invalid("expected an integer")),
            ConstKind::Hex => self
                .value
                .as_i64()
                .map(ConstValue::Hex)
                .ok_or_else(|| self.invalid("expected an integer")),
            ConstKind::Duration => {
                let n = self
                    .value
                    .as_i64()
                    .ok_or_else(|| self.invalid("expected an integer number of nanoseconds"))?;
                if n < 0 {
                    return Err(self.invalid("duration must be non-negative"));
                }
                Ok(ConstValue::Duration(n as u64))
            }
            ConstKind::String => self
                .value
                .as_str()
                .map(|s| ConstValue::String(s.to_string()))
                .ok_or_else(|| self.invalid("expected a string")),
            ConstKind::Bool => self
                .value
                .as_bool()
                .map(ConstValue::Bool)
                .ok_or_else(|| self.invalid("expected a boolean")),
        }
    }

    fn invalid(&self, detail: &str) -> InvalidLiteral {
        InvalidLiteral {
            kind: self.kind,
            detail: detail.to_string(),
        }
    }

    pub fn loc(&self) -> SourceLoc {
        SourceLoc::new(self.line, self.column)
    }
}

/// An identifier reference. `is_dollar` distinguishes a capsule reference
/// (`$name`) from a plain identifier, per spec §6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub is_dollar: bool,
    pub line: u32,
    pub column: u32,
}

impl Identifier {
    pub fn dollar(name: &str, line: u32, column: u32) -> Self {
        Identifier {
            name: name.to_string(),
            is_dollar: true,
            line,
            column,
        }
    }

    pub fn plain(name: &str, line: u32, column: u32) -> Self {
        Identifier {
            name: name.to_string(),
            is_dollar: false,
            line,
            column,
        }
    }

    pub fn loc(&self) -> SourceLoc {
        SourceLoc::new(self.line, self.column)
    }
}

/// A bare `$name` capsule reference used in statement target/operand
/// positions (e.g. `InitStmt.target`, `LeaseStmt.target`).
///
/// Distinct from `Identifier` because these positions are always capsule
/// names, never plain identifiers or expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapsuleRef {
    pub name: String,
    pub line: u32,
    pub column: u32,
}

impl CapsuleRef {
    pub fn new(name: &str, line: u32, column: u32) -> Self {
        CapsuleRef {
            name: name.to_string(),
            line,
            column,
        }
    }

    pub fn loc(&self) -> SourceLoc {
        SourceLoc::new(self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOp {
    pub op: String,
    pub rhs: Box<ExprKind>,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOp {
    pub op: String,
    pub lhs: Box<ExprKind>,
    pub rhs: Box<ExprKind>,
    pub line: u32,
    pub column: u32,
}

/// An expression tree: a literal, an identifier reference, or a unary or
/// binary operator application (spec §4.1 "Expression compilation").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ExprKind {
    Literal(Literal),
    Identifier(Identifier),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
}

impl Located for ExprKind {
    fn loc(&self) -> SourceLoc {
        match self {
            ExprKind::Literal(n) => n.loc(),
            ExprKind::Identifier(n) => n.loc(),
            ExprKind::UnaryOp(n) => SourceLoc::new(n.line, n.column),
            ExprKind::BinaryOp(n) => SourceLoc::new(n.line, n.column),
        }
    }
}

located_by_field!(UnaryOp);
located_by_field!(BinaryOp);
