//! Error type for the emitter.
//!
//! `EmitError` is a fatal failure taxonomy, distinct from the validator's
//! `Diagnostic`: any `EmitError` aborts compilation immediately, where a
//! `Diagnostic` never does (spec §7). Most `EmitError` cases describe an
//! AST that a prior validator pass should have already rejected; the
//! emitter checks them anyway because it can be invoked standalone.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmitError {
    #[error("branch displacement {0} does not fit in a signed 16-bit value")]
    DisplacementOverflow(i64),

    #[error("goto targets undefined label \"{0}\"")]
    UndefinedLabel(String),

    #[error("unknown unary operator \"{0}\"")]
    UnknownUnaryOperator(String),

    #[error("unknown binary operator \"{0}\"")]
    UnknownBinaryOperator(String),

    #[error("invalid literal: {0}")]
    InvalidLiteral(#[from] eminor_ast::InvalidLiteral),

    #[error("spawn statement has more than 255 arguments")]
    TooManySpawnArgs,
}
