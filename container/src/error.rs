use core::fmt;

/// Errors from the data structures in this crate. Distinct from
/// `eminor_codegen::EmitError`: this crate has no notion of an AST, a
/// branch displacement, or an emission in progress — it only knows about
/// table capacity and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// A constant pool index is out of bounds.
    InvalidConstantIndex(u16),
    /// A function table index is out of bounds.
    InvalidFunctionIndex(u16),
    /// A table would exceed its fixed-width index capacity.
    CapacityExceeded,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::InvalidConstantIndex(i) => {
                write!(f, "constant pool index out of bounds: {i}")
            }
            ContainerError::InvalidFunctionIndex(i) => {
                write!(f, "function table index out of bounds: {i}")
            }
            ContainerError::CapacityExceeded => write!(f, "table index capacity exceeded"),
        }
    }
}

impl std::error::Error for ContainerError {}
