//! Source location tracking shared by every AST node.

use serde::{Deserialize, Serialize};

/// A 1-indexed line/column pair as supplied by the parser collaborator.
///
/// The parser is an external component (see crate-level docs); this type
/// only carries through whatever `{line, column}` pair it attached to a
/// node so that diagnostics and emit errors can point back at source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLoc {
    pub line: u32,
    pub column: u32,
}

impl SourceLoc {
    pub fn new(line: u32, column: u32) -> Self {
        SourceLoc { line, column }
    }
}

/// Implemented by every AST node so that validator rules and the emitter
/// can report a location without matching on the node's concrete type.
pub trait Located {
    fn loc(&self) -> SourceLoc;
}

/// Generates a `Located` impl for a struct carrying separate `line`/`column`
/// fields.
///
/// Every node this is used on has `line: u32` and `column: u32` rather than
/// a single `loc: SourceLoc` field (matching the parser-supplied JSON shape
/// in spec §6); this avoids repeating the same three-line impl for each one.
macro_rules! located_by_field {
    ($ty:ty) => {
        impl $crate::core::Located for $ty {
            fn loc(&self) -> $crate::core::SourceLoc {
                $crate::core::SourceLoc::new(self.line, self.column)
            }
        }
    };
}

pub(crate) use located_by_field;
