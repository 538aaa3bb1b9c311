//! Declaration nodes. Declarations register names into the function table,
//! capsule namespace, or module namespace; none of them emit code into the
//! entry stream (spec §4.1 "Statement compilation contract").

use serde::{Deserialize, Serialize};

use crate::core::{located_by_field, SourceLoc};
use crate::expr::Identifier;

/// `function NAME(...) { ... }`. v1 registers the name into the function
/// table but never emits a body; see `SPEC_FULL.md` §4 for the open
/// question this resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: Identifier,
    pub line: u32,
    pub column: u32,
}

/// `worker NAME { ... }`. Registers into the same function table as
/// `FunctionDecl`; workers and functions are called through the same
/// `CALL`/`CALLA`/`SPAWN` opcodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerDecl {
    pub name: Identifier,
    pub line: u32,
    pub column: u32,
}

/// `let $NAME`. Declares a capsule name; the validator's pass 1 adds
/// `name` to `declared_caps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetDecl {
    pub name: Identifier,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDecl {
    pub name: Identifier,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDecl {
    pub name: Identifier,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub name: Identifier,
    pub line: u32,
    pub column: u32,
}

located_by_field!(FunctionDecl);
located_by_field!(WorkerDecl);
located_by_field!(LetDecl);
located_by_field!(ModuleDecl);
located_by_field!(ExportDecl);
located_by_field!(ImportDecl);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Located;

    #[test]
    fn let_decl_deserialize_from_json() {
        let json = serde_json::json!({
            "name": {"name": "A7", "is_dollar": false, "line": 2, "column": 5},
            "line": 2,
            "column": 1
        });
        let decl: LetDecl = serde_json::from_value(json).unwrap();
        assert_eq!(decl.name.name, "A7");
        assert_eq!(decl.loc(), SourceLoc::new(2, 1));
    }
}
