//! The validator's diagnostic model.
//!
//! A `Diagnostic` pairs a `Problem` code (see `eminor-problems`) — whose
//! severity is fixed and never inferred at the call site — with the
//! source location that triggered it and a human-readable message.
//!
//! This is deliberately a different type from `eminor_codegen::EmitError`:
//! the two failure taxonomies described in spec §7 are not
//! interchangeable. A `Diagnostic` never aborts validator traversal; an
//! `EmitError` always aborts emission.

use std::fmt;

use eminor_problems::Problem;
pub use eminor_problems::Severity;
use serde::{Deserialize, Serialize};

use crate::core::SourceLoc;

/// `Severity` lives in `eminor-problems`, a build-script generated crate
/// with no `serde` dependency of its own; this module bridges it to a
/// plain string for (de)serialization.
mod severity_serde {
    use eminor_problems::Severity;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Severity, serializer: S) -> Result<S::Ok, S::Error> {
        let s = match value {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Severity, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "ERROR" => Ok(Severity::Error),
            "WARN" => Ok(Severity::Warn),
            "INFO" => Ok(Severity::Info),
            other => Err(serde::de::Error::custom(format!(
                "unknown severity '{other}'"
            ))),
        }
    }
}

/// A single validator finding.
///
/// `code` and `severity` both derive from the same `Problem`; `message` is
/// the problem's fixed text (no per-instance interpolation — the offending
/// name is implied by `line`/`column`, matching the source validator which
/// never embeds dynamic values beyond the offending identifier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(with = "severity_serde")]
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl Diagnostic {
    pub fn from_problem(problem: Problem, loc: SourceLoc) -> Self {
        Diagnostic {
            severity: problem.severity(),
            code: problem.code().to_string(),
            message: problem.message().to_string(),
            line: loc.line,
            column: loc.column,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.line, self.column, self.severity, self.code, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_from_problem_when_sc010_then_error_severity() {
        let d = Diagnostic::from_problem(Problem::CapsuleDoubleLeased, SourceLoc::new(3, 5));
        assert!(d.is_error());
        assert_eq!(d.code, "SC010");
        assert_eq!(d.line, 3);
        assert_eq!(d.column, 5);
    }

    #[test]
    fn diagnostic_serialize_roundtrip_then_preserves_severity() {
        let d = Diagnostic::from_problem(Problem::CapsuleUsedBeforeInit, SourceLoc::new(1, 1));
        let json = serde_json::to_string(&d).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back.severity, Severity::Warn);
        assert_eq!(back.code, "SC001");
    }
}
