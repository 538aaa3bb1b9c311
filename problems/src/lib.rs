//! Star-Code problem codes.
//!
//! This crate turns `resources/problem-codes.csv` into a `Problem`
//! enumeration at build time (see `build.rs`), the same technique used to
//! generate diagnostic codes elsewhere in the corpus this crate was
//! modeled on. Keeping codes in a CSV rather than hand-written `match`
//! arms means adding a new Star-Code rule never requires touching more
//! than one line of data.

use core::fmt;

/// Severity is fixed per `Problem` code and is never inferred at the call
/// site that raises it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warn,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/problems.rs"));

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_when_sc010_then_error_severity() {
        assert_eq!(Problem::CapsuleDoubleLeased.code(), "SC010");
        assert_eq!(Problem::CapsuleDoubleLeased.severity(), Severity::Error);
    }

    #[test]
    fn problem_when_sc001_then_warn_severity() {
        assert_eq!(Problem::CapsuleUsedBeforeInit.code(), "SC001");
        assert_eq!(Problem::CapsuleUsedBeforeInit.severity(), Severity::Warn);
    }

    #[test]
    fn problem_when_sc041_then_reserved_warn() {
        // Reserved per spec open question: defined but never emitted by
        // the validator's default behavior.
        assert_eq!(Problem::LabelRedeclared.code(), "SC041");
        assert_eq!(Problem::LabelRedeclared.severity(), Severity::Warn);
    }

    #[test]
    fn problem_display_then_shows_code() {
        assert_eq!(format!("{}", Problem::UndefinedGotoLabel), "SC040");
    }
}
