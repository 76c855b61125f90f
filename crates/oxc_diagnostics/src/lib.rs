//! The diagnostic model shared by the lexer and parser: ~500 diagnostic
//! kinds (a curated 160 of them declared here), each with exactly one code,
//! one severity, and a message. See [`DiagnosticKind`] for the per-kind
//! metadata and [`OxcDiagnostic`] for the constructed value that flows
//! through a [`DiagnosticSink`].
//!
//! Consumers outside this crate (the lexer, the statement/expression
//! parsers) build [`OxcDiagnostic`]s through small named constructor
//! functions rather than calling [`OxcDiagnostic::new`] directly -- see
//! `lintium_parser::diagnostics` -- so that each diagnostic's argument
//! schema is pinned down by a Rust function signature instead of being
//! assembled ad hoc at every call site.

mod diagnostic;
mod kind;
mod reserved;
mod severity;
mod sink;
mod table;

pub use diagnostic::{DiagnosticLabel, Error, OxcDiagnostic, Result};
pub use reserved::RESERVED_CODES;
pub use severity::Severity;
pub use sink::{BufferingDiagnosticSink, DiagnosticCounter, DiagnosticSink};
pub use table::{DiagnosticKind, ALL_DIAGNOSTIC_KINDS};

#[cfg(test)]
mod test {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn codes_are_injective() {
        let mut seen = FxHashSet::default();
        for kind in ALL_DIAGNOSTIC_KINDS {
            assert!(seen.insert(kind.code()), "duplicate diagnostic code {}", kind.code());
        }
    }

    #[test]
    fn every_code_has_the_expected_shape() {
        for kind in ALL_DIAGNOSTIC_KINDS {
            let code = kind.code();
            assert!(code.starts_with('E'), "{code} must start with E");
            assert_eq!(code.len(), 5, "{code} must be E + four digits");
            assert!(code[1..].chars().all(|c| c.is_ascii_digit()), "{code} must be E + four digits");
        }
    }

    #[test]
    fn reserved_codes_are_disjoint_from_live_codes() {
        let live: FxHashSet<&str> = ALL_DIAGNOSTIC_KINDS.iter().map(|k| k.code()).collect();
        for reserved in RESERVED_CODES {
            assert!(!live.contains(reserved), "{reserved} is reserved but also live");
        }
    }
}
