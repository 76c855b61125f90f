use crate::Severity;

/// Declares [`DiagnosticKind`] and its static metadata table, so that the
/// code, severity and default message template are baked in next to each
/// other rather than living in three parallel lists that can drift out of
/// sync.
///
/// This replaces the `X`-macro style table from the tool this crate's
/// diagnostics are modeled on (one line per diagnostic, expanded once into a
/// variant, its code, and its message) with a single declarative macro
/// invocation -- see [`crate::table`] for the invocation.
macro_rules! diagnostic_kinds {
    ($($variant:ident => { code: $code:literal, severity: $severity:expr, message: $message:literal }),* $(,)?) => {
        /// One of the diagnostic kinds this front-end can emit.
        ///
        /// Each variant has exactly one [`code`](DiagnosticKind::code) and one
        /// [`severity`](DiagnosticKind::severity); both are immutable metadata
        /// looked up from this table, never computed ad hoc at the call site.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum DiagnosticKind {
            $($variant,)*
        }

        impl DiagnosticKind {
            /// The diagnostic's stable `Exxxx` code.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// The diagnostic's severity.
            #[must_use]
            pub const fn severity(self) -> Severity {
                match self {
                    $(Self::$variant => $severity,)*
                }
            }

            /// The primary message template. Diagnostics with secondary
            /// labels format their own richer wording in
            /// `lintium_parser::diagnostics`; this is the fallback used when
            /// only the code/severity metadata is needed (e.g. by tests).
            #[must_use]
            pub const fn default_message(self) -> &'static str {
                match self {
                    $(Self::$variant => $message,)*
                }
            }
        }

        /// Every declared kind, in declaration order. Used by the
        /// code-kind-bijection test and by tooling that wants to enumerate
        /// the full diagnostic surface.
        pub const ALL_DIAGNOSTIC_KINDS: &[DiagnosticKind] = &[
            $(DiagnosticKind::$variant,)*
        ];
    };
}

pub(crate) use diagnostic_kinds;
