use crate::OxcDiagnostic;

/// Consumer of a diagnostic stream, in source order.
///
/// A sink implementation is free to format, buffer, count, or suppress;
/// the parser only ever pushes. [`Vec<OxcDiagnostic>`] is the simplest
/// sink and is what the parser itself accumulates into
/// (see `lintium_parser::Parser::parse`); [`BufferingDiagnosticSink`] is
/// used internally while a lexer transaction is open, so a rolled-back
/// speculative parse leaves no trace.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: OxcDiagnostic);
}

impl DiagnosticSink for std::vec::Vec<OxcDiagnostic> {
    fn report(&mut self, diagnostic: OxcDiagnostic) {
        self.push(diagnostic);
    }
}

/// Counts diagnostics by severity without keeping their content; useful for
/// `--max-warnings`-style gates or for tests that only assert "no errors".
#[derive(Debug, Default, Clone, Copy)]
pub struct DiagnosticCounter {
    pub errors: u32,
    pub warnings: u32,
}

impl DiagnosticSink for DiagnosticCounter {
    fn report(&mut self, diagnostic: OxcDiagnostic) {
        if diagnostic.severity().is_error() {
            self.errors += 1;
        } else {
            self.warnings += 1;
        }
    }
}

/// Holds diagnostics produced while a lexer transaction is open.
///
/// On commit, [`flush_into`](Self::flush_into) appends the held diagnostics
/// (in order) to the real sink. On rollback the buffer is simply dropped,
/// satisfying the transaction-neutrality property: a rolled-back speculative
/// parse leaves the diagnostic stream unchanged.
#[derive(Debug, Default)]
pub struct BufferingDiagnosticSink {
    buffered: std::vec::Vec<OxcDiagnostic>,
}

impl BufferingDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffered.is_empty()
    }

    pub fn flush_into(self, sink: &mut impl DiagnosticSink) {
        for diagnostic in self.buffered {
            sink.report(diagnostic);
        }
    }
}

impl DiagnosticSink for BufferingDiagnosticSink {
    fn report(&mut self, diagnostic: OxcDiagnostic) {
        self.buffered.push(diagnostic);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::DiagnosticKind;
    use lintium_span::Span;

    #[test]
    fn rollback_discards_buffered_diagnostics() {
        let mut buffer = BufferingDiagnosticSink::new();
        buffer.report(
            OxcDiagnostic::new(DiagnosticKind::UnmatchedParenthesis, "x").with_label(Span::new(0, 1)),
        );
        assert!(!buffer.is_empty());
        drop(buffer); // rollback: nothing is ever flushed into a real sink
    }

    #[test]
    fn commit_flushes_in_order() {
        let mut buffer = BufferingDiagnosticSink::new();
        buffer.report(OxcDiagnostic::new(DiagnosticKind::UnmatchedParenthesis, "a"));
        buffer.report(OxcDiagnostic::new(DiagnosticKind::UnmatchedIndexingBracket, "b"));
        let mut out = std::vec::Vec::new();
        buffer.flush_into(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].message(), "a");
        assert_eq!(out[1].message(), "b");
    }
}
