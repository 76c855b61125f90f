use std::fmt;

use lintium_span::Span;

use crate::{DiagnosticKind, Severity};

/// One labeled source range attached to a diagnostic, with optional text
/// explaining what that specific range means (e.g. "class is not marked
/// abstract" pointing at the class keyword, alongside a primary label
/// pointing at the offending `abstract` field).
#[derive(Debug, Clone)]
pub struct DiagnosticLabel {
    pub span: Span,
    pub message: Option<String>,
}

impl DiagnosticLabel {
    pub fn new(span: Span) -> Self {
        Self { span, message: None }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl From<Span> for DiagnosticLabel {
    fn from(span: Span) -> Self {
        Self::new(span)
    }
}

/// A fully-constructed diagnostic: a [`DiagnosticKind`] (carrying its code
/// and severity), a rendered message, and the labeled spans that locate it in
/// the source. This is the type that flows through every
/// [`DiagnosticSink`](crate::DiagnosticSink).
///
/// Diagnostics never borrow from the source buffer: spans are plain `u32`
/// offsets, so an `OxcDiagnostic` can outlive the parser that produced it for
/// as long as the caller keeps the matching [`SourceText`](lintium_span::SourceText) around.
#[derive(Debug, Clone)]
pub struct OxcDiagnostic {
    kind: DiagnosticKind,
    message: String,
    labels: std::vec::Vec<DiagnosticLabel>,
    help: Option<String>,
}

impl OxcDiagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), labels: std::vec::Vec::new(), help: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<DiagnosticLabel>) -> Self {
        self.labels.push(label.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[DiagnosticLabel] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The primary span: the first label, or a zero-length span at 0 if this
    /// diagnostic somehow carries none (should not happen for a
    /// spec-conformant diagnostic; see the span-soundness invariant).
    pub fn primary_span(&self) -> Span {
        self.labels.first().map_or(Span::empty(0), |l| l.span)
    }
}

impl fmt::Display for OxcDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.kind.severity(), self.kind.code(), self.message)
    }
}

impl std::error::Error for OxcDiagnostic {}

impl miette::Diagnostic for OxcDiagnostic {
    fn code<'a>(&'a self) -> Option<std::boxed::Box<dyn fmt::Display + 'a>> {
        Some(std::boxed::Box::new(self.kind.code()))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(self.kind.severity().into())
    }

    fn help<'a>(&'a self) -> Option<std::boxed::Box<dyn fmt::Display + 'a>> {
        self.help.as_ref().map(|h| std::boxed::Box::new(h) as std::boxed::Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<std::boxed::Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(std::boxed::Box::new(self.labels.iter().map(|label| {
            miette::LabeledSpan::new_with_span(label.message.clone(), label.span)
        })))
    }
}

/// Convenience alias matching the rest of the front-end's `Result`s.
pub type Error = OxcDiagnostic;
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;
    use lintium_span::Span;

    #[test]
    fn display_includes_code_and_severity() {
        let diag = OxcDiagnostic::new(DiagnosticKind::UnmatchedParenthesis, "test message")
            .with_label(Span::new(0, 1));
        let rendered = diag.to_string();
        assert!(rendered.contains("E0"));
        assert!(rendered.contains("test message"));
    }
}
