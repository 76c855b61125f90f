use lintium_span::Span;

use super::Kind;

/// A single lexed token.
///
/// Tokens are cheap to copy: the actual text is never owned here, it is
/// always re-sliced out of the [`lintium_span::SourceText`] via `span` when
/// needed (string/number literal *values*, as opposed to their raw spelling,
/// are computed lazily by the caller -- see `lexer::numeric` /
/// `lexer::identifier`). The one exception is `escaped_text`: an identifier
/// or keyword that contained a `\uXXXX`/`\u{X...}` escape has a decoded
/// spelling that does not appear verbatim anywhere in the source, so it is
/// allocated once (into the parser's [`lintium_allocator::Allocator`]) and
/// stashed here rather than recomputed at every use site.
#[derive(Debug, Clone, Copy, Default)]
pub struct Token<'a> {
    kind: Kind,
    span: Span,
    /// Set when a line terminator appeared between this token and the
    /// previous one. Drives automatic semicolon insertion and `async`/
    /// `yield`/`return` argument lookahead.
    is_on_new_line: bool,
    /// Set when an identifier/keyword/string contained a `\u{...}` escape;
    /// such tokens can never be treated as a reserved word even if they
    /// spell one out (`\u{61}wait` is not the `await` keyword).
    has_escape: bool,
    /// For numeric tokens: true if a `n` BigInt suffix followed.
    is_big_int: bool,
    /// Present only when `has_escape` and the decoded text differs from the
    /// token's raw span; `None` means "read it straight out of the source".
    escaped_text: Option<&'a str>,
}

impl<'a> Token<'a> {
    pub fn new(kind: Kind, span: Span) -> Self {
        Self {
            kind,
            span,
            is_on_new_line: false,
            has_escape: false,
            is_big_int: false,
            escaped_text: None,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> u32 {
        self.span.start
    }

    pub fn end(&self) -> u32 {
        self.span.end
    }

    pub fn is_on_new_line(&self) -> bool {
        self.is_on_new_line
    }

    pub fn set_is_on_new_line(&mut self, value: bool) {
        self.is_on_new_line = value;
    }

    pub fn has_escape(&self) -> bool {
        self.has_escape
    }

    pub fn set_has_escape(&mut self, value: bool) {
        self.has_escape = value;
    }

    pub fn is_big_int(&self) -> bool {
        self.is_big_int
    }

    pub fn set_is_big_int(&mut self, value: bool) {
        self.is_big_int = value;
    }

    pub fn escaped_text(&self) -> Option<&'a str> {
        self.escaped_text
    }

    pub fn set_escaped_text(&mut self, text: &'a str) {
        self.escaped_text = Some(text);
    }

    /// The identifier's normalized text: the decoded escape text if this
    /// token had one, otherwise the raw source slice.
    pub fn identifier_text(&self, source_text: &'a str) -> &'a str {
        self.escaped_text.unwrap_or_else(|| self.span.source_text(source_text))
    }
}
