use lintium_span::Span;

use crate::lexer::{Kind, Lexer, LexerCheckpoint, Token};

/// A saved cursor position, the parser-level half of the lexer transaction
/// primitive: `begin_transaction`/`commit_transaction`/
/// `roll_back_transaction` wrap this, so a speculative parse (arrow-function
/// lookahead, `let`-ambiguity resolution) that turns out wrong leaves no
/// trace -- not in the token stream, not in diagnostics, not in trivia.
pub struct Checkpoint<'a> {
    lexer: LexerCheckpoint,
    token: Token<'a>,
    prev_end: u32,
}

/// One-token-lookahead cursor over a [`Lexer`]: the parser only ever looks
/// at `self.token` (the token not yet consumed) and asks the cursor to
/// `bump` past it.
pub struct Cursor<'a> {
    lexer: Lexer<'a>,
    token: Token<'a>,
    prev_end: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let token = lexer.next_token(true);
        Self { lexer, token, prev_end: 0 }
    }

    pub fn token(&self) -> Token<'a> {
        self.token
    }

    pub fn kind(&self) -> Kind {
        self.token.kind()
    }

    pub fn span(&self) -> Span {
        self.token.span()
    }

    pub fn prev_end(&self) -> u32 {
        self.prev_end
    }

    pub fn at(&self, kind: Kind) -> bool {
        self.token.kind() == kind
    }

    pub fn allocator(&self) -> &'a lintium_allocator::Allocator {
        self.lexer.allocator()
    }

    /// Any diagnostics the lexer raised while scanning the token(s) consumed
    /// so far and not yet drained by the parser.
    pub fn take_lexer_errors(&mut self) -> std::vec::Vec<lintium_diagnostics::OxcDiagnostic> {
        std::mem::take(&mut self.lexer.errors)
    }

    /// Consumes the current token and scans the next one, returning the
    /// consumed token. `regex_allowed` should reflect whether the *new*
    /// current token, if it starts with `/`, should be read as a regex.
    pub fn bump(&mut self, regex_allowed: bool) -> Token<'a> {
        let prev = self.token;
        self.prev_end = prev.end();
        self.token = self.lexer.next_token(regex_allowed);
        prev
    }

    /// Consumes the current token whatever it is, assuming the default
    /// "division, not regex" disambiguation for what follows.
    pub fn bump_any(&mut self) -> Token<'a> {
        self.bump(true)
    }

    /// Consumes the current token only if it has the given kind.
    pub fn eat(&mut self, kind: Kind) -> bool {
        if self.at(kind) {
            self.bump_any();
            true
        } else {
            false
        }
    }

    pub fn re_lex_template_continuation(&mut self) -> Token<'a> {
        let prev = self.token;
        self.prev_end = prev.end();
        self.token = self.lexer.re_lex_template_continuation();
        prev
    }

    pub fn re_lex_as_jsx_text(&mut self) -> Token<'a> {
        let start = self.token.start();
        self.prev_end = self.token.start();
        self.token = self.lexer.re_lex_as_jsx_text(start);
        self.token
    }

    /// Re-scans the current `/`/`/=` punctuator as a regex literal, for the
    /// positions where the lexer's default "probably division" guess is
    /// wrong (the parser, not the lexer, knows whether a regex is legal
    /// here).
    pub fn re_lex_as_regex(&mut self, punctuator_start: u32) -> Token<'a> {
        self.prev_end = punctuator_start;
        self.token = self.lexer.re_lex_as_regex(punctuator_start);
        self.token
    }

    pub fn re_lex_as_jsx_string(&mut self) -> Token<'a> {
        let start = self.token.start();
        self.token = self.lexer.re_lex_as_jsx_string(start);
        self.token
    }

    /// Reinterprets the current `>`-family token (`>`, `>=`, `>>`, `>>=`,
    /// `>>>`, `>>>=`) as one fewer `>`/`=`, without asking the lexer to
    /// re-scan: the lexer already advanced past the whole punctuator when it
    /// longest-match lexed it, so "giving back" a suffix is purely a matter
    /// of shrinking the span the parser reports as current. The next `bump`
    /// resumes lexing from the lexer's real (unchanged) position, i.e. right
    /// after the *original* multi-character punctuator.
    pub fn reinterpret_right_angle(&mut self) {
        let span = self.token.span();
        let new_kind = match self.token.kind() {
            Kind::Shr3Eq => Kind::ShrEq,
            Kind::Shr3 => Kind::Shr,
            Kind::ShrEq => Kind::GtEq,
            Kind::Shr => Kind::RAngle,
            Kind::GtEq => Kind::Eq,
            other => other,
        };
        self.token = Token::new(new_kind, Span::new(span.start + 1, span.end));
    }

    pub fn begin_transaction(&self) -> Checkpoint<'a> {
        Checkpoint { lexer: self.lexer.checkpoint(), token: self.token, prev_end: self.prev_end }
    }

    /// Keeps everything the speculative parse already did; this only exists
    /// so call sites read symmetrically with `roll_back_transaction`.
    pub fn commit_transaction(&mut self, _checkpoint: Checkpoint<'a>) {}

    pub fn roll_back_transaction(&mut self, checkpoint: Checkpoint<'a>) {
        self.lexer.rewind(checkpoint.lexer);
        self.token = checkpoint.token;
        self.prev_end = checkpoint.prev_end;
    }
}

#[cfg(test)]
mod test {
    use lintium_allocator::Allocator;
    use lintium_span::{SourceText, SourceType};

    use super::*;

    fn cursor<'a>(allocator: &'a Allocator, source: &'a SourceText) -> Cursor<'a> {
        Cursor::new(Lexer::new(allocator, source, SourceType::default()))
    }

    #[test]
    fn transaction_rollback_replays_identical_tokens() {
        let allocator = Allocator::default();
        let source = SourceText::new("foo bar");
        let mut cur = cursor(&allocator, &source);
        let checkpoint = cur.begin_transaction();
        let first = cur.bump_any();
        cur.roll_back_transaction(checkpoint);
        let replayed = cur.bump_any();
        assert_eq!(first.span(), replayed.span());
    }

    #[test]
    fn right_angle_splitting_peels_one_character_at_a_time() {
        let allocator = Allocator::default();
        let source = SourceText::new(">>>=");
        let mut cur = cursor(&allocator, &source);
        assert_eq!(cur.kind(), Kind::Shr3Eq);
        cur.reinterpret_right_angle();
        assert_eq!(cur.kind(), Kind::ShrEq);
        cur.reinterpret_right_angle();
        assert_eq!(cur.kind(), Kind::GtEq);
        cur.reinterpret_right_angle();
        assert_eq!(cur.kind(), Kind::Eq);
    }
}
