mod identifier;
mod kind;
mod numeric;
mod token;
mod trivia_builder;

pub use kind::Kind;
pub use token::Token;
pub use trivia_builder::{Comment, CommentKind, CommentPosition, TriviaBuilder};

use trivia_builder::TriviaCheckpoint;

use lintium_allocator::Allocator;
use lintium_ast::NumberBase;
use lintium_diagnostics::OxcDiagnostic;
use lintium_span::{SourceText, SourceType, Span};

use crate::diagnostics;

/// Scans a [`SourceText`] into a stream of [`Token`]s.
///
/// The lexer never looks ahead past the token it is currently building
/// (aside from the handful of one/two-character punctuator disambiguations
/// below); longer-range decisions -- is `<` a JSX open tag or a relational
/// operator? is `/` a division or the start of a regex? -- are asked of the
/// caller through [`Lexer::next_token`]'s `regex_allowed` parameter and
/// through [`Lexer::re_lex_as_jsx_text`]/[`Lexer::re_lex_as_regex`], since
/// only the parser's statement/expression context can answer them.
///
/// `>`-family punctuators (`>>`, `>>>`, `>=`, `>>=`, `>>>=`) are always
/// lexed as one greedy token; splitting one apart to close a generic/type
/// argument list is the parser's job (it fabricates a shorter token in
/// place without calling back into the lexer -- see
/// `Parser::reinterpret_right_angle`), since only the parser knows how many
/// `>`s actually belong to the enclosing construct.
pub struct Lexer<'a> {
    allocator: &'a Allocator,
    source: &'a SourceText,
    source_type: SourceType,
    pos: u32,
    pub trivia_builder: TriviaBuilder,
    pub errors: std::vec::Vec<OxcDiagnostic>,
}

/// A saved lexer position, used by the parser to implement bounded
/// backtracking: `begin_transaction`/`commit_transaction`/
/// `roll_back_transaction` at the `Parser` level wrap this.
#[derive(Clone, Copy)]
pub struct LexerCheckpoint {
    pos: u32,
    errors_len: usize,
    trivia: TriviaCheckpoint,
}

impl<'a> Lexer<'a> {
    pub fn new(allocator: &'a Allocator, source: &'a SourceText, source_type: SourceType) -> Self {
        Self {
            allocator,
            source,
            source_type,
            pos: 0,
            trivia_builder: TriviaBuilder::default(),
            errors: std::vec::Vec::new(),
        }
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn checkpoint(&self) -> LexerCheckpoint {
        LexerCheckpoint { pos: self.pos, errors_len: self.errors.len(), trivia: self.trivia_builder.checkpoint() }
    }

    /// Restore the lexer to a previously saved position, discarding any
    /// diagnostics and trivia recorded since -- the rollback half of a
    /// parser transaction.
    pub fn rewind(&mut self, checkpoint: LexerCheckpoint) {
        self.pos = checkpoint.pos;
        self.errors.truncate(checkpoint.errors_len);
        self.trivia_builder.rewind(checkpoint.trivia);
    }

    fn byte_at(&self, offset: u32) -> u8 {
        self.source.byte_at(offset)
    }

    fn peek(&self) -> u8 {
        self.byte_at(self.pos)
    }

    fn peek_at(&self, n: u32) -> u8 {
        self.byte_at(self.pos + n)
    }

    fn advance(&mut self) -> u8 {
        let b = self.peek();
        self.pos += 1;
        b
    }

    fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scan and return the next token. `regex_allowed` should be `true`
    /// whenever a `/` at this position would be parsed as the start of a
    /// regex literal rather than division (i.e. the previous token cannot
    /// end an expression -- see [`Kind::is_before_expr`]).
    pub fn next_token(&mut self, regex_allowed: bool) -> Token<'a> {
        let mut is_on_new_line = false;
        loop {
            match self.skip_trivia() {
                TriviaStep::Newline => is_on_new_line = true,
                TriviaStep::Trivia => {}
                TriviaStep::Done => break,
            }
        }

        let start = self.pos;
        if self.eof() {
            let mut token = Token::new(Kind::Eof, Span::new(start, start));
            token.set_is_on_new_line(is_on_new_line);
            self.trivia_builder.handle_token(token);
            return token;
        }

        let b = self.peek();
        let mut token = if identifier::is_ascii_identifier_start(b) || b >= 0x80 || b == b'\\' {
            self.read_identifier_or_keyword(start)
        } else if numeric::is_decimal_digit(b) || (b == b'.' && self.peek_at(1).is_ascii_digit()) {
            let kind = self.read_number();
            Token::new(kind, Span::new(start, self.pos))
        } else if b == b'"' || b == b'\'' {
            let kind = self.read_string(b);
            Token::new(kind, Span::new(start, self.pos))
        } else if b == b'`' {
            let kind = self.read_template_head();
            Token::new(kind, Span::new(start, self.pos))
        } else if b == b'/' && regex_allowed {
            let kind = self.read_regex();
            Token::new(kind, Span::new(start, self.pos))
        } else {
            let kind = self.read_punctuator();
            Token::new(kind, Span::new(start, self.pos))
        };

        token.set_is_on_new_line(is_on_new_line);
        self.trivia_builder.handle_token(token);
        token
    }

    fn skip_trivia(&mut self) -> TriviaStep {
        if self.eof() {
            return TriviaStep::Done;
        }
        let b = self.peek();
        match b {
            b' ' | b'\t' | 0x0b | 0x0c => {
                self.advance();
                TriviaStep::Trivia
            }
            b'\n' => {
                self.advance();
                self.trivia_builder.handle_newline();
                TriviaStep::Newline
            }
            b'\r' => {
                self.advance();
                if self.peek() == b'\n' {
                    self.advance();
                }
                self.trivia_builder.handle_newline();
                TriviaStep::Newline
            }
            b'/' if self.peek_at(1) == b'/' => {
                let start = self.pos;
                self.pos += 2;
                while !self.eof() && self.peek() != b'\n' && self.peek() != b'\r' {
                    self.advance();
                }
                self.trivia_builder.add_line_comment(start, self.pos);
                TriviaStep::Trivia
            }
            b'/' if self.peek_at(1) == b'*' => {
                let start = self.pos;
                self.pos += 2;
                let mut closed = false;
                let mut saw_newline = false;
                while !self.eof() {
                    if self.peek() == b'*' && self.peek_at(1) == b'/' {
                        self.pos += 2;
                        closed = true;
                        break;
                    }
                    if self.peek() == b'\n' {
                        saw_newline = true;
                    }
                    self.advance();
                }
                if !closed {
                    self.errors.push(diagnostics::unclosed_block_comment(Span::new(start, self.pos)));
                }
                self.trivia_builder.add_block_comment(start, self.pos);
                if saw_newline {
                    self.trivia_builder.handle_newline();
                    TriviaStep::Newline
                } else {
                    TriviaStep::Trivia
                }
            }
            0xe2 if self.is_unicode_line_separator() => {
                self.pos += 3;
                self.trivia_builder.handle_newline();
                TriviaStep::Newline
            }
            _ if b >= 0x80 && char_at(self.source.as_str(), self.pos).is_whitespace() => {
                let start = self.pos;
                let ch = char_at(self.source.as_str(), self.pos);
                self.pos += ch.len_utf8() as u32;
                self.trivia_builder.add_irregular_whitespace(start, self.pos);
                TriviaStep::Trivia
            }
            _ => TriviaStep::Done,
        }
    }

    /// `\u{2028}` (LINE SEPARATOR) / `\u{2029}` (PARAGRAPH SEPARATOR), the
    /// two non-ASCII code points ECMAScript treats as line terminators.
    fn is_unicode_line_separator(&self) -> bool {
        self.peek() == 0xe2 && self.peek_at(1) == 0x80 && matches!(self.peek_at(2), 0xa8 | 0xa9)
    }

    /// Scans an identifier or keyword, decoding any `\uXXXX`/`\u{X...}`
    /// escapes along the way. When no escape is present the token simply
    /// re-slices the source (the common case, zero extra allocation); when
    /// one is present the decoded spelling is copied into the parser's
    /// arena and stashed on the token (see [`Token::escaped_text`]).
    fn read_identifier_or_keyword(&mut self, start: u32) -> Token<'a> {
        let mut has_escape = false;
        let mut decoded: Option<std::string::String> = None;
        let mut flush_point = start;

        loop {
            if self.eof() {
                break;
            }
            if self.peek() == b'\\' && self.peek_at(1) == b'u' {
                has_escape = true;
                let buffer = decoded.get_or_insert_with(std::string::String::new);
                buffer.push_str(&self.source.as_str()[flush_point as usize..self.pos as usize]);
                self.pos += 2; // consume `\u`
                if let Some(ch) = self.read_unicode_escape_value(start) {
                    buffer.push(ch);
                }
                flush_point = self.pos;
                continue;
            }
            let ch = char_at(self.source.as_str(), self.pos);
            if ch == '\0' && self.eof() {
                break;
            }
            let is_part = if self.pos == start && decoded.is_none() {
                identifier::is_identifier_start(ch)
            } else {
                identifier::is_identifier_part(ch)
            };
            if !is_part {
                break;
            }
            self.pos += ch.len_utf8() as u32;
        }

        let end = self.pos;
        let raw = &self.source.as_str()[start as usize..end as usize];
        let kind = if has_escape { Kind::Ident } else { Kind::matches_keyword(raw).unwrap_or(Kind::Ident) };

        let mut token = Token::new(kind, Span::new(start, end));
        token.set_has_escape(has_escape);
        if let Some(mut buffer) = decoded {
            buffer.push_str(&self.source.as_str()[flush_point as usize..end as usize]);
            token.set_escaped_text(self.allocator.alloc_str(&buffer));
        }
        token
    }

    /// Consumes and decodes the digits of a `\u` escape (the `\u` itself has
    /// already been consumed). Returns the decoded character, or `None` if
    /// the escape was malformed (a diagnostic has already been pushed).
    fn read_unicode_escape_value(&mut self, token_start: u32) -> Option<char> {
        let value = if self.peek() == b'{' {
            let digits_start = self.pos + 1;
            self.pos += 1;
            while self.peek().is_ascii_hexdigit() {
                self.advance();
            }
            let digits = &self.source.as_str()[digits_start as usize..self.pos as usize];
            if self.peek() != b'}' {
                self.errors.push(diagnostics::unclosed_identifier_escape_sequence(Span::new(token_start, self.pos)));
                return None;
            }
            self.advance();
            if digits.is_empty() {
                self.errors
                    .push(diagnostics::expected_hex_digits_in_unicode_escape(Span::new(token_start, self.pos)));
                return None;
            }
            u32::from_str_radix(digits, 16).ok()
        } else {
            let digits_start = self.pos;
            for _ in 0..4 {
                if !self.peek().is_ascii_hexdigit() {
                    self.errors
                        .push(diagnostics::expected_hex_digits_in_unicode_escape(Span::new(token_start, self.pos)));
                    return None;
                }
                self.advance();
            }
            let digits = &self.source.as_str()[digits_start as usize..self.pos as usize];
            u32::from_str_radix(digits, 16).ok()
        };

        match value.and_then(char::from_u32) {
            Some(ch) => Some(ch),
            None => {
                self.errors.push(diagnostics::escaped_code_point_in_unicode_out_of_range(Span::new(
                    token_start,
                    self.pos,
                )));
                None
            }
        }
    }

    fn read_number(&mut self) -> Kind {
        let start = self.pos;
        let mut base = NumberBase::Decimal;
        if self.peek() == b'0' {
            if let Some(b) = numeric::radix_prefix_base(self.peek_at(1)) {
                base = b;
                self.pos += 2;
                while numeric::is_digit_for_base(self.peek(), base) || self.peek() == b'_' {
                    self.advance();
                }
                if self.peek() == b'n' {
                    self.advance();
                }
                return Kind::match_number_base(base);
            }
        }

        while self.peek().is_ascii_digit() || self.peek() == b'_' {
            self.advance();
        }

        let mut is_float = false;
        if self.peek() == b'.' {
            is_float = true;
            self.advance();
            while self.peek().is_ascii_digit() || self.peek() == b'_' {
                self.advance();
            }
        }
        if matches!(self.peek(), b'e' | b'E') {
            is_float = true;
            self.advance();
            if matches!(self.peek(), b'+' | b'-') {
                self.advance();
            }
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        if !is_float && self.peek() == b'n' {
            self.advance();
            return Kind::Decimal;
        }

        let raw = &self.source.as_str()[start as usize..self.pos as usize];
        if !is_float && numeric::looks_like_legacy_octal(raw) {
            return Kind::LegacyOctal;
        }

        if is_float { Kind::Float } else { Kind::Decimal }
    }

    fn read_string(&mut self, quote: u8) -> Kind {
        let start = self.pos;
        self.advance();
        while !self.eof() && self.peek() != quote {
            if self.peek() == b'\\' {
                let escape_start = self.pos;
                self.advance();
                if self.peek() == b'x' {
                    self.advance();
                    self.read_hex_escape_digits(escape_start);
                } else if !self.eof() {
                    self.advance();
                }
                continue;
            }
            if matches!(self.peek(), b'\n' | b'\r') {
                break;
            }
            if matches!(self.peek(), 0x00..=0x08 | 0x0b | 0x0c | 0x0e..=0x1f) {
                self.errors.push(diagnostics::unexpected_control_character(Span::new(self.pos, self.pos + 1)));
            }
            self.advance();
        }
        if self.peek() == quote {
            self.advance();
        } else {
            self.errors.push(diagnostics::unclosed_string_literal(Span::new(start, self.pos)));
        }
        Kind::Str
    }

    /// Consumes the two hex digits of a `\xHH` escape, already past the
    /// `\x`; reports [`diagnostics::invalid_hex_escape_sequence`] (and still
    /// advances past whatever is there) if either digit is missing.
    fn read_hex_escape_digits(&mut self, escape_start: u32) {
        for _ in 0..2 {
            if self.eof() || !self.peek().is_ascii_hexdigit() {
                self.errors.push(diagnostics::invalid_hex_escape_sequence(Span::new(escape_start, self.pos)));
                return;
            }
            self.advance();
        }
    }

    /// Scans up to (and including) the opening `` ` `` plus either the
    /// closing `` ` `` (no-substitution template) or the `${` that starts
    /// the first substitution.
    fn read_template_head(&mut self) -> Kind {
        self.advance();
        self.read_template_chars(Kind::NoSubstitutionTemplate, Kind::TemplateHead)
    }

    /// Called by the parser after it finishes parsing a `${...}`
    /// substitution expression and the lexer sees the matching `}`, to
    /// resume scanning literal template characters.
    pub fn re_lex_template_continuation(&mut self) -> Token<'a> {
        let start = self.pos;
        let kind = self.read_template_chars(Kind::TemplateTail, Kind::TemplateMiddle);
        Token::new(kind, Span::new(start, self.pos))
    }

    fn read_template_chars(&mut self, end_kind: Kind, middle_kind: Kind) -> Kind {
        loop {
            if self.eof() {
                return end_kind;
            }
            match self.peek() {
                b'`' => {
                    self.advance();
                    return end_kind;
                }
                b'$' if self.peek_at(1) == b'{' => {
                    self.pos += 2;
                    return middle_kind;
                }
                b'\\' => {
                    self.advance();
                    if !self.eof() {
                        self.advance();
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn read_regex(&mut self) -> Kind {
        self.advance();
        let mut in_class = false;
        while !self.eof() {
            match self.peek() {
                b'\\' => {
                    self.advance();
                    if !self.eof() {
                        self.advance();
                    }
                }
                b'[' => {
                    in_class = true;
                    self.advance();
                }
                b']' => {
                    in_class = false;
                    self.advance();
                }
                b'/' if !in_class => {
                    self.advance();
                    break;
                }
                b'\n' => break,
                _ => {
                    self.advance();
                }
            }
        }
        while identifier::is_ascii_identifier_part(self.peek()) {
            self.advance();
        }
        Kind::RegExp
    }

    /// Re-lexes a `/` or `/=` token that was already consumed as a
    /// punctuator back into a regex literal, for the rare case a statement
    /// boundary reclassifies what looked like division (the parser detects
    /// this and rewinds its cursor before calling this).
    pub fn re_lex_as_regex(&mut self, punctuator_start: u32) -> Token<'a> {
        self.pos = punctuator_start;
        let kind = self.read_regex();
        Token::new(kind, Span::new(punctuator_start, self.pos))
    }

    /// Scans raw text up to the next `<` or `{`, for JSX children. Only
    /// valid to call right after the parser has recognized it is inside a
    /// JSX element body.
    pub fn re_lex_as_jsx_text(&mut self, start: u32) -> Token<'a> {
        self.pos = start;
        while !self.eof() && !matches!(self.peek(), b'<' | b'{') {
            self.advance();
        }
        Token::new(Kind::JsxText, Span::new(start, self.pos))
    }

    /// Scans a JSX attribute string value, which (unlike a normal string
    /// literal) allows unpaired quotes of the other kind but never a line
    /// terminator.
    pub fn re_lex_as_jsx_string(&mut self, start: u32) -> Token<'a> {
        self.pos = start;
        let quote = self.peek();
        self.advance();
        while !self.eof() && self.peek() != quote && !matches!(self.peek(), b'\n' | b'\r') {
            self.advance();
        }
        if self.peek() == quote {
            self.advance();
        }
        Token::new(Kind::Str, Span::new(start, self.pos))
    }

    #[rustfmt::skip]
    fn read_punctuator(&mut self) -> Kind {
        let b = self.advance();
        match b {
            b'{' => Kind::LCurly,
            b'}' => Kind::RCurly,
            b'(' => Kind::LParen,
            b')' => Kind::RParen,
            b'[' => Kind::LBrack,
            b']' => Kind::RBrack,
            b';' => Kind::Semicolon,
            b',' => Kind::Comma,
            b'~' => Kind::Tilde,
            b'@' => Kind::At,
            b':' => Kind::Colon,
            b'.' => {
                if self.peek() == b'.' && self.peek_at(1) == b'.' {
                    self.pos += 2;
                    Kind::Dot3
                } else {
                    Kind::Dot
                }
            }
            b'?' => match self.peek() {
                b'?' => {
                    self.advance();
                    if self.peek() == b'=' {
                        self.advance();
                        Kind::Question2Eq
                    } else {
                        Kind::Question2
                    }
                }
                b'.' if !self.peek_at(1).is_ascii_digit() => {
                    self.advance();
                    Kind::QuestionDot
                }
                _ => Kind::Question,
            },
            b'<' => match self.peek() {
                b'<' => {
                    self.advance();
                    if self.peek() == b'=' {
                        self.advance();
                        Kind::ShlEq
                    } else {
                        Kind::Shl
                    }
                }
                b'=' => {
                    self.advance();
                    Kind::LtEq
                }
                _ => Kind::LAngle,
            },
            b'>' => match self.peek() {
                b'>' if self.peek_at(1) == b'>' => {
                    self.pos += 2;
                    if self.peek() == b'=' {
                        self.advance();
                        Kind::Shr3Eq
                    } else {
                        Kind::Shr3
                    }
                }
                b'>' => {
                    self.advance();
                    if self.peek() == b'=' {
                        self.advance();
                        Kind::ShrEq
                    } else {
                        Kind::Shr
                    }
                }
                b'=' => {
                    self.advance();
                    Kind::GtEq
                }
                _ => Kind::RAngle,
            },
            b'=' => match self.peek() {
                b'=' if self.peek_at(1) == b'=' => {
                    self.pos += 2;
                    Kind::Eq3
                }
                b'=' => {
                    self.advance();
                    Kind::Eq2
                }
                b'>' => {
                    self.advance();
                    Kind::FatArrow
                }
                _ => Kind::Eq,
            },
            b'!' => match self.peek() {
                b'=' if self.peek_at(1) == b'=' => {
                    self.pos += 2;
                    Kind::Bang2Eq
                }
                b'=' => {
                    self.advance();
                    Kind::BangEq
                }
                _ => Kind::Bang,
            },
            b'+' => match self.peek() {
                b'+' => {
                    self.advance();
                    Kind::Plus2
                }
                b'=' => {
                    self.advance();
                    Kind::PlusEq
                }
                _ => Kind::Plus,
            },
            b'-' => match self.peek() {
                b'-' => {
                    self.advance();
                    Kind::Minus2
                }
                b'=' => {
                    self.advance();
                    Kind::MinusEq
                }
                _ => Kind::Minus,
            },
            b'*' => match self.peek() {
                b'*' => {
                    self.advance();
                    if self.peek() == b'=' {
                        self.advance();
                        Kind::Star2Eq
                    } else {
                        Kind::Star2
                    }
                }
                b'=' => {
                    self.advance();
                    Kind::StarEq
                }
                _ => Kind::Star,
            },
            b'/' => {
                if self.peek() == b'=' {
                    self.advance();
                    Kind::SlashEq
                } else {
                    Kind::Slash
                }
            }
            b'%' => {
                if self.peek() == b'=' {
                    self.advance();
                    Kind::PercentEq
                } else {
                    Kind::Percent
                }
            }
            b'&' => match self.peek() {
                b'&' => {
                    self.advance();
                    if self.peek() == b'=' {
                        self.advance();
                        Kind::Amp2Eq
                    } else {
                        Kind::Amp2
                    }
                }
                b'=' => {
                    self.advance();
                    Kind::AmpEq
                }
                _ => Kind::Amp,
            },
            b'|' => match self.peek() {
                b'|' => {
                    self.advance();
                    if self.peek() == b'=' {
                        self.advance();
                        Kind::Pipe2Eq
                    } else {
                        Kind::Pipe2
                    }
                }
                b'=' => {
                    self.advance();
                    Kind::PipeEq
                }
                _ => Kind::Pipe,
            },
            b'^' => {
                if self.peek() == b'=' {
                    self.advance();
                    Kind::CaretEq
                } else {
                    Kind::Caret
                }
            }
            b'#' => self.read_private_identifier(),
            _ => Kind::Undetermined,
        }
    }

    fn read_private_identifier(&mut self) -> Kind {
        while !self.eof() {
            let ch = char_at(self.source.as_str(), self.pos);
            if !identifier::is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8() as u32;
        }
        Kind::PrivateIdentifier
    }

    /// Returns the allocator this lexer was constructed with, for escape
    /// unescaping that needs to copy into a fresh buffer (e.g. an
    /// identifier containing `\u{...}` escapes).
    pub fn allocator(&self) -> &'a Allocator {
        self.allocator
    }
}

enum TriviaStep {
    Trivia,
    Newline,
    Done,
}

fn char_at(s: &str, pos: u32) -> char {
    s[pos as usize..].chars().next().unwrap_or('\0')
}

impl Kind {
    fn match_number_base(base: NumberBase) -> Kind {
        match base {
            NumberBase::Hex => Kind::Hex,
            NumberBase::Octal => Kind::Octal,
            NumberBase::Binary => Kind::Binary,
            NumberBase::LegacyOctal => Kind::LegacyOctal,
            NumberBase::Decimal => Kind::Decimal,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lex_all(src: &str) -> std::vec::Vec<Kind> {
        let allocator = Allocator::default();
        let source = SourceText::new(src);
        let mut lexer = Lexer::new(&allocator, &source, SourceType::default());
        let mut kinds = std::vec::Vec::new();
        loop {
            let token = lexer.next_token(true);
            if token.kind() == Kind::Eof {
                break;
            }
            kinds.push(token.kind());
        }
        kinds
    }

    #[test]
    fn lexes_identifiers_and_keywords() {
        assert_eq!(lex_all("let x = await"), vec![Kind::Let, Kind::Ident, Kind::Eq, Kind::Await]);
    }

    #[test]
    fn lexes_numbers() {
        assert_eq!(lex_all("0x1F 0o17 0b101 1_000 1.5e10 10n"),
            vec![Kind::Hex, Kind::Octal, Kind::Binary, Kind::Decimal, Kind::Float, Kind::Decimal]);
    }

    #[test]
    fn legacy_octal_is_distinguished_from_decimal() {
        assert_eq!(lex_all("0123"), vec![Kind::LegacyOctal]);
        assert_eq!(lex_all("0.123"), vec![Kind::Float]);
    }

    #[test]
    fn unclosed_block_comment_is_reported() {
        let allocator = Allocator::default();
        let source = SourceText::new("/* never closed");
        let mut lexer = Lexer::new(&allocator, &source, SourceType::default());
        lexer.next_token(true);
        assert_eq!(lexer.errors.len(), 1);
    }

    #[test]
    fn string_literal_handles_escapes() {
        assert_eq!(lex_all(r#""a\"b""#), vec![Kind::Str]);
    }

    #[test]
    fn unclosed_string_literal_is_reported() {
        let allocator = Allocator::default();
        let source = SourceText::new("\"abc");
        let mut lexer = Lexer::new(&allocator, &source, SourceType::default());
        lexer.next_token(true);
        assert_eq!(lexer.errors.len(), 1);
    }

    #[test]
    fn template_literal_head_and_tail() {
        assert_eq!(lex_all("`abc`"), vec![Kind::NoSubstitutionTemplate]);
    }

    #[test]
    fn regex_allowed_only_when_requested() {
        let allocator = Allocator::default();
        let source = SourceText::new("/abc/g");
        let mut lexer = Lexer::new(&allocator, &source, SourceType::default());
        assert_eq!(lexer.next_token(true).kind(), Kind::RegExp);
    }

    #[test]
    fn unicode_escape_in_identifier_decodes_and_disqualifies_keyword() {
        let allocator = Allocator::default();
        let source = SourceText::new(r"aw\u{61}it");
        let mut lexer = Lexer::new(&allocator, &source, SourceType::default());
        let token = lexer.next_token(true);
        assert_eq!(token.kind(), Kind::Ident);
        assert!(token.has_escape());
        assert_eq!(token.identifier_text(source.as_str()), "await");
    }

    #[test]
    fn braced_unicode_escape_in_identifier() {
        let allocator = Allocator::default();
        let source = SourceText::new(r"\u{61}bc");
        let mut lexer = Lexer::new(&allocator, &source, SourceType::default());
        let token = lexer.next_token(true);
        assert_eq!(token.identifier_text(source.as_str()), "abc");
    }

    #[test]
    fn checkpoint_and_rewind_restores_position() {
        let allocator = Allocator::default();
        let source = SourceText::new("a b c");
        let mut lexer = Lexer::new(&allocator, &source, SourceType::default());
        let checkpoint = lexer.checkpoint();
        let first = lexer.next_token(true);
        assert_eq!(first.kind(), Kind::Ident);
        lexer.rewind(checkpoint);
        let again = lexer.next_token(true);
        assert_eq!(again.span(), first.span());
    }

    #[test]
    fn greater_than_family_lexes_as_single_longest_token() {
        assert_eq!(lex_all(">>>="), vec![Kind::Shr3Eq]);
        assert_eq!(lex_all(">>="), vec![Kind::ShrEq]);
        assert_eq!(lex_all(">="), vec![Kind::GtEq]);
    }
}
