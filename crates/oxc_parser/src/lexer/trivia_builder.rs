use lintium_span::Span;

use super::{Kind, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPosition {
    Leading,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment {
    pub span: Span,
    pub kind: CommentKind,
    pub position: CommentPosition,
    /// Start offset of the token this comment attaches to (for leading
    /// comments) or `0` for trailing ones, mirroring how the trivia
    /// attaches to the surrounding token stream during a single forward
    /// pass.
    pub attached_to: u32,
    pub preceded_by_newline: bool,
    pub followed_by_newline: bool,
}

impl Comment {
    fn new(start: u32, end: u32, kind: CommentKind) -> Self {
        Self {
            span: Span::new(start, end),
            kind,
            position: CommentPosition::Trailing,
            attached_to: 0,
            preceded_by_newline: false,
            followed_by_newline: false,
        }
    }

    pub fn is_line(&self) -> bool {
        self.kind == CommentKind::Line
    }

    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }
}

/// Accumulates comments and irregular whitespace as the lexer scans, and
/// decides after the fact whether each comment is leading (attached to the
/// token that follows it) or trailing (attached to the token before it).
///
/// Comments are not collected into the parser's diagnostic/visit streams --
/// they carry no parse-relevant semantics here. They exist so the front end
/// can eventually answer "what comment sits next to this span", the way a
/// suppression-comment feature (`// lintium-disable-next-line`) would need.
#[derive(Debug, Default)]
pub struct TriviaBuilder {
    pub(crate) comments: std::vec::Vec<Comment>,
    pub(crate) irregular_whitespaces: std::vec::Vec<Span>,

    /// Index of the first comment not yet attached to a token.
    processed: usize,
    saw_newline: bool,
    previous_kind: Kind,
}

/// A saved position inside a [`TriviaBuilder`], for the lexer transaction
/// primitive: a rolled-back speculative parse must leave no trace in the
/// trivia stream either, not just in tokens/diagnostics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriviaCheckpoint {
    comments_len: usize,
    irregular_whitespaces_len: usize,
    processed: usize,
    saw_newline: bool,
    previous_kind: Kind,
}

impl TriviaBuilder {
    pub(crate) fn checkpoint(&self) -> TriviaCheckpoint {
        TriviaCheckpoint {
            comments_len: self.comments.len(),
            irregular_whitespaces_len: self.irregular_whitespaces.len(),
            processed: self.processed,
            saw_newline: self.saw_newline,
            previous_kind: self.previous_kind,
        }
    }

    pub(crate) fn rewind(&mut self, checkpoint: TriviaCheckpoint) {
        self.comments.truncate(checkpoint.comments_len);
        self.irregular_whitespaces.truncate(checkpoint.irregular_whitespaces_len);
        self.processed = checkpoint.processed;
        self.saw_newline = checkpoint.saw_newline;
        self.previous_kind = checkpoint.previous_kind;
    }

    pub fn add_irregular_whitespace(&mut self, start: u32, end: u32) {
        self.irregular_whitespaces.push(Span::new(start, end));
    }

    pub fn add_line_comment(&mut self, start: u32, end: u32) {
        self.add_comment(Comment::new(start, end, CommentKind::Line));
    }

    pub fn add_block_comment(&mut self, start: u32, end: u32) {
        self.add_comment(Comment::new(start, end, CommentKind::Block));
    }

    /// Called whenever the lexer crosses a line terminator outside of a
    /// comment/string/template, so that the *next* comment or token knows a
    /// newline came before it.
    pub fn handle_newline(&mut self) {
        if self.processed < self.comments.len() {
            let last = self.comments.len() - 1;
            self.comments[last].followed_by_newline = true;
        }
        self.saw_newline = true;
    }

    /// Called once per real (non-trivia) token; attaches every
    /// not-yet-attached comment to it as leading trivia.
    pub fn handle_token(&mut self, token: Token) {
        let len = self.comments.len();
        self.previous_kind = token.kind();
        if self.processed < len {
            for comment in &mut self.comments[self.processed..] {
                comment.position = CommentPosition::Leading;
                comment.attached_to = token.start();
            }
            self.processed = len;
        }
        self.saw_newline = false;
    }

    /// A line comment right after `=` or `(` with no newline in between
    /// reads naturally as leading trivia for what follows (`let x = // ...`),
    /// not as trailing trivia for the `=`/`(` token itself.
    fn should_be_treated_as_trailing_comment(&self) -> bool {
        !self.saw_newline && !matches!(self.previous_kind, Kind::Eq | Kind::LParen)
    }

    fn add_comment(&mut self, mut comment: Comment) {
        if let Some(last) = self.comments.last() {
            if comment.span.start <= last.span.start {
                return;
            }
        }

        comment.preceded_by_newline = self.saw_newline;
        if comment.is_line() {
            comment.followed_by_newline = true;
            if self.should_be_treated_as_trailing_comment() {
                self.processed = self.comments.len() + 1;
            }
            self.saw_newline = true;
        }

        self.comments.push(comment);
    }

    pub fn build(self) -> std::vec::Vec<Comment> {
        self.comments
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trailing_line_comment_attaches_to_preceding_token() {
        let mut builder = TriviaBuilder::default();
        builder.handle_token(Token::new(Kind::Ident, Span::new(0, 1)));
        builder.add_line_comment(2, 10);
        let comments = builder.build();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].position, CommentPosition::Trailing);
    }

    #[test]
    fn comment_on_its_own_line_is_leading_for_next_token() {
        let mut builder = TriviaBuilder::default();
        builder.handle_newline();
        builder.add_line_comment(0, 8);
        builder.handle_token(Token::new(Kind::Ident, Span::new(9, 10)));
        let comments = builder.build();
        assert_eq!(comments[0].position, CommentPosition::Leading);
        assert_eq!(comments[0].attached_to, 9);
    }

    #[test]
    fn duplicate_comment_from_rewind_is_not_reinserted() {
        let mut builder = TriviaBuilder::default();
        builder.add_block_comment(0, 5);
        builder.add_block_comment(0, 5);
        assert_eq!(builder.comments.len(), 1);
    }
}
