//! Lintium Parser for JavaScript and TypeScript
//!
//! A recursive-descent parser that never materializes a persistent AST.
//! Expressions live in a transient, per-statement [`lintium_ast::ExpressionArena`];
//! every syntactic fact the parser recognizes (bindings, scopes, statement
//! shapes) is reported immediately to a caller-supplied
//! [`lintium_ast::VisitSink`] as it is recognized, not recovered later by
//! walking a tree.
//!
//! # Usage
//!
//! ```
//! use lintium_allocator::Allocator;
//! use lintium_ast::VisitRecorder;
//! use lintium_parser::Parser;
//! use lintium_span::{SourceText, SourceType};
//!
//! let allocator = Allocator::default();
//! let source = SourceText::new("let x = 1;");
//! let mut sink = VisitRecorder::default();
//! let ret = Parser::new(&allocator, &source, SourceType::default()).parse(&mut sink);
//! assert!(!ret.panicked);
//! ```
//!
//! # Diagnostics
//!
//! [`ParserReturn::errors`] is the lexer's and parser's combined diagnostic
//! list; there is no other error-reporting channel (see
//! [`lintium_diagnostics::OxcDiagnostic`] for the `miette::Diagnostic` impl
//! that lets a caller render these).

mod context;
mod cursor;
mod diagnostics;
mod expr;
mod lexer;
mod state;
mod stmt;

use lintium_allocator::Allocator;
use lintium_ast::{ExpressionArena, VisitSink};
use lintium_diagnostics::OxcDiagnostic;
use lintium_span::{SourceText, SourceType};

use context::Context;
use cursor::Cursor;
use state::ParserState;

/// How many nested expressions/statements the parser will descend into
/// before giving up and reporting [`diagnostics::depth_limit_exceeded`]
/// instead of overflowing the real call stack.
const DEFAULT_DEPTH_LIMIT: u32 = 256;

/// Return value of [`Parser::parse`].
///
/// The parser never panics on malformed input: a syntax error is recorded in
/// `errors` and parsing recovers to the next statement boundary where
/// possible. `panicked` is set only when recovery itself gave up (the depth
/// limit was hit), in which case the remainder of the input was not parsed
/// and no further visits were emitted for it.
pub struct ParserReturn {
    pub errors: std::vec::Vec<OxcDiagnostic>,
    pub panicked: bool,
}

/// Recursive descent parser for ECMAScript and TypeScript.
///
/// See [`Parser::parse`] for the entry point. A `Parser` is consumed by
/// parsing: it owns the one pass it makes over `source_text` and cannot be
/// reused afterward.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source_text: &'a SourceText,
    source_type: SourceType,
    arena: ExpressionArena<'a>,
    state: ParserState,
    errors: std::vec::Vec<OxcDiagnostic>,
    /// A type-position identifier noticed mid-skip, not yet reported to the
    /// sink; see [`Parser::skip_type_annotation`]/[`Parser::flush_pending_type_use`].
    pending_type_use: Option<(lintium_span::Span, &'a str)>,
    depth: u32,
    depth_limit: u32,
    panicked: bool,
    allow_return_outside_function: bool,
}

impl<'a> Parser<'a> {
    pub fn new(allocator: &'a Allocator, source_text: &'a SourceText, source_type: SourceType) -> Self {
        let lexer = lexer::Lexer::new(allocator, source_text, source_type);
        Self {
            cursor: Cursor::new(lexer),
            source_text,
            source_type,
            arena: ExpressionArena::new(),
            state: ParserState::new(),
            errors: std::vec::Vec::new(),
            pending_type_use: None,
            depth: 0,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            panicked: false,
            allow_return_outside_function: false,
        }
    }

    /// By default a bare `return` at the top level of a program is a syntax
    /// error. Callers embedding a snippet known to run inside a function
    /// body (e.g. a bundler's per-module wrapper) can opt out.
    #[must_use]
    pub fn allow_return_outside_function(mut self, allow: bool) -> Self {
        self.allow_return_outside_function = allow;
        self
    }

    /// Overrides [`DEFAULT_DEPTH_LIMIT`]. Exposed mainly for tests that want
    /// to exercise the depth-limit recovery path without constructing a
    /// genuinely 256-deep input.
    #[must_use]
    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Parses the whole source, driving `sink` as each construct is
    /// recognized. Always returns; a syntax error never aborts the parse,
    /// it is recorded in [`ParserReturn::errors`] and recovery resumes at
    /// the next statement boundary.
    pub fn parse(mut self, sink: &mut dyn VisitSink) -> ParserReturn {
        let ctx = Context::default().and_return(self.allow_return_outside_function);
        let ctx = if self.source_type.is_module() { ctx.and_await(true) } else { ctx };

        self.parse_statement_list(sink, ctx, context::StatementContext::StatementList);
        let end = lintium_span::Span::new(self.source_text.len(), self.source_text.len());
        sink.end_of_module(end);

        let mut errors = self.cursor.take_lexer_errors();
        errors.extend(self.errors);
        ParserReturn { errors, panicked: self.panicked }
    }

    /// Increments the recursion depth counter; returns `false` (and records
    /// [`diagnostics::depth_limit_exceeded`] the first time) once the limit
    /// is hit. Every recursive expression/statement entry point that can
    /// nest arbitrarily (parenthesization, array/object literals, block
    /// statements) must check this instead of trusting the real call stack.
    fn enter_nesting(&mut self) -> bool {
        if self.depth >= self.depth_limit {
            if !self.panicked {
                self.errors.push(diagnostics::depth_limit_exceeded(self.cursor.span()));
            }
            self.panicked = true;
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod test {
    use lintium_ast::{VariableKind, VisitEvent, VisitRecorder};
    use lintium_span::{SourceText, SourceType};

    use super::*;

    fn parse(source: &str) -> (ParserReturn, VisitRecorder) {
        let allocator = Allocator::default();
        let source = SourceText::new(source);
        let mut sink = VisitRecorder::default();
        let ret = Parser::new(&allocator, &source, SourceType::default()).parse(&mut sink);
        (ret, sink)
    }

    #[test]
    fn empty_source_parses_with_no_errors() {
        let (ret, sink) = parse("");
        assert!(ret.errors.is_empty());
        assert!(!ret.panicked);
        assert_eq!(sink.events, vec![VisitEvent::EndOfModule]);
    }

    #[test]
    fn top_level_let_binding_is_visited() {
        let (ret, sink) = parse("let x = 1;");
        assert!(ret.errors.is_empty());
        assert!(sink.events.iter().any(|e| matches!(
            e,
            VisitEvent::VariableDeclaration { name, kind: VariableKind::Let, .. } if name == "x"
        )));
    }

    #[test]
    fn unmatched_paren_is_recorded_as_an_error_not_a_panic() {
        let (ret, _sink) = parse("(1 + 2;");
        assert!(!ret.errors.is_empty());
        assert!(!ret.panicked);
    }

    #[test]
    fn deeply_nested_parens_trip_the_depth_limit_without_stack_overflow() {
        let mut source = "(".repeat(300);
        source.push('1');
        source.push_str(&")".repeat(300));
        let allocator = Allocator::default();
        let source = SourceText::new(&source);
        let mut sink = VisitRecorder::default();
        let ret = Parser::new(&allocator, &source, SourceType::default())
            .with_depth_limit(64)
            .parse(&mut sink);
        assert!(ret.panicked);
        assert!(ret.errors.iter().any(|e| e.code() == "E0203"));
    }
}
