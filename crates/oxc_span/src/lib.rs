//! Source buffer, [`Span`] and [`SourceType`] flags shared by the lexer,
//! parser, AST and diagnostics crates.
//!
//! This crate intentionally has almost no logic: it is the common vocabulary
//! every other front-end crate is built against, so keeping it dependency-free
//! (beyond `compact_str` for small-string spans and `miette` for the
//! `Span -> SourceSpan` conversion) keeps compile times and the dependency
//! graph shallow.

mod source_text;
mod source_type;
mod span;

pub use compact_str::CompactString;
pub use source_text::SourceText;
pub use source_type::{Language, ModuleKind, SourceType, TopLevelAwait};
pub use span::{GetSpan, Span};
