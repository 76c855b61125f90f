//! AST node definitions and the visit-sink contract shared between the
//! lexer/parser and whatever downstream pass consumes their output.
//!
//! This crate deliberately does not define a persistent, ownership-holding
//! AST: expressions live in a per-statement [`expression::ExpressionArena`]
//! that is cleared as soon as a statement finishes, and semantic facts
//! (declarations, scope boundaries, control-flow statements) are reported
//! immediately through [`visit::VisitSink`] as the parser recognizes them.

pub mod expression;
pub mod operator;
pub mod variable;
pub mod visit;

pub use expression::{
    BindingPatternKind, ExpressionArena, ExpressionId, ExpressionKind, MemberProperty,
    NumberBase, PropertyKind,
};
pub use operator::{AssignmentOperator, BinaryOperator, UnaryOperator, UpdateOperator};
pub use variable::{InitKind, VariableKind};
pub use visit::{VisitEvent, VisitRecorder, VisitSink};
