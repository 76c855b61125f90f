use lintium_span::Span;

use crate::variable::{InitKind, VariableKind};

/// Sinks implement the events they care about and accept the emit-site's
/// default (a no-op) for the rest, instead of matching over one big event
/// enum or implementing a full classic visitor interface.
///
/// The parser drives these calls directly out of its recursive-descent
/// functions as it recognizes each construct; it never builds a persistent
/// AST and walks it afterwards (see [`crate::expression::ExpressionArena`]:
/// expression nodes are cleared between statements, so a sink that wants a
/// node's contents must act on it during the visit, not after).
///
/// Ordering contract: events appear in the left-to-right evaluation order of
/// the source, except that a class/function *expression*'s body is visited
/// before the surrounding expression's other operands, mirroring hoisting
/// semantics a name-resolution pass expects. `enter_function_scope`
/// precedes parameter declarations; `enter_function_scope_body` precedes
/// body statements; `exit_function_scope` follows them. Every `enter_*`
/// event is matched by exactly one `exit_*` event, properly nested, even on
/// syntactically broken input -- this is load-bearing for whatever consumes
/// the stream.
#[allow(unused_variables)]
pub trait VisitSink {
    /// A binding came into existence: `let`/`const`/`var`, a function or
    /// class declaration, a parameter, a catch binding, an import, or a
    /// TypeScript type-level binding. See [`VariableKind`] for the full set.
    fn variable_declaration(&mut self, span: Span, name: &str, kind: VariableKind, init: InitKind) {}

    /// A plain read of an identifier in expression position.
    fn variable_use(&mut self, span: Span, name: &str) {}

    /// An identifier used as the target of `=` (or a compound assignment,
    /// or an update expression). Distinct from [`variable_use`](Self::variable_use)
    /// because a name resolution pass treats reads and writes differently.
    fn variable_assignment(&mut self, span: Span, name: &str) {}

    /// A reference to a name only in TypeScript type position (e.g. `let x: Foo`).
    fn variable_type_use(&mut self, span: Span, name: &str) {}

    /// `typeof x` -- permitted to reference an undeclared name without
    /// triggering a use-before-declaration diagnostic downstream.
    fn variable_typeof_use(&mut self, span: Span, name: &str) {}

    /// `delete x.y` / legacy `delete x` -- a use, but one a strict-mode
    /// check treats specially.
    fn variable_delete_use(&mut self, span: Span, name: &str) {}

    fn enter_block_scope(&mut self, span: Span) {}
    fn exit_block_scope(&mut self, span: Span) {}

    fn enter_function_scope(&mut self, span: Span) {}
    fn enter_function_scope_body(&mut self, span: Span) {}
    fn exit_function_scope(&mut self, span: Span) {}
    /// A function *declaration*'s own name is bound in the enclosing scope,
    /// not the function's own -- reported separately from the generic
    /// enter so a sink can tell `function f(){}` from `(function(){})()`.
    fn enter_named_function_scope(&mut self, span: Span, name: &str) {}

    fn enter_class_scope(&mut self, span: Span) {}
    fn enter_class_scope_body(&mut self, span: Span, name: Option<&str>) {}
    fn exit_class_scope(&mut self, span: Span) {}

    fn enter_for_scope(&mut self, span: Span) {}
    fn exit_for_scope(&mut self, span: Span) {}

    fn enter_with_scope(&mut self, span: Span) {}
    fn exit_with_scope(&mut self, span: Span) {}

    /// A TypeScript index signature (`[key: string]: T`) opens its own tiny
    /// scope for `key`, visible only inside the signature.
    fn enter_index_signature_scope(&mut self, span: Span) {}
    fn exit_index_signature_scope(&mut self, span: Span) {}

    /// A class/interface/object-type member declaration that is not itself
    /// a variable binding (a field or method name).
    fn property_declaration(&mut self, span: Span, name: Option<&str>) {}

    /// Emitted exactly once, after the last top-level statement.
    fn end_of_module(&mut self, span: Span) {}
}

/// A [`VisitSink`] that records every call it receives, by name, for tests
/// that want to assert which events fired (and in what order) without
/// depending on every argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitEvent {
    VariableDeclaration { name: std::string::String, kind: VariableKind, init: InitKind },
    VariableUse { name: std::string::String },
    VariableAssignment { name: std::string::String },
    VariableTypeUse { name: std::string::String },
    VariableTypeofUse { name: std::string::String },
    VariableDeleteUse { name: std::string::String },
    EnterBlockScope,
    ExitBlockScope,
    EnterFunctionScope,
    EnterFunctionScopeBody,
    ExitFunctionScope,
    EnterNamedFunctionScope { name: std::string::String },
    EnterClassScope,
    EnterClassScopeBody { name: Option<std::string::String> },
    ExitClassScope,
    EnterForScope,
    ExitForScope,
    EnterWithScope,
    ExitWithScope,
    EnterIndexSignatureScope,
    ExitIndexSignatureScope,
    PropertyDeclaration { name: Option<std::string::String> },
    EndOfModule,
}

#[derive(Default)]
pub struct VisitRecorder {
    pub events: std::vec::Vec<VisitEvent>,
}

impl VisitSink for VisitRecorder {
    fn variable_declaration(&mut self, _span: Span, name: &str, kind: VariableKind, init: InitKind) {
        self.events.push(VisitEvent::VariableDeclaration { name: name.to_string(), kind, init });
    }

    fn variable_use(&mut self, _span: Span, name: &str) {
        self.events.push(VisitEvent::VariableUse { name: name.to_string() });
    }

    fn variable_assignment(&mut self, _span: Span, name: &str) {
        self.events.push(VisitEvent::VariableAssignment { name: name.to_string() });
    }

    fn variable_type_use(&mut self, _span: Span, name: &str) {
        self.events.push(VisitEvent::VariableTypeUse { name: name.to_string() });
    }

    fn variable_typeof_use(&mut self, _span: Span, name: &str) {
        self.events.push(VisitEvent::VariableTypeofUse { name: name.to_string() });
    }

    fn variable_delete_use(&mut self, _span: Span, name: &str) {
        self.events.push(VisitEvent::VariableDeleteUse { name: name.to_string() });
    }

    fn enter_block_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::EnterBlockScope);
    }

    fn exit_block_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::ExitBlockScope);
    }

    fn enter_function_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::EnterFunctionScope);
    }

    fn enter_function_scope_body(&mut self, _span: Span) {
        self.events.push(VisitEvent::EnterFunctionScopeBody);
    }

    fn exit_function_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::ExitFunctionScope);
    }

    fn enter_named_function_scope(&mut self, _span: Span, name: &str) {
        self.events.push(VisitEvent::EnterNamedFunctionScope { name: name.to_string() });
    }

    fn enter_class_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::EnterClassScope);
    }

    fn enter_class_scope_body(&mut self, _span: Span, name: Option<&str>) {
        self.events.push(VisitEvent::EnterClassScopeBody { name: name.map(str::to_string) });
    }

    fn exit_class_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::ExitClassScope);
    }

    fn enter_for_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::EnterForScope);
    }

    fn exit_for_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::ExitForScope);
    }

    fn enter_with_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::EnterWithScope);
    }

    fn exit_with_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::ExitWithScope);
    }

    fn enter_index_signature_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::EnterIndexSignatureScope);
    }

    fn exit_index_signature_scope(&mut self, _span: Span) {
        self.events.push(VisitEvent::ExitIndexSignatureScope);
    }

    fn property_declaration(&mut self, _span: Span, name: Option<&str>) {
        self.events.push(VisitEvent::PropertyDeclaration { name: name.map(str::to_string) });
    }

    fn end_of_module(&mut self, _span: Span) {
        self.events.push(VisitEvent::EndOfModule);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unimplemented_methods_default_to_no_op() {
        struct Empty;
        impl VisitSink for Empty {}
        let mut sink = Empty;
        sink.enter_block_scope(Span::new(0, 1));
        sink.variable_use(Span::new(0, 1), "x");
    }

    #[test]
    fn recorder_captures_declaration_order() {
        let mut recorder = VisitRecorder::default();
        recorder.enter_block_scope(Span::new(0, 1));
        recorder.variable_declaration(Span::new(1, 2), "x", VariableKind::Let, InitKind::Uninitialized);
        recorder.exit_block_scope(Span::new(2, 3));
        assert_eq!(
            recorder.events,
            vec![
                VisitEvent::EnterBlockScope,
                VisitEvent::VariableDeclaration {
                    name: "x".to_string(),
                    kind: VariableKind::Let,
                    init: InitKind::Uninitialized,
                },
                VisitEvent::ExitBlockScope,
            ]
        );
    }

    #[test]
    fn scope_events_nest_in_balanced_pairs() {
        let mut recorder = VisitRecorder::default();
        recorder.enter_function_scope(Span::new(0, 10));
        recorder.enter_function_scope_body(Span::new(3, 10));
        recorder.exit_function_scope(Span::new(9, 10));
        assert_eq!(
            recorder.events,
            vec![
                VisitEvent::EnterFunctionScope,
                VisitEvent::EnterFunctionScopeBody,
                VisitEvent::ExitFunctionScope,
            ]
        );
    }
}
