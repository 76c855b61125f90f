use rustc_hash::FxHashSet;

use lintium_ast::VariableKind;
use lintium_span::Span;

/// One `{`-delimited lexical scope, tracked purely so the parser can emit
/// balanced [`enter_block_scope`](lintium_ast::VisitSink::enter_block_scope)/
/// [`exit_block_scope`](lintium_ast::VisitSink::exit_block_scope) events and
/// catch a handful of same-scope mistakes (duplicate `let` of the same name)
/// without needing a full symbol table -- that responsibility belongs to
/// whatever consumes this parser's visit stream, not to the parser itself.
#[derive(Debug, Default)]
struct ScopeFrame {
    lexical_names: FxHashSet<std::string::String>,
}

/// Labels currently in scope for `break`/`continue`, and whether each one
/// labels an iteration statement (only those accept `continue <label>`).
#[derive(Debug, Default)]
struct LabelFrame {
    name: std::string::String,
    is_iteration: bool,
}

/// Parser state that is *not* a simple ambient flag (see [`crate::context::Context`]
/// for those): scope/label stacks and loop/switch nesting depth, all of
/// which are pushed and popped as the recursive descent enters and leaves
/// the corresponding constructs.
pub struct ParserState {
    scopes: std::vec::Vec<ScopeFrame>,
    labels: std::vec::Vec<LabelFrame>,
    loop_depth: u32,
    switch_depth: u32,
    function_depth: u32,
}

impl ParserState {
    pub fn new() -> Self {
        Self {
            scopes: vec![ScopeFrame::default()],
            labels: std::vec::Vec::new(),
            loop_depth: 0,
            switch_depth: 0,
            function_depth: 0,
        }
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(ScopeFrame::default());
    }

    pub fn exit_scope(&mut self) {
        self.scopes.pop();
    }

    /// Records a lexical (`let`/`const`/`class`) binding in the current
    /// scope, returning `false` if the name was already declared lexically
    /// in this same scope (a redeclaration error).
    pub fn declare_lexical(&mut self, name: &str) -> bool {
        self.scopes.last_mut().expect("at least one scope always open").lexical_names.insert(name.to_string())
    }

    pub fn enter_loop(&mut self) {
        self.loop_depth += 1;
    }

    pub fn exit_loop(&mut self) {
        self.loop_depth -= 1;
    }

    pub fn in_loop(&self) -> bool {
        self.loop_depth > 0
    }

    pub fn enter_switch(&mut self) {
        self.switch_depth += 1;
    }

    pub fn exit_switch(&mut self) {
        self.switch_depth -= 1;
    }

    pub fn in_switch(&self) -> bool {
        self.switch_depth > 0
    }

    pub fn enter_function(&mut self) {
        self.function_depth += 1;
    }

    pub fn exit_function(&mut self) {
        self.function_depth -= 1;
    }

    pub fn in_function(&self) -> bool {
        self.function_depth > 0
    }

    pub fn push_label(&mut self, name: &str, is_iteration: bool) {
        self.labels.push(LabelFrame { name: name.to_string(), is_iteration });
    }

    pub fn pop_label(&mut self) {
        self.labels.pop();
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }

    /// `continue <name>` is only legal if `name` labels an enclosing
    /// iteration statement, not an arbitrary labeled statement.
    pub fn label_is_iteration(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name && l.is_iteration)
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

/// A binding the parser noticed but has not yet reported to the
/// [`VisitSink`](lintium_ast::VisitSink) -- used for parameters and
/// destructuring targets, which are only known to be real bindings once
/// the whole pattern parses successfully.
#[derive(Debug, Clone)]
pub struct PendingBinding {
    pub span: Span,
    pub name: std::string::String,
    pub kind: VariableKind,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lexical_redeclaration_in_same_scope_is_detected() {
        let mut state = ParserState::new();
        assert!(state.declare_lexical("x"));
        assert!(!state.declare_lexical("x"));
    }

    #[test]
    fn nested_scope_allows_shadowing() {
        let mut state = ParserState::new();
        assert!(state.declare_lexical("x"));
        state.enter_scope();
        assert!(state.declare_lexical("x"));
        state.exit_scope();
    }

    #[test]
    fn continue_requires_an_iteration_label() {
        let mut state = ParserState::new();
        state.push_label("outer", true);
        state.push_label("named", false);
        assert!(state.label_is_iteration("outer"));
        assert!(!state.label_is_iteration("named"));
    }
}
