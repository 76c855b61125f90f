use lintium_span::Span;

use crate::operator::{AssignmentOperator, BinaryOperator, UnaryOperator, UpdateOperator};

/// Index of an [`ExpressionKind`] inside an [`ExpressionArena`].
///
/// Children are referenced by index rather than by pointer/reference so the
/// arena's backing storage is free to grow (a `Vec` push may reallocate)
/// without invalidating anything already built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpressionId(u32);

impl ExpressionId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
    Spread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberBase {
    Decimal,
    Hex,
    Octal,
    LegacyOctal,
    Binary,
}

/// A member access's property: a plain name, a private name (`#x`), or a
/// computed expression (`obj[expr]`).
#[derive(Debug, Clone, Copy)]
pub enum MemberProperty<'s> {
    Identifier { span: Span, name: &'s str },
    PrivateIdentifier { span: Span, name: &'s str },
    Computed(ExpressionId),
}

/// A binding target: what can legally appear on the left of `=`, as a
/// parameter, or inside a destructuring pattern. Object and array literals
/// double as destructuring patterns, so reusing expression/pattern parsing
/// means this enum mirrors a subset of [`ExpressionKind`] rather than
/// duplicating a whole separate pattern grammar.
#[derive(Debug, Clone, Copy)]
pub enum BindingPatternKind<'s> {
    Identifier { span: Span, name: &'s str },
    /// `[a, , b = 1, ...rest]`; `None` entries are elisions.
    Array { span: Span, elements: ExpressionId },
    /// `{a, b: c = 1, ...rest}`; stored as an `ObjectExpression` reinterpreted
    /// as a pattern.
    Object { span: Span, properties: ExpressionId },
    Assignment { span: Span, left: ExpressionId, right: ExpressionId },
    Rest { span: Span, argument: ExpressionId },
    /// A TypeScript parameter property modifier (`public`/`private`/
    /// `protected`/`readonly`) wrapping another pattern.
    TsParameterProperty { span: Span, pattern: ExpressionId },
}

/// One node of the transient expression tree.
///
/// Allocated into an [`ExpressionArena`] and referenced by [`ExpressionId`].
/// No node outlives the statement it was built for (see
/// [`ExpressionArena::clear`]); visits are emitted during a post-order walk
/// just before the arena is cleared for the next statement.
#[derive(Debug, Clone, Copy)]
pub enum ExpressionKind<'s> {
    Identifier { span: Span, name: &'s str },
    PrivateIdentifier { span: Span, name: &'s str },
    NumericLiteral { span: Span, raw: &'s str, base: NumberBase, is_big_int: bool },
    StringLiteral { span: Span, raw: &'s str },
    BooleanLiteral { span: Span, value: bool },
    NullLiteral { span: Span },
    RegExpLiteral { span: Span, raw: &'s str },
    This { span: Span },
    Super { span: Span },

    /// `head`/`middle`/`tail` quasis are represented by their spans;
    /// `expressions[i]` is interpolated between `quasis[i]` and
    /// `quasis[i + 1]`.
    TemplateLiteral { span: Span, quasis: ExpressionId, expressions: ExpressionId },
    TaggedTemplate { span: Span, tag: ExpressionId, quasi: ExpressionId },
    /// One quasi (the literal text between `${` `}` holes) of a template.
    TemplateElement { span: Span },

    /// A homogeneous run of sibling nodes (array elements, call arguments,
    /// object properties, template quasis/expressions, sequence members).
    /// Using one "list" variant instead of a `Vec` field on every owner
    /// keeps every [`ExpressionKind`] the same size and keeps child storage
    /// inside the same arena as everything else.
    List { span: Span, items: Option<ExpressionId> },
    /// One element of a [`Self::List`]; `next` chains to the following
    /// sibling, or is absent (see [`ExpressionArena::list_items`]).
    ListItem { item: Option<ExpressionId>, next: Option<ExpressionId> },

    Array { span: Span, elements: ExpressionId },
    Object { span: Span, properties: ExpressionId },
    Property {
        span: Span,
        key: ExpressionId,
        value: ExpressionId,
        kind: PropertyKind,
        computed: bool,
        shorthand: bool,
    },
    Spread { span: Span, argument: ExpressionId },

    ArrowFunction {
        span: Span,
        params: ExpressionId,
        body: ExpressionId,
        is_async: bool,
        expression_body: bool,
    },
    Function {
        span: Span,
        id: Option<ExpressionId>,
        params: ExpressionId,
        is_async: bool,
        is_generator: bool,
    },
    Class { span: Span, id: Option<ExpressionId> },
    /// A `{ ... }` function/method/arrow body. Its statements are visited as
    /// they are parsed, the same as any other statement list -- this node
    /// only records where the body sits, for callers that need the span
    /// (e.g. an arrow function's body when it is not an expression body).
    FunctionBody { span: Span },

    Unary { span: Span, operator: UnaryOperator, operator_span: Span, argument: ExpressionId },
    Update {
        span: Span,
        operator: UpdateOperator,
        operator_span: Span,
        argument: ExpressionId,
        prefix: bool,
    },
    Binary {
        span: Span,
        operator: BinaryOperator,
        operator_span: Span,
        left: ExpressionId,
        right: ExpressionId,
    },
    Assignment {
        span: Span,
        operator: AssignmentOperator,
        operator_span: Span,
        left: ExpressionId,
        right: ExpressionId,
    },
    Conditional {
        span: Span,
        test: ExpressionId,
        question_span: Span,
        consequent: ExpressionId,
        colon_span: Span,
        alternate: ExpressionId,
    },
    Sequence { span: Span, expressions: ExpressionId },

    Yield { span: Span, argument: Option<ExpressionId>, delegate: bool },
    Await { span: Span, argument: ExpressionId },

    New { span: Span, callee: ExpressionId, arguments: ExpressionId },
    Call { span: Span, callee: ExpressionId, arguments: ExpressionId, optional: bool },
    Member { span: Span, object: ExpressionId, property: MemberProperty<'s>, optional: bool },

    /// A parenthesized group. Kept as its own node (rather than discarded)
    /// because its span matters for diagnostics like
    /// `Missing_Parentheses_Around_Unary_Lhs_Of_Exponent` and because
    /// pattern-reinterpretation needs to know whether a destructuring target
    /// was parenthesized (which makes it invalid).
    Paren { span: Span, expression: ExpressionId },

    JsxElement { span: Span, name: Option<Span>, children: ExpressionId },
    JsxFragment { span: Span, children: ExpressionId },
    JsxExpressionContainer { span: Span, expression: ExpressionId },
    JsxText { span: Span },

    TsAs { span: Span, expression: ExpressionId, type_span: Span },
    TsSatisfies { span: Span, expression: ExpressionId, type_span: Span },
    TsAngleTypeAssertion { span: Span, type_span: Span, expression: ExpressionId },
    TsNonNull { span: Span, expression: ExpressionId },
    TsInstantiation { span: Span, expression: ExpressionId, type_arguments_span: Span },

    ImportCall { span: Span, source: ExpressionId, options: Option<ExpressionId> },
    ImportMeta { span: Span },

    Binding(BindingPatternKind<'s>),
}

impl ExpressionKind<'_> {
    pub fn span(&self) -> Span {
        match *self {
            Self::Identifier { span, .. }
            | Self::PrivateIdentifier { span, .. }
            | Self::NumericLiteral { span, .. }
            | Self::StringLiteral { span, .. }
            | Self::BooleanLiteral { span, .. }
            | Self::NullLiteral { span }
            | Self::RegExpLiteral { span, .. }
            | Self::This { span }
            | Self::Super { span }
            | Self::TemplateLiteral { span, .. }
            | Self::TaggedTemplate { span, .. }
            | Self::TemplateElement { span }
            | Self::List { span, .. }
            | Self::Array { span, .. }
            | Self::Object { span, .. }
            | Self::Property { span, .. }
            | Self::Spread { span, .. }
            | Self::ArrowFunction { span, .. }
            | Self::Function { span, .. }
            | Self::Class { span, .. }
            | Self::FunctionBody { span }
            | Self::Unary { span, .. }
            | Self::Update { span, .. }
            | Self::Binary { span, .. }
            | Self::Assignment { span, .. }
            | Self::Conditional { span, .. }
            | Self::Sequence { span, .. }
            | Self::Yield { span, .. }
            | Self::Await { span, .. }
            | Self::New { span, .. }
            | Self::Call { span, .. }
            | Self::Member { span, .. }
            | Self::Paren { span, .. }
            | Self::JsxElement { span, .. }
            | Self::JsxFragment { span, .. }
            | Self::JsxExpressionContainer { span, .. }
            | Self::JsxText { span }
            | Self::TsAs { span, .. }
            | Self::TsSatisfies { span, .. }
            | Self::TsAngleTypeAssertion { span, .. }
            | Self::TsNonNull { span, .. }
            | Self::TsInstantiation { span, .. }
            | Self::ImportCall { span, .. }
            | Self::ImportMeta { span } => span,
            Self::ListItem { .. } => Span::empty(0),
            Self::Binding(kind) => match kind {
                BindingPatternKind::Identifier { span, .. }
                | BindingPatternKind::Array { span, .. }
                | BindingPatternKind::Object { span, .. }
                | BindingPatternKind::Assignment { span, .. }
                | BindingPatternKind::Rest { span, .. }
                | BindingPatternKind::TsParameterProperty { span, .. } => span,
            },
        }
    }
}

/// Storage for one parse's transient expression tree.
///
/// A plain growable buffer rather than a `bumpalo::Bump`: children are
/// addressed by [`ExpressionId`] index, so the backing `Vec` is free to
/// reallocate on growth, and [`clear`](Self::clear) (instead of resetting a
/// bump arena) is trivially sound because nothing ever borrows out of this
/// arena by reference -- every [`ExpressionKind`] variant with a `'s`
/// lifetime borrows the source buffer directly, not this arena.
#[derive(Default)]
pub struct ExpressionArena<'s> {
    nodes: std::vec::Vec<ExpressionKind<'s>>,
}

impl<'s> ExpressionArena<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: ExpressionKind<'s>) -> ExpressionId {
        let id = ExpressionId(u32::try_from(self.nodes.len()).expect("expression arena overflow"));
        self.nodes.push(kind);
        id
    }

    pub fn get(&self, id: ExpressionId) -> &ExpressionKind<'s> {
        &self.nodes[id.index()]
    }

    /// Build a [`ExpressionKind::List`] (and its chained
    /// [`ExpressionKind::ListItem`]s) from `items`, in order.
    pub fn alloc_list(&mut self, span: Span, items: &[ExpressionId]) -> ExpressionId {
        let mut next = None;
        for &item in items.iter().rev() {
            next = Some(self.alloc(ExpressionKind::ListItem { item: Some(item), next }));
        }
        self.alloc(ExpressionKind::List { span, items: next })
    }

    /// Iterate the items of a [`ExpressionKind::List`] in order. A `None`
    /// entry is an elision (e.g. the hole in `[a, , b]`), not absence of the
    /// list itself -- an empty list simply yields no entries.
    pub fn list_items(&self, list: ExpressionId) -> std::vec::Vec<Option<ExpressionId>> {
        let ExpressionKind::List { items, .. } = self.get(list) else {
            panic!("list_items called on a non-List node")
        };
        let mut out = std::vec::Vec::new();
        let mut cursor = *items;
        while let Some(id) = cursor {
            let ExpressionKind::ListItem { item, next } = self.get(id) else { break };
            out.push(*item);
            cursor = *next;
        }
        out
    }

    /// Number of nodes currently live. Reset to 0 by [`clear`](Self::clear).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node built for the statement just finished.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alloc_and_get() {
        let mut arena = ExpressionArena::new();
        let id = arena.alloc(ExpressionKind::This { span: Span::new(0, 4) });
        assert!(matches!(arena.get(id), ExpressionKind::This { .. }));
    }

    #[test]
    fn list_round_trips() {
        let mut arena = ExpressionArena::new();
        let a = arena.alloc(ExpressionKind::This { span: Span::new(0, 1) });
        let b = arena.alloc(ExpressionKind::Super { span: Span::new(1, 2) });
        let list = arena.alloc_list(Span::new(0, 2), &[a, b]);
        let items = arena.list_items(list);
        assert_eq!(items, vec![Some(a), Some(b)]);
    }

    #[test]
    fn clear_resets_len() {
        let mut arena = ExpressionArena::new();
        arena.alloc(ExpressionKind::This { span: Span::new(0, 1) });
        assert_eq!(arena.len(), 1);
        arena.clear();
        assert_eq!(arena.len(), 0);
    }
}
