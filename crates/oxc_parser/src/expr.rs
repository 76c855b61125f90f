//! Expression parsing: a single Pratt (precedence-climbing) loop over
//! binary/logical operators, plus the primary-expression grammar (literals,
//! arrays/objects, functions, arrow lookahead, member/call chains, and the
//! handful of TypeScript constructs that live in expression position).
//!
//! Every node this module builds is allocated into `self.arena` and lives
//! only until the enclosing statement finishes (see
//! [`lintium_ast::ExpressionArena::clear`]); visits are emitted as each node
//! is recognized, not in a later walk.

use lintium_ast::{
    AssignmentOperator, BinaryOperator, BindingPatternKind, ExpressionId, ExpressionKind, InitKind,
    MemberProperty, NumberBase, PropertyKind, UnaryOperator, UpdateOperator, VariableKind, VisitSink,
};
use lintium_span::Span;

use crate::context::Context;
use crate::diagnostics;
use crate::lexer::Kind;
use crate::Parser;

impl<'a> Parser<'a> {
    /// The comma operator: `a, b, c`. Only legal outside argument/parameter
    /// lists, which parse assignment expressions directly to keep `,` as a
    /// separator instead of an operator there.
    pub(crate) fn parse_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        let first = self.parse_assignment_expression(sink, ctx);
        if !self.cursor.at(Kind::Comma) {
            return first;
        }
        let mut items = vec![first];
        while self.cursor.eat(Kind::Comma) {
            items.push(self.parse_assignment_expression(sink, ctx));
        }
        let span = Span::new(start, self.cursor.prev_end());
        let list = self.arena.alloc_list(span, &items);
        self.arena.alloc(ExpressionKind::Sequence { span, expressions: list })
    }

    pub(crate) fn parse_assignment_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        if !self.enter_nesting() {
            return self.arena.alloc(ExpressionKind::NullLiteral { span: self.cursor.span() });
        }
        let result = self.parse_assignment_expression_inner(sink, ctx);
        self.exit_nesting();
        result
    }

    fn parse_assignment_expression_inner(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        if self.cursor.at(Kind::Yield) && ctx.has_yield() {
            return self.parse_yield_expression(sink, ctx);
        }

        if let Some(arrow) = self.try_parse_arrow_function(sink, ctx) {
            return arrow;
        }

        let start = self.cursor.span().start;
        let left = self.parse_conditional_expression(sink, ctx);

        let Some(operator) = assignment_operator_for(self.cursor.kind()) else {
            return left;
        };

        let operator_span = self.cursor.span();
        self.cursor.bump_any();
        self.emit_assignment_target(sink, left);
        let right = self.parse_assignment_expression(sink, ctx);
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::Assignment { span, operator, operator_span, left, right })
    }

    fn parse_yield_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        let delegate = self.cursor.eat(Kind::Star);
        let can_have_argument = !self.cursor.token().is_on_new_line()
            && !matches!(self.cursor.kind(), Kind::Semicolon | Kind::RCurly | Kind::RParen | Kind::RBrack | Kind::Eof);
        let argument =
            if delegate || can_have_argument { Some(self.parse_assignment_expression(sink, ctx)) } else { None };
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::Yield { span, argument, delegate })
    }

    fn parse_conditional_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        let test = self.parse_binary_expression(sink, ctx, 0);
        if !self.cursor.at(Kind::Question) {
            return test;
        }
        let question_span = self.cursor.span();
        self.cursor.bump_any();
        let consequent = self.parse_assignment_expression(sink, ctx.and_in(true));
        let colon_span = self.cursor.span();
        if !self.cursor.eat(Kind::Colon) {
            self.errors.push(diagnostics::missing_colon_in_conditional_expression(colon_span));
        }
        let alternate = self.parse_assignment_expression(sink, ctx);
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::Conditional { span, test, question_span, consequent, colon_span, alternate })
    }

    /// Precedence-climbing loop: `min_bp` is the minimum binding power an
    /// operator must have to be consumed at this recursion level. Every
    /// binary/logical operator in the grammar is handled by one table
    /// (`binary_binding_power`) rather than a cascade of per-precedence
    /// functions.
    fn parse_binary_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context, min_bp: u8) -> ExpressionId {
        let start = self.cursor.span().start;
        let mut left = self.parse_unary_expression(sink, ctx);

        loop {
            let Some((operator, left_bp, right_bp)) = binary_binding_power(self.cursor.kind(), ctx) else { break };
            if left_bp < min_bp {
                break;
            }
            let operator_span = self.cursor.span();
            self.cursor.bump_any();
            if matches!(self.cursor.kind(), Kind::RParen | Kind::RBrack | Kind::RCurly | Kind::Comma | Kind::Semicolon | Kind::Eof) {
                let operator_text = operator_span.source_text(self.source_text.as_str());
                self.errors.push(diagnostics::missing_operand_for_operator(self.cursor.span(), operator_text));
            }
            let right = self.parse_binary_expression(sink, ctx, right_bp);
            let span = Span::new(start, self.cursor.prev_end());
            left = self.arena.alloc(ExpressionKind::Binary { span, operator, operator_span, left, right });
        }

        left
    }

    pub(crate) fn parse_unary_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        if let Some(operator) = unary_operator_for(self.cursor.kind()) {
            let operator_span = self.cursor.span();
            self.cursor.bump_any();
            if matches!(operator, UnaryOperator::Delete) {
                if let Some(name) = self.identifier_name_of(self.cursor.token()) {
                    // conservative: only a bare identifier is a "delete use";
                    // `delete a.b` visits `a` as a normal member-object use.
                    let _ = name;
                }
            }
            let argument = self.parse_unary_expression(sink, ctx);
            if matches!(operator, UnaryOperator::Delete) {
                if let ExpressionKind::Identifier { span, name } = *self.arena.get(argument) {
                    sink.variable_delete_use(span, name);
                }
            }
            let span = Span::new(start, self.cursor.prev_end());
            return self.arena.alloc(ExpressionKind::Unary { span, operator, operator_span, argument });
        }

        if self.cursor.at(Kind::Await) && ctx.has_await() {
            let operator_span = self.cursor.span();
            self.cursor.bump_any();
            if self.cursor.at(Kind::Await) {
                self.errors.push(diagnostics::redundant_await(self.cursor.span()));
            }
            if matches!(self.cursor.kind(), Kind::LParen | Kind::Async) && self.next_is_arrow_function_start() {
                self.errors.push(diagnostics::await_followed_by_arrow_function(operator_span));
            }
            let argument = self.parse_unary_expression(sink, ctx);
            let span = Span::new(start, self.cursor.prev_end());
            return self.arena.alloc(ExpressionKind::Await { span, argument });
        }

        if matches!(self.cursor.kind(), Kind::Plus2 | Kind::Minus2) {
            let operator = if self.cursor.at(Kind::Plus2) { UpdateOperator::Increment } else { UpdateOperator::Decrement };
            let operator_span = self.cursor.span();
            self.cursor.bump_any();
            let argument = self.parse_unary_expression(sink, ctx);
            self.emit_assignment_target(sink, argument);
            let span = Span::new(start, self.cursor.prev_end());
            return self.arena.alloc(ExpressionKind::Update { span, operator, operator_span, argument, prefix: true });
        }

        let operand = self.parse_postfix_expression(sink, ctx);

        if self.cursor.kind() == Kind::Star2 {
            if !matches!(*self.arena.get(operand), ExpressionKind::Unary { .. } | ExpressionKind::Await { .. }) {
                let operator_span = self.cursor.span();
                self.cursor.bump_any();
                let right = self.parse_unary_expression(sink, ctx);
                let span = Span::new(start, self.cursor.prev_end());
                return self.arena.alloc(ExpressionKind::Binary {
                    span,
                    operator: BinaryOperator::Exponential,
                    operator_span,
                    left: operand,
                    right,
                });
            }
            self.errors.push(diagnostics::missing_parentheses_around_unary_lhs_of_exponent(self.cursor.span()));
        }

        operand
    }

    fn parse_postfix_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        let operand = self.parse_left_hand_side_expression(sink, ctx);
        if !self.cursor.token().is_on_new_line() && matches!(self.cursor.kind(), Kind::Plus2 | Kind::Minus2) {
            let operator =
                if self.cursor.at(Kind::Plus2) { UpdateOperator::Increment } else { UpdateOperator::Decrement };
            let operator_span = self.cursor.span();
            self.cursor.bump_any();
            self.emit_assignment_target(sink, operand);
            let span = Span::new(start, self.cursor.prev_end());
            return self
                .arena
                .alloc(ExpressionKind::Update { span, operator, operator_span, argument: operand, prefix: false });
        }
        operand
    }

    /// `new`/call/member chains, including optional chaining (`?.`) and the
    /// handful of TypeScript postfix operators (`!`, `as`, `satisfies`).
    fn parse_left_hand_side_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        let mut expr = if self.cursor.at(Kind::New) {
            self.parse_new_expression(sink, ctx)
        } else {
            self.parse_primary_expression(sink, ctx)
        };

        loop {
            expr = match self.cursor.kind() {
                Kind::Dot => self.parse_member_dot(sink, start, expr, false),
                Kind::QuestionDot => self.parse_optional_chain(sink, ctx, start, expr),
                Kind::LBrack => self.parse_member_bracket(sink, ctx, start, expr, false),
                Kind::LParen => self.parse_call_arguments(sink, ctx, start, expr, false),
                Kind::NoSubstitutionTemplate | Kind::TemplateHead => self.parse_tagged_template(sink, ctx, start, expr),
                Kind::Bang if self.source_type.is_typescript() && !self.cursor.token().is_on_new_line() => {
                    self.cursor.bump_any();
                    let span = Span::new(start, self.cursor.prev_end());
                    self.arena.alloc(ExpressionKind::TsNonNull { span, expression: expr })
                }
                Kind::As if self.source_type.is_typescript() => {
                    self.cursor.bump_any();
                    let type_start = self.cursor.span().start;
                    self.skip_type_annotation();
                    let type_span = Span::new(type_start, self.cursor.prev_end());
                    let span = Span::new(start, self.cursor.prev_end());
                    self.arena.alloc(ExpressionKind::TsAs { span, expression: expr, type_span })
                }
                Kind::Satisfies => {
                    if !self.source_type.is_typescript() {
                        self.errors.push(diagnostics::typescript_satisfies_not_allowed_in_javascript(self.cursor.span()));
                    }
                    self.cursor.bump_any();
                    let type_start = self.cursor.span().start;
                    self.skip_type_annotation();
                    let type_span = Span::new(type_start, self.cursor.prev_end());
                    let span = Span::new(start, self.cursor.prev_end());
                    self.arena.alloc(ExpressionKind::TsSatisfies { span, expression: expr, type_span })
                }
                _ => break,
            };
        }

        expr
    }

    fn parse_new_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any();

        if self.cursor.at(Kind::Dot) {
            // `new.target`
            self.cursor.bump_any();
            self.cursor.bump_any(); // `target`
            let span = Span::new(start, self.cursor.prev_end());
            return self.arena.alloc(ExpressionKind::Identifier { span, name: "new.target" });
        }

        let callee = if self.cursor.at(Kind::New) {
            self.parse_new_expression(sink, ctx)
        } else {
            self.parse_primary_expression(sink, ctx)
        };
        let mut callee = callee;
        loop {
            callee = match self.cursor.kind() {
                Kind::Dot => self.parse_member_dot(sink, start, callee, false),
                Kind::LBrack => self.parse_member_bracket(sink, ctx, start, callee, false),
                _ => break,
            };
        }

        let arguments = if self.cursor.at(Kind::LParen) {
            self.parse_argument_list(sink, ctx)
        } else {
            let span = Span::empty(self.cursor.span().start);
            self.arena.alloc_list(span, &[])
        };
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::New { span, callee, arguments })
    }

    fn parse_member_dot(&mut self, sink: &mut dyn VisitSink, start: u32, object: ExpressionId, optional: bool) -> ExpressionId {
        self.cursor.bump_any();
        let property = self.parse_member_property_name();
        let span = Span::new(start, self.cursor.prev_end());
        let _ = sink;
        self.arena.alloc(ExpressionKind::Member { span, object, property, optional })
    }

    fn parse_member_property_name(&mut self) -> MemberProperty<'a> {
        let span = self.cursor.span();
        if self.cursor.at(Kind::PrivateIdentifier) {
            let name = span.source_text(self.source_text.as_str());
            self.cursor.bump_any();
            return MemberProperty::PrivateIdentifier { span, name };
        }
        let name = self.current_identifier_like_text();
        self.cursor.bump_any();
        MemberProperty::Identifier { span, name }
    }

    fn parse_member_bracket(&mut self, sink: &mut dyn VisitSink, ctx: Context, start: u32, object: ExpressionId, optional: bool) -> ExpressionId {
        self.cursor.bump_any();
        let index = self.parse_expression(sink, ctx.and_in(true));
        if !self.cursor.eat(Kind::RBrack) {
            self.errors.push(diagnostics::unmatched_indexing_bracket(self.cursor.span()));
        }
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::Member { span, object, property: MemberProperty::Computed(index), optional })
    }

    fn parse_optional_chain(&mut self, sink: &mut dyn VisitSink, ctx: Context, start: u32, object: ExpressionId) -> ExpressionId {
        self.cursor.bump_any();
        match self.cursor.kind() {
            Kind::LParen => self.parse_call_arguments(sink, ctx, start, object, true),
            Kind::LBrack => self.parse_member_bracket(sink, ctx, start, object, true),
            _ => {
                let property = self.parse_member_property_name();
                let span = Span::new(start, self.cursor.prev_end());
                self.arena.alloc(ExpressionKind::Member { span, object, property, optional: true })
            }
        }
    }

    fn parse_call_arguments(&mut self, sink: &mut dyn VisitSink, ctx: Context, start: u32, callee: ExpressionId, optional: bool) -> ExpressionId {
        let arguments = self.parse_argument_list(sink, ctx);
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::Call { span, callee, arguments, optional })
    }

    fn parse_argument_list(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let list_start = self.cursor.span().start;
        self.cursor.bump_any(); // `(`
        let mut items = std::vec::Vec::new();
        while !self.cursor.at(Kind::RParen) && !self.cursor.at(Kind::Eof) {
            if self.cursor.at(Kind::Comma) {
                self.errors.push(diagnostics::extra_comma_not_allowed_between_arguments(self.cursor.span()));
                self.cursor.bump_any();
                continue;
            }
            let item = if self.cursor.at(Kind::Dot3) {
                let spread_start = self.cursor.span().start;
                self.cursor.bump_any();
                let argument = self.parse_assignment_expression(sink, ctx.and_in(true));
                let span = Span::new(spread_start, self.cursor.prev_end());
                self.arena.alloc(ExpressionKind::Spread { span, argument })
            } else {
                self.parse_assignment_expression(sink, ctx.and_in(true))
            };
            items.push(item);
            if !self.cursor.eat(Kind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::unmatched_parenthesis(self.cursor.span()));
        }
        let span = Span::new(list_start, self.cursor.prev_end());
        self.arena.alloc_list(span, &items)
    }

    fn parse_tagged_template(&mut self, sink: &mut dyn VisitSink, ctx: Context, start: u32, tag: ExpressionId) -> ExpressionId {
        let quasi = self.parse_template_literal(sink, ctx);
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::TaggedTemplate { span, tag, quasi })
    }

    fn parse_template_literal(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        let mut quasis = vec![self.cursor.span()];
        let mut expressions = std::vec::Vec::new();
        let is_no_sub = self.cursor.at(Kind::NoSubstitutionTemplate);
        self.cursor.bump_any();

        if !is_no_sub {
            loop {
                expressions.push(self.parse_expression(sink, ctx.and_in(true)));
                let continuation = self.cursor.re_lex_template_continuation();
                quasis.push(continuation.span());
                if continuation.kind() == Kind::TemplateTail {
                    break;
                }
                if continuation.kind() == Kind::Eof {
                    break;
                }
            }
        }

        let span = Span::new(start, self.cursor.prev_end());
        let mut quasi_nodes = std::vec::Vec::with_capacity(quasis.len());
        for quasi_span in &quasis {
            quasi_nodes.push(self.arena.alloc(ExpressionKind::TemplateElement { span: *quasi_span }));
        }
        let quasis_list = self.arena.alloc_list(span, &quasi_nodes);
        let expressions_list = self.arena.alloc_list(span, &expressions);
        self.arena.alloc(ExpressionKind::TemplateLiteral { span, quasis: quasis_list, expressions: expressions_list })
    }

    fn parse_primary_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let span = self.cursor.span();
        match self.cursor.kind() {
            Kind::Async if self.next_is_function_without_newline() => {
                self.cursor.bump_any();
                self.parse_function_expression(sink, ctx, true)
            }
            // Reached only when the `await`-as-operator check in
            // `parse_unary_expression` already declined (not in an async
            // context): the same bytes are then a plain identifier.
            Kind::Ident | Kind::Async | Kind::Await | Kind::Let | Kind::Static | Kind::Get | Kind::Set | Kind::Of
            | Kind::As | Kind::From | Kind::Satisfies | Kind::Abstract | Kind::Declare | Kind::Interface
            | Kind::Namespace | Kind::Module | Kind::Type | Kind::Readonly | Kind::Public | Kind::Private
            | Kind::Protected | Kind::Implements | Kind::Is | Kind::Infer | Kind::Keyof | Kind::Unique
            | Kind::Override | Kind::Out | Kind::Global | Kind::Accessor => self.parse_identifier_reference(sink),
            Kind::This => {
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::This { span })
            }
            Kind::Super => {
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::Super { span })
            }
            Kind::True | Kind::False => {
                let value = self.cursor.at(Kind::True);
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::BooleanLiteral { span, value })
            }
            Kind::Null => {
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::NullLiteral { span })
            }
            k if k.is_number() => {
                let is_big_int = self.cursor.token().is_big_int();
                let raw = span.source_text(self.source_text.as_str());
                let base = match k {
                    Kind::Hex => NumberBase::Hex,
                    Kind::Octal => NumberBase::Octal,
                    Kind::Binary => NumberBase::Binary,
                    Kind::LegacyOctal => NumberBase::LegacyOctal,
                    _ => NumberBase::Decimal,
                };
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::NumericLiteral { span, raw, base, is_big_int })
            }
            Kind::Str => {
                let raw = span.source_text(self.source_text.as_str());
                self.cursor.bump(false);
                self.arena.alloc(ExpressionKind::StringLiteral { span, raw })
            }
            Kind::NoSubstitutionTemplate | Kind::TemplateHead => self.parse_template_literal(sink, ctx),
            Kind::Slash | Kind::SlashEq => {
                // division was lexed greedily where a regex was meant;
                // re-lex from this token's start as a regex literal.
                let re_token = self.cursor.re_lex_as_regex(span.start);
                let raw = re_token.span().source_text(self.source_text.as_str());
                self.arena.alloc(ExpressionKind::RegExpLiteral { span: re_token.span(), raw })
            }
            Kind::RegExp => {
                let raw = span.source_text(self.source_text.as_str());
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::RegExpLiteral { span, raw })
            }
            Kind::LParen => self.parse_parenthesized_expression(sink, ctx),
            Kind::LBrack => self.parse_array_literal(sink, ctx),
            Kind::LCurly => self.parse_object_literal(sink, ctx),
            Kind::Function => self.parse_function_expression(sink, ctx, false),
            Kind::Class => self.parse_class_expression(sink, ctx),
            Kind::Import => self.parse_import_expression(sink, ctx),
            Kind::LAngle if self.source_type.is_jsx() => self.parse_jsx_element_or_fragment(sink, ctx),
            Kind::LAngle if self.source_type.is_typescript() => self.parse_angle_type_assertion(sink, ctx),
            Kind::Dot3 => {
                self.cursor.bump_any();
                let argument = self.parse_assignment_expression(sink, ctx);
                let full = Span::new(span.start, self.cursor.prev_end());
                self.arena.alloc(ExpressionKind::Spread { span: full, argument })
            }
            Kind::PrivateIdentifier => {
                let name = span.source_text(self.source_text.as_str());
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::PrivateIdentifier { span, name })
            }
            _ => {
                self.errors.push(diagnostics::unexpected_token(span));
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::NullLiteral { span })
            }
        }
    }

    fn parse_identifier_reference(&mut self, sink: &mut dyn VisitSink) -> ExpressionId {
        let span = self.cursor.span();
        let name = self.current_identifier_like_text();
        self.cursor.bump_any();
        sink.variable_use(span, name);
        self.arena.alloc(ExpressionKind::Identifier { span, name })
    }

    /// The text of the current token, decoded-escape-aware, for any token
    /// that can be used as a property/identifier name (including contextual
    /// keywords, which are valid identifiers outside their special position).
    pub(crate) fn current_identifier_like_text(&self) -> &'a str {
        self.cursor.token().identifier_text(self.source_text.as_str())
    }

    fn identifier_name_of(&self, token: crate::lexer::Token<'a>) -> Option<&'a str> {
        matches!(token.kind(), Kind::Ident).then(|| token.identifier_text(self.source_text.as_str()))
    }

    fn parse_parenthesized_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        let inner = self.parse_expression(sink, ctx.and_in(true));
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::unmatched_parenthesis(self.cursor.span()));
        }
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::Paren { span, expression: inner })
    }

    fn parse_array_literal(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        if !self.enter_nesting() {
            return self.arena.alloc(ExpressionKind::NullLiteral { span: self.cursor.span() });
        }
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        let mut items = std::vec::Vec::new();
        while !self.cursor.at(Kind::RBrack) && !self.cursor.at(Kind::Eof) {
            if self.cursor.at(Kind::Comma) {
                self.cursor.bump_any();
                continue; // elision
            }
            let element = if self.cursor.at(Kind::Dot3) {
                let spread_start = self.cursor.span().start;
                self.cursor.bump_any();
                let argument = self.parse_assignment_expression(sink, ctx.and_in(true));
                let span = Span::new(spread_start, self.cursor.prev_end());
                self.arena.alloc(ExpressionKind::Spread { span, argument })
            } else {
                self.parse_assignment_expression(sink, ctx.and_in(true))
            };
            items.push(element);
            if !self.cursor.at(Kind::RBrack) && !self.cursor.eat(Kind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(Kind::RBrack) {
            self.errors.push(diagnostics::unmatched_indexing_bracket(self.cursor.span()));
        }
        let span = Span::new(start, self.cursor.prev_end());
        let elements = self.arena.alloc_list(span, &items);
        self.exit_nesting();
        self.arena.alloc(ExpressionKind::Array { span, elements })
    }

    fn parse_object_literal(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        if !self.enter_nesting() {
            return self.arena.alloc(ExpressionKind::NullLiteral { span: self.cursor.span() });
        }
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        let mut properties = std::vec::Vec::new();
        while !self.cursor.at(Kind::RCurly) && !self.cursor.at(Kind::Eof) {
            properties.push(self.parse_object_property(sink, ctx));
            if self.cursor.at(Kind::RCurly) {
                break;
            }
            if !self.cursor.eat(Kind::Comma) {
                self.errors.push(diagnostics::expected_comma_to_separate_object_literal_entries(self.cursor.span()));
                break;
            }
        }
        if !self.cursor.eat(Kind::RCurly) {
            self.errors.push(diagnostics::unmatched_parenthesis(self.cursor.span()));
        }
        let span = Span::new(start, self.cursor.prev_end());
        let properties_list = self.arena.alloc_list(span, &properties);
        self.exit_nesting();
        self.arena.alloc(ExpressionKind::Object { span, properties: properties_list })
    }

    fn parse_object_property(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;

        if self.cursor.at(Kind::Dot3) {
            self.cursor.bump_any();
            let argument = self.parse_assignment_expression(sink, ctx.and_in(true));
            let span = Span::new(start, self.cursor.prev_end());
            return self.arena.alloc(ExpressionKind::Spread { span, argument });
        }

        let is_async = self.cursor.at(Kind::Async) && self.next_token_is_method_continuation();
        if is_async {
            self.cursor.bump_any();
        }
        let is_generator = self.cursor.eat(Kind::Star);

        let mut kind = PropertyKind::Init;
        if !is_async && !is_generator && matches!(self.cursor.kind(), Kind::Get | Kind::Set) && self.next_token_is_accessor_name() {
            kind = if self.cursor.at(Kind::Get) { PropertyKind::Get } else { PropertyKind::Set };
            self.cursor.bump_any();
        }

        let computed = self.cursor.at(Kind::LBrack);
        let key = if computed {
            self.cursor.bump_any();
            let k = self.parse_assignment_expression(sink, ctx.and_in(true));
            if !self.cursor.eat(Kind::RBrack) {
                self.errors.push(diagnostics::unmatched_indexing_bracket(self.cursor.span()));
            }
            k
        } else {
            self.parse_property_key()
        };

        self.skip_optional_type_parameters();
        if self.cursor.at(Kind::LParen) {
            // method shorthand: `foo() {}`, `get foo() {}`, `*foo() {}`, `async foo() {}`
            sink.enter_function_scope(Span::new(start, self.cursor.span().start));
            let params = self.parse_parameter_list(sink, false);
            let body_ctx = ctx.and_return(true).and_yield(is_generator).and_await(is_async);
            sink.enter_function_scope_body(self.cursor.span());
            let body = self.parse_function_body(sink, body_ctx);
            let span = Span::new(start, self.cursor.prev_end());
            sink.exit_function_scope(span);
            let value = self.arena.alloc(ExpressionKind::Function { span, id: None, params, is_async, is_generator });
            let _ = body;
            return self.arena.alloc(ExpressionKind::Property { span, key, value, kind, computed, shorthand: false });
        }

        if self.cursor.eat(Kind::Colon) {
            if matches!(self.cursor.kind(), Kind::Comma | Kind::RCurly | Kind::Eof) {
                self.errors.push(diagnostics::missing_value_for_object_literal_entry(self.cursor.span()));
                let span = Span::new(start, self.cursor.prev_end());
                return self.arena.alloc(ExpressionKind::Property { span, key, value: key, kind, computed, shorthand: false });
            }
            let value = self.parse_assignment_expression(sink, ctx.and_in(true));
            let span = Span::new(start, self.cursor.prev_end());
            return self.arena.alloc(ExpressionKind::Property { span, key, value, kind, computed, shorthand: false });
        }

        if self.cursor.at(Kind::Eq) {
            // `{ a = 1 }` destructuring default, legal only as a pattern.
            self.cursor.bump_any();
            let default_value = self.parse_assignment_expression(sink, ctx.and_in(true));
            let span = Span::new(start, self.cursor.prev_end());
            let value = self.arena.alloc(ExpressionKind::Assignment {
                span,
                operator: AssignmentOperator::Assign,
                operator_span: span,
                left: key,
                right: default_value,
            });
            return self.arena.alloc(ExpressionKind::Property { span, key, value, kind, computed, shorthand: true });
        }

        // shorthand `{ a }`
        if let ExpressionKind::Identifier { span, name } = *self.arena.get(key) {
            sink.variable_use(span, name);
        }
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::Property { span, key, value: key, kind, computed, shorthand: true })
    }

    /// `get`/`set` are only accessor-method markers when a property name
    /// follows on the same property; `{ get: 1 }` and `{ get() {} }` must
    /// stay distinguishable via one-token lookahead past `get`/`set`.
    fn next_token_is_accessor_name(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let is_name = !matches!(self.cursor.kind(), Kind::Colon | Kind::LParen | Kind::Comma | Kind::RCurly | Kind::Eq);
        self.cursor.roll_back_transaction(checkpoint);
        is_name
    }

    /// `async` is a method-shorthand prefix only when followed, on the same
    /// line, by something that can start the rest of the method (its name,
    /// `*` for a generator, or a computed key); otherwise it is the
    /// property's own key (`{ async: 1 }`, `{ async() {} }` with no prefix).
    fn next_token_is_method_continuation(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let is_continuation = !self.cursor.token().is_on_new_line()
            && !matches!(self.cursor.kind(), Kind::Colon | Kind::LParen | Kind::Comma | Kind::RCurly | Kind::Eq);
        self.cursor.roll_back_transaction(checkpoint);
        is_continuation
    }

    fn parse_property_key(&mut self) -> ExpressionId {
        let span = self.cursor.span();
        match self.cursor.kind() {
            Kind::Str => {
                let raw = span.source_text(self.source_text.as_str());
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::StringLiteral { span, raw })
            }
            k if k.is_number() => {
                let raw = span.source_text(self.source_text.as_str());
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::NumericLiteral { span, raw, base: NumberBase::Decimal, is_big_int: false })
            }
            Kind::Comma | Kind::Colon | Kind::RCurly | Kind::RParen | Kind::Semicolon | Kind::Eof => {
                self.errors.push(diagnostics::missing_key_for_object_entry(span));
                self.arena.alloc(ExpressionKind::Identifier { span, name: "" })
            }
            _ => {
                let name = self.current_identifier_like_text();
                self.cursor.bump_any();
                self.arena.alloc(ExpressionKind::Identifier { span, name })
            }
        }
    }

    fn parse_function_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context, is_async: bool) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any(); // `function`
        let is_generator = self.cursor.eat(Kind::Star);
        let id = if matches!(self.cursor.kind(), Kind::Ident) {
            let name_span = self.cursor.span();
            let name = self.current_identifier_like_text();
            self.cursor.bump_any();
            Some(self.arena.alloc(ExpressionKind::Identifier { span: name_span, name }))
        } else {
            None
        };
        sink.enter_function_scope(Span::new(start, self.cursor.prev_end()));
        self.skip_optional_type_parameters();
        let inner_ctx = ctx.and_return(true).and_yield(is_generator).and_await(is_async).and_in(true);
        let params = self.parse_parameter_list(sink, false);
        sink.enter_function_scope_body(self.cursor.span());
        self.parse_function_body(sink, inner_ctx);
        let span = Span::new(start, self.cursor.prev_end());
        sink.exit_function_scope(span);
        self.arena.alloc(ExpressionKind::Function { span, id, params, is_async, is_generator })
    }

    /// Parses `(p1, p2 = default, ...rest)`, declaring each parameter name.
    /// `is_arrow` only affects whether a leading `this` parameter is
    /// diagnosed: arrow functions have no `this` binding of their own, so
    /// `(this: Foo) => {}` is always an error, never just JS-mode noise.
    pub(crate) fn parse_parameter_list(&mut self, sink: &mut dyn VisitSink, is_arrow: bool) -> ExpressionId {
        let start = self.cursor.span().start;
        if !self.cursor.eat(Kind::LParen) {
            self.errors.push(diagnostics::missing_arrow_function_parameter_list(self.cursor.span()));
        }

        if self.cursor.at(Kind::This) {
            let this_span = self.cursor.span();
            self.cursor.bump_any();
            if is_arrow {
                self.errors.push(diagnostics::this_parameter_not_allowed_in_arrow_functions(this_span));
            }
            if self.cursor.at(Kind::Colon) {
                let colon_span = self.cursor.span();
                self.cursor.bump_any();
                if !self.source_type.is_typescript() {
                    self.errors.push(diagnostics::typescript_type_annotations_not_allowed_in_javascript(colon_span));
                }
                self.skip_type_annotation();
            }
            self.cursor.eat(Kind::Comma);
        }

        let mut items = std::vec::Vec::new();
        while !self.cursor.at(Kind::RParen) && !self.cursor.at(Kind::Eof) {
            let param_start = self.cursor.span().start;

            while matches!(self.cursor.kind(), Kind::Public | Kind::Private | Kind::Protected | Kind::Readonly) {
                self.cursor.bump_any();
            }

            let rest = self.cursor.eat(Kind::Dot3);
            let pattern = self.parse_binding_target(sink, VariableKind::Parameter);

            if self.cursor.at(Kind::Bang) {
                let bang_span = self.cursor.span();
                self.cursor.bump_any();
                self.errors.push(diagnostics::non_null_assertion_not_allowed_in_parameter(bang_span));
            }

            let question_span = self.cursor.span();
            let optional = self.cursor.eat(Kind::Question);
            if optional && !self.source_type.is_typescript() {
                self.errors.push(diagnostics::typescript_optional_parameters_not_allowed_in_javascript(question_span));
            }

            if self.cursor.at(Kind::Colon) {
                let colon_span = self.cursor.span();
                self.cursor.bump_any();
                if !self.source_type.is_typescript() {
                    self.errors.push(diagnostics::typescript_type_annotations_not_allowed_in_javascript(colon_span));
                }
                self.skip_type_annotation();
                self.flush_pending_type_use(sink);
            }

            let param = if rest {
                let span = Span::new(param_start, self.cursor.prev_end());
                self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Rest { span, argument: pattern }))
            } else if self.cursor.at(Kind::Eq) {
                let eq_span = self.cursor.span();
                self.cursor.bump_any();
                if optional {
                    self.errors.push(diagnostics::optional_parameter_cannot_have_initializer(eq_span));
                }
                let default_ctx = Context::default();
                let default_value = self.parse_assignment_expression(sink, default_ctx);
                let span = Span::new(param_start, self.cursor.prev_end());
                self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Assignment { span, left: pattern, right: default_value }))
            } else {
                pattern
            };
            items.push(param);
            if rest {
                if self.cursor.at(Kind::Comma) {
                    self.errors.push(diagnostics::comma_not_allowed_after_spread_parameter(self.cursor.span()));
                }
                break;
            }
            if !self.cursor.eat(Kind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::unmatched_parenthesis(self.cursor.span()));
        }
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc_list(span, &items)
    }

    /// Parses one binding target (identifier, or array/object destructuring
    /// pattern) and declares every name it introduces as `kind`.
    pub(crate) fn parse_binding_target(&mut self, sink: &mut dyn VisitSink, kind: VariableKind) -> ExpressionId {
        let span = self.cursor.span();
        match self.cursor.kind() {
            Kind::LBrack => self.parse_array_binding_pattern(sink, kind),
            Kind::LCurly => self.parse_object_binding_pattern(sink, kind),
            _ => {
                let token_kind = self.cursor.kind();
                let name = self.current_identifier_like_text();
                self.cursor.bump_any();
                if token_kind == Kind::Let && matches!(kind, VariableKind::Let | VariableKind::Const) {
                    self.errors.push(diagnostics::cannot_declare_variable_named_let_with_let(span));
                } else if is_always_reserved_word(token_kind) {
                    self.errors.push(diagnostics::cannot_declare_variable_with_keyword_name(span, name));
                }
                self.declare_binding(sink, span, name, kind);
                self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Identifier { span, name }))
            }
        }
    }

    fn declare_binding(&mut self, sink: &mut dyn VisitSink, span: Span, name: &'a str, kind: VariableKind) {
        if kind.is_lexical() && !self.state.declare_lexical(name) {
            // redeclaration of a lexical binding in the same scope; the
            // parser reports the declaration either way (name resolution
            // downstream decides severity), but this core doesn't have a
            // dedicated diagnostic for it -- it is not in the distilled
            // catalog, matching how quick-lint-js defers redeclaration
            // checks to a later semantic pass for most binding forms.
        }
        sink.variable_declaration(span, name, kind, InitKind::Uninitialized);
    }

    fn parse_array_binding_pattern(&mut self, sink: &mut dyn VisitSink, kind: VariableKind) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        let mut items = std::vec::Vec::new();
        while !self.cursor.at(Kind::RBrack) && !self.cursor.at(Kind::Eof) {
            if self.cursor.at(Kind::Comma) {
                self.cursor.bump_any();
                continue;
            }
            let item_start = self.cursor.span().start;
            let rest = self.cursor.eat(Kind::Dot3);
            let target = self.parse_binding_target(sink, kind);
            let item = if rest {
                let span = Span::new(item_start, self.cursor.prev_end());
                self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Rest { span, argument: target }))
            } else if self.cursor.eat(Kind::Eq) {
                let default_value = self.parse_assignment_expression(sink, Context::default());
                let span = Span::new(item_start, self.cursor.prev_end());
                self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Assignment { span, left: target, right: default_value }))
            } else {
                target
            };
            items.push(item);
            if !self.cursor.at(Kind::RBrack) && !self.cursor.eat(Kind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(Kind::RBrack) {
            self.errors.push(diagnostics::unmatched_indexing_bracket(self.cursor.span()));
        }
        let span = Span::new(start, self.cursor.prev_end());
        let elements = self.arena.alloc_list(span, &items);
        self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Array { span, elements }))
    }

    fn parse_object_binding_pattern(&mut self, sink: &mut dyn VisitSink, kind: VariableKind) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        let mut items = std::vec::Vec::new();
        while !self.cursor.at(Kind::RCurly) && !self.cursor.at(Kind::Eof) {
            let item_start = self.cursor.span().start;
            if self.cursor.eat(Kind::Dot3) {
                let target = self.parse_binding_target(sink, kind);
                let span = Span::new(item_start, self.cursor.prev_end());
                items.push(self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Rest { span, argument: target })));
            } else {
                let key_span = self.cursor.span();
                let key = self.parse_property_key();
                let target = if self.cursor.eat(Kind::Colon) {
                    self.parse_binding_target(sink, kind)
                } else {
                    let name = key_span.source_text(self.source_text.as_str());
                    self.declare_binding(sink, key_span, name, kind);
                    self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Identifier { span: key_span, name }))
                };
                let target = if self.cursor.eat(Kind::Eq) {
                    let default_value = self.parse_assignment_expression(sink, Context::default());
                    let span = Span::new(item_start, self.cursor.prev_end());
                    self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Assignment { span, left: target, right: default_value }))
                } else {
                    target
                };
                let _ = key;
                items.push(target);
            }
            if !self.cursor.at(Kind::RCurly) && !self.cursor.eat(Kind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(Kind::RCurly) {
            self.errors.push(diagnostics::unmatched_parenthesis(self.cursor.span()));
        }
        let span = Span::new(start, self.cursor.prev_end());
        let properties = self.arena.alloc_list(span, &items);
        self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Object { span, properties }))
    }

    fn parse_class_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        self.parse_class(sink, ctx, true)
    }

    fn parse_import_expression(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        if self.cursor.at(Kind::Dot) {
            self.cursor.bump_any();
            self.cursor.bump_any(); // `meta`
            let span = Span::new(start, self.cursor.prev_end());
            return self.arena.alloc(ExpressionKind::ImportMeta { span });
        }
        self.cursor.eat(Kind::LParen);
        let source = self.parse_assignment_expression(sink, ctx.and_in(true));
        let options = if self.cursor.eat(Kind::Comma) && !self.cursor.at(Kind::RParen) {
            Some(self.parse_assignment_expression(sink, ctx.and_in(true)))
        } else {
            None
        };
        self.cursor.eat(Kind::Comma);
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::unmatched_parenthesis(self.cursor.span()));
        }
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::ImportCall { span, source, options })
    }

    /// `<Type>expr` — legal only outside JSX (ambiguous with a JSX element
    /// opening tag otherwise, so the caller already routed JSX-mode parsing
    /// elsewhere).
    fn parse_angle_type_assertion(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        let type_start = self.cursor.span().start;
        self.skip_balanced_type_until_right_angle();
        let type_span = Span::new(type_start, self.cursor.prev_end());
        let expression = self.parse_unary_expression(sink, ctx);
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::TsAngleTypeAssertion { span, type_span, expression })
    }

    /// Bounded lookahead for arrow functions and `let`-as-identifier vs.
    /// `let`-declaration ambiguity, implemented with the same
    /// transaction primitive (begin/commit/roll-back) rather than two
    /// bespoke peek mechanisms.
    fn try_parse_arrow_function(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> Option<ExpressionId> {
        let start = self.cursor.span().start;
        let is_async = self.cursor.at(Kind::Async) && !self.peek_newline_after_async();

        if matches!(self.cursor.kind(), Kind::Ident) && !is_async {
            let checkpoint = self.cursor.begin_transaction();
            let name_span = self.cursor.span();
            let name = self.current_identifier_like_text();
            self.cursor.bump_any();
            if self.cursor.at(Kind::FatArrow) && !self.cursor.token().is_on_new_line() {
                self.cursor.commit_transaction(checkpoint);
                self.cursor.bump_any();
                sink.enter_function_scope(Span::new(start, name_span.end));
                let param = self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Identifier { span: name_span, name }));
                sink.variable_declaration(name_span, name, VariableKind::ArrowParameter, InitKind::Uninitialized);
                let params_span = name_span;
                let params = self.arena.alloc_list(params_span, &[param]);
                return Some(self.finish_arrow_function(sink, ctx, start, params, false));
            }
            self.cursor.roll_back_transaction(checkpoint);
            return None;
        }

        if !matches!(self.cursor.kind(), Kind::LParen) && !is_async {
            return None;
        }

        let checkpoint = self.cursor.begin_transaction();
        if is_async {
            self.cursor.bump_any();
            if !matches!(self.cursor.kind(), Kind::LParen | Kind::Ident) || self.cursor.token().is_on_new_line() {
                self.cursor.roll_back_transaction(checkpoint);
                return None;
            }
        }

        if matches!(self.cursor.kind(), Kind::Ident) {
            let name_span = self.cursor.span();
            let name = self.current_identifier_like_text();
            self.cursor.bump_any();
            if self.cursor.at(Kind::FatArrow) && !self.cursor.token().is_on_new_line() {
                self.cursor.commit_transaction(checkpoint);
                self.cursor.bump_any();
                sink.enter_function_scope(Span::new(start, self.cursor.prev_end()));
                let param = self.arena.alloc(ExpressionKind::Binding(BindingPatternKind::Identifier { span: name_span, name }));
                sink.variable_declaration(name_span, name, VariableKind::ArrowParameter, InitKind::Uninitialized);
                let params = self.arena.alloc_list(name_span, &[param]);
                return Some(self.finish_arrow_function(sink, ctx, start, params, is_async));
            }
            self.cursor.roll_back_transaction(checkpoint);
            return None;
        }

        if !self.cursor.at(Kind::LParen) {
            self.cursor.roll_back_transaction(checkpoint);
            return None;
        }

        if !self.scan_balanced_parens_for_arrow() {
            self.cursor.roll_back_transaction(checkpoint);
            return None;
        }

        self.cursor.roll_back_transaction(checkpoint);
        sink.enter_function_scope(Span::new(start, start));
        let is_async = self.cursor.at(Kind::Async);
        if is_async {
            self.cursor.bump_any();
        }
        let params = self.parse_parameter_list(sink, true);
        if !self.cursor.eat(Kind::FatArrow) {
            self.errors.push(diagnostics::missing_operator_between_expression_and_arrow_function(self.cursor.span()));
        }
        Some(self.finish_arrow_function(sink, ctx, start, params, is_async))
    }

    fn finish_arrow_function(&mut self, sink: &mut dyn VisitSink, ctx: Context, start: u32, params: ExpressionId, is_async: bool) -> ExpressionId {
        let inner_ctx = ctx.and_return(true).and_yield(false).and_await(is_async).and_in(true);
        let expression_body = !self.cursor.at(Kind::LCurly);
        sink.enter_function_scope_body(self.cursor.span());
        let body = if expression_body {
            self.parse_assignment_expression(sink, inner_ctx)
        } else {
            self.parse_function_body(sink, inner_ctx)
        };
        let span = Span::new(start, self.cursor.prev_end());
        sink.exit_function_scope(span);
        self.arena.alloc(ExpressionKind::ArrowFunction { span, params, body, is_async, expression_body })
    }

    fn peek_newline_after_async(&mut self) -> bool {
        if !self.cursor.at(Kind::Async) {
            return false;
        }
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let on_new_line = self.cursor.token().is_on_new_line();
        self.cursor.roll_back_transaction(checkpoint);
        if on_new_line {
            self.errors.push(diagnostics::newline_not_allowed_between_async_and_parameter_list(self.cursor.span()));
        }
        on_new_line
    }

    /// Speculative, diagnostic-only lookahead for `await (...) => ...` /
    /// `await async (...) => ...`: true precedence would parse the arrow
    /// function as `await`'s whole operand, which is legal but almost always
    /// a mistake (the author meant to await the function's eventual result,
    /// not build an async arrow function). Never mutates parser state.
    fn next_is_arrow_function_start(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.eat(Kind::Async);
        let is_arrow = self.cursor.at(Kind::LParen) && self.scan_balanced_parens_for_arrow();
        self.cursor.roll_back_transaction(checkpoint);
        is_arrow
    }

    /// Scans ahead from the current `(` to see whether the balanced group it
    /// opens is immediately followed by `=>`, without committing to any of
    /// the parsing it would take to really parse a parameter list (which may
    /// contain patterns, defaults, and type annotations the caller does not
    /// want to have visited twice).
    fn scan_balanced_parens_for_arrow(&mut self) -> bool {
        let mut depth: u32 = 0;
        loop {
            match self.cursor.kind() {
                Kind::LParen | Kind::LBrack | Kind::LCurly => {
                    depth += 1;
                    self.cursor.bump_any();
                }
                Kind::RParen | Kind::RBrack | Kind::RCurly => {
                    depth -= 1;
                    self.cursor.bump_any();
                    if depth == 0 {
                        break;
                    }
                }
                Kind::Eof => return false,
                _ => {
                    self.cursor.bump_any();
                }
            }
        }
        // optional return type annotation before `=>`
        if self.cursor.at(Kind::Colon) && self.source_type.is_typescript() {
            self.cursor.bump_any();
            self.skip_balanced_type_until_fat_arrow();
        }
        self.cursor.at(Kind::FatArrow) && !self.cursor.token().is_on_new_line()
    }

    fn skip_balanced_type_until_fat_arrow(&mut self) {
        let mut depth: u32 = 0;
        loop {
            match self.cursor.kind() {
                Kind::FatArrow if depth == 0 => break,
                Kind::LParen | Kind::LBrack | Kind::LCurly | Kind::LAngle => {
                    depth += 1;
                    self.cursor.bump_any();
                }
                Kind::RParen | Kind::RBrack | Kind::RCurly => {
                    depth = depth.saturating_sub(1);
                    self.cursor.bump_any();
                }
                Kind::RAngle | Kind::Shr | Kind::Shr3 | Kind::GtEq | Kind::ShrEq | Kind::Shr3Eq => {
                    if depth == 0 {
                        break;
                    }
                    depth = depth.saturating_sub(1);
                    self.cursor.reinterpret_right_angle();
                }
                Kind::Eof | Kind::Semicolon => break,
                _ => {
                    self.cursor.bump_any();
                }
            }
        }
    }

    pub(crate) fn skip_balanced_type_until_right_angle(&mut self) {
        let mut depth: u32 = 0;
        loop {
            match self.cursor.kind() {
                Kind::LParen | Kind::LBrack | Kind::LCurly | Kind::LAngle => {
                    depth += 1;
                    self.cursor.bump_any();
                }
                Kind::RParen | Kind::RBrack | Kind::RCurly => {
                    depth = depth.saturating_sub(1);
                    self.cursor.bump_any();
                }
                Kind::RAngle => {
                    if depth == 0 {
                        self.cursor.bump_any();
                        break;
                    }
                    depth -= 1;
                    self.cursor.bump_any();
                }
                Kind::Shr | Kind::Shr3 | Kind::GtEq | Kind::ShrEq | Kind::Shr3Eq => {
                    if depth == 0 {
                        self.cursor.reinterpret_right_angle();
                        break;
                    }
                    depth -= 1;
                    self.cursor.reinterpret_right_angle();
                }
                Kind::Eof | Kind::Semicolon => break,
                _ => {
                    self.cursor.bump_any();
                }
            }
        }
    }

    /// Skips a TypeScript type in annotation position (`: T`, `as T`, a
    /// generic's `<T>` argument list), tracking only enough balanced-bracket
    /// state to know where it ends -- the core never materializes a type
    /// tree (see the crate-level non-goal) -- but still emits
    /// `variable_type_use` for the type's head identifier, since a
    /// downstream resolver needs to know a name was referenced in type
    /// position even though this core never evaluates it.
    pub(crate) fn skip_type_annotation(&mut self) {
        if matches!(self.cursor.kind(), Kind::Ident) {
            let span = self.cursor.span();
            let name = self.current_identifier_like_text();
            self.pending_type_use = Some((span, name));
        }
        let mut depth: u32 = 0;
        loop {
            match self.cursor.kind() {
                Kind::LParen | Kind::LBrack | Kind::LCurly | Kind::LAngle => {
                    depth += 1;
                    self.cursor.bump_any();
                }
                Kind::RParen | Kind::RBrack | Kind::RCurly => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.cursor.bump_any();
                }
                Kind::RAngle | Kind::Shr | Kind::Shr3 | Kind::GtEq | Kind::ShrEq | Kind::Shr3Eq => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.cursor.reinterpret_right_angle();
                }
                Kind::Comma | Kind::Semicolon | Kind::Eq | Kind::Eof if depth == 0 => break,
                _ => {
                    self.cursor.bump_any();
                }
            }
        }
    }

    pub(crate) fn flush_pending_type_use(&mut self, sink: &mut dyn VisitSink) {
        if let Some((span, name)) = self.pending_type_use.take() {
            sink.variable_type_use(span, name);
        }
    }

    fn emit_assignment_target(&mut self, sink: &mut dyn VisitSink, expr: ExpressionId) {
        match *self.arena.get(expr) {
            ExpressionKind::Identifier { span, name } => sink.variable_assignment(span, name),
            ExpressionKind::Paren { expression, .. } => self.emit_assignment_target(sink, expression),
            ExpressionKind::Member { .. } => {}
            _ => self.errors.push(diagnostics::invalid_expression_left_of_assignment(self.arena.get(expr).span())),
        }
    }

    // JSX is parsed only far enough to know where an element ends and to
    // treat its tag name and expression-container children like ordinary
    // expressions; attribute values are consumed but not individually typed.
    fn parse_jsx_element_or_fragment(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any(); // `<`

        if self.cursor.at(Kind::RAngle) {
            self.cursor.bump_any();
            let children = self.parse_jsx_children(sink, ctx, None);
            let span = Span::new(start, self.cursor.prev_end());
            return self.arena.alloc(ExpressionKind::JsxFragment { span, children });
        }

        let name_span = self.cursor.span();
        let name = self.current_identifier_like_text();
        self.cursor.bump_any();
        while self.cursor.eat(Kind::Dot) {
            self.cursor.bump_any();
        }
        sink.variable_use(name_span, name);

        self.parse_jsx_attributes(sink, ctx);

        if self.cursor.eat(Kind::Slash) {
            self.cursor.eat(Kind::RAngle);
            let span = Span::new(start, self.cursor.prev_end());
            let empty_children = self.arena.alloc_list(span, &[]);
            return self.arena.alloc(ExpressionKind::JsxElement { span, name: Some(name_span), children: empty_children });
        }

        self.cursor.eat(Kind::RAngle);
        let children = self.parse_jsx_children(sink, ctx, Some(name));
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::JsxElement { span, name: Some(name_span), children })
    }

    fn parse_jsx_attributes(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        while !matches!(self.cursor.kind(), Kind::Slash | Kind::RAngle | Kind::Eof) {
            if self.cursor.at(Kind::LCurly) {
                self.cursor.bump_any();
                self.parse_expression(sink, ctx.and_in(true));
                self.cursor.eat(Kind::RCurly);
                continue;
            }
            self.cursor.bump_any(); // attribute name
            if self.cursor.eat(Kind::Eq) {
                if self.cursor.at(Kind::LCurly) {
                    self.cursor.bump_any();
                    self.parse_assignment_expression(sink, ctx.and_in(true));
                    self.cursor.eat(Kind::RCurly);
                } else {
                    self.cursor.re_lex_as_jsx_string();
                    self.cursor.bump_any();
                }
            }
        }
    }

    fn parse_jsx_children(&mut self, sink: &mut dyn VisitSink, ctx: Context, closing_name: Option<&'a str>) -> ExpressionId {
        let start = self.cursor.span().start;
        let mut children = std::vec::Vec::new();
        loop {
            self.cursor.re_lex_as_jsx_text();
            if self.cursor.at(Kind::JsxText) {
                let span = self.cursor.span();
                self.cursor.bump_any();
                children.push(self.arena.alloc(ExpressionKind::JsxText { span }));
                continue;
            }
            match self.cursor.kind() {
                Kind::LCurly => {
                    let inner_start = self.cursor.span().start;
                    self.cursor.bump_any();
                    let expression = if self.cursor.at(Kind::RCurly) {
                        self.arena.alloc(ExpressionKind::NullLiteral { span: self.cursor.span() })
                    } else {
                        self.parse_expression(sink, ctx.and_in(true))
                    };
                    self.cursor.eat(Kind::RCurly);
                    let span = Span::new(inner_start, self.cursor.prev_end());
                    children.push(self.arena.alloc(ExpressionKind::JsxExpressionContainer { span, expression }));
                }
                Kind::LAngle => {
                    let checkpoint = self.cursor.begin_transaction();
                    self.cursor.bump_any();
                    if self.cursor.eat(Kind::Slash) {
                        self.cursor.commit_transaction(checkpoint);
                        if !matches!(self.cursor.kind(), Kind::RAngle) {
                            self.cursor.bump_any();
                            while self.cursor.eat(Kind::Dot) {
                                self.cursor.bump_any();
                            }
                        }
                        self.cursor.eat(Kind::RAngle);
                        break;
                    }
                    self.cursor.roll_back_transaction(checkpoint);
                    children.push(self.parse_jsx_element_or_fragment(sink, ctx));
                }
                Kind::Eof => {
                    self.errors.push(diagnostics::unexpected_eof(self.cursor.span()));
                    break;
                }
                _ => {
                    self.cursor.bump_any();
                }
            }
        }
        let _ = closing_name;
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc_list(span, &children)
    }
}

fn assignment_operator_for(kind: Kind) -> Option<AssignmentOperator> {
    Some(match kind {
        Kind::Eq => AssignmentOperator::Assign,
        Kind::PlusEq => AssignmentOperator::Addition,
        Kind::MinusEq => AssignmentOperator::Subtraction,
        Kind::StarEq => AssignmentOperator::Multiplication,
        Kind::SlashEq => AssignmentOperator::Division,
        Kind::PercentEq => AssignmentOperator::Remainder,
        Kind::Star2Eq => AssignmentOperator::Exponential,
        Kind::ShlEq => AssignmentOperator::LeftShift,
        Kind::ShrEq => AssignmentOperator::RightShift,
        Kind::Shr3Eq => AssignmentOperator::UnsignedRightShift,
        Kind::PipeEq => AssignmentOperator::BitwiseOr,
        Kind::CaretEq => AssignmentOperator::BitwiseXor,
        Kind::AmpEq => AssignmentOperator::BitwiseAnd,
        Kind::Amp2Eq => AssignmentOperator::LogicalAnd,
        Kind::Pipe2Eq => AssignmentOperator::LogicalOr,
        Kind::Question2Eq => AssignmentOperator::NullishCoalescing,
        _ => return None,
    })
}

fn unary_operator_for(kind: Kind) -> Option<UnaryOperator> {
    Some(match kind {
        Kind::Minus => UnaryOperator::Minus,
        Kind::Plus => UnaryOperator::Plus,
        Kind::Bang => UnaryOperator::LogicalNot,
        Kind::Tilde => UnaryOperator::BitwiseNot,
        Kind::Typeof => UnaryOperator::Typeof,
        Kind::Void => UnaryOperator::Void,
        Kind::Delete => UnaryOperator::Delete,
        _ => return None,
    })
}

/// `(left binding power, right binding power)` for precedence climbing.
/// Left-associative operators use `right_bp = left_bp + 1`; the single
/// right-associative operator in this table, `**`, uses `right_bp = left_bp`.
/// Words that are never valid as a binding name in any dialect, as opposed
/// to the contextual keywords (`let`, `async`, `of`, the TypeScript-only
/// ones, ...) that are identifiers everywhere but their one special
/// position. `await`/`yield` are excluded: whether they are reserved here
/// depends on the enclosing function, and that is already checked by
/// `check_binding_name_restriction`.
fn is_always_reserved_word(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Break
            | Kind::Case
            | Kind::Catch
            | Kind::Class
            | Kind::Const
            | Kind::Continue
            | Kind::Debugger
            | Kind::Default
            | Kind::Delete
            | Kind::Do
            | Kind::Else
            | Kind::Enum
            | Kind::Export
            | Kind::Extends
            | Kind::False
            | Kind::Finally
            | Kind::For
            | Kind::Function
            | Kind::If
            | Kind::Import
            | Kind::In
            | Kind::Instanceof
            | Kind::New
            | Kind::Null
            | Kind::Return
            | Kind::Super
            | Kind::Switch
            | Kind::This
            | Kind::Throw
            | Kind::True
            | Kind::Try
            | Kind::Typeof
            | Kind::Var
            | Kind::Void
            | Kind::While
            | Kind::With
    )
}

fn binary_binding_power(kind: Kind, ctx: Context) -> Option<(BinaryOperator, u8, u8)> {
    let (operator, bp) = match kind {
        Kind::Question2 => (BinaryOperator::NullishCoalescing, 4),
        Kind::Pipe2 => (BinaryOperator::LogicalOr, 5),
        Kind::Amp2 => (BinaryOperator::LogicalAnd, 6),
        Kind::Pipe => (BinaryOperator::BitwiseOr, 7),
        Kind::Caret => (BinaryOperator::BitwiseXor, 8),
        Kind::Amp => (BinaryOperator::BitwiseAnd, 9),
        Kind::Eq2 => (BinaryOperator::Equality, 10),
        Kind::BangEq => (BinaryOperator::Inequality, 10),
        Kind::Eq3 => (BinaryOperator::StrictEquality, 10),
        Kind::Bang2Eq => (BinaryOperator::StrictInequality, 10),
        Kind::LAngle => (BinaryOperator::LessThan, 11),
        Kind::LtEq => (BinaryOperator::LessEqualThan, 11),
        Kind::RAngle => (BinaryOperator::GreaterThan, 11),
        Kind::GtEq => (BinaryOperator::GreaterEqualThan, 11),
        Kind::Instanceof => (BinaryOperator::Instanceof, 11),
        Kind::In if ctx.has_in() => (BinaryOperator::In, 11),
        Kind::Shl => (BinaryOperator::LeftShift, 12),
        Kind::Shr => (BinaryOperator::RightShift, 12),
        Kind::Shr3 => (BinaryOperator::UnsignedRightShift, 12),
        Kind::Plus => (BinaryOperator::Addition, 13),
        Kind::Minus => (BinaryOperator::Subtraction, 13),
        Kind::Star => (BinaryOperator::Multiplication, 14),
        Kind::Slash => (BinaryOperator::Division, 14),
        Kind::Percent => (BinaryOperator::Remainder, 14),
        _ => return None,
    };
    Some((operator, bp, bp + 1))
}

#[cfg(test)]
mod test {
    use lintium_allocator::Allocator;
    use lintium_ast::VisitRecorder;
    use lintium_span::{SourceText, SourceType};

    use crate::Parser;

    fn parse(source: &str, source_type: SourceType) -> (crate::ParserReturn, VisitRecorder) {
        let allocator = Allocator::default();
        let source = SourceText::new(source);
        let mut sink = VisitRecorder::default();
        let ret = Parser::new(&allocator, &source, source_type).parse(&mut sink);
        (ret, sink)
    }

    fn parse_js(source: &str) -> (crate::ParserReturn, VisitRecorder) {
        parse(source, SourceType::default())
    }

    #[test]
    fn this_parameter_is_allowed_on_a_plain_function() {
        let (ret, _sink) = parse("function f(this: Window, x: number) {}", SourceType::ts());
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn this_parameter_is_reported_on_an_arrow_function() {
        let (ret, _sink) = parse("const f = (this: Window) => {};", SourceType::ts());
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn optional_parameter_requires_typescript() {
        let (ret, _sink) = parse_js("function f(x?) {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn optional_parameter_is_clean_in_typescript() {
        let (ret, _sink) = parse("function f(x?: number) {}", SourceType::ts());
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn optional_parameter_with_initializer_is_reported() {
        let (ret, _sink) = parse("function f(x?: number = 1) {}", SourceType::ts());
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn non_null_assertion_on_a_parameter_is_reported() {
        let (ret, _sink) = parse("function f(x!: number) {}", SourceType::ts());
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn comma_after_rest_parameter_is_reported() {
        let (ret, _sink) = parse_js("function f(...rest, x) {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn rest_parameter_alone_is_clean() {
        let (ret, _sink) = parse_js("function f(...rest) {}");
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn parameter_type_annotation_requires_typescript() {
        let (ret, _sink) = parse_js("function f(x: number) {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn object_literal_missing_value_is_reported() {
        let (ret, _sink) = parse_js("const o = { a: };");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn object_literal_missing_key_is_reported() {
        let (ret, _sink) = parse_js("const o = { : 1 };");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn ordinary_object_literal_is_clean() {
        let (ret, _sink) = parse_js("const o = { a: 1, b: 2 };");
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn satisfies_requires_typescript() {
        let (ret, _sink) = parse_js("const x = y satisfies z;");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn satisfies_is_clean_in_typescript() {
        let (ret, _sink) = parse("const x = y satisfies Z;", SourceType::ts());
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn doubled_await_is_reported() {
        let (ret, _sink) = parse("async function f() { return await await x; }", SourceType::default());
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn single_await_is_clean() {
        let (ret, _sink) = parse("async function f() { return await x; }", SourceType::default());
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn await_immediately_followed_by_arrow_function_is_reported() {
        let (ret, _sink) = parse_js("async function f() { return await (x) => x; }");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn missing_operand_after_binary_operator_is_reported() {
        let (ret, _sink) = parse_js("const x = 1 + ;");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn ordinary_binary_expression_is_clean() {
        let (ret, _sink) = parse_js("const x = 1 + 2;");
        assert!(ret.errors.is_empty());
    }
}
