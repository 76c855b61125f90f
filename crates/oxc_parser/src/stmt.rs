//! Statement parsing: the recursive-descent loop that drives
//! [`lintium_ast::VisitSink`] for everything that is not itself an
//! expression (declarations, control flow, classes, modules).

use lintium_ast::{ExpressionId, ExpressionKind, InitKind, VariableKind, VisitSink};
use lintium_span::Span;

use crate::context::{Context, StatementContext};
use crate::diagnostics;
use crate::lexer::{Kind, Token};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement_list(&mut self, sink: &mut dyn VisitSink, ctx: Context, stmt_ctx: StatementContext) {
        while !matches!(self.cursor.kind(), Kind::Eof | Kind::RCurly) {
            self.parse_statement(sink, ctx, stmt_ctx);
            if self.panicked {
                break;
            }
        }
    }

    fn parse_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context, stmt_ctx: StatementContext) {
        if !self.enter_nesting() {
            self.cursor.bump_any();
            return;
        }
        self.parse_statement_inner(sink, ctx, stmt_ctx);
        self.exit_nesting();
    }

    fn parse_statement_inner(&mut self, sink: &mut dyn VisitSink, ctx: Context, stmt_ctx: StatementContext) {
        match self.cursor.kind() {
            Kind::LCurly => self.parse_block_statement(sink, ctx),
            Kind::Semicolon => {
                self.cursor.bump_any();
            }
            Kind::Var => self.parse_variable_statement(sink, ctx, VariableKind::Var),
            Kind::Let if self.looks_like_let_declaration() => self.parse_variable_statement(sink, ctx, VariableKind::Let),
            Kind::Const => self.parse_variable_statement(sink, ctx, VariableKind::Const),
            Kind::Function => self.deny_lexical_in_single_statement(sink, stmt_ctx, "function", |this, sink| {
                this.parse_function_declaration(sink, ctx, false);
            }),
            Kind::Async if self.next_is_function_without_newline() => {
                self.deny_lexical_in_single_statement(sink, stmt_ctx, "async function", |this, sink| {
                    this.cursor.bump_any();
                    this.parse_function_declaration(sink, ctx, true);
                })
            }
            Kind::Class => self.deny_lexical_in_single_statement(sink, stmt_ctx, "class", |this, sink| {
                this.parse_class_declaration(sink, ctx);
            }),
            Kind::If => self.parse_if_statement(sink, ctx),
            Kind::For => self.parse_for_statement(sink, ctx),
            Kind::While => self.parse_while_statement(sink, ctx),
            Kind::Do => self.parse_do_while_statement(sink, ctx),
            Kind::Switch => self.parse_switch_statement(sink, ctx),
            Kind::Try => self.parse_try_statement(sink, ctx),
            Kind::Throw => self.parse_throw_statement(sink, ctx),
            Kind::Return => self.parse_return_statement(sink, ctx),
            Kind::Break => self.parse_break_statement(sink),
            Kind::Continue => self.parse_continue_statement(sink),
            Kind::Debugger => {
                self.cursor.bump_any();
                self.consume_semicolon();
            }
            Kind::With => self.parse_with_statement(sink, ctx),
            Kind::Import if !self.next_is_call_or_member_start() => self.parse_import_declaration(sink, ctx),
            Kind::Export => self.parse_export_declaration(sink, ctx),
            Kind::Interface if self.source_type.is_typescript() => self.parse_interface_declaration(sink, ctx),
            Kind::Type if self.source_type.is_typescript() && self.next_is_identifier_without_newline() => {
                self.parse_type_alias_declaration(sink, ctx)
            }
            Kind::Enum => self.parse_enum_declaration(sink),
            Kind::Namespace | Kind::Module if self.source_type.is_typescript() => {
                self.parse_namespace_declaration(sink, ctx)
            }
            Kind::Declare if self.source_type.is_typescript() => {
                self.cursor.bump_any();
                self.parse_statement(sink, ctx.and_ambient(true), stmt_ctx);
            }
            Kind::Abstract if self.source_type.is_typescript() && self.next_is_class_without_newline() => {
                self.cursor.bump_any();
                self.parse_class_declaration(sink, ctx);
            }
            Kind::Ident | Kind::Yield | Kind::Await if self.next_is_label_colon() => {
                self.parse_labeled_statement(sink, ctx, stmt_ctx)
            }
            Kind::Catch => {
                self.errors.push(diagnostics::catch_without_try(self.cursor.span()));
                self.cursor.bump_any();
            }
            Kind::Finally => {
                self.errors.push(diagnostics::finally_without_try(self.cursor.span()));
                self.cursor.bump_any();
            }
            Kind::Case if !self.state.in_switch() => {
                self.errors.push(diagnostics::unexpected_case_outside_switch_statement(self.cursor.span()));
                self.cursor.bump_any();
            }
            Kind::Eof => {}
            _ => self.parse_expression_statement(sink, ctx),
        }
    }

    /// `let`/`const`/a bare `function` directly as the body of an
    /// `if`/`for`/`while` (no block) is a syntax error; everywhere else it
    /// is fine.
    fn deny_lexical_in_single_statement(
        &mut self,
        sink: &mut dyn VisitSink,
        stmt_ctx: StatementContext,
        what: &str,
        body: impl FnOnce(&mut Self, &mut dyn VisitSink),
    ) {
        if !stmt_ctx.allows_lexical_declaration() {
            self.errors.push(diagnostics::lexical_declaration_not_allowed_in_body(self.cursor.span(), what));
        }
        body(self, sink);
    }

    fn parse_block_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        sink.enter_block_scope(Span::new(start, start));
        self.state.enter_scope();
        self.parse_statement_list(sink, ctx, StatementContext::StatementList);
        self.state.exit_scope();
        let span = Span::new(start, self.cursor.span().end);
        self.cursor.eat(Kind::RCurly);
        sink.exit_block_scope(span);
        self.arena.clear();
    }

    /// `let` starts a declaration except when used as a plain identifier
    /// (`let.length`, `let = 1` outside strict mode, `let(x)` ...): the only
    /// shapes that matter in practice are "followed by an identifier-like
    /// binding target or `[`/`{`".
    /// `let` is a declarator only when an identifier, `[`, or `{` follows it
    /// on the *same line*; a newline in between makes `let` an ordinary
    /// identifier reference (`let\n[x] = y` is `let[x] = y`'s sibling
    /// expression-statement form, not a destructuring declaration).
    fn looks_like_let_declaration(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let is_decl = !self.cursor.token().is_on_new_line()
            && (matches!(self.cursor.kind(), Kind::Ident | Kind::LBrack | Kind::LCurly)
                || self.cursor.kind().is_contextual_keyword());
        self.cursor.roll_back_transaction(checkpoint);
        is_decl
    }

    pub(crate) fn next_is_function_without_newline(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let result = self.cursor.at(Kind::Function) && !self.cursor.token().is_on_new_line();
        self.cursor.roll_back_transaction(checkpoint);
        result
    }

    /// Peeks the token right after the `class` keyword without consuming
    /// anything, so the declaration's name (and its span) can be known
    /// before `parse_class` does the real, consuming parse of the same
    /// header. `None` means the class is anonymous (legal only for
    /// `export default class { ... }`).
    fn peek_class_name_token(&mut self) -> Option<Token<'a>> {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any(); // `class`
        let token = self.cursor.token();
        let result = matches!(token.kind(), Kind::Ident).then_some(token);
        self.cursor.roll_back_transaction(checkpoint);
        result
    }

    fn next_is_class_without_newline(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let result = self.cursor.at(Kind::Class) && !self.cursor.token().is_on_new_line();
        self.cursor.roll_back_transaction(checkpoint);
        result
    }

    fn next_is_identifier_without_newline(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let result = matches!(self.cursor.kind(), Kind::Ident) && !self.cursor.token().is_on_new_line();
        self.cursor.roll_back_transaction(checkpoint);
        result
    }

    fn next_is_label_colon(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let result = self.cursor.at(Kind::Colon);
        self.cursor.roll_back_transaction(checkpoint);
        result
    }

    /// `import(...)`/`import.meta` are expressions, not a module import
    /// declaration; this peek keeps them routed to the expression parser.
    fn next_is_call_or_member_start(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let result = matches!(self.cursor.kind(), Kind::LParen | Kind::Dot);
        self.cursor.roll_back_transaction(checkpoint);
        result
    }

    fn parse_variable_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context, kind: VariableKind) {
        self.parse_variable_declaration_list(sink, ctx, kind);
        self.consume_semicolon();
    }

    /// Parses `a = 1, [b, c] = d` (without the leading keyword or trailing
    /// `;`), shared between variable statements and the C-style `for` head.
    fn parse_variable_declaration_list(&mut self, sink: &mut dyn VisitSink, ctx: Context, kind: VariableKind) {
        self.cursor.bump_any(); // `var`/`let`/`const`
        loop {
            let target_span = self.cursor.span();
            let target = self.parse_binding_target(sink, kind);
            if self.cursor.at(Kind::Colon) {
                let colon_span = self.cursor.span();
                self.cursor.bump_any();
                if !self.source_type.is_typescript() {
                    self.errors.push(diagnostics::typescript_type_annotations_not_allowed_in_javascript(colon_span));
                }
                self.skip_type_annotation();
                self.flush_pending_type_use(sink);
            }
            if self.cursor.eat(Kind::Eq) {
                self.parse_assignment_expression(sink, ctx.and_in(true));
            } else if kind == VariableKind::Const {
                self.errors.push(diagnostics::missing_for_loop_rhs_or_components_after_declaration(target_span));
            }
            let _ = target;
            if !self.cursor.eat(Kind::Comma) {
                break;
            }
        }
        self.arena.clear();
    }

    /// `await`/`yield` are ordinary identifiers lexically, but naming a
    /// declaration after one inside a context where that word is the
    /// matching operator is rejected (`async function f() { class await {} }`,
    /// `function* g() { function yield() {} }`).
    fn check_binding_name_restriction(&mut self, span: Span, name: &str, ctx: Context) {
        if ctx.has_await() && name == "await" {
            self.errors.push(diagnostics::cannot_declare_await_in_async_function(span));
        } else if ctx.has_yield() && name == "yield" {
            self.errors.push(diagnostics::cannot_declare_yield_in_generator_function(span));
        }
    }

    fn parse_function_declaration(&mut self, sink: &mut dyn VisitSink, ctx: Context, is_async: bool) {
        self.parse_function_declaration_inner(sink, ctx, is_async, false);
    }

    /// `is_default` permits the anonymous form (`export default function() {}`);
    /// anywhere else a missing name is a diagnosed recovery, not silently allowed.
    fn parse_function_declaration_inner(&mut self, sink: &mut dyn VisitSink, ctx: Context, is_async: bool, is_default: bool) {
        let start = self.cursor.span().start;
        self.cursor.bump_any(); // `function`
        let is_generator = self.cursor.eat(Kind::Star);
        let has_name = !matches!(self.cursor.kind(), Kind::LParen);
        let name_span = self.cursor.span();
        if has_name {
            let name = self.current_identifier_text();
            self.cursor.bump_any();
            self.check_binding_name_restriction(name_span, name, ctx);
            sink.variable_declaration(name_span, name, VariableKind::Function, InitKind::Initialized);
            sink.enter_named_function_scope(Span::new(start, name_span.end), name);
        } else {
            if !is_default {
                self.errors.push(diagnostics::missing_name_of_exported_function(name_span));
            }
            sink.enter_function_scope(Span::new(start, name_span.start));
        }
        self.skip_optional_type_parameters();
        let inner_ctx = ctx.and_return(true).and_yield(is_generator).and_await(is_async).and_in(true);
        self.parse_parameter_list(sink, false);
        if ctx.has_ambient() {
            self.consume_semicolon();
        } else {
            sink.enter_function_scope_body(self.cursor.span());
            self.parse_function_body(sink, inner_ctx);
        }
        let span = Span::new(start, self.cursor.prev_end());
        sink.exit_function_scope(span);
    }

    /// Parses `{ stmt* }`, balancing the function-scope events the caller
    /// already opened with `enter_function_scope`/`enter_function_scope_body`.
    pub(crate) fn parse_function_body(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        let start = self.cursor.span().start;
        if !self.cursor.eat(Kind::LCurly) {
            self.errors.push(diagnostics::unmatched_parenthesis(self.cursor.span()));
        }
        self.state.enter_scope();
        self.state.enter_function();
        self.parse_statement_list(sink, ctx, StatementContext::StatementList);
        self.state.exit_function();
        self.state.exit_scope();
        self.cursor.eat(Kind::RCurly);
        let span = Span::new(start, self.cursor.prev_end());
        self.arena.alloc(ExpressionKind::FunctionBody { span })
    }

    fn parse_class_declaration(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.parse_class_declaration_inner(sink, ctx, false);
    }

    fn parse_class_declaration_inner(&mut self, sink: &mut dyn VisitSink, ctx: Context, is_default: bool) {
        self.skip_decorators(sink, ctx);
        let start = self.cursor.span().start;
        let name_token = self.peek_class_name_token();
        let has_name = name_token.is_some();
        let name_span = name_token.map_or(self.cursor.span(), |token| token.span());
        let name = name_token.map(|token| token.identifier_text(self.source_text.as_str()));
        if !has_name && !is_default {
            self.errors.push(diagnostics::missing_name_of_exported_class(name_span));
        }
        if name == Some("let") {
            self.errors.push(diagnostics::cannot_declare_class_named_let(name_span));
        }
        // Class declarations are hoisted like functions: the binding is
        // visited before the class's own scope is entered, not after its
        // body has been parsed.
        if let Some(name) = name {
            self.check_binding_name_restriction(name_span, name, ctx);
            sink.variable_declaration(name_span, name, VariableKind::Class, InitKind::Initialized);
        }
        let class = self.parse_class(sink, ctx, false);
        let _ = (start, class);
        self.arena.clear();
    }

    fn skip_decorators(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        while self.cursor.eat(Kind::At) {
            self.parse_left_hand_side_expression_for_decorator(sink, ctx);
        }
    }

    /// Shared by class declarations and class expressions: the grammar for
    /// the header and body is identical, only where the result ends up (a
    /// declaration's own statement vs. one operand of a larger expression)
    /// differs.
    pub(crate) fn parse_class(&mut self, sink: &mut dyn VisitSink, ctx: Context, is_expression: bool) -> ExpressionId {
        let start = self.cursor.span().start;
        self.cursor.bump_any(); // `class`

        let id = if matches!(self.cursor.kind(), Kind::Ident) {
            let name_span = self.cursor.span();
            let name = self.current_identifier_text();
            self.cursor.bump_any();
            Some(self.arena.alloc(ExpressionKind::Identifier { span: name_span, name }))
        } else {
            None
        };
        self.skip_optional_type_parameters();

        sink.enter_class_scope(Span::new(start, self.cursor.prev_end()));
        self.state.enter_scope();

        if self.cursor.eat(Kind::Extends) {
            self.parse_left_hand_side_expression_for_decorator(sink, ctx);
            if self.source_type.is_typescript() && self.cursor.at(Kind::LAngle) {
                self.cursor.bump_any();
                self.skip_balanced_type_until_right_angle();
            }
        }
        if self.source_type.is_typescript() && self.cursor.eat(Kind::Implements) {
            loop {
                self.skip_type_annotation();
                if !self.cursor.eat(Kind::Comma) {
                    break;
                }
            }
        }

        let class_name = match id {
            Some(id) => match *self.arena.get(id) {
                ExpressionKind::Identifier { name, .. } => Some(name),
                _ => None,
            },
            None => None,
        };
        sink.enter_class_scope_body(self.cursor.span(), class_name);

        if !self.cursor.eat(Kind::LCurly) {
            self.errors.push(diagnostics::missing_body_for_class(self.cursor.span()));
        }
        while !matches!(self.cursor.kind(), Kind::RCurly | Kind::Eof) {
            if self.cursor.eat(Kind::Semicolon) {
                continue;
            }
            if self.cursor.at(Kind::Comma) {
                self.errors.push(diagnostics::comma_not_allowed_between_class_methods(self.cursor.span()));
                self.cursor.bump_any();
                continue;
            }
            self.parse_class_member(sink, ctx);
        }
        if !self.cursor.eat(Kind::RCurly) {
            self.errors.push(diagnostics::unclosed_class_block(self.cursor.span()));
        }

        self.state.exit_scope();
        let span = Span::new(start, self.cursor.prev_end());
        sink.exit_class_scope(span);

        let _ = is_expression;
        self.arena.alloc(ExpressionKind::Class { span, id })
    }

    fn parse_class_member(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        let member_start = self.cursor.span().start;
        self.skip_decorators(sink, ctx);

        loop {
            match self.cursor.kind() {
                Kind::Static | Kind::Public | Kind::Private | Kind::Protected | Kind::Readonly | Kind::Abstract
                | Kind::Override | Kind::Accessor
                    if self.next_token_continues_class_member() =>
                {
                    if self.cursor.at(Kind::Readonly) && !self.source_type.is_typescript() {
                        self.errors.push(diagnostics::typescript_readonly_fields_not_allowed_in_javascript(self.cursor.span()));
                    }
                    self.cursor.bump_any();
                }
                _ => break,
            }
        }
        let is_generator = self.cursor.eat(Kind::Star);
        let is_async = self.cursor.at(Kind::Async) && self.next_token_continues_class_member_after_async();
        if is_async {
            self.cursor.bump_any();
        }
        let is_accessor_keyword = matches!(self.cursor.kind(), Kind::Get | Kind::Set) && self.next_token_is_member_name();
        if is_accessor_keyword {
            self.cursor.bump_any();
        }

        let member_name = if self.cursor.at(Kind::LBrack) {
            self.cursor.bump_any();
            self.parse_assignment_expression(sink, ctx.and_in(true));
            self.cursor.eat(Kind::RBrack);
            None
        } else if matches!(self.cursor.kind(), Kind::PrivateIdentifier | Kind::Str | Kind::Decimal) {
            let name = self.current_identifier_like_text();
            self.cursor.bump_any();
            Some(name)
        } else {
            let name = self.current_identifier_like_text();
            self.cursor.bump_any(); // member name (identifier or keyword-as-name)
            Some(name)
        };

        if self.cursor.at(Kind::Bang) {
            let bang_span = self.cursor.span();
            self.cursor.bump_any();
            if !self.source_type.is_typescript() {
                self.errors.push(diagnostics::typescript_non_null_assertion_not_allowed_in_javascript(bang_span));
            }
        }
        self.cursor.eat(Kind::Question);
        if self.cursor.at(Kind::Colon) {
            let colon_span = self.cursor.span();
            self.cursor.bump_any();
            if !self.source_type.is_typescript() {
                self.errors.push(diagnostics::typescript_type_annotations_not_allowed_in_javascript(colon_span));
            }
            self.skip_type_annotation();
        }
        self.skip_optional_type_parameters();

        if self.cursor.at(Kind::LParen) {
            sink.enter_function_scope(Span::new(member_start, self.cursor.span().start));
            self.parse_parameter_list(sink, false);
            let body_ctx = ctx.and_return(true).and_yield(is_generator).and_await(is_async).and_in(true);
            if !ctx.has_ambient() {
                sink.enter_function_scope_body(self.cursor.span());
                self.parse_function_body(sink, body_ctx);
            } else {
                self.consume_semicolon();
            }
            sink.exit_function_scope(Span::new(member_start, self.cursor.prev_end()));
        } else {
            if self.cursor.eat(Kind::Eq) {
                self.parse_assignment_expression(sink, ctx.and_in(true));
            }
            self.consume_semicolon();
        }

        sink.property_declaration(Span::new(member_start, self.cursor.prev_end()), member_name);
        self.arena.clear();
    }

    fn next_token_continues_class_member(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let continues = !matches!(self.cursor.kind(), Kind::LParen | Kind::Eq | Kind::Semicolon | Kind::Colon)
            && !self.cursor.token().is_on_new_line();
        self.cursor.roll_back_transaction(checkpoint);
        continues
    }

    fn next_token_continues_class_member_after_async(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let continues = !self.cursor.token().is_on_new_line()
            && !matches!(self.cursor.kind(), Kind::LParen | Kind::Eq | Kind::Semicolon);
        self.cursor.roll_back_transaction(checkpoint);
        continues
    }

    fn next_token_is_member_name(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let is_name = !matches!(self.cursor.kind(), Kind::LParen | Kind::Eq | Kind::Semicolon);
        self.cursor.roll_back_transaction(checkpoint);
        is_name
    }

    fn parse_if_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any();
        if !self.cursor.eat(Kind::LParen) {
            self.errors.push(diagnostics::missing_condition_for_if_statement(self.cursor.span()));
        }
        self.parse_expression(sink, ctx.and_in(true));
        self.arena.clear();
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::missing_condition_for_if_statement(self.cursor.span()));
        }
        self.parse_statement(sink, ctx, StatementContext::SingleStatement);
        if self.cursor.eat(Kind::Else) {
            self.parse_statement(sink, ctx, StatementContext::SingleStatement);
        }
    }

    fn parse_while_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any();
        if !self.cursor.eat(Kind::LParen) {
            self.errors.push(diagnostics::missing_condition_for_while_statement(self.cursor.span()));
        }
        self.parse_expression(sink, ctx.and_in(true));
        self.arena.clear();
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::missing_condition_for_while_statement(self.cursor.span()));
        }
        self.state.enter_loop();
        self.parse_statement(sink, ctx.and_break(true).and_continue(true), StatementContext::SingleStatement);
        self.state.exit_loop();
    }

    fn parse_do_while_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any();
        self.state.enter_loop();
        self.parse_statement(sink, ctx.and_break(true).and_continue(true), StatementContext::SingleStatement);
        self.state.exit_loop();
        if !self.cursor.eat(Kind::While) {
            self.errors.push(diagnostics::missing_body_for_do_while_statement(self.cursor.span()));
        }
        self.cursor.eat(Kind::LParen);
        self.parse_expression(sink, ctx.and_in(true));
        self.arena.clear();
        self.cursor.eat(Kind::RParen);
        self.consume_semicolon();
    }

    fn parse_for_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        self.cursor.eat(Kind::Await);
        if !self.cursor.eat(Kind::LParen) {
            self.errors.push(diagnostics::missing_for_loop_header(self.cursor.span()));
        }

        sink.enter_for_scope(Span::new(start, start));
        self.state.enter_scope();

        let declaration_kind = match self.cursor.kind() {
            Kind::Var => Some(VariableKind::Var),
            Kind::Const => Some(VariableKind::Const),
            Kind::Let if self.looks_like_let_declaration() => Some(VariableKind::Let),
            _ => None,
        };

        if let Some(kind) = declaration_kind {
            self.cursor.bump_any();
            let binding_target = self.parse_binding_target(sink, kind);
            if matches!(self.cursor.kind(), Kind::In | Kind::Of) {
                self.parse_for_in_of_tail(sink, ctx, start, binding_target);
                return;
            }
            if self.cursor.eat(Kind::Eq) {
                self.parse_assignment_expression(sink, ctx.and_in(false));
                if self.cursor.at(Kind::In) {
                    self.errors.push(diagnostics::in_disallowed_in_c_style_for_loop(self.cursor.span()));
                    self.cursor.bump_any();
                }
            }
            while self.cursor.eat(Kind::Comma) {
                self.parse_binding_target(sink, kind);
                if self.cursor.eat(Kind::Eq) {
                    self.parse_assignment_expression(sink, ctx.and_in(false));
                }
            }
            self.arena.clear();
            self.parse_c_style_for_tail(sink, ctx, start);
            return;
        }

        if self.cursor.at(Kind::Semicolon) {
            self.parse_c_style_for_tail(sink, ctx, start);
            return;
        }

        let lhs_ctx = ctx.and_in(false);
        let lhs = self.parse_expression(sink, lhs_ctx);
        if matches!(self.cursor.kind(), Kind::In | Kind::Of) {
            self.emit_for_binding_target_use(sink, lhs);
            self.parse_for_in_of_tail(sink, ctx, start, lhs);
            return;
        }
        self.arena.clear();
        self.parse_c_style_for_tail(sink, ctx, start);
    }

    fn emit_for_binding_target_use(&mut self, sink: &mut dyn VisitSink, expr: ExpressionId) {
        if let ExpressionKind::Identifier { span, name } = *self.arena.get(expr) {
            sink.variable_assignment(span, name);
        }
    }

    fn parse_for_in_of_tail(&mut self, sink: &mut dyn VisitSink, ctx: Context, start: u32, left: ExpressionId) {
        if !matches!(
            *self.arena.get(left),
            ExpressionKind::Identifier { .. } | ExpressionKind::Member { .. } | ExpressionKind::Binding(_)
        ) {
            self.errors.push(diagnostics::cannot_assign_to_loop_variable_in_for_of_or_in_loop(self.arena.get(left).span()));
        }
        let is_of = self.cursor.at(Kind::Of);
        self.cursor.bump_any();
        self.parse_assignment_expression(sink, ctx.and_in(true));
        self.arena.clear();
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::missing_for_loop_header(self.cursor.span()));
        }
        self.state.enter_loop();
        self.parse_statement(sink, ctx.and_break(true).and_continue(true), StatementContext::SingleStatement);
        self.state.exit_loop();
        self.state.exit_scope();
        let span = Span::new(start, self.cursor.prev_end());
        sink.exit_for_scope(span);
        let _ = is_of;
    }

    fn parse_c_style_for_tail(&mut self, sink: &mut dyn VisitSink, ctx: Context, start: u32) {
        if !self.cursor.eat(Kind::Semicolon) {
            self.errors.push(diagnostics::missing_semicolon_between_for_loop_init_and_condition(self.cursor.span()));
        }
        if !self.cursor.at(Kind::Semicolon) {
            self.parse_expression(sink, ctx.and_in(true));
            self.arena.clear();
        }
        if !self.cursor.eat(Kind::Semicolon) {
            self.errors.push(diagnostics::missing_semicolon_between_for_loop_condition_and_update(self.cursor.span()));
        }
        if !self.cursor.at(Kind::RParen) {
            self.parse_expression(sink, ctx.and_in(true));
            self.arena.clear();
        }
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::missing_for_loop_header(self.cursor.span()));
        }
        self.state.enter_loop();
        self.parse_statement(sink, ctx.and_break(true).and_continue(true), StatementContext::SingleStatement);
        self.state.exit_loop();
        self.state.exit_scope();
        let span = Span::new(start, self.cursor.prev_end());
        sink.exit_for_scope(span);
    }

    fn parse_switch_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any();
        if !self.cursor.eat(Kind::LParen) {
            self.errors.push(diagnostics::missing_condition_for_switch_statement(self.cursor.span()));
        }
        self.parse_expression(sink, ctx.and_in(true));
        self.arena.clear();
        if !self.cursor.eat(Kind::RParen) {
            self.errors.push(diagnostics::missing_condition_for_switch_statement(self.cursor.span()));
        }
        if !self.cursor.eat(Kind::LCurly) {
            self.errors.push(diagnostics::missing_body_for_switch_statement(self.cursor.span()));
        }
        sink.enter_block_scope(self.cursor.span());
        self.state.enter_scope();
        self.state.enter_switch();

        let mut seen_default = false;
        let mut seen_case_yet = false;
        let mut first_case_spans: std::vec::Vec<(Span, Span)> = std::vec::Vec::new();
        while !matches!(self.cursor.kind(), Kind::RCurly | Kind::Eof) {
            match self.cursor.kind() {
                Kind::Case => {
                    let case_start = self.cursor.span();
                    self.cursor.bump_any();
                    let test = self.parse_expression(sink, ctx.and_in(true));
                    if !self.cursor.eat(Kind::Colon) {
                        self.errors.push(diagnostics::expected_expression_for_switch_case(self.cursor.span()));
                    }
                    if let ExpressionKind::NumericLiteral { raw, .. } | ExpressionKind::StringLiteral { raw, .. } =
                        *self.arena.get(test)
                    {
                        if let Some((_, previous)) = first_case_spans.iter().find(|(s, _)| s.source_text(self.source_text.as_str()) == raw) {
                            self.errors.push(diagnostics::duplicated_cases_in_switch_statement(case_start, *previous));
                        } else {
                            first_case_spans.push((case_start, case_start));
                        }
                    }
                    self.arena.clear();
                    seen_case_yet = true;
                    self.parse_statement_list(sink, ctx.and_break(true), StatementContext::StatementList);
                }
                Kind::Default => {
                    if seen_default {
                        self.errors.push(diagnostics::unexpected_default_outside_switch_statement(self.cursor.span()));
                    }
                    seen_default = true;
                    self.cursor.bump_any();
                    if !self.cursor.eat(Kind::Colon) {
                        self.errors.push(diagnostics::expected_expression_for_switch_case(self.cursor.span()));
                    }
                    seen_case_yet = true;
                    self.parse_statement_list(sink, ctx.and_break(true), StatementContext::StatementList);
                }
                _ => {
                    if !seen_case_yet {
                        self.errors.push(diagnostics::statement_before_first_switch_case(self.cursor.span()));
                    }
                    self.parse_statement(sink, ctx.and_break(true), StatementContext::StatementList);
                }
            }
        }

        self.cursor.eat(Kind::RCurly);
        self.state.exit_switch();
        self.state.exit_scope();
        sink.exit_block_scope(self.cursor.span());
    }

    fn parse_try_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any();
        if !self.cursor.at(Kind::LCurly) {
            self.errors.push(diagnostics::missing_body_for_try_statement(self.cursor.span()));
        }
        self.parse_block_statement(sink, ctx);

        let mut has_handler = false;
        if self.cursor.eat(Kind::Catch) {
            has_handler = true;
            sink.enter_block_scope(self.cursor.span());
            self.state.enter_scope();
            if self.cursor.eat(Kind::LParen) {
                if matches!(self.cursor.kind(), Kind::RParen | Kind::Eof) {
                    self.errors.push(diagnostics::expected_variable_name_for_catch(self.cursor.span()));
                } else {
                    self.parse_binding_target(sink, VariableKind::Catch);
                }
                if self.cursor.at(Kind::Colon) {
                    let colon_span = self.cursor.span();
                    self.cursor.bump_any();
                    if !self.source_type.is_typescript() {
                        self.errors.push(diagnostics::typescript_type_annotations_not_allowed_in_javascript(colon_span));
                    }
                    self.skip_type_annotation();
                }
                if !self.cursor.eat(Kind::RParen) {
                    self.errors.push(diagnostics::missing_catch_variable_between_parentheses(self.cursor.span()));
                }
                self.arena.clear();
            }
            if !self.cursor.at(Kind::LCurly) {
                self.errors.push(diagnostics::missing_body_for_catch_clause(self.cursor.span()));
            }
            self.parse_statement_list(sink, ctx, StatementContext::StatementList);
            self.cursor.eat(Kind::RCurly);
            self.state.exit_scope();
            sink.exit_block_scope(self.cursor.span());
        }

        if self.cursor.eat(Kind::Finally) {
            has_handler = true;
            if !self.cursor.at(Kind::LCurly) {
                self.errors.push(diagnostics::missing_body_for_finally_clause(self.cursor.span()));
            }
            self.parse_block_statement(sink, ctx);
        }

        if !has_handler {
            self.errors.push(diagnostics::missing_catch_or_finally_for_try_statement(self.cursor.span()));
        }
    }

    fn parse_throw_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any();
        self.parse_expression(sink, ctx.and_in(true));
        self.arena.clear();
        self.consume_semicolon();
    }

    fn parse_return_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        let span = self.cursor.span();
        self.cursor.bump_any();
        let statement_ends_here = matches!(self.cursor.kind(), Kind::Semicolon | Kind::RCurly | Kind::Eof);
        // ASI inserts a semicolon right after `return` when a newline follows
        // it, silently turning `return\nx` into `return; x;` -- the argument
        // the author almost certainly meant to return is never returned.
        if !statement_ends_here && self.cursor.token().is_on_new_line() {
            self.errors.push(diagnostics::return_statement_returns_nothing(span));
        } else if !statement_ends_here {
            self.parse_expression(sink, ctx.and_in(true));
            self.arena.clear();
        }
        self.consume_semicolon();
    }

    fn parse_break_statement(&mut self, sink: &mut dyn VisitSink) {
        let span = self.cursor.span();
        self.cursor.bump_any();
        if !self.cursor.token().is_on_new_line() && matches!(self.cursor.kind(), Kind::Ident) {
            let label = self.current_identifier_text();
            if !self.state.has_label(label) {
                self.errors.push(diagnostics::invalid_break(span));
            }
            self.cursor.bump_any();
        } else if !self.state.in_loop() && !self.state.in_switch() {
            self.errors.push(diagnostics::invalid_break(span));
        }
        let _ = sink;
        self.consume_semicolon();
    }

    fn parse_continue_statement(&mut self, sink: &mut dyn VisitSink) {
        let span = self.cursor.span();
        self.cursor.bump_any();
        if !self.cursor.token().is_on_new_line() && matches!(self.cursor.kind(), Kind::Ident) {
            let label = self.current_identifier_text();
            if !self.state.label_is_iteration(label) {
                self.errors.push(diagnostics::invalid_continue(span));
            }
            self.cursor.bump_any();
        } else if !self.state.in_loop() {
            self.errors.push(diagnostics::invalid_continue(span));
        }
        let _ = sink;
        self.consume_semicolon();
    }

    fn parse_with_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any();
        self.cursor.eat(Kind::LParen);
        self.parse_expression(sink, ctx.and_in(true));
        self.arena.clear();
        self.cursor.eat(Kind::RParen);
        sink.enter_with_scope(self.cursor.span());
        self.parse_statement(sink, ctx, StatementContext::SingleStatement);
        sink.exit_with_scope(self.cursor.span());
    }

    fn parse_labeled_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context, stmt_ctx: StatementContext) {
        let label_span = self.cursor.span();
        let label = self.current_identifier_text();
        if label == "await" && ctx.has_await() {
            self.errors.push(diagnostics::label_named_await_not_allowed_in_async_function(label_span));
        } else if label == "yield" && ctx.has_yield() {
            self.errors.push(diagnostics::label_named_yield_not_allowed_in_generator_function(label_span));
        }
        self.cursor.bump_any();
        self.cursor.bump_any(); // `:`
        let is_iteration = matches!(self.cursor.kind(), Kind::For | Kind::While | Kind::Do);
        self.state.push_label(label, is_iteration);
        self.parse_statement(sink, ctx, stmt_ctx);
        self.state.pop_label();
    }

    fn parse_expression_statement(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.parse_expression(sink, ctx.and_in(true));
        self.arena.clear();
        self.consume_semicolon();
    }

    /// Automatic semicolon insertion: a missing `;` is only an error if
    /// none of ASI's three escape hatches apply (next token is `}`, next
    /// token is on a new line, or we are at EOF).
    fn consume_semicolon(&mut self) {
        if self.cursor.eat(Kind::Semicolon) {
            return;
        }
        if matches!(self.cursor.kind(), Kind::RCurly | Kind::Eof) || self.cursor.token().is_on_new_line() {
            return;
        }
        self.errors.push(diagnostics::missing_semicolon_after_statement(self.cursor.span()));
    }

    fn current_identifier_text(&self) -> &'a str {
        self.cursor.token().identifier_text(self.source_text.as_str())
    }

    fn parse_left_hand_side_expression_for_decorator(&mut self, sink: &mut dyn VisitSink, ctx: Context) -> ExpressionId {
        self.parse_unary_expression(sink, ctx)
    }

    /// Consumes a function/class/method/interface's own `<T, U extends V>`
    /// type-parameter list, if present. Always consumed for recovery
    /// stability; diagnosed as disallowed outside TypeScript.
    pub(crate) fn skip_optional_type_parameters(&mut self) {
        if !self.cursor.at(Kind::LAngle) {
            return;
        }
        let angle_span = self.cursor.span();
        if !self.source_type.is_typescript() {
            self.errors.push(diagnostics::typescript_generics_not_allowed_in_javascript(angle_span));
        }
        self.cursor.bump_any();
        self.skip_balanced_type_until_right_angle();
    }

    // --- TypeScript-only declarations -------------------------------------

    fn parse_interface_declaration(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        let start = self.cursor.span().start;
        self.cursor.bump_any();
        let name_span = self.cursor.span();
        let name = self.current_identifier_text();
        self.cursor.bump_any();
        sink.variable_declaration(name_span, name, VariableKind::Interface, InitKind::Initialized);
        if self.cursor.at(Kind::LAngle) {
            self.cursor.bump_any();
            self.skip_balanced_type_until_right_angle();
        }
        if self.cursor.eat(Kind::Extends) {
            loop {
                self.skip_type_annotation();
                if !self.cursor.eat(Kind::Comma) {
                    break;
                }
            }
        }
        if !self.cursor.eat(Kind::LCurly) {
            self.errors.push(diagnostics::missing_body_for_interface(self.cursor.span()));
            return;
        }
        while !matches!(self.cursor.kind(), Kind::RCurly | Kind::Eof) {
            if self.cursor.eat(Kind::Semicolon) || self.cursor.eat(Kind::Comma) {
                continue;
            }
            self.parse_interface_member(sink, ctx);
        }
        if !self.cursor.eat(Kind::RCurly) {
            self.errors.push(diagnostics::unclosed_interface_block(self.cursor.span()));
        }
        let _ = start;
    }

    /// One member of an `interface` body: a property signature, a method
    /// signature, a call or construct signature, or an index signature.
    /// Mirrors [`Self::parse_class_member`]'s dispatch but no member ever has
    /// a value or a body — interfaces describe shapes, not implementations.
    fn parse_interface_member(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        let member_start = self.cursor.span().start;
        self.cursor.eat(Kind::Readonly);

        if self.cursor.at(Kind::LBrack) && self.next_bracket_member_is_index_signature() {
            self.cursor.bump_any(); // `[`
            let param_span = self.cursor.span();
            let param_name = self.current_identifier_like_text();
            self.cursor.bump_any();
            if self.cursor.eat(Kind::Colon) {
                self.skip_type_annotation();
            }
            self.cursor.eat(Kind::RBrack);
            if self.cursor.eat(Kind::Colon) {
                self.skip_type_annotation();
            }
            sink.enter_index_signature_scope(Span::new(member_start, self.cursor.prev_end()));
            sink.variable_declaration(param_span, param_name, VariableKind::Parameter, InitKind::Initialized);
            sink.exit_index_signature_scope(Span::new(member_start, self.cursor.prev_end()));
            self.consume_interface_member_separator();
            return;
        }

        let name = if self.cursor.at(Kind::LBrack) {
            self.cursor.bump_any();
            self.parse_assignment_expression(sink, ctx.and_in(true));
            self.cursor.eat(Kind::RBrack);
            None
        } else if matches!(self.cursor.kind(), Kind::New | Kind::LParen) {
            self.cursor.eat(Kind::New);
            None
        } else {
            let name = self.current_identifier_like_text();
            self.cursor.bump_any();
            Some(name)
        };

        self.cursor.eat(Kind::Question);
        self.skip_optional_type_parameters();

        if self.cursor.at(Kind::LParen) {
            sink.enter_function_scope(Span::new(member_start, self.cursor.span().start));
            self.parse_parameter_list(sink, false);
            if self.cursor.eat(Kind::Colon) {
                self.skip_type_annotation();
            }
            sink.exit_function_scope(Span::new(member_start, self.cursor.prev_end()));
        } else if self.cursor.eat(Kind::Colon) {
            self.skip_type_annotation();
        }

        sink.property_declaration(Span::new(member_start, self.cursor.prev_end()), name);
        self.consume_interface_member_separator();
        self.arena.clear();
    }

    /// `[x: string]` (index signature, param name then `:`) vs `[x]`/`[Symbol.iterator]`
    /// (a computed member name). Peeks past the bracket without consuming.
    fn next_bracket_member_is_index_signature(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any(); // `[`
        let result = matches!(self.cursor.kind(), Kind::Ident) && {
            self.cursor.bump_any();
            self.cursor.at(Kind::Colon)
        };
        self.cursor.roll_back_transaction(checkpoint);
        result
    }

    fn consume_interface_member_separator(&mut self) {
        if self.cursor.eat(Kind::Semicolon) || self.cursor.eat(Kind::Comma) {
            return;
        }
        if matches!(self.cursor.kind(), Kind::RCurly | Kind::Eof) || self.cursor.token().is_on_new_line() {
            return;
        }
        self.errors.push(diagnostics::missing_semicolon_after_statement(self.cursor.span()));
    }

    fn parse_type_alias_declaration(&mut self, sink: &mut dyn VisitSink, _ctx: Context) {
        self.cursor.bump_any();
        let name_span = self.cursor.span();
        let name = self.current_identifier_text();
        self.cursor.bump_any();
        sink.variable_declaration(name_span, name, VariableKind::TypeAlias, InitKind::Initialized);
        if self.cursor.at(Kind::LAngle) {
            self.cursor.bump_any();
            self.skip_balanced_type_until_right_angle();
        }
        if !self.cursor.eat(Kind::Eq) {
            self.errors.push(diagnostics::missing_for_loop_rhs_or_components_after_declaration(self.cursor.span()));
        }
        self.skip_type_annotation();
        self.flush_pending_type_use(sink);
        self.consume_semicolon();
    }

    fn parse_enum_declaration(&mut self, sink: &mut dyn VisitSink) {
        self.cursor.eat(Kind::Const);
        self.cursor.bump_any(); // `enum`
        let name_span = self.cursor.span();
        let name = self.current_identifier_text();
        self.cursor.bump_any();
        sink.variable_declaration(name_span, name, VariableKind::Enum, InitKind::Initialized);
        sink.enter_block_scope(self.cursor.span());
        if !self.cursor.eat(Kind::LCurly) {
            self.errors.push(diagnostics::missing_body_for_class(self.cursor.span()));
            sink.exit_block_scope(self.cursor.span());
            return;
        }
        while !matches!(self.cursor.kind(), Kind::RCurly | Kind::Eof) {
            let member_span = self.cursor.span();
            let member_name = self.current_identifier_text();
            self.cursor.bump_any();
            sink.property_declaration(member_span, Some(member_name));
            if self.cursor.eat(Kind::Eq) {
                self.parse_assignment_expression(sink, Context::default());
                self.arena.clear();
            }
            if !self.cursor.eat(Kind::Comma) {
                break;
            }
        }
        self.cursor.eat(Kind::RCurly);
        sink.exit_block_scope(self.cursor.span());
    }

    fn parse_namespace_declaration(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any(); // `namespace`/`module`
        if matches!(self.cursor.kind(), Kind::Str) {
            // `declare module "foo" { ... }` ambient module augmentation
            self.cursor.bump_any();
        } else {
            let name_span = self.cursor.span();
            let name = self.current_identifier_text();
            self.cursor.bump_any();
            sink.variable_declaration(name_span, name, VariableKind::Namespace, InitKind::Initialized);
            while self.cursor.eat(Kind::Dot) {
                self.cursor.bump_any();
            }
        }
        if self.cursor.at(Kind::LCurly) {
            sink.enter_block_scope(self.cursor.span());
            self.state.enter_scope();
            self.cursor.bump_any();
            self.parse_statement_list(sink, ctx.and_ambient(ctx.has_ambient()), StatementContext::StatementList);
            self.cursor.eat(Kind::RCurly);
            self.state.exit_scope();
            sink.exit_block_scope(self.cursor.span());
        } else {
            self.consume_semicolon();
        }
    }

    // --- Modules ------------------------------------------------------------

    fn parse_import_declaration(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        self.cursor.bump_any();
        if self.source_type.is_typescript() && self.cursor.at(Kind::Type) && self.next_is_identifier_or_brace() {
            self.cursor.bump_any();
        }

        if matches!(self.cursor.kind(), Kind::Str) {
            self.cursor.bump_any();
            self.consume_semicolon();
            return;
        }

        if matches!(self.cursor.kind(), Kind::Ident) {
            let span = self.cursor.span();
            let name = self.current_identifier_text();
            self.cursor.bump_any();
            if name == "let" {
                self.errors.push(diagnostics::cannot_import_let(span));
            }
            sink.variable_declaration(span, name, VariableKind::Import, InitKind::Initialized);
            self.cursor.eat(Kind::Comma);
        }

        if self.cursor.eat(Kind::Star) {
            if !self.cursor.eat(Kind::As) {
                self.errors.push(diagnostics::expected_as_before_imported_namespace_alias(self.cursor.span()));
            }
            let span = self.cursor.span();
            let name = self.current_identifier_text();
            self.cursor.bump_any();
            sink.variable_declaration(span, name, VariableKind::Import, InitKind::Initialized);
        } else if self.cursor.eat(Kind::LCurly) {
            while !matches!(self.cursor.kind(), Kind::RCurly | Kind::Eof) {
                self.cursor.eat(Kind::Type);
                self.cursor.bump_any(); // imported name
                let mut span = self.cursor.span();
                let mut name = self.current_identifier_text();
                if self.cursor.eat(Kind::As) {
                    span = self.cursor.span();
                    name = self.current_identifier_text();
                    self.cursor.bump_any();
                }
                sink.variable_declaration(span, name, VariableKind::Import, InitKind::Initialized);
                if !self.cursor.eat(Kind::Comma) {
                    break;
                }
            }
            self.cursor.eat(Kind::RCurly);
        }

        if self.cursor.eat(Kind::From) {
            self.cursor.bump_any(); // module specifier string
        }
        let _ = ctx;
        self.consume_semicolon();
    }

    fn next_is_identifier_or_brace(&mut self) -> bool {
        let checkpoint = self.cursor.begin_transaction();
        self.cursor.bump_any();
        let result = matches!(self.cursor.kind(), Kind::Ident | Kind::LCurly | Kind::Star);
        self.cursor.roll_back_transaction(checkpoint);
        result
    }

    fn parse_export_declaration(&mut self, sink: &mut dyn VisitSink, ctx: Context) {
        let export_span = self.cursor.span();
        self.cursor.bump_any();

        if self.cursor.eat(Kind::Default) {
            match self.cursor.kind() {
                Kind::Function => self.parse_function_declaration_inner(sink, ctx, false, true),
                Kind::Async if self.next_is_function_without_newline() => {
                    self.cursor.bump_any();
                    self.parse_function_declaration_inner(sink, ctx, true, true);
                }
                Kind::Class => self.parse_class_declaration_inner(sink, ctx, true),
                _ => {
                    self.parse_assignment_expression(sink, ctx.and_in(true));
                    self.arena.clear();
                    self.consume_semicolon();
                }
            }
            return;
        }

        if self.cursor.eat(Kind::Star) {
            self.cursor.eat(Kind::As);
            if matches!(self.cursor.kind(), Kind::Ident) {
                self.cursor.bump_any();
            }
            if self.cursor.eat(Kind::From) {
                self.cursor.bump_any();
            }
            self.consume_semicolon();
            return;
        }

        if self.cursor.eat(Kind::LCurly) {
            while !matches!(self.cursor.kind(), Kind::RCurly | Kind::Eof) {
                let span = self.cursor.span();
                let is_let = self.cursor.at(Kind::Let);
                let name = self.current_identifier_text();
                self.cursor.bump_any();
                if is_let {
                    self.errors.push(diagnostics::cannot_export_let(span));
                }
                self.cursor.eat(Kind::As);
                if matches!(self.cursor.kind(), Kind::Ident) {
                    self.cursor.bump_any();
                }
                sink.variable_use(span, name);
                if !self.cursor.eat(Kind::Comma) {
                    break;
                }
            }
            if !self.cursor.eat(Kind::RCurly) {
                self.errors.push(diagnostics::exporting_requires_curlies(export_span));
            }
            if self.cursor.eat(Kind::From) {
                self.cursor.bump_any();
            }
            self.consume_semicolon();
            return;
        }

        match self.cursor.kind() {
            Kind::Var => self.parse_variable_statement(sink, ctx, VariableKind::Var),
            Kind::Let => self.parse_variable_statement(sink, ctx, VariableKind::Let),
            Kind::Const => self.parse_variable_statement(sink, ctx, VariableKind::Const),
            Kind::Function => self.parse_function_declaration(sink, ctx, false),
            Kind::Async if self.next_is_function_without_newline() => {
                self.cursor.bump_any();
                self.parse_function_declaration(sink, ctx, true);
            }
            Kind::Class => self.parse_class_declaration(sink, ctx),
            Kind::Interface if self.source_type.is_typescript() => self.parse_interface_declaration(sink, ctx),
            Kind::Type if self.source_type.is_typescript() => self.parse_type_alias_declaration(sink, ctx),
            Kind::Enum => self.parse_enum_declaration(sink),
            _ => self.errors.push(diagnostics::missing_token_after_export(self.cursor.span())),
        }
    }
}

#[cfg(test)]
mod test {
    use lintium_allocator::Allocator;
    use lintium_ast::{InitKind, VariableKind, VisitEvent, VisitRecorder};
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
    fn stray_catch_is_reported_not_panicked() {
        let (ret, _sink) = parse_js("catch (e) {}");
        assert!(!ret.errors.is_empty());
        assert!(!ret.panicked);
    }

    #[test]
    fn stray_finally_is_reported() {
        let (ret, _sink) = parse_js("finally {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn case_outside_switch_is_reported() {
        let (ret, _sink) = parse_js("case 1: ;");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn case_inside_switch_is_not_reported() {
        let (ret, _sink) = parse_js("switch (x) { case 1: break; }");
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn in_after_c_style_for_initializer_is_reported() {
        let (ret, _sink) = parse_js("for (let x = 1 in y) {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn assignment_target_of_for_of_must_be_a_reference() {
        let (ret, _sink) = parse_js("for (1 of y) {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn for_of_over_identifier_is_clean() {
        let (ret, _sink) = parse_js("for (x of y) {}");
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn anonymous_default_exported_function_is_allowed() {
        let (ret, sink) = parse_js("export default function() {}");
        assert!(ret.errors.is_empty());
        assert!(sink.events.contains(&VisitEvent::EnterFunctionScope));
    }

    #[test]
    fn anonymous_default_exported_class_is_allowed() {
        let (ret, sink) = parse_js("export default class {}");
        assert!(ret.errors.is_empty());
        assert!(sink.events.contains(&VisitEvent::EnterClassScope));
    }

    #[test]
    fn anonymous_function_declaration_outside_export_default_is_reported() {
        let (ret, _sink) = parse_js("function() {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn anonymous_class_declaration_outside_export_default_is_reported() {
        let (ret, _sink) = parse_js("class {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn reserved_word_as_binding_name_is_reported() {
        let (ret, _sink) = parse_js("let if = 1;");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn let_named_let_with_let_is_reported() {
        let (ret, _sink) = parse_js("let let = 1;");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn var_named_let_is_allowed() {
        let (ret, sink) = parse_js("var let = 1;");
        assert!(ret.errors.is_empty());
        assert!(sink.events.iter().any(
            |e| matches!(e, VisitEvent::VariableDeclaration { name, kind: VariableKind::Var, init: InitKind::Initialized } if name == "let")
        ));
    }

    #[test]
    fn class_named_let_is_reported() {
        let (ret, _sink) = parse_js("class let {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn exporting_a_binding_named_let_is_reported() {
        let (ret, _sink) = parse_js("export { let };");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn generic_function_declaration_requires_typescript() {
        let (ret, _sink) = parse_js("function identity<T>(x) { return x; }");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn generic_function_declaration_is_clean_in_typescript() {
        let (ret, _sink) = parse("function identity<T>(x: T): T { return x; }", SourceType::ts());
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn generic_class_declaration_is_clean_in_typescript() {
        let (ret, _sink) = parse("class Box<T> { value: T; }", SourceType::ts());
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn generic_method_is_clean_in_typescript() {
        let (ret, _sink) = parse("class C { identity<T>(x: T): T { return x; } }", SourceType::ts());
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn comma_between_class_members_is_reported() {
        let (ret, _sink) = parse_js("class C { a() {}, b() {} }");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn semicolon_between_class_members_is_allowed() {
        let (ret, _sink) = parse_js("class C { a = 1; b = 2; }");
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn catch_clause_type_annotation_requires_typescript() {
        let (ret, _sink) = parse_js("try {} catch (e: unknown) {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn catch_clause_type_annotation_is_clean_in_typescript() {
        let (ret, _sink) = parse("try {} catch (e: unknown) {}", SourceType::ts());
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn catch_without_a_binding_name_is_reported() {
        let (ret, _sink) = parse_js("try {} catch () {}");
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn catch_without_parentheses_is_allowed() {
        let (ret, _sink) = parse_js("try {} catch {}");
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn label_named_await_is_rejected_in_async_function() {
        let (ret, _sink) = parse_js("async function f() { await: while (false) {} }");
        assert!(ret.errors.iter().any(|e| e.code() == "E0206"));
    }

    #[test]
    fn label_named_yield_is_rejected_in_generator_function() {
        let (ret, _sink) = parse_js("function* g() { yield: while (false) {} }");
        assert!(ret.errors.iter().any(|e| e.code() == "E0358"));
    }

    #[test]
    fn label_named_yield_is_allowed_outside_generator_function() {
        let (ret, _sink) = parse_js("yield: while (false) {}");
        assert!(ret.errors.is_empty());
    }
}
