//! One constructor function per diagnostic the parser and lexer can raise.
//!
//! Each function builds an [`OxcDiagnostic`] from the shared
//! [`DiagnosticKind`] metadata table plus whatever spans/labels make the
//! specific occurrence actionable. Keeping construction here (rather than
//! inline at every call site) means the message wording for a given mistake
//! lives in exactly one place.

use lintium_diagnostics::{DiagnosticKind, OxcDiagnostic};
use lintium_span::Span;

fn kind(kind: DiagnosticKind, span: Span) -> OxcDiagnostic {
    OxcDiagnostic::new(kind, kind.default_message().to_string()).with_label(span)
}

pub fn unexpected_token(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnexpectedToken, span)
        .with_help("this token was not expected here")
}

pub fn unmatched_parenthesis(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnmatchedParenthesis, span)
}

pub fn unmatched_indexing_bracket(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnmatchedIndexingBracket, span)
}

pub fn unclosed_block_comment(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnclosedBlockComment, span)
}

pub fn unclosed_class_block(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnclosedClassBlock, span)
}

pub fn unclosed_interface_block(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnclosedInterfaceBlock, span)
}

pub fn missing_semicolon_after_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingSemicolonAfterStatement, span)
}

pub fn invalid_expression_left_of_assignment(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::InvalidExpressionLeftOfAssignment, span)
}

pub fn missing_operand_for_operator(span: Span, operator: &str) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingOperandForOperator, span)
        .with_help(format!("'{operator}' requires an operand"))
}

pub fn missing_parentheses_around_unary_lhs_of_exponent(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingParenthesesAroundUnaryLhsOfExponent, span)
}

pub fn newline_not_allowed_between_async_and_parameter_list(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::NewlineNotAllowedBetweenAsyncAndParameterList, span)
}

pub fn return_statement_returns_nothing(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ReturnStatementReturnsNothing, span)
}

pub fn statement_before_first_switch_case(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::StatementBeforeFirstSwitchCase, span)
}

pub fn typescript_readonly_fields_not_allowed_in_javascript(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::TypeScriptReadonlyFieldsNotAllowedInJavaScript, span)
}

pub fn unexpected_control_character(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnexpectedControlCharacter, span)
}

pub fn invalid_hex_escape_sequence(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::InvalidHexEscapeSequence, span)
}

pub fn escaped_code_point_in_unicode_out_of_range(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::EscapedCodePointInUnicodeOutOfRange, span)
}

pub fn expected_hex_digits_in_unicode_escape(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExpectedHexDigitsInUnicodeEscape, span)
}

pub fn unclosed_identifier_escape_sequence(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnclosedIdentifierEscapeSequence, span)
}

pub fn unclosed_string_literal(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnclosedStringLiteral, span)
}

pub fn lexical_declaration_not_allowed_in_body(span: Span, body_kind: &str) -> OxcDiagnostic {
    kind(DiagnosticKind::LexicalDeclarationNotAllowedInBody, span)
        .with_help(format!("wrap the {body_kind} body in a block statement"))
}

pub fn duplicated_cases_in_switch_statement(span: Span, previous: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::DuplicatedCasesInSwitchStatement, span)
        .with_label(lintium_diagnostics::DiagnosticLabel::new(previous).with_message("first used here"))
}

pub fn cannot_declare_await_in_async_function(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CannotDeclareAwaitInAsyncFunction, span)
}

pub fn cannot_declare_yield_in_generator_function(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CannotDeclareYieldInGeneratorFunction, span)
}

pub fn cannot_declare_class_named_let(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CannotDeclareClassNamedLet, span)
}

pub fn cannot_declare_variable_named_let_with_let(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CannotDeclareVariableNamedLetWithLet, span)
}

pub fn cannot_declare_variable_with_keyword_name(span: Span, keyword: &str) -> OxcDiagnostic {
    kind(DiagnosticKind::CannotDeclareVariableWithKeywordName, span)
        .with_help(format!("'{keyword}' is a reserved word"))
}

pub fn await_operator_outside_async(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::AwaitOperatorOutsideAsync, span)
}

pub fn await_followed_by_arrow_function(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::AwaitFollowedByArrowFunction, span)
}

pub fn label_named_await_not_allowed_in_async_function(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::LabelNamedAwaitNotAllowedInAsyncFunction, span)
}

pub fn label_named_yield_not_allowed_in_generator_function(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::LabelNamedYieldNotAllowedInGeneratorFunction, span)
}

pub fn redundant_await(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::RedundantAwait, span)
}

pub fn c_style_for_loop_is_missing_third_component(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CStyleForLoopIsMissingThirdComponent, span)
}

pub fn cannot_assign_to_loop_variable_in_for_of_or_in_loop(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CannotAssignToLoopVariableInForOfOrInLoop, span)
}

pub fn expected_expression_for_switch_case(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExpectedExpressionForSwitchCase, span)
}

pub fn expected_parentheses_around_switch_condition(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExpectedParenthesesAroundSwitchCondition, span)
}

pub fn in_disallowed_in_c_style_for_loop(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::InDisallowedInCStyleForLoop, span)
}

pub fn invalid_break(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::InvalidBreak, span)
}

pub fn invalid_continue(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::InvalidContinue, span)
}

pub fn missing_body_for_catch_clause(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForCatchClause, span)
}

pub fn missing_body_for_class(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForClass, span)
}

pub fn missing_body_for_do_while_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForDoWhileStatement, span)
}

pub fn missing_body_for_finally_clause(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForFinallyClause, span)
}

pub fn missing_body_for_for_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForForStatement, span)
}

pub fn missing_body_for_if_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForIfStatement, span)
}

pub fn missing_body_for_while_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForWhileStatement, span)
}

pub fn missing_body_for_switch_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForSwitchStatement, span)
}

pub fn missing_body_for_try_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForTryStatement, span)
}

pub fn missing_body_for_interface(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForTypeScriptInterface, span)
}

pub fn missing_body_for_namespace(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingBodyForTypeScriptNamespace, span)
}

pub fn missing_condition_for_if_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingConditionForIfStatement, span)
}

pub fn missing_condition_for_while_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingConditionForWhileStatement, span)
}

pub fn missing_condition_for_switch_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingConditionForSwitchStatement, span)
}

pub fn missing_catch_or_finally_for_try_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingCatchOrFinallyForTryStatement, span)
}

pub fn missing_catch_variable_between_parentheses(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingCatchVariableBetweenParentheses, span)
}

pub fn expected_variable_name_for_catch(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExpectedVariableNameForCatch, span)
}

pub fn catch_without_try(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CatchWithoutTry, span)
}

pub fn finally_without_try(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::FinallyWithoutTry, span)
}

pub fn unexpected_case_outside_switch_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnexpectedCaseOutsideSwitchStatement, span)
}

pub fn unexpected_default_outside_switch_statement(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnexpectedDefaultOutsideSwitchStatement, span)
}

pub fn missing_for_loop_header(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingForLoopHeader, span)
}

pub fn missing_semicolon_between_for_loop_init_and_condition(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingSemicolonBetweenForLoopInitAndCondition, span)
}

pub fn missing_semicolon_between_for_loop_condition_and_update(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingSemicolonBetweenForLoopConditionAndUpdate, span)
}

pub fn unexpected_semicolon_in_c_style_for_loop(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnexpectedSemicolonInCStyleForLoop, span)
}

pub fn missing_for_loop_rhs_or_components_after_declaration(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingForLoopRhsOrComponentsAfterDeclaration, span)
}

pub fn missing_for_loop_rhs_or_components_after_expression(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingForLoopRhsOrComponentsAfterExpression, span)
}

pub fn cannot_export_let(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CannotExportLet, span)
}

pub fn cannot_import_let(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CannotImportLet, span)
}

pub fn missing_token_after_export(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingTokenAfterExport, span)
}

pub fn unexpected_token_after_export(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnexpectedTokenAfterExport, span)
}

pub fn missing_name_of_exported_class(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingNameOfExportedClass, span)
}

pub fn missing_name_of_exported_function(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingNameOfExportedFunction, span)
}

pub fn exporting_requires_curlies(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExportingRequiresCurlies, span)
}

pub fn exporting_requires_default(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExportingRequiresDefault, span)
}

pub fn expected_as_before_imported_namespace_alias(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExpectedAsBeforeImportedNamespaceAlias, span)
}

pub fn comma_not_allowed_between_class_methods(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CommaNotAllowedBetweenClassMethods, span)
}

pub fn assignment_to_const_variable(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::AssignmentToConstVariable, span)
}

pub fn missing_colon_in_conditional_expression(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingColonInConditionalExpression, span)
}

pub fn missing_value_for_object_literal_entry(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingValueForObjectLiteralEntry, span)
}

pub fn missing_key_for_object_entry(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingKeyForObjectEntry, span)
}

pub fn expected_comma_to_separate_object_literal_entries(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExpectedCommaToSeparateObjectLiteralEntries, span)
}

pub fn missing_arrow_function_parameter_list(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingArrowFunctionParameterList, span)
}

pub fn missing_operator_between_expression_and_arrow_function(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::MissingOperatorBetweenExpressionAndArrowFunction, span)
}

pub fn extra_comma_not_allowed_between_arguments(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ExtraCommaNotAllowedBetweenArguments, span)
}

pub fn typescript_type_annotations_not_allowed_in_javascript(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::TypeScriptTypeAnnotationsNotAllowedInJavaScript, span)
}

pub fn typescript_non_null_assertion_not_allowed_in_javascript(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::TypeScriptNonNullAssertionNotAllowedInJavaScript, span)
}

pub fn typescript_satisfies_not_allowed_in_javascript(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::TypeScriptSatisfiesNotAllowedInJavaScript, span)
}

pub fn typescript_generics_not_allowed_in_javascript(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::TypeScriptGenericsNotAllowedInJavaScript, span)
}

pub fn typescript_optional_parameters_not_allowed_in_javascript(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::TypeScriptOptionalParametersNotAllowedInJavaScript, span)
}

pub fn non_null_assertion_not_allowed_in_parameter(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::NonNullAssertionNotAllowedInParameter, span)
}

pub fn optional_parameter_cannot_have_initializer(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::OptionalParameterCannotHaveInitializer, span)
}

pub fn this_parameter_not_allowed_in_arrow_functions(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::ThisParameterNotAllowedInArrowFunctions, span)
}

pub fn comma_not_allowed_after_spread_parameter(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::CommaNotAllowedAfterSpreadParameter, span)
}

pub fn depth_limit_exceeded(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::DepthLimitExceeded, span)
        .with_help("the input nests expressions or statements too deeply for this parser to process safely")
}

pub fn unexpected_eof(span: Span) -> OxcDiagnostic {
    kind(DiagnosticKind::UnexpectedEndOfFile, span).with_help("unexpected end of file")
}
