//! Whole-parse conformance tests.
//!
//! Each test drives `Parser::parse` end to end and asserts on the resulting
//! visit stream and diagnostics, the way a caller (or a future name
//! resolution pass) would observe them. Unit-level behavior of individual
//! parser functions lives in `#[cfg(test)]` modules next to the code under
//! test; this file exercises whole inputs.

use lintium_allocator::Allocator;
use lintium_ast::{InitKind, VariableKind, VisitEvent, VisitRecorder};
use lintium_diagnostics::OxcDiagnostic;
use lintium_parser::{Parser, ParserReturn};
use lintium_span::{SourceText, SourceType};

fn run(source: &str, source_type: SourceType) -> (ParserReturn, VisitRecorder) {
    let allocator = Allocator::default();
    let text = SourceText::new(source);
    let mut sink = VisitRecorder::default();
    let ret = Parser::new(&allocator, &text, source_type).parse(&mut sink);
    (ret, sink)
}

fn run_js(source: &str) -> (ParserReturn, VisitRecorder) {
    run(source, SourceType::default())
}

fn has_code(errors: &[OxcDiagnostic], code: &str) -> bool {
    errors.iter().any(|e| e.code() == code)
}

// --- spec.md §8 concrete end-to-end scenarios -----------------------------

#[test]
fn scenario_1_class_with_method_has_no_diagnostics() {
    let (ret, sink) = run_js("class C { method() {} }");
    assert!(ret.errors.is_empty(), "{:?}", ret.errors);
    assert_eq!(
        sink.events,
        vec![
            VisitEvent::VariableDeclaration {
                name: "C".to_string(),
                kind: VariableKind::Class,
                init: InitKind::Initialized,
            },
            VisitEvent::EnterClassScope,
            VisitEvent::EnterClassScopeBody { name: Some("C".to_string()) },
            VisitEvent::EnterFunctionScope,
            VisitEvent::EnterFunctionScopeBody,
            VisitEvent::ExitFunctionScope,
            VisitEvent::PropertyDeclaration { name: Some("method".to_string()) },
            VisitEvent::ExitClassScope,
            VisitEvent::EndOfModule,
        ]
    );
}

#[test]
fn scenario_2_unclosed_class_block_still_balances_scopes() {
    let (ret, sink) = run_js("class C {");
    assert!(has_code(&ret.errors, "E0199"));
    assert_eq!(
        sink.events
            .iter()
            .filter(|e| matches!(e, VisitEvent::EnterClassScope | VisitEvent::ExitClassScope))
            .count(),
        2,
        "enter/exit class scope must both fire even on unclosed input"
    );
}

#[test]
fn scenario_3_for_of_declares_uninitialized_binding_in_its_own_scope() {
    let (ret, sink) = run_js("for (let x of []) ;");
    assert!(ret.errors.is_empty(), "{:?}", ret.errors);
    assert!(sink.events.contains(&VisitEvent::EnterForScope));
    assert!(sink.events.contains(&VisitEvent::VariableDeclaration {
        name: "x".to_string(),
        kind: VariableKind::Let,
        init: InitKind::Uninitialized,
    }));
    assert!(sink.events.contains(&VisitEvent::ExitForScope));
}

#[test]
fn scenario_4_lexical_declaration_in_if_body_is_reported_but_still_visited() {
    let (ret, sink) = run_js("if (cond) let x = y;");
    assert!(has_code(&ret.errors, "E0150"));
    assert!(sink.events.contains(&VisitEvent::VariableUse { name: "cond".to_string() }));
    assert!(sink.events.contains(&VisitEvent::VariableUse { name: "y".to_string() }));
    assert!(sink.events.contains(&VisitEvent::VariableDeclaration {
        name: "x".to_string(),
        kind: VariableKind::Let,
        init: InitKind::Initialized,
    }));
}

#[test]
fn scenario_5_class_named_await_in_async_function_is_reported() {
    let (ret, sink) = run_js("async function f() { class await {} }");
    assert!(has_code(&ret.errors, "E0069"));
    assert!(sink.events.contains(&VisitEvent::VariableDeclaration {
        name: "await".to_string(),
        kind: VariableKind::Class,
        init: InitKind::Initialized,
    }));
}

#[test]
fn scenario_6_asi_eats_return_argument_and_warns_on_the_return_keyword() {
    let (ret, sink) = run_js("function f() {\nreturn\nx\n}");
    assert!(has_code(&ret.errors, "E0179"));
    let warning = ret.errors.iter().find(|e| e.code() == "E0179").unwrap();
    assert_eq!(warning.severity(), lintium_diagnostics::Severity::Warning);
    // `x` is still visited, as a separate expression statement after the
    // ASI-terminated `return` -- not as the return's argument.
    assert!(sink.events.contains(&VisitEvent::VariableUse { name: "x".to_string() }));
}

#[test]
fn scenario_7_readonly_field_in_javascript_is_reported_but_field_still_declared() {
    let (ret, sink) = run_js("class C { readonly field; }");
    assert!(has_code(&ret.errors, "E0230"));
    assert!(sink.events.contains(&VisitEvent::PropertyDeclaration { name: Some("field".to_string()) }));
}

#[test]
fn scenario_8_duplicated_switch_cases_is_a_warning_referencing_both_spans() {
    let (ret, sink) = run_js("switch (x) { case 1: break; case 1: break; }");
    assert!(has_code(&ret.errors, "E0347"));
    let dup = ret.errors.iter().find(|e| e.code() == "E0347").unwrap();
    assert_eq!(dup.severity(), lintium_diagnostics::Severity::Warning);
    assert_eq!(dup.labels().len(), 2, "duplicated-case diagnostic must reference both case spans");
    assert!(sink.events.contains(&VisitEvent::VariableUse { name: "x".to_string() }));
}

// --- spec.md §8 invariants -------------------------------------------------

const INVARIANT_SAMPLES: &[&str] = &[
    "",
    "let x = 1;",
    "class C { method() {} }",
    "class C {",
    "for (let x of []) ;",
    "if (cond) let x = y;",
    "async function f() { class await {} }",
    "function* g() { yield 1; }",
    "switch (x) { case 1: break; case 1: break; }",
    "try { f() } catch (e) { g(e) } finally { h() }",
    "(1 + 2;",
    "const { a, b: [c, ...d] = [] } = e;",
    "label: for (;;) { break label; }",
    "const f = (a, b = 1, ...rest) => a + b;",
    "class C extends D { #x = 1; get y() { return this.#x; } }",
    "interface Dict { [key: string]: number; move(dx: number): void; }",
];

#[test]
fn invariant_span_soundness() {
    for source in INVARIANT_SAMPLES {
        let text = SourceText::new(source);
        let (ret, _sink) = run_js(source);
        for diag in &ret.errors {
            for label in diag.labels() {
                assert!(
                    label.span.start <= label.span.end && label.span.end <= text.len(),
                    "diagnostic {} on {:?} has out-of-bounds span {:?} (len {})",
                    diag.code(),
                    source,
                    label.span,
                    text.len()
                );
            }
        }
    }
}

#[test]
fn invariant_scope_balance() {
    for source in INVARIANT_SAMPLES {
        let (_ret, sink) = run_js(source);
        let mut depth = 0i32;
        for event in &sink.events {
            match event {
                VisitEvent::EnterBlockScope
                | VisitEvent::EnterFunctionScope
                | VisitEvent::EnterClassScope
                | VisitEvent::EnterForScope
                | VisitEvent::EnterWithScope
                | VisitEvent::EnterIndexSignatureScope => depth += 1,
                VisitEvent::ExitBlockScope
                | VisitEvent::ExitFunctionScope
                | VisitEvent::ExitClassScope
                | VisitEvent::ExitForScope
                | VisitEvent::ExitWithScope
                | VisitEvent::ExitIndexSignatureScope => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0, "scope exited before it was entered for input {:?}", source);
        }
        assert_eq!(depth, 0, "unbalanced enter/exit scope events for input {:?}", source);
    }
}

#[test]
fn invariant_lexer_determinism() {
    for source in INVARIANT_SAMPLES {
        let (first, _) = run_js(source);
        let (second, _) = run_js(source);
        assert_eq!(
            first.errors.iter().map(OxcDiagnostic::code).collect::<Vec<_>>(),
            second.errors.iter().map(OxcDiagnostic::code).collect::<Vec<_>>(),
            "repeated parse of {:?} produced different diagnostics",
            source
        );
    }
}

#[test]
fn invariant_asi_idempotence() {
    let without_semicolon = "let x = 1\nlet y = 2";
    let with_semicolon = "let x = 1;\nlet y = 2;";
    let (ret_a, sink_a) = run_js(without_semicolon);
    let (ret_b, sink_b) = run_js(with_semicolon);
    assert!(ret_a.errors.is_empty());
    assert!(ret_b.errors.is_empty());
    assert_eq!(sink_a.events, sink_b.events);
}

#[test]
fn invariant_transaction_neutrality_on_rolled_back_arrow_lookahead() {
    // `(a, b)` alone is a parenthesized comma expression, not an arrow
    // parameter list: the arrow lookahead transaction must roll back
    // cleanly and leave the same visit/diagnostic stream as parsing the
    // paren expression directly would.
    let (ret_plain, sink_plain) = run_js("(a, b);");
    assert!(ret_plain.errors.is_empty());
    assert_eq!(
        sink_plain.events,
        vec![
            VisitEvent::VariableUse { name: "a".to_string() },
            VisitEvent::VariableUse { name: "b".to_string() },
            VisitEvent::EndOfModule,
        ]
    );
}

// --- `let` ambiguity (spec.md §4.4) ----------------------------------------

#[test]
fn let_followed_by_bracket_on_the_same_line_is_a_destructuring_declaration() {
    let (ret, sink) = run_js("let [x] = y;");
    assert!(ret.errors.is_empty(), "{:?}", ret.errors);
    assert!(sink.events.contains(&VisitEvent::VariableDeclaration {
        name: "x".to_string(),
        kind: VariableKind::Let,
        init: InitKind::Initialized,
    }));
}

#[test]
fn let_followed_by_bracket_on_the_next_line_is_an_identifier_reference() {
    // `let` on its own line is an identifier, not a declarator keyword, so
    // `[x]` continues the same expression as a member-index access rather
    // than starting a destructuring pattern.
    let (ret, sink) = run_js("let\n[x] = y;");
    assert!(ret.errors.is_empty(), "{:?}", ret.errors);
    assert!(!sink.events.iter().any(|e| matches!(e, VisitEvent::VariableDeclaration { kind: VariableKind::Let, .. })));
}

// --- mode monotonicity (spec.md §8) ---------------------------------------

#[test]
fn typescript_only_constructs_are_clean_in_typescript_and_diagnosed_in_javascript() {
    let source = "interface Point { x: number; y: number; }";
    let (ts_ret, _) = run(source, SourceType::ts());
    assert!(ts_ret.errors.is_empty(), "{:?}", ts_ret.errors);

    let (js_ret, _) = run_js(source);
    assert!(!js_ret.errors.is_empty());
}

#[test]
fn plain_javascript_that_parses_cleanly_also_parses_cleanly_as_typescript() {
    let source = "class Animal { constructor(name) { this.name = name; } speak() { return this.name; } }";
    let (js_ret, js_sink) = run_js(source);
    let (ts_ret, ts_sink) = run(source, SourceType::ts());
    assert!(js_ret.errors.is_empty(), "{:?}", js_ret.errors);
    assert!(ts_ret.errors.is_empty(), "{:?}", ts_ret.errors);
    assert_eq!(js_sink.events, ts_sink.events);
}

// --- interface members (spec.md §4.2, §4.3) --------------------------------

#[test]
fn interface_index_signature_opens_and_closes_its_own_scope() {
    let (ret, sink) = run("interface Dict { [key: string]: number; }", SourceType::ts());
    assert!(ret.errors.is_empty(), "{:?}", ret.errors);
    assert!(sink.events.contains(&VisitEvent::EnterIndexSignatureScope));
    assert!(sink.events.contains(&VisitEvent::VariableDeclaration {
        name: "key".to_string(),
        kind: VariableKind::Parameter,
        init: InitKind::Initialized,
    }));
    assert!(sink.events.contains(&VisitEvent::ExitIndexSignatureScope));
}

#[test]
fn interface_members_are_individually_declared() {
    let (ret, sink) = run("interface Point { x: number; y: number; move(dx: number): void; }", SourceType::ts());
    assert!(ret.errors.is_empty(), "{:?}", ret.errors);
    assert!(sink.events.contains(&VisitEvent::PropertyDeclaration { name: Some("x".to_string()) }));
    assert!(sink.events.contains(&VisitEvent::PropertyDeclaration { name: Some("y".to_string()) }));
    assert!(sink.events.contains(&VisitEvent::PropertyDeclaration { name: Some("move".to_string()) }));
    assert!(sink.events.contains(&VisitEvent::EnterFunctionScope));
    assert!(sink.events.contains(&VisitEvent::ExitFunctionScope));
}

#[test]
fn unclosed_interface_body_is_reported_with_its_own_diagnostic() {
    let (ret, _sink) = run("interface Broken {", SourceType::ts());
    assert!(has_code(&ret.errors, "E0359"));
}

// --- label-named-await/yield restrictions (spec.md §4.4) -------------------

#[test]
fn label_named_await_rejected_only_inside_async_function() {
    let (outside, _) = run_js("await: while (false) {}");
    assert!(outside.errors.is_empty(), "{:?}", outside.errors);

    let (inside, _) = run_js("async function f() { await: while (false) {} }");
    assert!(has_code(&inside.errors, "E0206"));
}

#[test]
fn label_named_yield_rejected_only_inside_generator_function() {
    let (outside, _) = run_js("yield: while (false) {}");
    assert!(outside.errors.is_empty(), "{:?}", outside.errors);

    let (inside, _) = run_js("function* g() { yield: while (false) {} }");
    assert!(has_code(&inside.errors, "E0358"));
}
