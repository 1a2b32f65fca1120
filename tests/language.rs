use std::fs;

use pretty_assertions::assert_eq;
use simplelang::{
    ast::Statement,
    error::Diagnostic,
    interpreter::{
        lexer::{TokenKind, scan},
        parser::core::parse_program,
    },
    run_program,
};
use walkdir::WalkDir;

fn run(source: &str) -> Result<String, Diagnostic> {
    let mut output = Vec::new();
    run_program(source, &mut output)?;
    Ok(String::from_utf8(output).expect("program output is valid UTF-8"))
}

fn assert_output(source: &str, expected: &str) {
    match run(source) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}\nSource:\n{source}"),
    }
}

fn assert_failure(source: &str) -> Diagnostic {
    match run(source) {
        Ok(output) => {
            panic!("Script succeeded but was expected to fail.\nSource:\n{source}\nOutput:\n{output}")
        },
        Err(e) => e,
    }
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "sl")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&source) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn addition_of_declared_numbers() {
    assert_output("number x = 10\nnumber y = 5\nprint x + y", "15\n");
}

#[test]
fn text_concatenation() {
    assert_output("print \"Hello, \" + \"World\"", "Hello, World\n");
}

#[test]
fn if_else_picks_the_right_branch() {
    assert_output("number x = 15\nif x > 10 then\n print \"big\"\nelse\n print \"small\"\nend",
                  "big\n");
    assert_output("number x = 5\nif x > 10 then\n print \"big\"\nelse\n print \"small\"\nend",
                  "small\n");
}

#[test]
fn counted_loop_prints_each_value() {
    assert_output("loop i from 1 to 3\n print i\nend", "1\n2\n3\n");
}

#[test]
fn procedure_call_prints_only_its_own_output() {
    assert_output("function greet(text n)\n print \"Hi \" + n\nend\ngreet(\"Ada\")",
                  "Hi Ada\n");
}

#[test]
fn loop_assignment_updates_outer_accumulator() {
    assert_output("number n = 5\nnumber r = 1\nloop i from 1 to n\n r = r * i\nend\nprint r",
                  "120\n");
}

#[test]
fn division_by_zero_is_an_error() {
    let e = assert_failure("number x = 1\nnumber y = 0\nprint x / y");
    assert!(matches!(e, Diagnostic::Runtime(_)));
    assert!(e.to_string().contains("division by zero"));
}

#[test]
fn empty_program_produces_no_output() {
    assert_output("", "");
    assert_output("   \n\t\n", "");
}

#[test]
fn output_already_emitted_survives_a_late_failure() {
    let mut output = Vec::new();
    let result = run_program("print \"first\"\nprint missing", &mut output);

    assert!(result.is_err());
    assert_eq!(String::from_utf8(output).unwrap(), "first\n");
}

#[test]
fn running_twice_gives_identical_output() {
    let source = "number seed = 3\nloop i from 1 to 4\n seed = seed * i\n print seed\nend";
    assert_eq!(run(source).unwrap(), run(source).unwrap());
}

#[test]
fn arithmetic_matches_ieee_doubles() {
    assert_output("print 0.1 + 0.2", "0.30000000000000004\n");
    assert_output("print 10 / 4", "2.5\n");
    assert_output("print 2 + 3 * 4", "14\n");
    assert_output("print (2 + 3) * 4", "20\n");
    assert_output("print 7 - 2 - 1", "4\n");
}

#[test]
fn literal_display_round_trips() {
    assert_output("print 42", "42\n");
    assert_output("print 15.0", "15\n");
    assert_output("print 3.5", "3.5\n");
    assert_output("print true", "true\n");
    assert_output("print false", "false\n");
    assert_output("print \"\"", "\n");
}

#[test]
fn unary_operators() {
    assert_output("print -5", "-5\n");
    assert_output("print --5", "5\n");
    assert_output("print !true", "false\n");
    assert_output("print not true", "false\n");
    assert_output("print !not false", "false\n");
    assert_failure("print -true");
    assert_failure("print !\"text\"");
}

#[test]
fn relational_comparisons() {
    assert_output("print 1 < 2", "true\n");
    assert_output("print 2 <= 2", "true\n");
    assert_output("print 1 > 2", "false\n");
    assert_output("print 2 >= 3", "false\n");

    let e = assert_failure("print 1 < \"two\"");
    assert!(e.to_string().contains("cannot compare"));
}

#[test]
fn equality_uses_a_small_tolerance() {
    assert_output("print 0.1 + 0.2 == 0.3", "true\n");
    assert_output("print 1 == 1.0000001", "false\n");
}

#[test]
fn mixed_type_equality_is_defined() {
    assert_output("print 1 == \"1\"", "false\n");
    assert_output("print 1 != \"1\"", "true\n");
    assert_output("print true == 1", "false\n");
}

#[test]
fn text_and_number_concatenation() {
    assert_output("print \"Result: \" + 8", "Result: 8\n");
    assert_output("print 8 + \" points\"", "8 points\n");
    assert_output("print \"pi is roughly \" + 3.14", "pi is roughly 3.14\n");
}

#[test]
fn logical_connectives() {
    assert_output("print true and false", "false\n");
    assert_output("print true or false", "true\n");
    assert_output("print true and true or false", "true\n");
    assert_failure("print 1 and true");
}

#[test]
fn logical_operators_do_not_short_circuit() {
    // A short-circuiting `and` would print false; here the right operand is
    // evaluated regardless and its division fails first.
    let e = assert_failure("print false and 1 / 0 > 0");
    assert!(e.to_string().contains("division by zero"));
}

#[test]
fn empty_loop_range_runs_zero_iterations() {
    assert_output("loop i from 5 to 1\n print i\nend\nprint \"done\"", "done\n");
}

#[test]
fn equal_loop_bounds_run_one_iteration() {
    assert_output("loop i from 5 to 5\n print i\nend", "5\n");
}

#[test]
fn fractional_loop_bounds_step_by_one() {
    assert_output("loop i from 1.5 to 3\n print i\nend", "1.5\n2.5\n");
}

#[test]
fn loop_variable_shadows_outer_binding() {
    assert_output("number i = 100\nloop i from 1 to 2\n print i\nend\nprint i",
                  "1\n2\n100\n");
}

#[test]
fn loop_variable_is_not_visible_after_the_loop() {
    let e = assert_failure("loop i from 1 to 2\nend\nprint i");
    assert!(e.to_string().contains("undefined variable"));
}

#[test]
fn loop_body_declarations_do_not_escape() {
    let e = assert_failure("loop i from 1 to 2\n number inner = i\nend\nprint inner");
    assert!(e.to_string().contains("undefined variable"));
}

#[test]
fn loop_bounds_must_be_numbers() {
    let e = assert_failure("loop i from \"a\" to 3\nend");
    assert!(e.to_string().contains("loop bounds must be numbers"));
}

#[test]
fn function_parameters_are_local() {
    assert_failure("function f(number a)\n print a\nend\nf(1)\nprint a");
}

#[test]
fn function_arity_is_checked() {
    let e = assert_failure("function add(number a, number b)\n print a + b\nend\nadd(3)");
    assert!(e.to_string().contains("expects 2 arguments, got 1"));
}

#[test]
fn function_argument_types_are_checked() {
    let e = assert_failure("function shout(text line)\n print line\nend\nshout(42)");
    assert!(e.to_string().contains("parameter line expects text, got number"));
}

#[test]
fn undefined_function_is_an_error() {
    let e = assert_failure("nope(1)");
    assert!(e.to_string().contains("undefined function"));
}

#[test]
fn function_redeclaration_overwrites() {
    assert_output("function f()\n print \"old\"\nend\nfunction f()\n print \"new\"\nend\nf()",
                  "new\n");
}

#[test]
fn recursion_works_through_scope_lookup() {
    let source = "function countdown(number n)\n if n > 0 then\n  print n\n  countdown(n - 1)\n \
                  end\nend\ncountdown(3)";
    assert_output(source, "3\n2\n1\n");
}

#[test]
fn call_used_as_an_expression_yields_void() {
    assert_output("function f()\nend\nprint f()", "void\n");
}

#[test]
fn declaring_from_a_void_call_is_a_type_error() {
    let e = assert_failure("function f()\nend\nnumber x = f()");
    assert!(e.to_string().contains("cannot assign void"));
}

#[test]
fn bare_identifier_prints_its_value() {
    assert_output("number x = 7\nx", "7\n");
    assert_output("number x = 7\nx + 1", "8\n");
}

#[test]
fn declaration_type_is_checked() {
    let e = assert_failure("number x = \"nope\"");
    assert!(e.to_string().contains("type mismatch"));
}

#[test]
fn assignment_does_not_recheck_the_declared_type() {
    assert_output("number x = 1\nx = \"hi\"\nprint x", "hi\n");
}

#[test]
fn assignment_to_undeclared_variable_is_an_error() {
    let e = assert_failure("x = 1");
    assert!(matches!(e, Diagnostic::Runtime(_)));
    assert!(e.to_string().contains("undefined variable"));
}

#[test]
fn malformed_number_fails_at_evaluation_not_scanning() {
    // The scanner happily eats the extra dot; only using the literal fails.
    let tokens = scan("print 1.2.3").unwrap();
    assert_eq!(tokens.len(), 2);

    let e = assert_failure("print 1.2.3");
    assert!(e.to_string().contains("invalid number: 1.2.3"));
}

#[test]
fn unexpected_character_reports_its_position() {
    let e = assert_failure("number x = 1\nprint x @ 2");
    assert!(matches!(e, Diagnostic::Lex(_)));
    assert_eq!(e.to_string(),
               "Lexical error: line 2, column 9: unexpected character: @");
}

#[test]
fn unterminated_string_reports_the_opening_quote() {
    let e = assert_failure("print \"oops");
    assert!(matches!(e, Diagnostic::Lex(_)));
    assert!(e.to_string().contains("unterminated string"));
}

#[test]
fn text_literals_may_span_lines() {
    assert_output("print \"two\nlines\"", "two\nlines\n");
}

#[test]
fn scanner_keeps_exact_lexemes_and_positions() {
    let tokens = scan("number x = 42").unwrap();

    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, ["number", "x", "=", "42"]);

    let columns: Vec<usize> = tokens.iter().map(|t| t.column).collect();
    assert_eq!(columns, [1, 8, 10, 12]);
    assert!(tokens.iter().all(|t| t.line == 1));
}

#[test]
fn scanner_treats_word_operators_as_operators() {
    let tokens = scan("and or not").unwrap();
    let kinds: Vec<&TokenKind> = tokens.iter().map(|t| &t.kind).collect();
    assert_eq!(kinds, [&TokenKind::And, &TokenKind::Or, &TokenKind::Not]);
}

#[test]
fn scanner_splits_two_character_operators() {
    let tokens = scan("== != <= >= < > = !").unwrap();
    let kinds: Vec<&TokenKind> = tokens.iter().map(|t| &t.kind).collect();
    assert_eq!(kinds,
               [&TokenKind::Equal,
                &TokenKind::NotEqual,
                &TokenKind::LessEqual,
                &TokenKind::GreaterEqual,
                &TokenKind::Less,
                &TokenKind::Greater,
                &TokenKind::Assign,
                &TokenKind::Not]);
}

#[test]
fn empty_source_scans_to_no_tokens() {
    assert!(scan("").unwrap().is_empty());
    assert!(scan(" \t\r\n").unwrap().is_empty());
}

#[test]
fn parser_preserves_statement_order() {
    let tokens = scan("number x = 1\nx = 2\nprint x\nloop i from 1 to 2\nend").unwrap();
    let program = parse_program(&tokens).unwrap();

    assert_eq!(program.statements.len(), 4);
    assert!(matches!(program.statements[0], Statement::VariableDeclaration { .. }));
    assert!(matches!(program.statements[1], Statement::Assignment { .. }));
    assert!(matches!(program.statements[2], Statement::Print { .. }));
    assert!(matches!(program.statements[3], Statement::Loop { .. }));
}

#[test]
fn parse_errors_name_the_offending_lexeme() {
    let tokens = scan("if true\n print 1\nend").unwrap();
    let e = parse_program(&tokens).unwrap_err();
    assert!(e.to_string().contains("expected 'then' after condition"));

    let tokens = scan("loop 1 from 1 to 2\nend").unwrap();
    let e = parse_program(&tokens).unwrap_err();
    assert!(e.to_string().contains("expected identifier after 'loop'"));
}

#[test]
fn truncated_blocks_are_parse_errors() {
    let e = assert_failure("if true then\n print 1");
    assert!(matches!(e, Diagnostic::Parse(_)));

    let e = assert_failure("function f(");
    assert!(matches!(e, Diagnostic::Parse(_)));
}

#[test]
fn trailing_commas_are_rejected() {
    let e = assert_failure("function f(number a,)\nend");
    assert!(matches!(e, Diagnostic::Parse(_)));
}

#[test]
fn statements_cannot_start_with_a_literal() {
    let e = assert_failure("5 + 5");
    assert!(matches!(e, Diagnostic::Parse(_)));
    assert!(e.to_string().contains("unexpected token"));
}

#[test]
fn single_character_identifiers_work() {
    assert_output("number a = 1\nprint a", "1\n");
}

#[test]
fn deeply_nested_expressions_evaluate() {
    let depth = 128;
    let source = format!("print {}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_output(&source, "1\n");
}

#[test]
fn nested_constructs_scope_correctly() {
    let source = "function table(number n)\n loop i from 1 to 3\n  print n + \" x \" + i + \" = \" \
                  + (n * i)\n end\nend\ntable(2)";
    assert_output(source, "2 x 1 = 2\n2 x 2 = 4\n2 x 3 = 6\n");
}
