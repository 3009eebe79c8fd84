//! End-to-end analyzer tests over parsed source.

use pretty_assertions::assert_eq;
use shank_diagnostic::ErrorCode;
use shank_ir::Program;

use crate::{analyze, SemanticError};

fn program(source: &str) -> Program {
    let tokens = shank_lexer::lex(source).unwrap();
    shank_parse::parse(&tokens).unwrap()
}

fn check(source: &str) -> Result<(), SemanticError> {
    analyze(&program(source))
}

fn check_main(decls: &str, body: &str) -> Result<(), SemanticError> {
    check(&format!("define main()\n{decls}{body}"))
}

#[test]
fn well_typed_program_passes() {
    let source = "define main()
variables total : real
variables i : integer
variables words : string
    total := 0
    words := \"a\" + \"b\"
    for i from 1 to 10
        total := total + i / 2
    if words = \"ab\" then
        write(total, words)
    elsif total > 3 then
        write(total)
    else
        write(i)
";
    assert_eq!(check(source), Ok(()));
}

#[test]
fn string_into_integer_is_rejected() {
    let err = check_main("variables count : integer\n", "    count := \"text\"\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(
        err.to_string(),
        "In function 'main': Type mismatch in assignment to 'count'. \
         Expected 'integer' but got 'string'"
    );
}

#[test]
fn integer_into_real_is_allowed() {
    assert_eq!(check_main("variables r : real\n", "    r := 3\n"), Ok(()));
}

#[test]
fn real_into_integer_is_rejected() {
    let err = check_main("variables n : integer\n", "    n := 3.0\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2001);
}

#[test]
fn parameters_and_constants_are_in_scope() {
    let source = "define scale(x : real; var out : real)
constants factor = 2
    out := x * factor

define main()
    write(1)
";
    assert_eq!(check(source), Ok(()));
}

#[test]
fn locals_shadow_parameters() {
    let source = "define f(x : integer)
variables x : string
    x := \"shadowed\"
";
    assert_eq!(check(source), Ok(()));
}

#[test]
fn undeclared_variable_in_write_argument() {
    let err = check_main("", "    write(missing)\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2002);
    assert_eq!(
        err.to_string(),
        "In function 'main': Variable 'missing' not declared"
    );
}

#[test]
fn non_boolean_conditions() {
    let decls = "variables n : integer\n";
    let cases = [
        ("    if n then\n        n := 1\n", "If"),
        (
            "    if n = 1 then\n        n := 1\n    elsif n then\n        n := 2\n",
            "Else-if",
        ),
        ("    while n\n        n := 1\n", "While"),
        ("    repeat\n        n := 1\n    until n\n", "Repeat-until"),
    ];
    for (body, construct) in cases {
        let err = check_main(decls, body).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E2004, "{construct}");
        assert_eq!(
            err.to_string(),
            format!("In function 'main': {construct} condition must be boolean, but got 'integer'")
        );
    }
}

#[test]
fn for_loop_needs_integers() {
    let err = check_main(
        "variables r : real\n",
        "    for r from 1 to 2\n        write(r)\n",
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "In function 'main': For loop variable 'r' must be integer, but is 'real'"
    );

    let err = check_main(
        "variables i : integer\n",
        "    for i from 1.5 to 2\n        write(i)\n",
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "In function 'main': For loop start value must be integer, but got 'real'"
    );
}

#[test]
fn error_names_the_failing_function() {
    let source = "define main()
    write(1)

define helper()
variables flag : boolean
    flag := 1
";
    let err = check(source).unwrap_err();
    assert_eq!(err.function, "helper");
}

#[test]
fn errors_inside_nested_blocks_are_found() {
    let err = check_main(
        "variables i : integer\nvariables s : string\n",
        "    while i < 3\n        if i = 1 then\n            s := s - \"x\"\n",
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2003);
}

#[test]
fn diagnostic_is_unlocated() {
    let err = check_main("", "    write(nope)\n").unwrap_err();
    assert_eq!(
        err.to_diagnostic().to_string(),
        "Semantic Error: In function 'main': Variable 'nope' not declared [E2002]"
    );
}
