use pretty_assertions::assert_eq;
use shank_ir::Program;

use crate::errors::EvalErrorKind;
use crate::{buffer_handler, interpret, EvalContext, EvalError};

fn program(source: &str) -> Program {
    let tokens = shank_lexer::lex(source).unwrap();
    shank_parse::parse(&tokens).unwrap()
}

fn run_with_input(source: &str, input: &[&str]) -> Result<String, EvalError> {
    let out = buffer_handler();
    let ctx = EvalContext::builder()
        .output(std::sync::Arc::clone(&out))
        .scripted_input(input.iter().copied())
        .seed(1)
        .build();
    interpret(&program(source), ctx)?;
    Ok(out.captured())
}

fn run(source: &str) -> Result<String, EvalError> {
    run_with_input(source, &[])
}

fn run_main(decls: &str, body: &str) -> Result<String, EvalError> {
    run(&format!("define main()\n{decls}{body}"))
}

#[test]
fn precedence() {
    let out = run_main(
        "variables a, b : integer\n",
        "    a := (1 + 2) * 3\n    b := 1 + 2 * 3\n    write(a, b, 10 mod 3)\n",
    );
    assert_eq!(out.unwrap(), "9 7 1\n");
}

#[test]
fn division_by_zero_names_the_function() {
    let err = run_main("variables a : integer\n", "    a := 10 / 0\n").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.to_string(), "In function 'main': Division by zero");
}

#[test]
fn swap_through_var_parameters() {
    let source = "define swap(var a, b : integer)
variables t : integer
    t := a
    a := b
    b := t

define main()
variables x, y : integer
    x := 1
    y := 2
    swap(var x, var y)
    write(x, y)
";
    assert_eq!(run(source).unwrap(), "2 1\n");
}

#[test]
fn value_parameters_are_copies() {
    let source = "define bump(n : integer)
    n := n + 100

define main()
variables x : integer
    x := 1
    bump(x)
    bump(var x)
    write(x)
";
    assert_eq!(run(source).unwrap(), "1\n");
}

#[test]
fn var_argument_to_value_parameter_is_not_written_back() {
    let source = "define set(n : integer; var out : integer)
    n := 50
    out := 7

define main()
variables x, y : integer
    set(var x, var y)
    write(x, y)
";
    assert_eq!(run(source).unwrap(), "0 7\n");
}

#[test]
fn for_counts_down_inclusively() {
    let out = run_main(
        "variables i : integer\n",
        "    for i from 5 to 1\n        write(i)\n",
    );
    assert_eq!(out.unwrap(), "5\n4\n3\n2\n1\n");
}

#[test]
fn for_single_iteration() {
    let out = run_main(
        "variables i, n : integer\n",
        "    for i from 1 to 1\n        n := n + 1\n    write(n)\n",
    );
    assert_eq!(out.unwrap(), "1\n");
}

#[test]
fn for_rebinds_the_loop_variable_each_round() {
    let out = run_main(
        "variables i, count : integer\n",
        "    for i from 1 to 3\n        i := 100\n        count := count + 1\n    write(count)\n",
    );
    assert_eq!(out.unwrap(), "3\n");
}

#[test]
fn while_and_repeat() {
    let out = run_main(
        "variables n : integer\n",
        "    while n < 3\n        n := n + 1\n    write(n)\n    repeat\n        n := n - 1\n    until n <= 0\n    write(n)\n",
    );
    assert_eq!(out.unwrap(), "3\n0\n");
}

#[test]
fn repeat_runs_at_least_once() {
    let out = run_main(
        "variables n : integer\n",
        "    repeat\n        n := n + 1\n    until true\n    write(n)\n",
    );
    assert_eq!(out.unwrap(), "1\n");
}

#[test]
fn if_chain_takes_first_true_branch() {
    let body = "    if n < 0 then
        write(\"negative\")
    elsif n < 10 then
        write(\"small\")
    elsif n < 100 then
        write(\"medium\")
    else
        write(\"large\")
";
    let decls = |n: i32| format!("constants n = {n}\n");
    assert_eq!(run_main(&decls(-5), body).unwrap(), "negative\n");
    assert_eq!(run_main(&decls(5), body).unwrap(), "small\n");
    assert_eq!(run_main(&decls(50), body).unwrap(), "medium\n");
    assert_eq!(run_main(&decls(500), body).unwrap(), "large\n");
}

#[test]
fn constants_hold_their_values() {
    let out = run_main(
        "constants greeting = \"hi\", pi = 3.5, letter = 'q', flag = true\n",
        "    write(greeting, pi, letter, flag)\n",
    );
    assert_eq!(out.unwrap(), "hi 3.5 q true\n");
}

#[test]
fn locals_start_at_defaults() {
    let out = run_main(
        "variables i : integer\nvariables r : real\nvariables b : boolean\nvariables s : string\n",
        "    write(i, r, b, s)\n",
    );
    assert_eq!(out.unwrap(), "0 0.0 false \n");
}

#[test]
fn integer_widens_into_real() {
    let out = run_main(
        "variables r : real\n",
        "    r := 3\n    write(r)\n    r := r / 2\n    write(r)\n",
    );
    assert_eq!(out.unwrap(), "3.0\n1.5\n");
}

#[test]
fn arrays_grow_on_write_and_check_reads() {
    let out = run_main(
        "variables a : array of integer\nvariables i : integer\n",
        "    for i from 0 to 3\n        a[i] := i * i\n    write(a, a[3])\n",
    );
    assert_eq!(out.unwrap(), "[0, 1, 4, 9] 9\n");

    let err = run_main(
        "variables a : array of integer\nvariables n : integer\n",
        "    a[1] := 5\n    n := a[2]\n",
    )
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::IndexOutOfBounds {
            name: "a".into(),
            index: 2,
            len: 2,
        }
    );
}

#[test]
fn negative_index_is_an_error() {
    let err = run_main(
        "variables a : array of integer\n",
        "    a[-1] := 5\n",
    )
    .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::IndexOutOfBounds { index: -1, .. }));
}

#[test]
fn var_array_element_is_written_back() {
    let source = "define double(var n : integer)
    n := n * 2

define main()
variables a : array of integer
    a[0] := 4
    a[1] := 5
    double(var a[1])
    write(a)
";
    assert_eq!(run(source).unwrap(), "[4, 10]\n");
}

#[test]
fn builtins_return_through_var_arguments() {
    let out = run_main(
        "variables s : string\nvariables r : real\nvariables n : integer\n",
        "    left(\"hello\", 3, var s)\n    write(s)\n    right(\"hello\", 3, var s)\n    write(s)\n    substring(\"hello\", 2, 3, var s)\n    write(s)\n    squareRoot(16, var r)\n    realToInteger(r, var n)\n    write(r, n)\n",
    );
    assert_eq!(out.unwrap(), "hel\nllo\nell\n4.0 4\n");
}

#[test]
fn read_fills_var_arguments() {
    let source = "define main()
variables name : string
variables age : integer
    read(var name, var age)
    write(name, age + 1)
";
    assert_eq!(
        run_with_input(source, &["Ada", "36"]).unwrap(),
        "Ada 37\n"
    );
}

#[test]
fn recursion_through_var_parameters() {
    let source = "define fact(n : integer; var result : integer)
variables sub : integer
    if n <= 1 then
        result := 1
    else
        fact(n - 1, var sub)
        result := n * sub

define main()
variables f : integer
    fact(10, var f)
    write(f)
";
    assert_eq!(run(source).unwrap(), "3628800\n");
}

#[test]
fn main_is_found_case_insensitively() {
    assert_eq!(run("define MAIN()\n    write(1)\n").unwrap(), "1\n");
}

#[test]
fn missing_main() {
    let err = run("define helper()\n    write(1)\n").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::MissingMain);
}

#[test]
fn main_with_parameters_is_rejected() {
    let err = run("define main(x : integer)\n    write(x)\n").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::MainHasParameters);
}

#[test]
fn unknown_function_and_arity() {
    let err = run_main("", "    nothing(1)\n").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnknownFunction {
            name: "nothing".into()
        }
    );

    let source = "define two(a, b : integer)
    write(a, b)

define main()
    two(1)
";
    let err = run(source).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            function: "two".into(),
            expected: 2,
            found: 1,
        }
    );
    assert_eq!(err.function.as_deref(), Some("main"));
}

#[test]
fn argument_kinds_are_checked_at_the_call() {
    let source = "define takes(s : string)
    write(s)

define main()
    takes(5)
";
    let err = run(source).unwrap_err();
    assert!(matches!(
        err.kind,
        EvalErrorKind::ArgumentMismatch { position: 1, .. }
    ));
}

#[test]
fn errors_report_the_innermost_function() {
    let source = "define inner()
variables n : integer
    n := 1 mod 0

define main()
    inner()
";
    let err = run(source).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::ModuloByZero);
    assert_eq!(err.function.as_deref(), Some("inner"));
}

#[test]
fn runaway_recursion_is_stopped() {
    let source = "define forever(n : integer)
    forever(n + 1)

define main()
    forever(0)
";
    let err = run(source).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::CallDepthExceeded {
            limit: crate::MAX_CALL_DEPTH
        }
    );
}
