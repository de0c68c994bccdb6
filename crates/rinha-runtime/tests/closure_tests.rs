//! Closure and scoping tests
//!
//! Lexical scoping, letrec-style self-reference through `let`, higher-order
//! functions, and call-depth behavior.

use pretty_assertions::assert_eq;
use rinha_runtime::{BinaryOp, Interpreter, Program, RuntimeError, Term, Value};

fn eval(term: Term) -> Result<Value<'static>, RuntimeError> {
    let program: &'static Program = Box::leak(Box::new(Program::from_expression(term)));
    Interpreter::new().eval(program)
}

/// fn (n) => if (n < 2) { 1 } else { n * fact(n - 1) }
fn factorial_function() -> Term {
    Term::function(
        ["n"],
        Term::if_then(
            Term::binary(BinaryOp::Lt, Term::var("n"), Term::int(2)),
            Term::int(1),
            Term::binary(
                BinaryOp::Mul,
                Term::var("n"),
                Term::call(
                    Term::var("fact"),
                    vec![Term::binary(BinaryOp::Sub, Term::var("n"), Term::int(1))],
                ),
            ),
        ),
    )
}

#[test]
fn test_let_bound_function_calls_itself() {
    let term = Term::let_in(
        "fact",
        factorial_function(),
        Term::call(Term::var("fact"), vec![Term::int(5)]),
    );
    assert_eq!(eval(term).unwrap(), Value::Int(120));
}

#[test]
fn test_recursive_fibonacci() {
    // let fib = fn (n) => if (n < 2) { n } else { fib(n - 1) + fib(n - 2) }; fib(10)
    let body = Term::if_then(
        Term::binary(BinaryOp::Lt, Term::var("n"), Term::int(2)),
        Term::var("n"),
        Term::binary(
            BinaryOp::Add,
            Term::call(
                Term::var("fib"),
                vec![Term::binary(BinaryOp::Sub, Term::var("n"), Term::int(1))],
            ),
            Term::call(
                Term::var("fib"),
                vec![Term::binary(BinaryOp::Sub, Term::var("n"), Term::int(2))],
            ),
        ),
    );
    let term = Term::let_in(
        "fib",
        Term::function(["n"], body),
        Term::call(Term::var("fib"), vec![Term::int(10)]),
    );
    assert_eq!(eval(term).unwrap(), Value::Int(55));
}

#[test]
fn test_free_variables_resolve_at_the_definition_site() {
    // let x = 1; let f = fn () => x; let x = 2; f()
    let term = Term::let_in(
        "x",
        Term::int(1),
        Term::let_in(
            "f",
            Term::function(Vec::<String>::new(), Term::var("x")),
            Term::let_in(
                "x",
                Term::int(2),
                Term::call(Term::var("f"), vec![]),
            ),
        ),
    );
    assert_eq!(eval(term).unwrap(), Value::Int(1));
}

#[test]
fn test_arguments_evaluate_in_the_caller_scope() {
    // let x = 10; let f = fn (y) => y; let x = 20; f(x) — the argument sees
    // the caller's x, not the captured one.
    let term = Term::let_in(
        "x",
        Term::int(10),
        Term::let_in(
            "f",
            Term::function(["y"], Term::var("y")),
            Term::let_in(
                "x",
                Term::int(20),
                Term::call(Term::var("f"), vec![Term::var("x")]),
            ),
        ),
    );
    assert_eq!(eval(term).unwrap(), Value::Int(20));
}

#[test]
fn test_returned_closure_keeps_its_environment() {
    // let adder = fn (n) => fn (m) => n + m; let add3 = adder(3); add3(4)
    let term = Term::let_in(
        "adder",
        Term::function(
            ["n"],
            Term::function(
                ["m"],
                Term::binary(BinaryOp::Add, Term::var("n"), Term::var("m")),
            ),
        ),
        Term::let_in(
            "add3",
            Term::call(Term::var("adder"), vec![Term::int(3)]),
            Term::call(Term::var("add3"), vec![Term::int(4)]),
        ),
    );
    assert_eq!(eval(term).unwrap(), Value::Int(7));
}

#[test]
fn test_parameters_shadow_captured_bindings() {
    // let n = 100; let f = fn (n) => n; f(1)
    let term = Term::let_in(
        "n",
        Term::int(100),
        Term::let_in(
            "f",
            Term::function(["n"], Term::var("n")),
            Term::call(Term::var("f"), vec![Term::int(1)]),
        ),
    );
    assert_eq!(eval(term).unwrap(), Value::Int(1));
}

#[test]
fn test_function_body_is_not_evaluated_at_definition() {
    // The body would fail if evaluated; merely defining the function is fine.
    let term = Term::let_in(
        "f",
        Term::function(Vec::<String>::new(), Term::var("missing")),
        Term::int(0),
    );
    assert_eq!(eval(term).unwrap(), Value::Int(0));
}

#[test]
fn test_deep_recursion_within_ceiling() {
    // let down = fn (n) => if (n == 0) { 0 } else { down(n - 1) }; down(5000)
    let body = Term::if_then(
        Term::binary(BinaryOp::Eq, Term::var("n"), Term::int(0)),
        Term::int(0),
        Term::call(
            Term::var("down"),
            vec![Term::binary(BinaryOp::Sub, Term::var("n"), Term::int(1))],
        ),
    );
    let term = Term::let_in(
        "down",
        Term::function(["n"], body),
        Term::call(Term::var("down"), vec![Term::int(5000)]),
    );
    assert_eq!(eval(term).unwrap(), Value::Int(0));
}

#[test]
fn test_unbounded_recursion_reports_stack_overflow() {
    let term = Term::let_in(
        "loop",
        Term::function(
            Vec::<String>::new(),
            Term::call(Term::var("loop"), vec![]),
        ),
        Term::call(Term::var("loop"), vec![]),
    );
    let program: &'static Program = Box::leak(Box::new(Program::from_expression(term)));
    let mut interpreter = Interpreter::new();
    interpreter.set_max_depth(64);
    assert_eq!(
        interpreter.eval(program),
        Err(RuntimeError::StackOverflow { limit: 64 })
    );
}
