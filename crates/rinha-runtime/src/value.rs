//! Runtime value representation
//!
//! Closed value model for the evaluator:
//! - Int, Bool: immediate values
//! - Str: heap-allocated, reference-counted (`Rc<str>`), immutable
//! - Tuple: owns both components
//! - Closure: reference-counted; borrows its parameter list and body from the
//!   AST (which outlives evaluation) and shares the environment captured at
//!   definition time
//!
//! Values never mutate after construction. Equality is structural except for
//! closures, which compare by allocation identity.

use crate::ast::{Parameter, Term};
use crate::env::Environment;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// A function value: parameters and body from the defining `Function` node,
/// plus the environment in effect at the definition site.
#[derive(Debug)]
pub struct Closure<'ast> {
    pub parameters: &'ast [Parameter],
    pub body: &'ast Term,
    pub env: Environment<'ast>,
}

/// Runtime value
#[derive(Debug, Clone)]
pub enum Value<'ast> {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    Tuple(Box<Value<'ast>>, Box<Value<'ast>>),
    Closure(Rc<Closure<'ast>>),
}

impl<'ast> Value<'ast> {
    /// Build a string value
    pub fn str(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    /// Build a tuple value
    pub fn tuple(first: Value<'ast>, second: Value<'ast>) -> Self {
        Value::Tuple(Box::new(first), Box::new(second))
    }

    /// Kind name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Tuple(_, _) => "tuple",
            Value::Closure(_) => "closure",
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Tuple(a1, a2), Value::Tuple(b1, b2)) => a1 == b1 && a2 == b2,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Display rules shared by `print` and string concatenation:
/// booleans as `true`/`false`, strings verbatim, integers in decimal,
/// closures as an opaque placeholder, tuples as `(a, b)` recursively.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Tuple(first, second) => write!(f, "({}, {})", first, second),
            Value::Closure(_) => write!(f, "<#closure>"),
        }
    }
}

/// Runtime error
///
/// Every error is terminal for the current evaluation: there is no
/// catch/recover construct in the language, so the first error unwinds to the
/// caller of the entry point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Variable lookup found no binding in any enclosing frame
    #[error("unbound variable: {name}")]
    UnboundVariable { name: String },
    /// Call target is not a function
    #[error("cannot call a value of type {kind}")]
    NotCallable { kind: &'static str },
    /// Argument count disagrees with the closure's parameter count
    #[error("function expects {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },
    /// Operand kinds unsupported for an operator or form.
    /// `right` is absent for single-operand forms such as an `if` condition.
    #[error("type mismatch in {form}: got {left}{}", .right.map(|r| format!(" and {r}")).unwrap_or_default())]
    TypeMismatch {
        form: &'static str,
        left: &'static str,
        right: Option<&'static str>,
    },
    /// Integer division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// Integer remainder with a zero divisor
    #[error("remainder by zero")]
    RemainderByZero,
    /// `first`/`second` applied to a non-tuple value
    #[error("expected a tuple, got {kind}")]
    NotATuple { kind: &'static str },
    /// AST shape violates the data model (unknown kind tag, missing field)
    #[error("malformed program: {message}")]
    MalformedNode { message: String },
    /// Rinha call depth exceeded the configured ceiling
    #[error("stack overflow: call depth exceeded {limit}")]
    StackOverflow { limit: usize },
    /// I/O failure while reading a program file or writing print output
    #[error("i/o error on {path}: {message}")]
    Io { path: String, message: String },
}
