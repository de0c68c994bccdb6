//! AST interpreter (tree-walking)
//!
//! Direct recursive evaluation of decoded Rinha programs:
//! - literals, variables, strict binary operators
//! - `let` with letrec-style self-reference for bound functions
//! - closures with lexical scoping
//! - tuples, projections, and the `print` side effect
//!
//! Evaluation is single-threaded and synchronous. Rinha call depth is counted
//! explicitly and capped, so unboundedly recursive programs fail with a
//! `StackOverflow` error instead of exhausting the native stack.

mod binary;

use crate::ast::{Program, Term};
use crate::env::Environment;
use crate::value::{Closure, RuntimeError, Value};
use std::io::{self, Write};
use std::rc::Rc;

/// Default ceiling on Rinha call depth. Deeply recursive programs are normal
/// for this language, so the ceiling is generous; the host pairs it with an
/// explicitly sized native stack.
pub const DEFAULT_MAX_DEPTH: usize = 100_000;

/// Interpreter state
pub struct Interpreter {
    /// Sink for `print` output
    output: Box<dyn Write>,
    /// Ceiling on Rinha call depth
    max_depth: usize,
    /// Current Rinha call depth
    depth: usize,
}

impl Interpreter {
    /// Create an interpreter printing to stdout
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Create an interpreter printing to the given sink
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self {
            output,
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
        }
    }

    /// Change the call-depth ceiling
    pub fn set_max_depth(&mut self, limit: usize) {
        self.max_depth = limit;
    }

    /// Evaluate a program's root expression in an empty environment
    pub fn eval<'ast>(&mut self, program: &'ast Program) -> Result<Value<'ast>, RuntimeError> {
        self.depth = 0;
        self.eval_term(&program.expression, &Environment::new())
    }

    /// Evaluate a single term
    pub fn eval_term<'ast>(
        &mut self,
        term: &'ast Term,
        env: &Environment<'ast>,
    ) -> Result<Value<'ast>, RuntimeError> {
        match term {
            Term::Int { value, .. } => Ok(Value::Int(*value)),
            Term::Str { value, .. } => Ok(Value::str(value)),
            Term::Bool { value, .. } => Ok(Value::Bool(*value)),
            Term::Var { text, .. } => {
                env.get(text).ok_or_else(|| RuntimeError::UnboundVariable {
                    name: text.clone(),
                })
            }
            Term::Binary { op, lhs, rhs, .. } => self.eval_binary(*op, lhs, rhs, env),
            Term::If {
                condition,
                then,
                otherwise,
                ..
            } => self.eval_if(condition, then, otherwise, env),
            Term::Let {
                name, value, next, ..
            } => self.eval_let(&name.text, value, next, env),
            Term::Function {
                parameters, value, ..
            } => Ok(Value::Closure(Rc::new(Closure {
                parameters,
                body: value,
                env: env.clone(),
            }))),
            Term::Call {
                callee, arguments, ..
            } => self.eval_call(callee, arguments, env),
            Term::Print { value, .. } => self.eval_print(value, env),
            Term::Tuple { first, second, .. } => {
                let first = self.eval_term(first, env)?;
                let second = self.eval_term(second, env)?;
                Ok(Value::tuple(first, second))
            }
            Term::First { value, .. } => match self.eval_term(value, env)? {
                Value::Tuple(first, _) => Ok(*first),
                other => Err(RuntimeError::NotATuple {
                    kind: other.type_name(),
                }),
            },
            Term::Second { value, .. } => match self.eval_term(value, env)? {
                Value::Tuple(_, second) => Ok(*second),
                other => Err(RuntimeError::NotATuple {
                    kind: other.type_name(),
                }),
            },
        }
    }

    /// Evaluate an `if`: the condition must be a bool, and exactly one branch
    /// is evaluated.
    fn eval_if<'ast>(
        &mut self,
        condition: &'ast Term,
        then: &'ast Term,
        otherwise: &'ast Term,
        env: &Environment<'ast>,
    ) -> Result<Value<'ast>, RuntimeError> {
        match self.eval_term(condition, env)? {
            Value::Bool(true) => self.eval_term(then, env),
            Value::Bool(false) => self.eval_term(otherwise, env),
            other => Err(RuntimeError::TypeMismatch {
                form: "if condition",
                left: other.type_name(),
                right: None,
            }),
        }
    }

    /// Evaluate a `let`.
    ///
    /// The bound expression is evaluated in the same frame that afterwards
    /// receives the binding. A closure created by that expression captures the
    /// frame by reference, so it observes its own name once the insert lands;
    /// this is what makes `let f = fn (n) => ... f(n - 1) ...` work.
    fn eval_let<'ast>(
        &mut self,
        name: &'ast str,
        value: &'ast Term,
        next: &'ast Term,
        env: &Environment<'ast>,
    ) -> Result<Value<'ast>, RuntimeError> {
        let frame = env.child();
        let bound = self.eval_term(value, &frame)?;
        frame.define(name, bound);
        self.eval_term(next, &frame)
    }

    /// Evaluate a call.
    ///
    /// Arguments are evaluated left-to-right in the caller's environment; the
    /// body runs in a fresh frame extending the closure's captured environment
    /// (lexical scoping, never the caller's scope).
    fn eval_call<'ast>(
        &mut self,
        callee: &'ast Term,
        arguments: &'ast [Term],
        env: &Environment<'ast>,
    ) -> Result<Value<'ast>, RuntimeError> {
        let callee = self.eval_term(callee, env)?;
        let closure = match callee {
            Value::Closure(closure) => closure,
            other => {
                return Err(RuntimeError::NotCallable {
                    kind: other.type_name(),
                })
            }
        };

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_term(argument, env)?);
        }

        if args.len() != closure.parameters.len() {
            return Err(RuntimeError::ArityMismatch {
                expected: closure.parameters.len(),
                got: args.len(),
            });
        }

        if self.depth >= self.max_depth {
            return Err(RuntimeError::StackOverflow {
                limit: self.max_depth,
            });
        }

        let frame = closure.env.child();
        for (parameter, arg) in closure.parameters.iter().zip(args) {
            frame.define(&parameter.text, arg);
        }

        self.depth += 1;
        let result = self.eval_term(closure.body, &frame);
        self.depth -= 1;
        result
    }

    /// Evaluate a `print`: emit the rendering plus a newline, return the
    /// original value unchanged so `print(x)` composes as an expression.
    fn eval_print<'ast>(
        &mut self,
        value: &'ast Term,
        env: &Environment<'ast>,
    ) -> Result<Value<'ast>, RuntimeError> {
        let value = self.eval_term(value, env)?;
        writeln!(self.output, "{}", value).map_err(|e| RuntimeError::Io {
            path: "<print>".to_string(),
            message: e.to_string(),
        })?;
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
