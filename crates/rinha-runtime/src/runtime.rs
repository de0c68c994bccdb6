//! Rinha runtime API for embedding

use crate::ast::Program;
use crate::interpreter::Interpreter;
use crate::loader;
use crate::value::{RuntimeError, Value};
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Rinha runtime instance
///
/// High-level entry point for hosts: loads a program, evaluates it, and
/// renders the final value through the display rules. `print` output goes to
/// the configured sink as evaluation proceeds.
///
/// # Examples
///
/// ```
/// use rinha_runtime::Rinha;
///
/// let runtime = Rinha::new();
/// let result = runtime.run_source(
///     r#"{"name": "t", "expression": {"kind": "Int", "value": 2}}"#,
/// );
/// assert_eq!(result.unwrap(), "2");
/// ```
pub struct Rinha {
    interpreter: RefCell<Interpreter>,
}

impl Rinha {
    /// Create a runtime printing to stdout
    pub fn new() -> Self {
        Self {
            interpreter: RefCell::new(Interpreter::new()),
        }
    }

    /// Create a runtime printing to the given sink
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self {
            interpreter: RefCell::new(Interpreter::with_output(output)),
        }
    }

    /// Override the call-depth ceiling
    pub fn with_max_depth(self, limit: usize) -> Self {
        self.interpreter.borrow_mut().set_max_depth(limit);
        self
    }

    /// Decode and evaluate a program from JSON source text; returns the
    /// rendered final value.
    pub fn run_source(&self, source: &str) -> RuntimeResult<String> {
        let program = loader::parse_program(source)?;
        let mut interpreter = self.interpreter.borrow_mut();
        let value = interpreter.eval(&program)?;
        Ok(value.to_string())
    }

    /// Read, decode, and evaluate a program file; returns the rendered final
    /// value.
    pub fn run_file(&self, path: impl AsRef<Path>) -> RuntimeResult<String> {
        let program = loader::load_program(path)?;
        let mut interpreter = self.interpreter.borrow_mut();
        let value = interpreter.eval(&program)?;
        Ok(value.to_string())
    }

    /// Evaluate an already-decoded program. The returned value borrows the
    /// program's AST; render it before the program goes away.
    pub fn eval_program<'ast>(&self, program: &'ast Program) -> RuntimeResult<Value<'ast>> {
        self.interpreter.borrow_mut().eval(program)
    }
}

impl Default for Rinha {
    fn default() -> Self {
        Self::new()
    }
}
