//! Rinha Runtime - Core language implementation
//!
//! This library evaluates Rinha programs whose AST arrives pre-parsed as
//! JSON. It provides:
//! - Typed AST decoding from the standard Rinha JSON format
//! - A tree-walking interpreter with lexical scoping and letrec-style `let`
//! - The runtime value model and error taxonomy

/// Rinha runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod env;
pub mod interpreter;
pub mod loader;
pub mod runtime;
pub mod span;
pub mod value;

// Re-export commonly used types
pub use ast::{BinaryOp, Parameter, Program, Term};
pub use env::Environment;
pub use interpreter::{Interpreter, DEFAULT_MAX_DEPTH};
pub use loader::{load_program, parse_program};
pub use runtime::{Rinha, RuntimeResult};
pub use span::Loc;
pub use value::{Closure, RuntimeError, Value};
