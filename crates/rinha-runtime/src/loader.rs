//! Program loader
//!
//! Decodes the standard Rinha JSON AST format into the typed tree. Shape
//! validation is structural: the `Term` enum is closed and its fields typed,
//! so an unknown `kind` tag or a missing field fails the decode and surfaces
//! as a `MalformedNode` error before evaluation starts.

use crate::ast::Program;
use crate::value::RuntimeError;
use std::fs;
use std::path::Path;

/// Decode a program from its JSON source text
pub fn parse_program(source: &str) -> Result<Program, RuntimeError> {
    serde_json::from_str(source).map_err(|e| RuntimeError::MalformedNode {
        message: e.to_string(),
    })
}

/// Read and decode a program file
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, RuntimeError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| RuntimeError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_program(&source)
}
