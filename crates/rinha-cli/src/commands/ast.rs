//! AST dump command - decode a program and output its AST as JSON

use anyhow::{Context, Result};
use rinha_runtime::load_program;

/// Decode the program file and pretty-print the typed AST to stdout.
/// Round-tripping through the typed tree normalizes the input and proves it
/// conforms to the node shapes the evaluator accepts.
pub fn run(file_path: &str) -> Result<()> {
    let program =
        load_program(file_path).with_context(|| format!("failed to load: {}", file_path))?;

    let json = serde_json::to_string_pretty(&program)?;
    println!("{}", json);

    Ok(())
}
