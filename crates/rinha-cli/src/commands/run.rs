//! Run command - execute Rinha program files

use anyhow::{anyhow, bail, Context, Result};
use rinha_runtime::Rinha;
use std::thread;

/// Run a Rinha program file
///
/// Evaluation happens on a worker thread with an explicitly sized stack:
/// Rinha programs recurse deeply by design, and the interpreter's call-depth
/// ceiling only helps if the native stack is large enough for it to fire
/// first. `print` output goes straight to stdout during evaluation; the final
/// value is printed once evaluation finishes.
pub fn run(file_path: &str, max_depth: Option<usize>, stack_size_mb: usize) -> Result<()> {
    if !file_path.ends_with(".json") {
        bail!("expected a .json program file, got: {}", file_path);
    }

    let file_path = file_path.to_string();
    let handle = thread::Builder::new()
        .name("rinha-eval".to_string())
        .stack_size(stack_size_mb * 1024 * 1024)
        .spawn(move || -> Result<String> {
            let runtime = match max_depth {
                Some(limit) => Rinha::new().with_max_depth(limit),
                None => Rinha::new(),
            };
            let rendered = runtime.run_file(&file_path)?;
            Ok(rendered)
        })
        .context("failed to spawn evaluation thread")?;

    let rendered = handle
        .join()
        .map_err(|_| anyhow!("evaluation thread panicked"))??;

    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_run_simple_program() {
        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            temp_file,
            r#"{{"name": "t", "expression": {{"kind": "Int", "value": 42}}}}"#
        )
        .unwrap();

        let result = run(temp_file.path().to_str().unwrap(), None, 8);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_rejects_non_json_extension() {
        let result = run("program.rinha", None, 8);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_missing_file() {
        let result = run("nonexistent.json", None, 8);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_reports_runtime_errors() {
        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            temp_file,
            r#"{{"name": "t", "expression": {{"kind": "Var", "text": "ghost"}}}}"#
        )
        .unwrap();

        let err = run(temp_file.path().to_str().unwrap(), None, 8).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
