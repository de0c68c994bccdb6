use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// Rinha interpreter.
///
/// Runs Rinha programs whose AST arrives pre-parsed as JSON (the standard
/// `files/*.json` format produced by the reference parser).
///
/// EXAMPLES:
///     rinha run fib.json           Run a program
///     rinha ast fib.json           Decode and pretty-print the AST
#[derive(Parser)]
#[command(name = "rinha")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Rinha program file
    ///
    /// Decodes the JSON AST and evaluates it. `print` output is written as
    /// evaluation proceeds; the final value is printed at the end.
    #[command(visible_alias = "r")]
    Run {
        /// Path to the program file (.json)
        file: String,
        /// Ceiling on Rinha call depth before failing with a stack overflow
        #[arg(long)]
        max_depth: Option<usize>,
        /// Native stack size for the evaluation thread, in MiB
        #[arg(long, default_value_t = 512)]
        stack_size_mb: usize,
    },

    /// Decode a program file and pretty-print its AST as JSON
    Ast {
        /// Path to the program file (.json)
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            max_depth,
            stack_size_mb,
        } => commands::run::run(&file, max_depth, stack_size_mb)?,
        Commands::Ast { file } => commands::ast::run(&file)?,
    }

    Ok(())
}
