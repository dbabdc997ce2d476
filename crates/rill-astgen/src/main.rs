//! Rill astgen CLI - check and describe AST kind declaration tables.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Declarative AST kind tables for the Rill scripting language
#[derive(Parser)]
#[command(name = "rill-astgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a declaration file for malformed kind declarations
    Check {
        /// Declaration file, one kind per line
        file: PathBuf,
        /// Family base name the declarations belong to (e.g. Expr)
        #[arg(long)]
        base: String,
    },

    /// Describe declaration tables with their resolved field contracts
    Describe {
        /// Declaration file (default: the canonical Expr and Stmt tables)
        file: Option<PathBuf>,
        /// Family base name, required when a file is given
        #[arg(long)]
        base: Option<String>,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command {
        Commands::Check { file, base } => commands::check::run(&file, &base),
        Commands::Describe { file, base } => commands::describe::run(file.as_deref(), base.as_deref()),
    }
}
