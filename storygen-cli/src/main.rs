//! storygen: regenerate the Bermuda Sector story drafts.
//!
//! # Usage
//!
//! ```text
//! storygen [--root <dir>] [--dry-run]
//! storygen list
//! storygen diff [--root <dir>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, list::ListArgs, regenerate::RegenerateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "storygen",
    version,
    about = "Regenerate the story documents under docs/stories",
    long_about = None,
    args_conflicts_with_subcommands = true,
)]
struct Cli {
    #[command(flatten)]
    regenerate: RegenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the path of every embedded document.
    List(ListArgs),

    /// Show a unified diff of what regeneration would change.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        None => cli.regenerate.run(),
        Some(Commands::List(args)) => args.run(),
        Some(Commands::Diff(args)) => args.run(),
    }
}

/// Log to stderr so stdout carries only command output. `RUST_LOG=info`
/// shows one line per written file.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
