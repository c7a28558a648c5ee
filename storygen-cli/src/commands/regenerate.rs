//! `storygen` with no subcommand: write every embedded story under the root.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use storygen_catalog::story_set;
use storygen_writer::{regenerate, RegenOptions, RegenReport};

/// Arguments for the default regeneration pass.
#[derive(Args, Debug)]
pub struct RegenerateArgs {
    /// Output root that every document path is resolved against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Show how many documents would be written without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl RegenerateArgs {
    pub fn run(self) -> Result<()> {
        let set = story_set()?;
        let options = RegenOptions::new(self.root).dry_run(self.dry_run);
        let report = regenerate(&set, &options)?;
        println!("{}", summary_line(&report));
        Ok(())
    }
}

fn summary_line(report: &RegenReport) -> String {
    if report.dry_run {
        format!("[dry-run] Would write {} documents.", report.count())
    } else {
        format!("Wrote {} documents.", report.count())
    }
}
