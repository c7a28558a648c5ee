//! `storygen diff`: show unified diffs for what regeneration would write.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use storygen_catalog::story_set;
use storygen_writer::diff;

/// Arguments for `storygen diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Output root to compare against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let diffs = diff(&story_set()?, &self.root)?;

        if diffs.is_empty() {
            println!("No differences.");
            return Ok(());
        }

        for d in diffs {
            print!("{}", d.unified_diff);
            if !d.unified_diff.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}
