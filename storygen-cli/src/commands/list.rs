//! `storygen list`: print the embedded document paths.

use anyhow::Result;
use clap::Args;
use storygen_catalog::story_set;

#[derive(Args, Debug)]
pub struct ListArgs {}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        for entry in &story_set()? {
            println!("{}", entry.path);
        }
        Ok(())
    }
}
