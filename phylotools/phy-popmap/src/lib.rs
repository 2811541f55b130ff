//! Core module for building a sample information table from popmaps
//!
//! Joins a population map with optional batch, species and subspecies
//! maps on the individual ID, keeping only individuals present in every
//! provided table, and writes a space-separated table with a header.

pub mod cli;
pub mod core;

use anyhow::Result;
use config::ArgCheck;

pub fn lib_phy_popmap(args: Vec<String>) -> Result<()> {
    let args = cli::Args::from(args);
    args.check()?;

    let _ = crate::core::merge_popmaps(args)?;

    Ok(())
}
