//! Core module for flagging samples with too much missing data
//!
//! Reads the per-sample locus counts and the total number of sampled
//! unlinked SNPs from a pyRAD/ipyrad .stats file, and writes the IDs of
//! every sample holding fewer loci than the requested proportion of
//! that total as a single comma-separated line.

pub mod cli;
pub mod core;

use anyhow::Result;
use config::ArgCheck;

pub fn lib_phy_missing(args: Vec<String>) -> Result<()> {
    let args = cli::Args::from(args);
    args.check()?;

    let _ = crate::core::exclude_missing(args)?;

    Ok(())
}
