//! Core module for blacklisting uninformative loci
//!
//! IQ-TREE reports every partition without informative or variable
//! sites as a `WARNING: No ...` line naming the locus file. This module
//! scrapes those names from the log and moves the matching files out
//! of the loci directory into a freshly created blacklist directory.

pub mod cli;
pub mod core;

use anyhow::Result;
use config::ArgCheck;

pub fn lib_phy_filter(args: Vec<String>) -> Result<()> {
    let args = cli::Args::from(args);
    args.check()?;

    let _ = crate::core::blacklist_loci(args)?;

    Ok(())
}
