//! Core module for converting pyRAD .snps matrices to PHYLIP
//!
//! Locus separators are stripped from every SNP string and the
//! concatenated matrix is written as sequential PHYLIP.

pub mod cli;
pub mod core;

use anyhow::Result;
use config::ArgCheck;

pub fn lib_phy_snps(args: Vec<String>) -> Result<()> {
    let args = cli::Args::from(args);
    args.check()?;

    let _ = crate::core::snps_to_phylip(args)?;

    Ok(())
}
