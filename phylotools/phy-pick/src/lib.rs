//! Core module for picking the best N samples per population
//!
//! Samples are weighted either by their locus count in a pyRAD/ipyrad
//! .stats file or by their number of called sites in a PHYLIP matrix.
//! A fixed character window of every sample ID is taken as its
//! population code; within each population the heaviest samples are
//! kept and the rest are written to an exclusion list. Populations
//! with fewer samples than requested are kept whole and reported.

pub mod cli;
pub mod core;
pub mod select;

pub use select::{select, KeyWindow, PickError, Record, Selection, Shortfall};

use anyhow::Result;
use config::ArgCheck;

pub fn lib_phy_pick(args: Vec<String>) -> Result<()> {
    let args = cli::Args::from(args);
    args.check()?;

    let _ = crate::core::pick_samples(args)?;

    Ok(())
}
