use anyhow::Result;
use config::write_joined;
use log::info;
use phy_pack::{reader, StatsBlock};

use crate::cli::Args;

pub fn exclude_missing(args: Args) -> Result<Vec<String>> {
    info!("Flagging samples with missing data using args: {:?}", &args);

    let block = StatsBlock::parse(&reader(&args.stats)?)?;
    let total = block.total()?;

    let threshold = loci_threshold(total, args.proportion);
    let excluded = below_threshold(&block, threshold);

    write_joined(&excluded, &args.outfile)?;

    info!(
        "{} excluded individuals containing more than {} percent missing data (less than {} loci) were written to {}",
        excluded.len(),
        missing_percent(args.proportion),
        threshold,
        args.outfile.display()
    );

    Ok(excluded)
}

/// minimum number of loci a sample needs, truncated toward zero
pub fn loci_threshold(total: u64, proportion: f64) -> u64 {
    (proportion * total as f64) as u64
}

pub fn missing_percent(proportion: f64) -> u64 {
    100 - (100.0 * proportion) as u64
}

pub fn below_threshold(block: &StatsBlock, threshold: u64) -> Vec<String> {
    block
        .records()
        .filter(|(_, loci)| *loci < threshold)
        .map(|(sample, _)| sample.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: &str = "\
   taxon    nloci  f1loci
   AAA1     950    900
   AAA2     400    380
   BBB1     749    700
   BBB2     750    700
    ## nloci = number of loci

sampled unlinked SNPs= 1000
";

    #[test]
    fn test_threshold() {
        assert_eq!(loci_threshold(1000, 0.75), 750);
        assert_eq!(loci_threshold(999, 0.5), 499);
        assert_eq!(loci_threshold(1000, 0.0), 0);
        assert_eq!(missing_percent(0.75), 25);
        assert_eq!(missing_percent(1.0), 0);
    }

    #[test]
    fn test_exclude_missing() {
        let dir = tempfile::tempdir().unwrap();
        let stats = dir.path().join("run.stats");
        std::fs::write(&stats, STATS).unwrap();
        let outfile = dir.path().join("bad.csv");

        let args = Args {
            stats,
            outfile: outfile.clone(),
            proportion: 0.75,
        };

        let excluded = exclude_missing(args).unwrap();

        assert_eq!(excluded, vec!["AAA2", "BBB1"]);
        assert_eq!(std::fs::read_to_string(outfile).unwrap(), "AAA2,BBB1");
    }

    #[test]
    fn test_missing_total_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let stats = dir.path().join("run.stats");
        std::fs::write(&stats, "taxon nloci\nAAA1 10\n##\n").unwrap();
        let outfile = dir.path().join("bad.csv");

        let args = Args {
            stats,
            outfile: outfile.clone(),
            proportion: 0.5,
        };

        assert!(exclude_missing(args).is_err());
        assert!(!outfile.exists());
    }
}
