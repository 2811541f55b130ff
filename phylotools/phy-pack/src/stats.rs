//! pyRAD/ipyrad .stats files
//!
//! Only two parts of the file matter here: the per-sample table that
//! starts after the `taxon` header and ends at the first `##` line, and
//! the `sampled unlinked SNPs = <n>` total further down.

use config::{STATS_HEADER, STATS_TERMINATOR, STATS_UNLINKED_SNPS};

use crate::PackError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRow {
    pub sample: String,
    pub loci: u64,
}

impl StatsRow {
    fn parse(line: &str, lineno: usize) -> Result<Self, PackError> {
        let mut columns = line.split_whitespace();

        let sample = columns
            .next()
            .ok_or_else(|| PackError::invalid(lineno, "empty row"))?;
        let loci = columns
            .next()
            .ok_or_else(|| PackError::invalid(lineno, format!("no loci column for {sample}")))?;
        let loci = loci.parse::<u64>().map_err(|_| {
            PackError::invalid(lineno, format!("loci count '{loci}' is not an integer"))
        })?;

        Ok(Self {
            sample: sample.to_string(),
            loci,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsBlock {
    pub rows: Vec<StatsRow>,
    pub unlinked_snps: Option<u64>,
}

impl StatsBlock {
    pub fn parse(contents: &str) -> Result<Self, PackError> {
        let mut lines = contents.lines().enumerate();

        for (_, line) in lines.by_ref() {
            if line.trim().starts_with(STATS_HEADER) {
                break;
            }
        }

        let mut rows = Vec::new();
        for (idx, line) in lines.by_ref() {
            let line = line.trim();
            if line.starts_with(STATS_TERMINATOR) {
                break;
            }
            if line.is_empty() {
                continue;
            }

            rows.push(StatsRow::parse(line, idx + 1)?);
        }

        // WARN: the last total line wins
        let mut unlinked_snps = None;
        for (idx, line) in lines {
            let line = line.trim();
            if line.starts_with(STATS_UNLINKED_SNPS) {
                unlinked_snps = Some(parse_total(line, idx + 1)?);
            }
        }

        Ok(Self {
            rows,
            unlinked_snps,
        })
    }

    pub fn total(&self) -> Result<u64, PackError> {
        self.unlinked_snps
            .ok_or(PackError::MissingField(STATS_UNLINKED_SNPS))
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, u64)> {
        self.rows.iter().map(|row| (row.sample.as_str(), row.loci))
    }
}

fn parse_total(line: &str, lineno: usize) -> Result<u64, PackError> {
    let value = line
        .split('=')
        .nth(1)
        .map(str::trim)
        .ok_or_else(|| PackError::invalid(lineno, "expected '=' in total line"))?;

    value
        .parse::<u64>()
        .map_err(|_| PackError::invalid(lineno, format!("total '{value}' is not an integer")))
}
