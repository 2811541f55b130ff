//! Sequential PHYLIP matrices: `<ntax> <nchar>` header followed by
//! one `<sample> <sequence>` row per taxon.

use config::MISSING_SITES;
use log::warn;

use crate::PackError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhylipRow {
    pub sample: String,
    pub sequence: String,
}

impl PhylipRow {
    /// number of sites that are not missing data
    pub fn called_sites(&self) -> u64 {
        self.sequence
            .chars()
            .filter(|c| !c.is_whitespace() && !MISSING_SITES.contains(c))
            .count() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phylip {
    pub ntax: usize,
    pub nchar: usize,
    pub rows: Vec<PhylipRow>,
}

impl Phylip {
    pub fn parse(contents: &str) -> Result<Self, PackError> {
        let mut lines = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (idx, header) = lines
            .next()
            .ok_or_else(|| PackError::invalid(1, "empty PHYLIP file"))?;
        let (ntax, nchar) = parse_header(header, idx + 1)?;

        let mut rows = Vec::with_capacity(ntax);
        for (idx, line) in lines {
            let (sample, sequence) = line
                .trim()
                .split_once(char::is_whitespace)
                .ok_or_else(|| PackError::invalid(idx + 1, "row without sequence"))?;

            rows.push(PhylipRow {
                sample: sample.to_string(),
                sequence: sequence.trim().to_string(),
            });
        }

        if rows.len() != ntax {
            warn!(
                "PHYLIP header declares {} taxa but {} rows were found",
                ntax,
                rows.len()
            );
        }

        Ok(Self { ntax, nchar, rows })
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, u64)> {
        self.rows
            .iter()
            .map(|row| (row.sample.as_str(), row.called_sites()))
    }
}

fn parse_header(line: &str, lineno: usize) -> Result<(usize, usize), PackError> {
    let fields = line
        .split_whitespace()
        .map(|x| x.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| PackError::invalid(lineno, "PHYLIP header must be '<ntax> <nchar>'"))?;

    match fields.as_slice() {
        [ntax, nchar] => Ok((*ntax, *nchar)),
        _ => Err(PackError::invalid(
            lineno,
            "PHYLIP header must be '<ntax> <nchar>'",
        )),
    }
}
