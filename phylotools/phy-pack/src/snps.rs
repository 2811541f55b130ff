//! pyRAD .snps matrices
//!
//! The first line is a header and is skipped. Every other non-blank
//! line holds a sample name and its SNP string, where loci are
//! separated by ` _ `.

use config::SNPS_LOCUS_SEPARATOR;
use hashbrown::HashMap;

use crate::PackError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnpMatrix {
    pub rows: Vec<(String, String)>,
}

impl SnpMatrix {
    /// a repeated sample replaces the earlier sequence in place
    pub fn parse(contents: &str) -> Result<Self, PackError> {
        let mut rows: Vec<(String, String)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (idx, line) in contents.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let (sample, sequence) = line
                .trim()
                .split_once(char::is_whitespace)
                .ok_or_else(|| PackError::invalid(idx + 1, "row without SNP string"))?;
            let sequence = strip_separators(sequence.trim_start());

            match index.get(sample).copied() {
                Some(pos) => rows[pos].1 = sequence,
                None => {
                    index.insert(sample.to_string(), rows.len());
                    rows.push((sample.to_string(), sequence));
                }
            }
        }

        Ok(Self { rows })
    }

    /// shared sequence length; every row must agree
    pub fn nchar(&self) -> Result<usize, PackError> {
        let nchar = self
            .rows
            .first()
            .map(|(_, seq)| seq.chars().count())
            .unwrap_or(0);

        for (sample, seq) in self.rows.iter() {
            let found = seq.chars().count();
            if found != nchar {
                return Err(PackError::InconsistentLength {
                    sample: sample.clone(),
                    found,
                    expected: nchar,
                });
            }
        }

        Ok(nchar)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn strip_separators(sequence: &str) -> String {
    sequence.split(SNPS_LOCUS_SEPARATOR).collect()
}
