//! Line-oriented parsers for the plain-text formats handled by phylotools
//!
//! Every format is read fully into memory and parsed from a `&str`:
//! pyRAD/ipyrad .stats blocks, PHYLIP matrices, population maps,
//! pyRAD .snps matrices and IQ-TREE logs.

use rayon::prelude::*;
use thiserror::Error;

use std::fmt::Debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod iqtree;
pub mod phylip;
pub mod popmap;
pub mod snps;
pub mod stats;

pub use iqtree::uninformative_loci;
pub use phylip::{Phylip, PhylipRow};
pub use popmap::PopTable;
pub use snps::SnpMatrix;
pub use stats::{StatsBlock, StatsRow};

#[derive(Debug, Error)]
pub enum PackError {
    #[error("ERROR: invalid record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },
    #[error("ERROR: {sample} has {found} sites, expected {expected}")]
    InconsistentLength {
        sample: String,
        found: usize,
        expected: usize,
    },
    #[error("ERROR: missing '{0}' line")]
    MissingField(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    pub fn invalid(line: usize, reason: impl Into<String>) -> Self {
        PackError::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }
}

pub fn reader<P: AsRef<Path> + Debug>(file: P) -> Result<String, PackError> {
    let mut file = File::open(file)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// read several files at once; contents come back in input order
pub fn par_reader<P: AsRef<Path> + Debug + Sync + Send>(
    files: &[P],
) -> Result<Vec<String>, PackError> {
    files.par_iter().map(reader).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_par_reader_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = (0..8)
            .map(|i| {
                let path = dir.path().join(format!("{i}.txt"));
                std::fs::write(&path, format!("file{i}")).unwrap();
                path
            })
            .collect::<Vec<_>>();

        let contents = par_reader(&paths).unwrap();
        for (i, content) in contents.iter().enumerate() {
            assert_eq!(content, &format!("file{i}"));
        }
    }

    #[test]
    fn test_reader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = reader(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, PackError::Io(_)));
    }
}
