use clap::{ArgAction, Parser};
use config::{ArgCheck, CliError, DEFAULT_GROUP_END, DEFAULT_GROUP_START, DEFAULT_PICK_PREFIX};
use std::path::PathBuf;

/// where sample weights come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightSource {
    Stats,
    Phylip,
}

#[derive(Debug, Parser)]
#[command(about = "Picks best N samples from pyRAD stats or PHYLIP file")]
pub struct Args {
    #[arg(
        short = 'k',
        long = "keep",
        required = true,
        value_name = "KEEP",
        help = "Number of samples to keep for each taxon"
    )]
    pub keep: usize,

    #[arg(
        short = 'f',
        long = "file",
        required = true,
        value_name = "PATH",
        help = "Input file name"
    )]
    pub file: PathBuf,

    #[arg(
        short = 'p',
        long = "phylip",
        help = "Toggles PHYLIP input format [weights are called sites per sample]",
        action = ArgAction::SetTrue,
    )]
    pub phylip: bool,

    #[arg(
        short = 'S',
        long = "stats",
        help = "Toggles pyRAD stats file for sample weights",
        action = ArgAction::SetTrue,
    )]
    pub stats: bool,

    #[arg(
        short = 's',
        long = "start",
        value_name = "START",
        help = "First character of sample ID to be used as pattern for population ID",
        default_value_t = DEFAULT_GROUP_START
    )]
    pub start: usize,

    #[arg(
        short = 'e',
        long = "end",
        value_name = "END",
        help = "Last character of sample ID to be used as pattern for population ID",
        default_value_t = DEFAULT_GROUP_END
    )]
    pub end: usize,

    #[arg(
        short = 'o',
        long = "out",
        value_name = "PREFIX",
        help = "Output file prefix for samples to keep and exclude",
        default_value = DEFAULT_PICK_PREFIX
    )]
    pub out: PathBuf,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    pub fn source(&self) -> Result<WeightSource, CliError> {
        match (self.stats, self.phylip) {
            (true, false) => Ok(WeightSource::Stats),
            (false, true) => Ok(WeightSource::Phylip),
            (true, true) => Err(CliError::InvalidInput(
                "ERROR: only one input file type can be specified".to_string(),
            )),
            (false, false) => Err(CliError::InvalidInput(
                "ERROR: you must provide either --stats or --phylip".to_string(),
            )),
        }
    }
}

impl ArgCheck for Args {
    fn validate_args(&self) -> Result<(), CliError> {
        self.source()?;
        self.check_inputs()
    }

    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.file]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::from(extra.iter().map(|x| x.to_string()).collect())
    }

    #[test]
    fn test_defaults() {
        let args = args(&["-k", "2", "-f", "in.stats", "-S"]);

        assert_eq!(args.keep, 2);
        assert_eq!(args.start, 1);
        assert_eq!(args.end, 4);
        assert_eq!(args.out, PathBuf::from("out"));
        assert_eq!(args.source().unwrap(), WeightSource::Stats);
    }

    #[test]
    fn test_conflicting_sources() {
        let args = args(&["-k", "2", "-f", "in.stats", "-S", "-p"]);
        assert!(args.source().is_err());
        assert!(args.check().is_err());
    }

    #[test]
    fn test_missing_source() {
        let args = args(&["-k", "2", "-f", "in.phy"]);
        assert!(args.source().is_err());
    }
}
