use clap::Parser;
use config::{ArgCheck, CliError, DEFAULT_MISSING_OUTFILE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    about = "Writes CSV of sample IDs from pyRAD stats file for individuals with fewer loci than specified proportion"
)]
pub struct Args {
    #[arg(
        short = 's',
        long = "stats",
        required = true,
        value_name = "PATH",
        help = "pyRAD .stats file"
    )]
    pub stats: PathBuf,

    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "PATH",
        help = "Output filename",
        default_value = DEFAULT_MISSING_OUTFILE
    )]
    pub outfile: PathBuf,

    #[arg(
        short = 'p',
        long = "proportion",
        required = true,
        value_name = "PROPORTION",
        allow_negative_numbers = true,
        help = "Exclude samples with fewer loci than this proportion of the total [0-1]"
    )]
    pub proportion: f64,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }
}

impl ArgCheck for Args {
    fn validate_args(&self) -> Result<(), CliError> {
        if !(0.0..=1.0).contains(&self.proportion) {
            return Err(CliError::InvalidInput(format!(
                "ERROR: --proportion must be between 0 and 1, got {}",
                self.proportion
            )));
        }

        self.check_inputs()
    }

    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.stats]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn stats_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "taxon nloci\nAAA1 10\n##\nsampled unlinked SNPs= 10").unwrap();
        file
    }

    fn args(stats: &tempfile::NamedTempFile, proportion: &str) -> Args {
        Args::from(vec![
            "-s".to_string(),
            stats.path().display().to_string(),
            format!("--proportion={}", proportion),
        ])
    }

    #[test]
    fn test_defaults() {
        let stats = stats_file();
        let args = args(&stats, "0.75");

        assert_eq!(args.proportion, 0.75);
        assert_eq!(args.outfile, PathBuf::from(DEFAULT_MISSING_OUTFILE));
        assert!(args.check().is_ok());
    }

    #[test]
    fn test_proportion_bounds() {
        let stats = stats_file();

        assert!(args(&stats, "0").check().is_ok());
        assert!(args(&stats, "1").check().is_ok());
    }

    #[test]
    fn test_proportion_out_of_range() {
        let stats = stats_file();

        for proportion in ["1.5", "-0.1", "NaN"] {
            assert!(matches!(
                args(&stats, proportion).check(),
                Err(CliError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_negative_short_flag() {
        let stats = stats_file();
        let args = Args::from(vec![
            "-s".to_string(),
            stats.path().display().to_string(),
            "-p".to_string(),
            "-0.1".to_string(),
        ]);

        assert!(args.check().is_err());
    }
}
