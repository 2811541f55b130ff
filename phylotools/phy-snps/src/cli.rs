use clap::Parser;
use config::{ArgCheck, DEFAULT_PHYLIP_OUTFILE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Converts pyRAD .snps file to PHYLIP format")]
pub struct Args {
    #[arg(
        short = 'f',
        long = "file",
        required = true,
        value_name = "PATH",
        help = "Input filename (.snps)"
    )]
    pub file: PathBuf,

    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "PATH",
        help = "Output filename",
        default_value = DEFAULT_PHYLIP_OUTFILE
    )]
    pub outfile: PathBuf,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }
}

impl ArgCheck for Args {
    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.file]
    }
}
