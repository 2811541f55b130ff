use clap::Parser;
use config::{ArgCheck, DEFAULT_BLACKLIST_DIR};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Moves phylogenetically uninformative loci listed in an IQ-TREE log file")]
pub struct Args {
    #[arg(
        short = 'l',
        long = "log",
        required = true,
        value_name = "PATH",
        help = "Input IQ-TREE log file"
    )]
    pub log: PathBuf,

    #[arg(
        short = 'd',
        long = "dir",
        required = true,
        value_name = "DIR",
        help = "Path to directory containing files for all loci"
    )]
    pub dir: PathBuf,

    #[arg(
        short = 'b',
        long = "blacklist-dir",
        alias = "blacklist_dir",
        value_name = "DIR",
        help = "Blacklist directory receiving the uninformative loci",
        default_value = DEFAULT_BLACKLIST_DIR
    )]
    pub blacklist_dir: PathBuf,
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
        vec![&self.log]
    }

    fn get_dirs(&self) -> Vec<&PathBuf> {
        vec![&self.dir]
    }
}
