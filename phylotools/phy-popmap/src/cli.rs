use clap::Parser;
use config::{
    ArgCheck, BATCH_COLUMN, DEFAULT_POPMAP_OUTFILE, POP_COLUMN, SPECIES_COLUMN, SUBSPECIES_COLUMN,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Adds batch, species and subspecies columns to a popmap file")]
pub struct Args {
    #[arg(
        short = 'p',
        long = "popmap",
        required = true,
        value_name = "PATH",
        help = "Whitespace-separated popmap file: indID popID"
    )]
    pub popmap: PathBuf,

    #[arg(
        short = 'b',
        long = "batch",
        required = false,
        value_name = "PATH",
        help = "File containing batchIDs: indID batchID"
    )]
    pub batch: Option<PathBuf>,

    #[arg(
        short = 'S',
        long = "species",
        required = false,
        value_name = "PATH",
        help = "File containing speciesIDs: indID speciesID"
    )]
    pub species: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "subspecies",
        required = false,
        value_name = "PATH",
        help = "File containing subspeciesIDs: indID subspeciesID"
    )]
    pub subspecies: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "PATH",
        help = "Output filename",
        default_value = DEFAULT_POPMAP_OUTFILE
    )]
    pub outfile: PathBuf,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    /// provided tables in join order, paired with their column name
    pub fn sources(&self) -> Vec<(&PathBuf, &'static str)> {
        [
            (self.batch.as_ref(), BATCH_COLUMN),
            (Some(&self.popmap), POP_COLUMN),
            (self.species.as_ref(), SPECIES_COLUMN),
            (self.subspecies.as_ref(), SUBSPECIES_COLUMN),
        ]
        .into_iter()
        .filter_map(|(path, column)| path.map(|p| (p, column)))
        .collect()
    }
}

impl ArgCheck for Args {
    fn get_inputs(&self) -> Vec<&PathBuf> {
        self.sources().into_iter().map(|(path, _)| path).collect()
    }
}
