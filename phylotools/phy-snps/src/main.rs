// 1. read .snps matrix, strip locus separators
// 2. write sequential PHYLIP

use clap::Parser;
use config::{finish, ArgCheck, EXIT_FAILURE, EXIT_SUCCESS};
use log::{error, info, Level};
use simple_logger::init_with_level;

use phy_snps::{cli::Args, core::snps_to_phylip};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();
    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    snps_to_phylip(args).unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
    finish(EXIT_SUCCESS);
}
