// 1. read locus counts and the unlinked SNP total
// 2. write samples below proportion * total to --outfile

use clap::Parser;
use config::{finish, ArgCheck, EXIT_FAILURE, EXIT_SUCCESS};
use log::{error, info, Level};
use simple_logger::init_with_level;

use phy_missing::{cli::Args, core::exclude_missing};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();
    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    exclude_missing(args).unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
    finish(EXIT_SUCCESS);
}
