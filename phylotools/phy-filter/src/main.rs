// 1. scrape uninformative loci from the IQ-TREE log
// 2. move them into the blacklist directory

use clap::Parser;
use config::{finish, ArgCheck, EXIT_FAILURE, EXIT_SUCCESS};
use log::{error, info, Level};
use simple_logger::init_with_level;

use phy_filter::{cli::Args, core::blacklist_loci};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();
    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    blacklist_loci(args).unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
    finish(EXIT_SUCCESS);
}
