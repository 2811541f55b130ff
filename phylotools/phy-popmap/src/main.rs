// 1. read popmap + optional batch/species/subspecies maps
// 2. inner join on individual ID and write the table

use clap::Parser;
use config::{finish, ArgCheck, EXIT_FAILURE, EXIT_SUCCESS};
use log::{error, info, Level};
use simple_logger::init_with_level;

use phy_popmap::{cli::Args, core::merge_popmaps};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();
    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    merge_popmaps(args).unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
    finish(EXIT_SUCCESS);
}
