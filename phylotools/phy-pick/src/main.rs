// 1. read weights from --stats or --phylip
// 2. keep the heaviest --keep samples per ID window
// 3. write <prefix>.keepers.csv and <prefix>.excluded.csv

use clap::Parser;
use config::{finish, ArgCheck, EXIT_FAILURE, EXIT_SUCCESS};
use log::{error, info, Level};
use simple_logger::init_with_level;

use phy_pick::{cli::Args, core::pick_samples};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();
    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    pick_samples(args).unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
    finish(EXIT_SUCCESS);
}
