use anyhow::Result;
use config::{with_suffix, write_csv_line, EXCLUDED_SUFFIX, KEEPERS_SUFFIX};
use log::{info, warn};
use phy_pack::{reader, Phylip, StatsBlock};

use crate::cli::{Args, WeightSource};
use crate::select::{select, Record, Selection};

pub fn pick_samples(args: Args) -> Result<Selection> {
    info!("Picking samples with args: {:?}", &args);

    let records = read_records(&args)?;
    info!("Samples parsed: {}", records.len());

    let selection = select(&records, args.start, args.end, args.keep)?;
    for shortfall in selection.shortfalls.iter() {
        warn!("{}", shortfall);
    }

    info!("Samples to keep: {:?}", selection.kept);

    let keepers = with_suffix(&args.out, KEEPERS_SUFFIX);
    write_csv_line(&selection.kept, &keepers)?;
    info!("Samples to keep written to: {}", keepers.display());
    info!("Number of samples kept: {}", selection.kept.len());

    let excluded = with_suffix(&args.out, EXCLUDED_SUFFIX);
    write_csv_line(&selection.excluded, &excluded)?;
    info!("Samples to exclude written to: {}", excluded.display());
    info!("Number of samples excluded: {}", selection.excluded.len());

    Ok(selection)
}

fn read_records(args: &Args) -> Result<Vec<Record>> {
    let contents = reader(&args.file)?;

    let records = match args.source()? {
        WeightSource::Stats => StatsBlock::parse(&contents)?
            .records()
            .map(|(id, weight)| Record::new(id, weight))
            .collect(),
        WeightSource::Phylip => Phylip::parse(&contents)?
            .records()
            .map(|(id, weight)| Record::new(id, weight))
            .collect(),
    };

    Ok(records)
}
