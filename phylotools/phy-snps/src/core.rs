use anyhow::Result;
use log::info;
use phy_pack::{reader, SnpMatrix};

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::cli::Args;

pub fn snps_to_phylip(args: Args) -> Result<SnpMatrix> {
    info!("Converting .snps to PHYLIP with args: {:?}", &args);

    let matrix = SnpMatrix::parse(&reader(&args.file)?)?;
    let nchar = matrix.nchar()?;

    write_phylip(&matrix, nchar, BufWriter::new(File::create(&args.outfile)?))?;
    info!(
        "{} samples x {} sites written to {}",
        matrix.len(),
        nchar,
        args.outfile.display()
    );

    Ok(matrix)
}

pub fn write_phylip<W: Write>(matrix: &SnpMatrix, nchar: usize, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{} {}", matrix.len(), nchar)?;
    for (sample, sequence) in matrix.rows.iter() {
        writeln!(writer, "{}\t{}", sample, sequence)?;
    }
    writeln!(writer)?;

    writer.flush()
}
