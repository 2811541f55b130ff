use anyhow::{bail, Context, Result};
use config::get_progress_bar;
use log::info;
use phy_pack::{reader, uninformative_loci};

use std::fs;
use std::io;
use std::path::Path;

use crate::cli::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub moved: usize,
    pub remaining: usize,
}

pub fn blacklist_loci(args: Args) -> Result<MoveReport> {
    info!("Blacklisting uninformative loci with args: {:?}", &args);

    let blacklist = uninformative_loci(&reader(&args.log)?);
    if blacklist.is_empty() {
        bail!("No blacklisted loci were found in log file. Aborting program.");
    }
    info!("Uninformative loci found in log file: {}", blacklist.len());
    info!(
        "Directory containing loci files: {}",
        args.dir.display()
    );

    create_blacklist_dir(&args.blacklist_dir)?;
    let moved = move_loci(&blacklist, &args.dir, &args.blacklist_dir)?;
    let remaining = count_files(&args.dir)?;

    info!(
        "Moved {} loci files to {}",
        moved,
        args.blacklist_dir.display()
    );
    info!("{} loci files remain in {}", remaining, args.dir.display());

    Ok(MoveReport { moved, remaining })
}

fn create_blacklist_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        bail!(
            "ERROR: blacklist directory {} already exists",
            dir.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("ERROR: creation of the directory {} failed", dir.display()))?;
    info!("Successfully created the blacklist directory {}", dir.display());

    Ok(())
}

fn move_loci(loci: &[String], from: &Path, to: &Path) -> Result<usize> {
    let pb = get_progress_bar(loci.len() as u64, "Moving blacklisted loci");

    for locus in loci {
        let (src, dst) = (from.join(locus), to.join(locus));
        move_file(&src, &dst).with_context(|| {
            format!(
                "ERROR: moving {} to {} failed",
                src.display(),
                dst.display()
            )
        })?;
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(loci.len())
}

/// rename, falling back to copy + remove across filesystems
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(_) if src.is_file() => {
            fs::copy(src, dst)?;
            fs::remove_file(src)
        }
        Err(e) => Err(e),
    }
}

fn count_files(dir: &Path) -> io::Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        if entry?.file_type()?.is_file() {
            count += 1;
        }
    }

    Ok(count)
}
