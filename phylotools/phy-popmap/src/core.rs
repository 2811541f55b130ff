use anyhow::{bail, Result};
use config::{CliError, INDIVIDUAL_COLUMN, POP_COLUMN};
use hashbrown::HashMap;
use log::{info, warn};
use phy_pack::{par_reader, PopTable};

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::cli::Args;

/// individual-keyed table with one value column per joined map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedTable {
    pub columns: Vec<String>,
    pub rows: Vec<(String, Vec<String>)>,
}

impl From<PopTable> for JoinedTable {
    fn from(table: PopTable) -> Self {
        Self {
            columns: vec![table.column],
            rows: table
                .rows
                .into_iter()
                .map(|(ind, value)| (ind, vec![value]))
                .collect(),
        }
    }
}

impl JoinedTable {
    /// inner join on the individual ID; rows follow the left table and a
    /// duplicated ID yields one row per matching pair
    pub fn inner_join(self, right: &PopTable) -> Self {
        let mut index: HashMap<&str, Vec<&str>> = HashMap::new();
        for (ind, value) in right.rows.iter() {
            index.entry(ind.as_str()).or_default().push(value.as_str());
        }

        let mut rows = Vec::with_capacity(self.rows.len());
        for (ind, values) in self.rows {
            if let Some(matches) = index.get(ind.as_str()) {
                for value in matches {
                    let mut joined = values.clone();
                    joined.push(value.to_string());
                    rows.push((ind.clone(), joined));
                }
            }
        }

        let mut columns = self.columns;
        columns.push(right.column.clone());

        Self { columns, rows }
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{} {}", INDIVIDUAL_COLUMN, self.columns.join(" "))?;
        for (ind, values) in self.rows.iter() {
            writeln!(writer, "{} {}", ind, values.join(" "))?;
        }

        writer.flush()
    }
}

pub fn merge_popmaps(args: Args) -> Result<JoinedTable> {
    info!("Merging popmaps with args: {:?}", &args);

    let sources = args.sources();
    let paths = sources.iter().map(|(path, _)| *path).collect::<Vec<_>>();
    let contents = par_reader(&paths)?;

    let mut tables = Vec::with_capacity(sources.len());
    for ((path, column), content) in sources.iter().zip(contents.iter()) {
        let table = PopTable::parse(content, column)?;

        if table.is_empty() {
            if *column == POP_COLUMN {
                bail!(CliError::InvalidInput(format!(
                    "ERROR: popmap {} contains no records",
                    path.display()
                )));
            }

            warn!("{} contains no records. Skipping...", path.display());
            continue;
        }

        info!("Records in {}: {}", path.display(), table.len());
        tables.push(table);
    }

    let merged = join_tables(tables)?;
    if merged.rows.is_empty() {
        warn!("No individual is present in all files. Make sure each individual ID is present in every file.");
    }

    merged.write(BufWriter::new(File::create(&args.outfile)?))?;
    info!(
        "{} individuals written to {}",
        merged.rows.len(),
        args.outfile.display()
    );

    Ok(merged)
}

fn join_tables(tables: Vec<PopTable>) -> Result<JoinedTable> {
    let mut tables = tables.into_iter();
    let first = match tables.next() {
        Some(table) => JoinedTable::from(table),
        None => bail!("ERROR: was not able to join files, no table holds records"),
    };

    Ok(tables.fold(first, |acc, table| acc.inner_join(&table)))
}
