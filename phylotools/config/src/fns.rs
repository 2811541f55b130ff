use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

// os
#[cfg(not(windows))]
const TICK_SETTINGS: (&str, u64) = ("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ", 80);
#[cfg(windows)]
const TICK_SETTINGS: (&str, u64) = (r"+-x| ", 200);

/// return a pre-configured progress bar
pub fn get_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let progressbar_style = ProgressStyle::default_spinner()
        .tick_chars(TICK_SETTINGS.0)
        .template(" {spinner} {msg:<30} {wide_bar} {pos}/{len} ")
        .expect("no template error");

    let progress_bar = ProgressBar::new(length);

    progress_bar.set_style(progressbar_style);
    progress_bar.enable_steady_tick(Duration::from_millis(TICK_SETTINGS.1));
    progress_bar.set_message(msg.to_owned());

    progress_bar
}

/// log the exit status and terminate the process
pub fn finish(code: i32) -> ! {
    log::info!("Program finished with exit status {}", code);
    std::process::exit(code)
}

/// write a collection as a single comma-joined, newline-terminated line
pub fn write_csv_line<T, P>(data: &[T], fname: P) -> Result<(), CliError>
where
    T: AsRef<str>,
    P: AsRef<Path>,
{
    log::info!(
        "Samples in {}: {}. Writing...",
        fname.as_ref().display(),
        data.len()
    );

    let mut writer = BufWriter::new(File::create(fname)?);
    writeln!(writer, "{}", join(data, ","))?;
    writer.flush()?;

    Ok(())
}

/// write a collection as a single comma-joined line without a line terminator
pub fn write_joined<T, P>(data: &[T], fname: P) -> Result<(), CliError>
where
    T: AsRef<str>,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(fname)?);
    write!(writer, "{}", join(data, ","))?;
    writer.flush()?;

    Ok(())
}

fn join<T: AsRef<str>>(data: &[T], sep: &str) -> String {
    data.iter()
        .map(|x| x.as_ref())
        .collect::<Vec<&str>>()
        .join(sep)
}

/// argument checker for all subcommands
pub trait ArgCheck {
    fn check(&self) -> Result<(), CliError> {
        self.validate_args()
    }

    fn validate_args(&self) -> Result<(), CliError> {
        self.check_inputs()?;
        self.check_dirs()?;

        Ok(())
    }

    fn check_inputs(&self) -> Result<(), CliError> {
        if self.get_inputs().is_empty() {
            let err = "No input file provided".to_string();
            return Err(CliError::InvalidInput(err));
        }
        for input in self.get_inputs() {
            validate(input)?;
        }

        Ok(())
    }

    fn check_dirs(&self) -> Result<(), CliError> {
        for dir in self.get_dirs() {
            validate_dir(dir)?;
        }
        Ok(())
    }

    fn get_inputs(&self) -> Vec<&PathBuf>;

    fn get_dirs(&self) -> Vec<&PathBuf> {
        Vec::new()
    }
}

/// error handling for CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// input file validation
pub fn validate(arg: &PathBuf) -> Result<(), CliError> {
    if !arg.exists() {
        return Err(CliError::InvalidInput(format!(
            "ERROR: the file {:?} does not exist or could not be read",
            arg
        )));
    }

    if !arg.is_file() {
        return Err(CliError::InvalidInput(format!(
            "ERROR: {:?} is not a file",
            arg
        )));
    }

    match std::fs::metadata(arg) {
        Ok(_) => Ok(()),
        Err(e) => Err(CliError::IoError(e)),
    }
}

/// directory validation
pub fn validate_dir(arg: &PathBuf) -> Result<(), CliError> {
    if !arg.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "ERROR: {:?} is not a directory",
            arg
        )));
    }

    Ok(())
}

/// `<prefix>.<suffix>`, keeping any directory component of the prefix
pub fn with_suffix<P: AsRef<Path>>(prefix: P, suffix: &str) -> PathBuf {
    let mut name = prefix.as_ref().as_os_str().to_owned();
    name.push(".");
    name.push(suffix);

    PathBuf::from(name)
}
