use crate::config::{Config, Source};
use crate::loaders::{csv_file, database, text};
use crate::model::{Admissions, Applicant};
use crate::simulator::Settings;
use clap::{ArgAction, Parser};
use eyre::{Error, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{Level, info, warn};

mod algos;
mod checks;
mod config;
mod display;
mod loaders;
mod model;
mod ranking;
mod scores;
mod simulator;
mod stats;

const DEFAULT_CONFIG: &str = "admissions.toml";

#[derive(Parser, Debug)]
#[command(version, about = "Admit applicants to university departments")]
struct Args {
    /// Use FILE instead of admissions.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Maximum number of applicants admitted by each department
    #[arg(long, allow_negative_numbers = true)]
    capacity: Option<i64>,
    /// Do not write back results
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

enum Store {
    Text(PathBuf),
    Csv(PathBuf),
    Database(database::Loader),
}

impl Store {
    async fn open(source: &Source) -> Result<Store, Error> {
        Ok(match source {
            Source::Text { path } => Store::Text(path.clone()),
            Source::Csv { path } => Store::Csv(path.clone()),
            Source::Database { url } => Store::Database(database::Loader::new(url).await?),
        })
    }

    async fn load(&mut self) -> Result<Vec<Applicant>, Error> {
        match self {
            Store::Text(path) => text::load(path),
            Store::Csv(path) => csv_file::load(path),
            Store::Database(loader) => loader.load().await,
        }
    }

    async fn save(&mut self, directory: &Path, a: &Admissions) -> Result<(), Error> {
        let outcome = simulator::outcome(a);
        match self {
            Store::Text(_) => text::save(directory, &outcome),
            Store::Csv(_) => csv_file::save(directory, &outcome),
            Store::Database(loader) => loader.save(&outcome).await,
        }
    }
}

fn load_config(file_name: Option<&Path>) -> Result<Config, Error> {
    match file_name {
        Some(file_name) => Config::load(file_name),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG)),
        None => Ok(Config::default()),
    }
}

fn prompt_capacity() -> Result<usize, Error> {
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .wrap_err("cannot read department capacity")?;
    config::parse_capacity(&line)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = load_config(args.config.as_deref())?;
    let capacity = match args.capacity.or(config.admission.capacity) {
        Some(capacity) => config::validate_capacity(capacity)?,
        None => prompt_capacity()?,
    };
    let settings = Settings {
        capacity,
        rounds: config.admission.rounds,
    };
    let mut store = Store::open(&config.input).await?;
    let applicants = store.load().await?;
    let admissions = simulator::simulate(applicants, settings)?;
    if args.dry_run {
        info!("Dry run, results are not saved");
    } else {
        store.save(&config.output.directory, &admissions).await?;
    }
    display::display_details(&admissions);
    display::display_stats(&admissions);
    display::display_rejected(&admissions);
    let rejected = admissions.rejected().len();
    if rejected > 0 {
        warn!(rejected, "Some applicants could not be admitted");
    }
    Ok(())
}
