use crate::algos::DEFAULT_ROUNDS;
use eyre::{Error, WrapErr, bail, ensure};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub admission: AdmissionConfig,
    #[serde(default)]
    pub input: Source,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdmissionConfig {
    pub capacity: Option<i64>,
    #[serde(default = "default_rounds")]
    pub rounds: usize,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

fn default_rounds() -> usize {
    DEFAULT_ROUNDS
}

/// Where applicants come from. Results go back to the same kind of store.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Source {
    Text { path: PathBuf },
    Csv { path: PathBuf },
    Database { url: String },
}

impl Default for Source {
    fn default() -> Self {
        Source::Text {
            path: PathBuf::from("applicants.txt"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(content)?;
        ensure!(
            config.admission.rounds > 0,
            "admission.rounds must be at least 1"
        );
        Ok(config)
    }
}

/// Check that a department capacity is usable.
pub fn validate_capacity(capacity: i64) -> Result<usize, Error> {
    if capacity <= 0 {
        bail!("department capacity must be positive, got {capacity}");
    }
    usize::try_from(capacity).wrap_err("department capacity is too large")
}

/// Parse a capacity typed by the operator.
pub fn parse_capacity(input: &str) -> Result<usize, Error> {
    let input = input.trim();
    ensure!(!input.is_empty(), "no department capacity given");
    let capacity = input
        .parse::<i64>()
        .wrap_err_with(|| format!("cannot parse department capacity {input:?}"))?;
    validate_capacity(capacity)
}
