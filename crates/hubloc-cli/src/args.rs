use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hubloc_core::{CityWeighting, HubError, HubResult, PlacementConfig};
use log::LevelFilter;

/// Finds the population-weighted best hub for a set of places and optionally
/// grows a spanning tree from it.
#[derive(Debug, Parser)]
#[command(name = "hubloc", version, about)]
pub struct Args {
    /// Places CSV: name,category,population,latitude,longitude (with a header row).
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON placement config; flags below override its fields.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of climbers.
    #[arg(long)]
    pub climbers: Option<usize>,

    /// Steps per climber.
    #[arg(long)]
    pub iterations: Option<usize>,

    #[arg(long)]
    pub threads: Option<usize>,

    /// doubled, uniform or towns-only.
    #[arg(long, value_parser = parse_city_weighting)]
    pub city_weighting: Option<CityWeighting>,

    /// Whether to build the spanning tree.
    #[arg(long, value_enum, default_value_t = TreeMode::Ask)]
    pub tree: TreeMode,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Prefix log lines with a millisecond timestamp.
    #[arg(long)]
    pub log_timestamp: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TreeMode {
    Ask,
    Yes,
    No,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
}

fn parse_city_weighting(raw: &str) -> Result<CityWeighting, String> {
    raw.parse().map_err(|e: HubError| e.to_string())
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied, validated.
    pub fn placement_config(&self) -> HubResult<PlacementConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    HubError::config(format!("failed to read config {}: {e}", path.display()))
                })?;
                PlacementConfig::from_json(&json)?
            }
            None => PlacementConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(climbers) = self.climbers {
            config.climber_count = climbers;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(weighting) = self.city_weighting {
            config.city_weighting = weighting;
        }

        config.validate()?;
        Ok(config)
    }
}
