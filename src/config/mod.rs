pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::detector::DetectorKind;
#[cfg(feature = "cli")]
use crate::core::estimator::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TRIAL_COUNT};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// 應用程式對群組大小的預設上限，引擎本身沒有上限
pub const DEFAULT_MAX_GROUP_SIZE: usize = 100;
pub const DEFAULT_GROUP_SIZE: usize = 23;
pub const DEFAULT_DECIMALS: u32 = 2;
pub const MAX_DECIMALS: u32 = 10;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "birthday-paradox")]
#[command(about = "Monte Carlo simulation of the birthday paradox")]
pub struct CliConfig {
    /// Number of people in each sampled group
    #[arg(short = 'n', long, default_value_t = DEFAULT_GROUP_SIZE)]
    pub group_size: usize,

    /// Number of independent trials
    #[arg(short, long, default_value_t = DEFAULT_TRIAL_COUNT)]
    pub trials: u64,

    /// Largest group size accepted
    #[arg(long, default_value_t = DEFAULT_MAX_GROUP_SIZE)]
    pub max_group_size: usize,

    /// Worker threads (defaults to available parallelism)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = DetectorKind::Hash)]
    pub detector: DetectorKind,

    /// Report progress every N trials
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,

    /// Decimal places in the printed percentage
    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    pub decimals: u32,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the example group
    #[arg(long)]
    pub no_example: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn group_size(&self) -> usize {
        self.group_size
    }

    fn trial_count(&self) -> u64 {
        self.trials
    }

    fn workers(&self) -> usize {
        self.workers
            .unwrap_or_else(crate::core::estimator::default_workers)
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn detector(&self) -> DetectorKind {
        self.detector
    }

    fn progress_interval(&self) -> u64 {
        self.progress_interval
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_group_size("group_size", self.group_size, self.max_group_size)?;
        validation::validate_positive_number("trials", self.trials, 1)?;
        if let Some(workers) = self.workers {
            validation::validate_positive_number("workers", workers as u64, 1)?;
        }
        validation::validate_positive_number("progress_interval", self.progress_interval, 1)?;
        validation::validate_range("decimals", self.decimals, 0, MAX_DECIMALS)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["birthday-paradox"]);
        assert_eq!(config.group_size, 23);
        assert_eq!(config.trials, 100_000);
        assert_eq!(config.detector, DetectorKind::Hash);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "birthday-paradox",
            "--group-size",
            "70",
            "--detector",
            "pairwise",
            "--seed",
            "42",
            "--workers",
            "2",
        ]);
        assert_eq!(config.group_size(), 70);
        assert_eq!(config.detector(), DetectorKind::Pairwise);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.workers(), 2);
    }

    #[test]
    fn test_cli_rejects_group_over_cap() {
        let config = CliConfig::parse_from(["birthday-paradox", "--group-size", "101"]);
        assert!(config.validate().is_err());

        let raised =
            CliConfig::parse_from(["birthday-paradox", "-n", "400", "--max-group-size", "500"]);
        assert!(raised.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_zero_trials() {
        let config = CliConfig::parse_from(["birthday-paradox", "--trials", "0"]);
        assert!(config.validate().is_err());
    }
}
