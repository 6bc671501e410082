pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    detector::{DetectorKind, HashSetDetector, PairwiseDetector, SortDetector},
    engine::SimulationEngine,
    estimator::{MonteCarloEstimator, NoProgress, TracingProgress},
    sampler::{sample_group, BirthdaySampler},
};
pub use crate::domain::model::{
    Birthday, ExampleGroup, Group, SimulationReport, SimulationSummary, DAYS_IN_YEAR,
};
pub use crate::domain::ports::{CollisionDetector, ConfigProvider, ProgressObserver};
pub use crate::utils::error::{Result, SimError};
