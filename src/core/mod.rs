pub mod analytic;
pub mod calendar;
pub mod detector;
pub mod engine;
pub mod estimator;
pub mod sampler;

pub use crate::domain::model::{Birthday, Group, SimulationSummary, DAYS_IN_YEAR};
pub use crate::domain::ports::{CollisionDetector, ConfigProvider, ProgressObserver};
pub use crate::utils::error::Result;
