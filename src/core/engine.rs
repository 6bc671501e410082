use crate::core::analytic::exact_collision_probability;
use crate::core::estimator::{MonteCarloEstimator, TracingProgress};
use crate::core::sampler::BirthdaySampler;
use crate::domain::model::{ExampleGroup, SimulationReport};
use crate::domain::ports::CollisionDetector;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

// 範例群組與模擬使用不同的種子，避免與 worker 0 的第一組重複
const EXAMPLE_SEED_SALT: u64 = 0x5EED_0F_B1_27_4D_A7;

pub struct SimulationEngine<D: CollisionDetector> {
    estimator: MonteCarloEstimator<D>,
    seed: Option<u64>,
    monitor: SystemMonitor,
}

impl<D: CollisionDetector> SimulationEngine<D> {
    pub fn new(estimator: MonteCarloEstimator<D>, seed: Option<u64>) -> Self {
        Self::new_with_monitoring(estimator, seed, false)
    }

    pub fn new_with_monitoring(
        estimator: MonteCarloEstimator<D>,
        seed: Option<u64>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            estimator: estimator.with_seed(seed),
            seed,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Samples one example group and checks it for a match.
    pub fn example(&self, group_size: usize) -> Result<ExampleGroup> {
        let mut sampler =
            BirthdaySampler::from_seed_option(self.seed.map(|s| s ^ EXAMPLE_SEED_SALT))?;
        let birthdays = sampler.sample_group(group_size);
        let matching = self.estimator.detector().find_match(&birthdays);

        Ok(ExampleGroup {
            birthdays,
            matching,
        })
    }

    pub fn run(
        &self,
        group_size: usize,
        trial_count: u64,
        show_example: bool,
    ) -> Result<SimulationReport> {
        tracing::info!("🎂 Birthday paradox simulation: group size {}", group_size);
        self.monitor.log_stats("Start");

        let example = if show_example {
            let example = self.example(group_size)?;
            tracing::debug!("Example group match: {:?}", example.matching);
            Some(example)
        } else {
            None
        };

        tracing::info!(
            "Generating {} random birthdays {} times...",
            group_size,
            trial_count
        );
        let summary = self
            .estimator
            .run_with_observer(group_size, trial_count, &TracingProgress)?;
        self.monitor.log_stats("Simulation");
        self.monitor.log_final_stats();

        Ok(SimulationReport {
            example,
            exact_probability: exact_collision_probability(group_size),
            summary,
        })
    }
}
