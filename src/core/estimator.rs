use crate::core::detector::DetectorKind;
use crate::core::sampler::sample_group;
use crate::domain::model::SimulationSummary;
use crate::domain::ports::{CollisionDetector, ConfigProvider, ProgressObserver};
use crate::utils::error::{Result, SimError};
use crate::utils::validation::validate_positive_number;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Instant;

pub const DEFAULT_TRIAL_COUNT: u64 = 100_000;
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Logs progress through `tracing`.
#[derive(Debug, Default)]
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn on_progress(&self, completed: u64, total: u64) {
        tracing::info!("⏳ {} / {} simulations run...", completed, total);
    }

    fn on_complete(&self, total: u64) {
        tracing::info!("✅ {} simulations run.", total);
    }
}

#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _completed: u64, _total: u64) {}
}

/// Runs independent birthday trials across worker threads and reduces the collision counts.
///
/// Every worker draws from its own ChaCha8 stream derived from one master seed, so
/// streams never overlap. A fixed seed with a fixed worker count reproduces the run exactly.
pub struct MonteCarloEstimator<D: CollisionDetector> {
    detector: D,
    workers: usize,
    seed: Option<u64>,
    progress_interval: u64,
}

impl MonteCarloEstimator<DetectorKind> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.detector())
            .with_workers(config.workers())
            .with_seed(config.seed())
            .with_progress_interval(config.progress_interval())
    }
}

impl<D: CollisionDetector> MonteCarloEstimator<D> {
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            workers: default_workers(),
            seed: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn run(&self, group_size: usize, trial_count: u64) -> Result<SimulationSummary> {
        self.run_with_observer(group_size, trial_count, &NoProgress)
    }

    pub fn run_with_observer(
        &self,
        group_size: usize,
        trial_count: u64,
        observer: &dyn ProgressObserver,
    ) -> Result<SimulationSummary> {
        validate_positive_number("trial_count", trial_count, 1)?;
        validate_positive_number("workers", self.workers as u64, 1)?;
        validate_positive_number("progress_interval", self.progress_interval, 1)?;

        let master_seed = self.master_seed()?;
        // 試驗數比 worker 少時，多出來的 worker 沒有工作
        let workers = (self.workers as u64).min(trial_count) as usize;
        let interval = self.progress_interval;
        let completed = AtomicU64::new(0);
        let started = Instant::now();

        tracing::debug!(
            "Running {} trials of group size {} on {} workers",
            trial_count,
            group_size,
            workers
        );

        let outcomes: Vec<thread::Result<u64>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    let trials = trials_for_worker(trial_count, workers, worker);
                    let detector = &self.detector;
                    let completed = &completed;

                    scope.spawn(move || {
                        let mut rng = worker_rng(master_seed, worker);
                        let mut hits = 0u64;
                        for _ in 0..trials {
                            let group = sample_group(&mut rng, group_size);
                            if detector.has_collision(&group) {
                                hits += 1;
                            }

                            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                            if done % interval == 0 {
                                observer.on_progress(done, trial_count);
                            }
                        }
                        hits
                    })
                })
                .collect();

            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let mut collision_count = 0u64;
        for (worker, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(hits) => collision_count += hits,
                Err(panic) => {
                    return Err(SimError::WorkerError {
                        message: format!("worker {} panicked: {}", worker, panic_message(&*panic)),
                    })
                }
            }
        }

        observer.on_complete(trial_count);
        let summary = SimulationSummary::new(group_size, trial_count, collision_count);
        tracing::debug!(
            "Simulation finished in {:?}: {} / {} trials had a match",
            started.elapsed(),
            summary.collision_count,
            summary.trial_count
        );

        Ok(summary)
    }

    fn master_seed(&self) -> Result<u64> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => {
                let mut rng =
                    ChaCha8Rng::try_from_os_rng().map_err(|e| SimError::RandomSourceError {
                        message: e.to_string(),
                    })?;
                Ok(rng.random())
            }
        }
    }
}

fn worker_rng(master_seed: u64, worker: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(master_seed);
    rng.set_stream(worker as u64);
    rng
}

/// Even split; the first `trial_count % workers` workers take one extra trial.
fn trials_for_worker(trial_count: u64, workers: usize, worker: usize) -> u64 {
    let workers = workers as u64;
    let worker = worker as u64;
    trial_count / workers + u64::from(worker < trial_count % workers)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detector::PairwiseDetector;
    use crate::domain::model::Birthday;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        seen: Mutex<Vec<u64>>,
        completed: Mutex<Option<u64>>,
    }

    impl ProgressObserver for RecordingObserver {
        fn on_progress(&self, completed: u64, _total: u64) {
            self.seen.lock().unwrap().push(completed);
        }

        fn on_complete(&self, total: u64) {
            *self.completed.lock().unwrap() = Some(total);
        }
    }

    struct PanickingDetector;

    impl CollisionDetector for PanickingDetector {
        fn find_match(&self, _group: &[Birthday]) -> Option<Birthday> {
            panic!("detector exploded");
        }
    }

    #[test]
    fn test_trials_split_covers_every_trial() {
        for (trials, workers) in [(10u64, 3usize), (100_000, 8), (7, 7), (1, 1)] {
            let total: u64 = (0..workers)
                .map(|w| trials_for_worker(trials, workers, w))
                .sum();
            assert_eq!(total, trials);
        }
        assert_eq!(trials_for_worker(10, 3, 0), 4);
        assert_eq!(trials_for_worker(10, 3, 2), 3);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let estimator = MonteCarloEstimator::new(DetectorKind::Hash).with_seed(Some(1));
        let err = estimator.run(23, 0).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let estimator = MonteCarloEstimator::new(DetectorKind::Hash).with_workers(0);
        assert!(estimator.run(23, 10).is_err());
    }

    #[test]
    fn test_group_size_zero_never_collides() {
        let estimator = MonteCarloEstimator::new(DetectorKind::Hash).with_seed(Some(3));
        let summary = estimator.run(0, 500).unwrap();
        assert_eq!(summary.collision_count, 0);
        assert_eq!(summary.probability, 0.0);
        assert_eq!(summary.trial_count, 500);
    }

    #[test]
    fn test_more_workers_than_trials() {
        let estimator = MonteCarloEstimator::new(PairwiseDetector)
            .with_workers(16)
            .with_seed(Some(5));
        let summary = estimator.run(400, 3).unwrap();
        assert_eq!(summary.collision_count, 3);
        assert_eq!(summary.probability, 1.0);
    }

    #[test]
    fn test_progress_reported_at_each_interval() {
        let observer = RecordingObserver::default();
        let estimator = MonteCarloEstimator::new(DetectorKind::Hash)
            .with_workers(4)
            .with_seed(Some(9))
            .with_progress_interval(100);
        estimator.run_with_observer(10, 1_000, &observer).unwrap();

        let mut seen = observer.seen.lock().unwrap().clone();
        seen.sort_unstable();
        assert_eq!(seen, (1..=10).map(|i| i * 100).collect::<Vec<_>>());
        assert_eq!(*observer.completed.lock().unwrap(), Some(1_000));
    }

    #[test]
    fn test_worker_panic_aborts_run() {
        let estimator = MonteCarloEstimator::new(PanickingDetector)
            .with_workers(2)
            .with_seed(Some(1));
        let observer = RecordingObserver::default();
        let err = estimator.run_with_observer(5, 10, &observer).unwrap_err();

        assert!(matches!(err, SimError::WorkerError { .. }));
        assert!(err.to_string().contains("detector exploded"));
        assert_eq!(*observer.completed.lock().unwrap(), None);
    }
}
