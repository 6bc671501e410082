use crate::domain::model::Birthday;

/// Collision finding strategy. Implementations must be deterministic: the same group
/// always yields the same answer, and any returned birthday occurs at least twice.
pub trait CollisionDetector: Send + Sync {
    fn find_match(&self, group: &[Birthday]) -> Option<Birthday>;

    fn has_collision(&self, group: &[Birthday]) -> bool {
        self.find_match(group).is_some()
    }
}

/// Receives progress notifications from a running estimation. Called from worker threads.
pub trait ProgressObserver: Sync {
    fn on_progress(&self, completed: u64, total: u64);

    fn on_complete(&self, _total: u64) {}
}

pub trait ConfigProvider: Send + Sync {
    fn group_size(&self) -> usize;
    fn trial_count(&self) -> u64;
    fn workers(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn detector(&self) -> crate::core::detector::DetectorKind;
    fn progress_interval(&self) -> u64;
}
