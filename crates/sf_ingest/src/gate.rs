use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Fixed wait before every upstream call, shared by all callers.
///
/// Each caller holds the single slot for the whole interval, so however many
/// ingests run concurrently, upstream sees at most one request per interval.
/// The slot is released if the waiting future is dropped.
#[derive(Debug)]
pub struct RateGate {
    interval: Duration,
    slot: Mutex<()>,
}

impl Default for RateGate {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl RateGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            slot: Mutex::new(()),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn wait(&self) {
        let _slot = self.slot.lock().await;
        if !self.interval.is_zero() {
            sleep(self.interval).await;
        }
    }
}
