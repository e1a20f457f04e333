use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Blocks the calling thread between frames.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for Arc<S> {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

impl<S: Sleeper + ?Sized> Sleeper for Box<S> {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records requested sleeps without blocking.
#[derive(Debug, Default)]
pub struct MockSleeper {
    durations: Mutex<Vec<Duration>>,
}

impl MockSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn total_duration(&self) -> Duration {
        self.lock().iter().sum()
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Duration>> {
        // a panic while holding the lock leaves the Vec intact
        self.durations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Sleeper for MockSleeper {
    fn sleep(&self, duration: Duration) {
        self.lock().push(duration);
    }
}

/// Converts a delay given in seconds, clamping negative and NaN to zero
/// and anything too large for a `Duration` to `Duration::MAX`.
pub fn seconds(value: f64) -> Duration {
    if value.is_nan() || value <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(value).unwrap_or(Duration::MAX)
}
