use std::time::{Duration, Instant};

/// Paces a loop to a fixed period, counting the time spent between calls.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps out the rest of the current period. Returns false if the period was already over.
    pub fn sleep(&mut self) -> bool {
        let remaining = match self.last_instant {
            Some(last_instant) => self.target_delta_time.checked_sub(last_instant.elapsed()),
            None => Some(self.target_delta_time),
        };

        let slept = match remaining {
            Some(remaining) if !remaining.is_zero() => {
                spin_sleep::sleep(remaining);
                true
            }
            _ => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}
