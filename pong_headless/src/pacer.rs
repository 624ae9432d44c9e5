use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate tick scheduler.
///
/// Never runs ahead of the rate; after a stall it releases one late tick and
/// then resumes the normal period instead of bursting to catch up.
#[derive(Debug)]
pub struct Pacer {
    period: Duration,
    next: Instant,
}

impl Pacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now(),
        }
    }

    /// Block until the next tick deadline
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        }

        self.next += self.period;
        let now = Instant::now();
        if self.next <= now {
            self.next = now + self.period;
        }
    }

    /// Hold the following tick back by `pause`
    pub fn pause(&mut self, pause: Duration) {
        self.next = self.next.max(Instant::now()) + pause;
    }
}
