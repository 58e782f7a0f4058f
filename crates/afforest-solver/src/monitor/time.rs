// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::config::ClockResolution;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of wall-clock time as a duration since the unix epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// Wall-clock runtime budget.
///
/// With [`ClockResolution::WholeSeconds`] the budget ends once the current unix second
/// exceeds the start second plus the budget, so a run may last up to one second longer
/// than requested. [`ClockResolution::Precise`] compares the exact elapsed time.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor<C: Clock = SystemClock> {
    clock: C,
    start: Duration,
    time_limit: Duration,
    resolution: ClockResolution,
}

impl TimeLimitMonitor<SystemClock> {
    #[inline]
    pub fn new(time_limit: Duration, resolution: ClockResolution) -> Self {
        Self::with_clock(SystemClock, time_limit, resolution)
    }
}

impl<C: Clock> TimeLimitMonitor<C> {
    #[inline]
    pub fn with_clock(clock: C, time_limit: Duration, resolution: ClockResolution) -> Self {
        let start = clock.now();
        Self {
            clock,
            start,
            time_limit,
            resolution,
        }
    }

    /// Restarts the budget from the current time.
    #[inline]
    pub fn on_search_start(&mut self) {
        self.start = self.clock.now();
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        let now = self.clock.now();
        match self.resolution {
            ClockResolution::WholeSeconds => {
                let deadline = self.start.as_secs() as f64 + self.time_limit.as_secs_f64();
                now.as_secs() as f64 > deadline
            }
            ClockResolution::Precise => now.saturating_sub(self.start) >= self.time_limit,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    #[inline]
    pub fn resolution(&self) -> ClockResolution {
        self.resolution
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Clock;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    /// Manually advanced clock, in milliseconds since the epoch.
    #[derive(Debug, Clone, Default)]
    pub struct ManualClock(Arc<AtomicU64>);

    impl ManualClock {
        pub fn at_millis(ms: u64) -> Self {
            Self(Arc::new(AtomicU64::new(ms)))
        }

        pub fn advance_millis(&self, ms: u64) {
            self.0.fetch_add(ms, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            Duration::from_millis(self.0.load(Ordering::SeqCst))
        }
    }
}
