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

use crate::monitor::{
    stop::StopToken,
    time::{Clock, SystemClock, TimeLimitMonitor},
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    TimeLimit,
    GenerationLimit,
    Stopped,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::TimeLimit => write!(f, "time limit reached"),
            TerminationReason::GenerationLimit => write!(f, "generation limit reached"),
            TerminationReason::Stopped => write!(f, "stop requested"),
        }
    }
}

/// Checked once before every generation.
#[derive(Debug, Clone)]
pub struct Termination<C: Clock = SystemClock> {
    time: TimeLimitMonitor<C>,
    stop: Option<StopToken>,
    max_generations: Option<u64>,
}

impl<C: Clock> Termination<C> {
    #[inline]
    pub fn new(time: TimeLimitMonitor<C>) -> Self {
        Self {
            time,
            stop: None,
            max_generations: None,
        }
    }

    #[inline]
    pub fn with_stop_token(mut self, stop: StopToken) -> Self {
        self.stop = Some(stop);
        self
    }

    #[inline]
    pub fn with_max_generations(mut self, max_generations: Option<u64>) -> Self {
        self.max_generations = max_generations;
        self
    }

    #[inline]
    pub fn on_search_start(&mut self) {
        self.time.on_search_start();
    }

    /// `generations` is the number of generations completed so far.
    pub fn check(&self, generations: u64) -> Option<TerminationReason> {
        if let Some(stop) = &self.stop
            && stop.is_set()
        {
            return Some(TerminationReason::Stopped);
        }
        if let Some(max) = self.max_generations
            && generations >= max
        {
            return Some(TerminationReason::GenerationLimit);
        }
        if self.time.is_exhausted() {
            return Some(TerminationReason::TimeLimit);
        }
        None
    }

    #[inline]
    pub fn time(&self) -> &TimeLimitMonitor<C> {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockResolution;
    use crate::monitor::time::testing::ManualClock;
    use std::time::Duration;

    fn termination(clock: &ManualClock) -> Termination<ManualClock> {
        Termination::new(TimeLimitMonitor::with_clock(
            clock.clone(),
            Duration::from_secs(5),
            ClockResolution::Precise,
        ))
    }

    #[test]
    fn test_runs_until_time_limit() {
        let clock = ManualClock::at_millis(0);
        let t = termination(&clock);
        assert_eq!(t.check(1_000_000), None);
        clock.advance_millis(5_000);
        assert_eq!(t.check(0), Some(TerminationReason::TimeLimit));
    }

    #[test]
    fn test_generation_limit() {
        let clock = ManualClock::at_millis(0);
        let t = termination(&clock).with_max_generations(Some(10));
        assert_eq!(t.check(9), None);
        assert_eq!(t.check(10), Some(TerminationReason::GenerationLimit));
    }

    #[test]
    fn test_stop_token_wins() {
        let clock = ManualClock::at_millis(0);
        let stop = StopToken::new();
        let t = termination(&clock)
            .with_stop_token(stop.clone())
            .with_max_generations(Some(1));
        stop.request_stop();
        clock.advance_millis(10_000);
        assert_eq!(t.check(5), Some(TerminationReason::Stopped));
    }
}
