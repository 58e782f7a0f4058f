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

use crate::fitness::Fitness;
use crate::monitor::termination::TerminationReason;

/// Snapshot handed to monitors after every generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: u64,
    pub generation_best: Fitness,
    pub best: Fitness,
    pub stagnant_generations: usize,
    pub feasible: usize,
}

/// Observer of the evolutionary search.
///
/// All hooks default to no-ops.
pub trait SearchMonitor {
    /// Human-readable name for diagnostics and logs.
    fn name(&self) -> &str;

    fn on_search_start(&mut self) {}

    fn on_generation(&mut self, _report: &GenerationReport) {}

    fn on_improvement(&mut self, _generation: u64, _best: Fitness) {}

    fn on_restart(&mut self, _generation: u64) {}

    fn on_search_end(&mut self, _generations: u64, _best: Fitness, _reason: TerminationReason) {}
}

impl<'a> std::fmt::Debug for dyn SearchMonitor + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopMonitor;

impl SearchMonitor for NoopMonitor {
    #[inline]
    fn name(&self) -> &str {
        "NoopMonitor"
    }
}

/// Emits search progress through `tracing`.
///
/// Progress is logged at `info` every `log_every` generations; improvements and
/// restarts are logged at `debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingMonitor {
    log_every: u64,
    improvements: u64,
    restarts: u64,
}

impl TracingMonitor {
    #[inline]
    pub fn new(log_every: u64) -> Self {
        Self {
            log_every: log_every.max(1),
            improvements: 0,
            restarts: 0,
        }
    }

    #[inline]
    pub fn improvements(&self) -> u64 {
        self.improvements
    }

    #[inline]
    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}

impl Default for TracingMonitor {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl SearchMonitor for TracingMonitor {
    fn name(&self) -> &str {
        "TracingMonitor"
    }

    fn on_search_start(&mut self) {
        self.improvements = 0;
        self.restarts = 0;
        tracing::debug!("Search started");
    }

    fn on_generation(&mut self, report: &GenerationReport) {
        if report.generation.is_multiple_of(self.log_every) {
            tracing::info!(
                generation = report.generation,
                generation_best = report.generation_best.value(),
                best = report.best.value(),
                feasible = report.feasible,
                stagnant = report.stagnant_generations,
                "Progress"
            );
        }
    }

    fn on_improvement(&mut self, generation: u64, best: Fitness) {
        self.improvements += 1;
        tracing::debug!(generation, fitness = best.value(), "New best chromosome");
    }

    fn on_restart(&mut self, generation: u64) {
        self.restarts += 1;
        tracing::debug!(generation, "Population stagnated; re-randomizing");
    }

    fn on_search_end(&mut self, generations: u64, best: Fitness, reason: TerminationReason) {
        tracing::info!(
            generations,
            best = best.value(),
            improvements = self.improvements,
            restarts = self.restarts,
            %reason,
            "Search finished"
        );
    }
}
