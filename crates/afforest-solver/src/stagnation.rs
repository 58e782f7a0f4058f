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

/// Relative change of the generation best: `|current - previous| / current`.
///
/// Yields NaN when both values are infinite or both are zero.
#[inline]
pub fn relative_change(current: Fitness, previous: Fitness) -> f64 {
    (current.value() - previous.value()).abs() / current.value()
}

/// Counts generations whose best fitness barely moved and signals a restart once
/// the count reaches the window.
///
/// The counter is not reset by a generation that does move; it only resets on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct StagnationTracker {
    threshold: f64,
    window: usize,
    counter: usize,
    previous: Fitness,
}

impl StagnationTracker {
    #[inline]
    pub fn new(threshold: f64, window: usize) -> Self {
        Self {
            threshold,
            window,
            counter: 0,
            previous: Fitness::INFEASIBLE,
        }
    }

    /// Records the best fitness of a generation. Returns `true` when the population
    /// should be re-randomized.
    pub fn observe(&mut self, current: Fitness) -> bool {
        let rel = relative_change(current, self.previous);
        if rel <= self.threshold || rel.is_nan() {
            self.counter += 1;
        }
        self.previous = current;

        if self.counter >= self.window {
            self.counter = 0;
            return true;
        }
        false
    }

    #[inline]
    pub fn counter(&self) -> usize {
        self.counter
    }

    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    #[inline]
    pub fn previous(&self) -> Fitness {
        self.previous
    }
}
