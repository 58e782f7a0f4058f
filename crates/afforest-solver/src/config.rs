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

use crate::err::ConfigError;
use std::time::Duration;

/// Weights applied to the zone score and the utility score of a species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub zone: f64,
    pub utility: f64,
}

impl ScoreWeights {
    #[inline]
    pub const fn new(zone: f64, utility: f64) -> Self {
        Self { zone, utility }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.zone.is_finite() && self.utility.is_finite()
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::new(20.0, 5.0)
    }
}

impl std::fmt::Display for ScoreWeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ScoreWeights(zone: {}, utility: {})",
            self.zone, self.utility
        )
    }
}

/// How the runtime budget is compared against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockResolution {
    /// Compare whole unix seconds. A run may overshoot its budget by up to one second.
    #[default]
    WholeSeconds,
    /// Compare the exact elapsed time.
    Precise,
}

impl std::fmt::Display for ClockResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockResolution::WholeSeconds => write!(f, "whole-seconds"),
            ClockResolution::Precise => write!(f, "precise"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneticConfig {
    pub chromosome_count: usize,
    pub max_stagnant_generations: usize,
    pub stagnation_threshold: f64,
    pub weights: ScoreWeights,
    pub time_limit: Duration,
    pub clock_resolution: ClockResolution,
    pub max_generations: Option<u64>,
    pub seed: Option<u64>,
    pub parallel_evaluation: bool,
    pub log_every: u64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            chromosome_count: 20,
            max_stagnant_generations: 30,
            stagnation_threshold: 0.5,
            weights: ScoreWeights::default(),
            time_limit: Duration::from_secs(30),
            clock_resolution: ClockResolution::WholeSeconds,
            max_generations: None,
            seed: None,
            parallel_evaluation: false,
            log_every: 1000,
        }
    }
}

impl GeneticConfig {
    #[inline]
    pub fn with_chromosome_count(mut self, count: usize) -> Self {
        self.chromosome_count = count;
        self
    }

    #[inline]
    pub fn with_max_stagnant_generations(mut self, window: usize) -> Self {
        self.max_stagnant_generations = window;
        self
    }

    #[inline]
    pub fn with_stagnation_threshold(mut self, threshold: f64) -> Self {
        self.stagnation_threshold = threshold;
        self
    }

    #[inline]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[inline]
    pub fn with_clock_resolution(mut self, resolution: ClockResolution) -> Self {
        self.clock_resolution = resolution;
        self
    }

    #[inline]
    pub fn with_max_generations(mut self, max_generations: Option<u64>) -> Self {
        self.max_generations = max_generations;
        self
    }

    #[inline]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn with_parallel_evaluation(mut self, parallel: bool) -> Self {
        self.parallel_evaluation = parallel;
        self
    }

    #[inline]
    pub fn with_log_every(mut self, log_every: u64) -> Self {
        self.log_every = log_every;
        self
    }

    /// Checks every knob before a search is started.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chromosome_count < 2 {
            return Err(ConfigError::TooFewChromosomes(self.chromosome_count));
        }
        if self.max_stagnant_generations == 0 {
            return Err(ConfigError::ZeroStagnationWindow);
        }
        if !self.stagnation_threshold.is_finite() || self.stagnation_threshold < 0.0 {
            return Err(ConfigError::InvalidStagnationThreshold(self.stagnation_threshold));
        }
        if !self.weights.is_finite() {
            return Err(ConfigError::NonFiniteWeights);
        }
        if self.time_limit.is_zero() {
            return Err(ConfigError::NonPositiveTimeLimit);
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroGenerationLimit);
        }
        if self.log_every == 0 {
            return Err(ConfigError::ZeroLogInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = GeneticConfig::default();
        assert_eq!(cfg.chromosome_count, 20);
        assert_eq!(cfg.max_stagnant_generations, 30);
        assert_eq!(cfg.stagnation_threshold, 0.5);
        assert_eq!(cfg.weights, ScoreWeights::new(20.0, 5.0));
        assert_eq!(cfg.clock_resolution, ClockResolution::WholeSeconds);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_single_chromosome() {
        let cfg = GeneticConfig::default().with_chromosome_count(1);
        assert_eq!(cfg.validate(), Err(ConfigError::TooFewChromosomes(1)));
    }

    #[test]
    fn test_rejects_zero_time_limit() {
        let cfg = GeneticConfig::default().with_time_limit(Duration::ZERO);
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveTimeLimit));
    }

    #[test]
    fn test_rejects_bad_threshold_and_weights() {
        let cfg = GeneticConfig::default().with_stagnation_threshold(f64::NAN);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidStagnationThreshold(_))
        ));

        let cfg = GeneticConfig::default().with_weights(ScoreWeights::new(f64::INFINITY, 1.0));
        assert_eq!(cfg.validate(), Err(ConfigError::NonFiniteWeights));
    }

    #[test]
    fn test_rejects_zero_limits() {
        let cfg = GeneticConfig::default().with_max_generations(Some(0));
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroGenerationLimit));

        let cfg = GeneticConfig::default().with_max_stagnant_generations(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStagnationWindow));

        let cfg = GeneticConfig::default().with_log_every(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroLogInterval));
    }
}
