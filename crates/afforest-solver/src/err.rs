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

use afforest_model::catalog::err::Resource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    TooFewChromosomes(usize),
    ZeroStagnationWindow,
    InvalidStagnationThreshold(f64),
    NonFiniteWeights,
    NonPositiveTimeLimit,
    ZeroGenerationLimit,
    ZeroLogInterval,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TooFewChromosomes(n) => {
                write!(f, "At least 2 chromosomes are required, got {}", n)
            }
            ConfigError::ZeroStagnationWindow => {
                write!(f, "The stagnation window must be at least one generation")
            }
            ConfigError::InvalidStagnationThreshold(v) => write!(
                f,
                "The stagnation threshold must be finite and non-negative, got {}",
                v
            ),
            ConfigError::NonFiniteWeights => write!(f, "Score weights must be finite"),
            ConfigError::NonPositiveTimeLimit => write!(
                f,
                "The runtime budget must be positive; no generation would run"
            ),
            ConfigError::ZeroGenerationLimit => {
                write!(f, "The generation limit must be at least one")
            }
            ConfigError::ZeroLogInterval => write!(f, "The log interval must be at least one"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingError {
    /// The scoring model holds no species.
    EmptyModel,
    /// A species consumes none of a budgeted resource.
    DegenerateSpecies { index: usize, resource: Resource },
    /// No single instance of any species fits both budgets.
    NothingFits,
    /// The budgets admit more plantable copies than a sampling set may hold.
    TooManySlots { slots: usize, limit: usize },
}

impl std::fmt::Display for SamplingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplingError::EmptyModel => write!(f, "Cannot sample from an empty species list"),
            SamplingError::DegenerateSpecies { index, resource } => write!(
                f,
                "Species at index {} has a zero {}; its plantable count is unbounded",
                index, resource
            ),
            SamplingError::NothingFits => {
                write!(f, "No species fits within the area and cost limits")
            }
            SamplingError::TooManySlots { slots, limit } => write!(
                f,
                "The budgets admit {} sampling slots; at most {} are supported",
                slots, limit
            ),
        }
    }
}

impl std::error::Error for SamplingError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    Config(ConfigError),
    Sampling(SamplingError),
    /// Single-point crossover needs a pivot in `[1, len - 2]`.
    SamplingSetTooSmall { len: usize },
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::Config(e) => write!(f, "Configuration error: {}", e),
            SolverError::Sampling(e) => write!(f, "Sampling error: {}", e),
            SolverError::SamplingSetTooSmall { len } => write!(
                f,
                "The sampling set has {} slot(s); crossover needs at least 3",
                len
            ),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Config(e) => Some(e),
            SolverError::Sampling(e) => Some(e),
            SolverError::SamplingSetTooSmall { .. } => None,
        }
    }
}

impl From<ConfigError> for SolverError {
    #[inline]
    fn from(err: ConfigError) -> Self {
        SolverError::Config(err)
    }
}

impl From<SamplingError> for SolverError {
    #[inline]
    fn from(err: SamplingError) -> Self {
        SolverError::Sampling(err)
    }
}
