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

pub mod chromosome;
pub mod config;
pub mod crossover;
pub mod engine;
pub mod err;
pub mod fitness;
pub mod monitor;
pub mod population;
pub mod result;
pub mod sampling;
pub mod scoring;
pub mod stagnation;

pub mod prelude {
    pub use crate::chromosome::Chromosome;
    pub use crate::config::{ClockResolution, GeneticConfig, ScoreWeights};
    pub use crate::engine::search::{GeneticSearch, SearchOutcome};
    pub use crate::engine::solver::{SolveReport, Solver, SolverBuilder};
    pub use crate::err::{ConfigError, SamplingError, SolverError};
    pub use crate::fitness::{BudgetFitnessEvaluator, Fitness, FitnessEvaluator};
    pub use crate::monitor::{
        search_monitor::{GenerationReport, NoopMonitor, SearchMonitor, TracingMonitor},
        stop::StopToken,
        termination::{Termination, TerminationReason},
    };
    pub use crate::result::PlantingPlan;
    pub use crate::sampling::{MAX_SAMPLING_SLOTS, SamplingSet};
    pub use crate::scoring::ScoringModel;
}
