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

use crate::{
    config::GeneticConfig,
    engine::search::GeneticSearch,
    err::SolverError,
    fitness::{BudgetFitnessEvaluator, Fitness},
    monitor::{
        search_monitor::{SearchMonitor, TracingMonitor},
        stop::StopToken,
        termination::{Termination, TerminationReason},
        time::TimeLimitMonitor,
    },
    result::PlantingPlan,
    sampling::SamplingSet,
    scoring::ScoringModel,
};
use afforest_model::prelude::{Budgets, Catalog, PriorityZone};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Everything a run produced, including the seed needed to replay it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub plan: Option<PlantingPlan>,
    pub best_fitness: Fitness,
    pub generations: u64,
    pub restarts: u64,
    pub reason: TerminationReason,
    pub seed: u64,
}

impl SolveReport {
    #[inline]
    pub fn into_plan(self) -> Option<PlantingPlan> {
        self.plan
    }
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: GeneticConfig,
    stop: Option<StopToken>,
}

impl Solver {
    #[inline]
    pub fn new(config: GeneticConfig) -> Self {
        Self { config, stop: None }
    }

    #[inline]
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Returns `Ok(None)` when no feasible planting was found within the budget.
    pub fn solve(
        &self,
        catalog: &Catalog,
        budgets: &Budgets,
        zone: PriorityZone,
    ) -> Result<Option<PlantingPlan>, SolverError> {
        let mut monitor = TracingMonitor::new(self.config.log_every);
        Ok(self.run(catalog, budgets, zone, &mut monitor)?.into_plan())
    }

    #[tracing::instrument(
        level = "info",
        skip(self, catalog, monitor),
        fields(species = catalog.len())
    )]
    pub fn run(
        &self,
        catalog: &Catalog,
        budgets: &Budgets,
        zone: PriorityZone,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<SolveReport, SolverError> {
        self.config.validate()?;

        let model = ScoringModel::from_catalog(catalog, zone, self.config.weights);
        let sampling = SamplingSet::build(&model, budgets)?;
        let evaluator = BudgetFitnessEvaluator::new(&model, &sampling, *budgets);
        let search = GeneticSearch::new(self.config.clone(), &sampling, &evaluator)?;

        let seed = self.config.seed.unwrap_or_else(|| rand::rng().next_u64());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut termination = Termination::new(TimeLimitMonitor::new(
            self.config.time_limit,
            self.config.clock_resolution,
        ))
        .with_max_generations(self.config.max_generations);
        if let Some(stop) = &self.stop {
            termination = termination.with_stop_token(stop.clone());
        }

        tracing::debug!(
            seed,
            slots = sampling.len(),
            min_count = sampling.min_count(),
            max_count = sampling.max_count(),
            "Starting genetic search"
        );

        let outcome = search.run(&mut rng, &mut termination, monitor);
        let plan = outcome
            .best
            .as_ref()
            .map(|best| PlantingPlan::extract(catalog, &model, &sampling, budgets, best));

        Ok(SolveReport {
            plan,
            best_fitness: outcome.best_fitness,
            generations: outcome.generations,
            restarts: outcome.restarts,
            reason: outcome.reason,
            seed,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    config: GeneticConfig,
    stop: Option<StopToken>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GeneticConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_time_limit(mut self, time_limit: std::time::Duration) -> Self {
        self.config.time_limit = time_limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_chromosome_count(mut self, count: usize) -> Self {
        self.config.chromosome_count = count;
        self
    }

    pub fn with_max_generations(mut self, max_generations: u64) -> Self {
        self.config.max_generations = Some(max_generations);
        self
    }

    pub fn with_stop_token(mut self, stop: StopToken) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn build(self) -> Solver {
        Solver {
            config: self.config,
            stop: self.stop,
        }
    }
}
