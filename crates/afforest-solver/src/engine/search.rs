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
    chromosome::Chromosome,
    config::GeneticConfig,
    crossover::MirroredCrossover,
    engine::state::SearchState,
    err::SolverError,
    fitness::{Fitness, FitnessEvaluator},
    monitor::{
        search_monitor::{GenerationReport, SearchMonitor},
        termination::{Termination, TerminationReason},
        time::Clock,
    },
    population::Population,
    sampling::SamplingSet,
};
use rand::Rng;

/// Result of one evolutionary run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub best: Option<Chromosome>,
    pub best_fitness: Fitness,
    pub generations: u64,
    pub restarts: u64,
    pub reason: TerminationReason,
}

/// Generational loop: evaluate, keep the best, restart on stagnation, otherwise breed.
#[derive(Debug, Clone)]
pub struct GeneticSearch<'s, E> {
    config: GeneticConfig,
    sampling: &'s SamplingSet,
    evaluator: E,
    crossover: MirroredCrossover,
}

impl<'s, E> GeneticSearch<'s, E>
where
    E: FitnessEvaluator,
{
    pub fn new(
        config: GeneticConfig,
        sampling: &'s SamplingSet,
        evaluator: E,
    ) -> Result<Self, SolverError> {
        config.validate()?;
        if sampling.len() < 3 {
            return Err(SolverError::SamplingSetTooSmall {
                len: sampling.len(),
            });
        }
        Ok(Self {
            config,
            sampling,
            evaluator,
            crossover: MirroredCrossover::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(slots = self.sampling.len(), chromosomes = self.config.chromosome_count)
    )]
    pub fn run<R, C>(
        &self,
        rng: &mut R,
        termination: &mut Termination<C>,
        monitor: &mut dyn SearchMonitor,
    ) -> SearchOutcome
    where
        R: Rng + ?Sized,
        C: Clock,
    {
        let mut population = Population::random(rng, self.config.chromosome_count, self.sampling);
        let mut state = SearchState::new(&self.config);

        termination.on_search_start();
        monitor.on_search_start();

        let reason = loop {
            if let Some(reason) = termination.check(state.generations()) {
                break reason;
            }

            population.evaluate(&self.evaluator, self.config.parallel_evaluation);
            let (generation_best, index) = population.best();
            let improved = match index.and_then(|i| population.get(i)) {
                Some(candidate) => state.offer(generation_best, candidate),
                None => false,
            };

            let restart = state.finish_generation(generation_best);
            let generation = state.generations();
            if improved {
                monitor.on_improvement(generation, state.best_fitness());
            }
            monitor.on_generation(&GenerationReport {
                generation,
                generation_best,
                best: state.best_fitness(),
                stagnant_generations: state.stagnation().counter(),
                feasible: population.feasible_count(),
            });

            if restart {
                population.randomize(rng, self.sampling);
                monitor.on_restart(generation);
                continue;
            }

            population.sort_by_fitness();
            let next = self.crossover.breed(rng, population.chromosomes());
            population.replace(next);
        };

        monitor.on_search_end(state.generations(), state.best_fitness(), reason);

        SearchOutcome {
            best_fitness: state.best_fitness(),
            generations: state.generations(),
            restarts: state.restarts(),
            best: state.into_best(),
            reason,
        }
    }
}
