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
    chromosome::Chromosome, config::GeneticConfig, fitness::Fitness,
    stagnation::StagnationTracker,
};

/// Mutable bookkeeping of a running search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    best: Option<Chromosome>,
    best_fitness: Fitness,
    stagnation: StagnationTracker,
    generations: u64,
    restarts: u64,
}

impl SearchState {
    pub fn new(config: &GeneticConfig) -> Self {
        Self {
            best: None,
            best_fitness: Fitness::INFEASIBLE,
            stagnation: StagnationTracker::new(
                config.stagnation_threshold,
                config.max_stagnant_generations,
            ),
            generations: 0,
            restarts: 0,
        }
    }

    /// Keeps `candidate` if it is strictly better than the best so far.
    pub fn offer(&mut self, fitness: Fitness, candidate: &Chromosome) -> bool {
        if fitness > self.best_fitness {
            self.best_fitness = fitness;
            self.best = Some(candidate.clone());
            return true;
        }
        false
    }

    /// Closes a generation. Returns `true` if the population must be re-randomized.
    pub fn finish_generation(&mut self, generation_best: Fitness) -> bool {
        self.generations += 1;
        let restart = self.stagnation.observe(generation_best);
        if restart {
            self.restarts += 1;
        }
        restart
    }

    #[inline]
    pub fn best(&self) -> Option<&Chromosome> {
        self.best.as_ref()
    }

    #[inline]
    pub fn best_fitness(&self) -> Fitness {
        self.best_fitness
    }

    #[inline]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    #[inline]
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    #[inline]
    pub fn stagnation(&self) -> &StagnationTracker {
        &self.stagnation
    }

    #[inline]
    pub fn into_best(self) -> Option<Chromosome> {
        self.best
    }
}
