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
    fitness::{Fitness, FitnessEvaluator},
    sampling::SamplingSet,
};
use rand::Rng;
use rayon::prelude::*;

/// Chromosomes of one generation together with their fitness values.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
    fitness: Vec<Fitness>,
}

impl Population {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: usize, sampling: &SamplingSet) -> Self {
        let chromosomes = (0..size)
            .map(|_| Chromosome::random(rng, sampling))
            .collect();
        Self::from_chromosomes(chromosomes)
    }

    /// Fitness starts out infeasible until [`Population::evaluate`] runs.
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        let fitness = vec![Fitness::INFEASIBLE; chromosomes.len()];
        Self {
            chromosomes,
            fitness,
        }
    }

    /// Replaces every chromosome with a fresh random one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, sampling: &SamplingSet) {
        for c in self.chromosomes.iter_mut() {
            *c = Chromosome::random(rng, sampling);
        }
        self.fitness.fill(Fitness::INFEASIBLE);
    }

    /// Installs the next generation.
    pub fn replace(&mut self, next: Vec<Chromosome>) {
        self.fitness.clear();
        self.fitness.resize(next.len(), Fitness::INFEASIBLE);
        self.chromosomes = next;
    }

    /// Evaluates every chromosome. The parallel path keeps population order.
    pub fn evaluate<E: FitnessEvaluator>(&mut self, evaluator: &E, parallel: bool) {
        if parallel {
            self.chromosomes
                .par_iter()
                .map(|c| evaluator.evaluate(c))
                .collect_into_vec(&mut self.fitness);
        } else {
            self.fitness.clear();
            self.fitness
                .extend(self.chromosomes.iter().map(|c| evaluator.evaluate(c)));
        }
    }

    /// Highest fitness in the generation and the first chromosome that reaches it.
    ///
    /// Returns `(Fitness::INFEASIBLE, None)` when no chromosome is feasible.
    pub fn best(&self) -> (Fitness, Option<usize>) {
        let mut best = Fitness::INFEASIBLE;
        let mut index = None;
        for (i, &fit) in self.fitness.iter().enumerate() {
            if fit > best {
                best = fit;
                index = Some(i);
            }
        }
        (best, index)
    }

    /// Stable ascending sort by fitness.
    pub fn sort_by_fitness(&mut self) {
        let mut paired: Vec<(Fitness, Chromosome)> = self
            .fitness
            .drain(..)
            .zip(self.chromosomes.drain(..))
            .collect();
        paired.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (fit, c) in paired {
            self.fitness.push(fit);
            self.chromosomes.push(c);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    #[inline]
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    #[inline]
    pub fn fitness(&self) -> &[Fitness] {
        &self.fitness
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.chromosomes.get(index)
    }

    /// Number of chromosomes with finite fitness.
    #[inline]
    pub fn feasible_count(&self) -> usize {
        self.fitness.iter().filter(|f| f.is_feasible()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountEvaluator;

    impl FitnessEvaluator for CountEvaluator {
        fn evaluate(&self, chromosome: &Chromosome) -> Fitness {
            match chromosome.selected_count() {
                0 => Fitness::INFEASIBLE,
                n => Fitness::new(n as f64),
            }
        }
    }

    fn population() -> Population {
        Population::from_chromosomes(vec![
            Chromosome::from_selected(4, [0, 1]),
            Chromosome::from_selected(4, []),
            Chromosome::from_selected(4, [0, 1, 2]),
            Chromosome::from_selected(4, [3]),
            Chromosome::from_selected(4, [1, 2, 3]),
        ])
    }

    #[test]
    fn test_best_prefers_first_of_ties() {
        let mut p = population();
        p.evaluate(&CountEvaluator, false);
        assert_eq!(p.best(), (Fitness::new(3.0), Some(2)));
        assert_eq!(p.feasible_count(), 4);
    }

    #[test]
    fn test_best_of_infeasible_generation() {
        let mut p = Population::from_chromosomes(vec![Chromosome::empty(3); 3]);
        p.evaluate(&CountEvaluator, false);
        assert_eq!(p.best(), (Fitness::INFEASIBLE, None));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut seq = population();
        let mut par = population();
        seq.evaluate(&CountEvaluator, false);
        par.evaluate(&CountEvaluator, true);
        assert_eq!(seq.fitness(), par.fitness());
    }

    #[test]
    fn test_sort_is_stable_and_ascending() {
        let mut p = population();
        p.evaluate(&CountEvaluator, false);
        p.sort_by_fitness();
        let values: Vec<f64> = p.fitness().iter().map(|f| f.value()).collect();
        assert_eq!(values, vec![f64::NEG_INFINITY, 1.0, 2.0, 3.0, 3.0]);
        // The two 3-slot chromosomes keep their relative order.
        assert_eq!(p.chromosomes()[3], Chromosome::from_selected(4, [0, 1, 2]));
        assert_eq!(p.chromosomes()[4], Chromosome::from_selected(4, [1, 2, 3]));
    }

    #[test]
    fn test_replace_resets_fitness() {
        let mut p = population();
        p.evaluate(&CountEvaluator, false);
        p.replace(vec![Chromosome::from_selected(4, [0]); 5]);
        assert_eq!(p.len(), 5);
        assert!(p.fitness().iter().all(|f| !f.is_feasible()));
    }
}
