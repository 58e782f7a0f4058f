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

use crate::{chromosome::Chromosome, sampling::SamplingSet, scoring::ScoringModel};
use afforest_model::prelude::Budgets;
use std::cmp::Ordering;

/// Multiplier applied to the per-tree score to form the fitness value.
pub const FITNESS_SCALE: f64 = 100.0;

/// Scalar fitness. Infeasible chromosomes score negative infinity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fitness(f64);

impl Fitness {
    pub const INFEASIBLE: Fitness = Fitness(f64::NEG_INFINITY);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_feasible(self) -> bool {
        self.0 > f64::NEG_INFINITY
    }

    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Fitness {
    fn default() -> Self {
        Self::INFEASIBLE
    }
}

impl std::fmt::Display for Fitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fitness({})", self.0)
    }
}

/// Accumulated score, area and cost of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tally {
    pub score: f64,
    pub area: u64,
    pub cost: u64,
}

impl Tally {
    /// Adds `count` instances of `species`.
    #[inline]
    pub fn add(&mut self, model: &ScoringModel, species: usize, count: u64) {
        self.score += model.score(species) * count as f64;
        self.area = self
            .area
            .saturating_add(model.area(species).saturating_mul(count));
        self.cost = self
            .cost
            .saturating_add(model.cost(species).saturating_mul(count));
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tally(score: {}, area: {}, cost: {})",
            self.score, self.area, self.cost
        )
    }
}

/// Maps a chromosome to its fitness.
///
/// Evaluators are shared across rayon workers when parallel evaluation is enabled.
pub trait FitnessEvaluator: Send + Sync {
    fn evaluate(&self, chromosome: &Chromosome) -> Fitness;
}

impl<E: FitnessEvaluator + ?Sized> FitnessEvaluator for &E {
    #[inline]
    fn evaluate(&self, chromosome: &Chromosome) -> Fitness {
        (**self).evaluate(chromosome)
    }
}

/// Sum of selected scores per target tree, scaled by [`FITNESS_SCALE`];
/// negative infinity when the selection exceeds either budget.
#[derive(Debug, Clone)]
pub struct BudgetFitnessEvaluator<'a> {
    model: &'a ScoringModel,
    sampling: &'a SamplingSet,
    budgets: Budgets,
}

impl<'a> BudgetFitnessEvaluator<'a> {
    #[inline]
    pub fn new(model: &'a ScoringModel, sampling: &'a SamplingSet, budgets: Budgets) -> Self {
        Self {
            model,
            sampling,
            budgets,
        }
    }

    pub fn tally(&self, chromosome: &Chromosome) -> Tally {
        let mut tally = Tally::default();
        for slot in chromosome.selected() {
            tally.add(self.model, self.sampling.slot(slot), 1);
        }
        tally
    }

    #[inline]
    pub fn budgets(&self) -> &Budgets {
        &self.budgets
    }
}

impl FitnessEvaluator for BudgetFitnessEvaluator<'_> {
    fn evaluate(&self, chromosome: &Chromosome) -> Fitness {
        let tally = self.tally(chromosome);
        if !self.budgets.admits(tally.cost, tally.area) {
            return Fitness::INFEASIBLE;
        }
        Fitness::new(tally.score / self.budgets.target_population() as f64 * FITNESS_SCALE)
    }
}
