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
    chromosome::Chromosome, fitness::Tally, sampling::SamplingSet, scoring::ScoringModel,
};
use afforest_model::prelude::{Budgets, Catalog};
use serde::Serialize;
use std::collections::BTreeMap;

/// Decoded planting: how many of each species to plant, with aggregate totals.
///
/// `score` is per target tree and unscaled, so it equals the winning fitness / 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantingPlan {
    trees: BTreeMap<String, usize>,
    score: f64,
    area: u64,
    cost: u64,
}

impl PlantingPlan {
    /// Counts selected slots by common name, then recomputes the totals from
    /// those counts through the catalog's name index.
    pub fn extract(
        catalog: &Catalog,
        model: &ScoringModel,
        sampling: &SamplingSet,
        budgets: &Budgets,
        chromosome: &Chromosome,
    ) -> Self {
        let mut trees: BTreeMap<String, usize> = BTreeMap::new();
        for slot in chromosome.selected() {
            if let Some(species) = catalog.species().get(sampling.slot(slot)) {
                *trees.entry(species.common_name().to_string()).or_default() += 1;
            }
        }

        let mut tally = Tally::default();
        for (name, &count) in &trees {
            if let Some(id) = catalog.lookup(name) {
                tally.add(model, id.index(), count as u64);
            }
        }

        Self {
            trees,
            score: tally.score / budgets.target_population() as f64,
            area: tally.area,
            cost: tally.cost,
        }
    }

    #[inline]
    pub fn trees(&self) -> &BTreeMap<String, usize> {
        &self.trees
    }

    #[inline]
    pub fn count(&self, common_name: &str) -> usize {
        self.trees.get(common_name).copied().unwrap_or(0)
    }

    #[inline]
    pub fn total_trees(&self) -> usize {
        self.trees.values().sum()
    }

    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.area
    }

    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }
}

impl std::fmt::Display for PlantingPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PlantingPlan(trees: {}, score: {}, area: {}, cost: {})",
            self.total_trees(),
            self.score,
            self.area,
            self.cost
        )
    }
}
