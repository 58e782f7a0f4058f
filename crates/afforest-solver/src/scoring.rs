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

use crate::config::ScoreWeights;
use afforest_model::prelude::{Catalog, PriorityZone};

/// Per-species score, area and cost vectors, aligned with catalog positions.
///
/// The score of species `i` for zone `z` is
/// `(weights.zone * zone_score[i][z] + weights.utility * utility[i]) * area[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringModel {
    score: Vec<f64>,
    area: Vec<u64>,
    cost: Vec<u64>,
}

impl ScoringModel {
    #[tracing::instrument(level = "debug", skip(catalog), fields(species = catalog.len()))]
    pub fn from_catalog(catalog: &Catalog, zone: PriorityZone, weights: ScoreWeights) -> Self {
        Self::from_items(catalog.iter().map(|s| {
            let raw = weights.zone * s.zone_score(zone) + weights.utility * s.utility();
            (raw * s.area() as f64, s.area(), s.cost())
        }))
    }

    /// Builds a model from precomputed `(score, area, cost)` triples.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (f64, u64, u64)>,
    {
        let iter = items.into_iter();
        let (lower, _) = iter.size_hint();
        let mut score = Vec::with_capacity(lower);
        let mut area = Vec::with_capacity(lower);
        let mut cost = Vec::with_capacity(lower);
        for (s, a, c) in iter {
            score.push(s);
            area.push(a);
            cost.push(c);
        }
        Self { score, area, cost }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.score.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.score.is_empty()
    }

    #[inline]
    pub fn score(&self, species: usize) -> f64 {
        self.score[species]
    }

    #[inline]
    pub fn area(&self, species: usize) -> u64 {
        self.area[species]
    }

    #[inline]
    pub fn cost(&self, species: usize) -> u64 {
        self.cost[species]
    }

    #[inline]
    pub fn scores(&self) -> &[f64] {
        &self.score
    }

    #[inline]
    pub fn areas(&self) -> &[u64] {
        &self.area
    }

    #[inline]
    pub fn costs(&self) -> &[u64] {
        &self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use afforest_model::prelude::{CatalogBuilder, ZoneScores};

    fn two_species() -> Catalog {
        let mut b = CatalogBuilder::new();
        b.add_species("A", ZoneScores::uniform(8.0), 2.0, 10, 5)
            .unwrap();
        b.add_species("B", ZoneScores::new(3.0, 1.0, 1.0, 1.0), 9.0, 5, 10)
            .unwrap();
        b.build().unwrap()
    }

    #[test]
    fn test_score_uses_weights_and_area() {
        let model = ScoringModel::from_catalog(
            &two_species(),
            PriorityZone::ZoneI,
            ScoreWeights::default(),
        );
        assert_eq!(model.len(), 2);
        // (20*8 + 5*2) * 5
        assert_eq!(model.score(0), 850.0);
        // (20*3 + 5*9) * 10
        assert_eq!(model.score(1), 1050.0);
        assert_eq!(model.areas(), &[5, 10]);
        assert_eq!(model.costs(), &[10, 5]);
    }

    #[test]
    fn test_zone_selects_column() {
        let model = ScoringModel::from_catalog(
            &two_species(),
            PriorityZone::ZoneIV,
            ScoreWeights::default(),
        );
        assert_eq!(model.score(1), (20.0 * 1.0 + 5.0 * 9.0) * 10.0);
    }

    #[test]
    fn test_from_items_keeps_order() {
        let model = ScoringModel::from_items(vec![(1.5, 2, 3), (4.0, 5, 6)]);
        assert_eq!(model.scores(), &[1.5, 4.0]);
        assert_eq!(model.area(1), 5);
        assert_eq!(model.cost(0), 3);
        assert!(!model.is_empty());
        assert!(ScoringModel::from_items(Vec::new()).is_empty());
    }
}
