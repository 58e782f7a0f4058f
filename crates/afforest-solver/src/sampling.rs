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

use crate::{err::SamplingError, scoring::ScoringModel};
use afforest_model::{catalog::err::Resource, prelude::Budgets};

/// Upper bound on the number of slots a sampling set may hold.
///
/// Every chromosome carries one bit per slot, so the limit also caps chromosome length.
pub const MAX_SAMPLING_SLOTS: usize = 1 << 24;

/// Multiset of species indices: species `i` occupies as many slots as copies of it
/// fit within both the area and the cost limit on their own.
///
/// `min_count` and `max_count` bound how many slots a random chromosome selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingSet {
    slots: Vec<usize>,
    capacities: Vec<usize>,
    min_count: usize,
    max_count: usize,
}

impl SamplingSet {
    #[tracing::instrument(level = "debug", skip_all, fields(species = model.len()))]
    pub fn build(model: &ScoringModel, budgets: &Budgets) -> Result<Self, SamplingError> {
        if model.is_empty() {
            return Err(SamplingError::EmptyModel);
        }

        let mut capacities = Vec::with_capacity(model.len());
        for i in 0..model.len() {
            let cost = model.cost(i);
            let area = model.area(i);
            if cost == 0 {
                return Err(SamplingError::DegenerateSpecies {
                    index: i,
                    resource: Resource::Cost,
                });
            }
            if area == 0 {
                return Err(SamplingError::DegenerateSpecies {
                    index: i,
                    resource: Resource::Area,
                });
            }
            let by_cost = budgets.cost_limit() / cost;
            let by_area = budgets.area_limit() / area;
            capacities.push(usize::try_from(by_cost.min(by_area)).unwrap_or(usize::MAX));
        }

        // Species that do not fit at all still bound the sampling window.
        let min_count = capacities.iter().copied().min().unwrap_or(0);
        let max_count = capacities.iter().copied().max().unwrap_or(0);

        let total = capacities
            .iter()
            .try_fold(0usize, |acc, &count| acc.checked_add(count))
            .unwrap_or(usize::MAX);
        if total > MAX_SAMPLING_SLOTS {
            return Err(SamplingError::TooManySlots {
                slots: total,
                limit: MAX_SAMPLING_SLOTS,
            });
        }
        if total == 0 {
            return Err(SamplingError::NothingFits);
        }

        let mut slots = Vec::with_capacity(total);
        for (species, &count) in capacities.iter().enumerate() {
            slots.extend(std::iter::repeat_n(species, count));
        }

        tracing::debug!(
            slots = slots.len(),
            min_count,
            max_count,
            "Built sampling set"
        );

        Ok(Self {
            slots,
            capacities,
            min_count,
            max_count,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Species index stored at `slot`.
    #[inline]
    pub fn slot(&self, slot: usize) -> usize {
        self.slots[slot]
    }

    #[inline]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Number of slots held by `species`.
    #[inline]
    pub fn capacity(&self, species: usize) -> usize {
        self.capacities.get(species).copied().unwrap_or(0)
    }

    #[inline]
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    #[inline]
    pub fn max_count(&self) -> usize {
        self.max_count
    }
}

impl std::fmt::Display for SamplingSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SamplingSet(slots: {}, min_count: {}, max_count: {})",
            self.len(),
            self.min_count,
            self.max_count
        )
    }
}
