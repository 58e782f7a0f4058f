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

use crate::sampling::SamplingSet;
use fixedbitset::FixedBitSet;
use rand::Rng;

/// Boolean selection over the slots of a [`SamplingSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: FixedBitSet,
}

impl Chromosome {
    #[inline]
    pub fn empty(len: usize) -> Self {
        Self {
            genes: FixedBitSet::with_capacity(len),
        }
    }

    /// Selects the given slots. Indices at or beyond `len` are ignored.
    pub fn from_selected<I>(len: usize, selected: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut genes = FixedBitSet::with_capacity(len);
        for i in selected {
            if i < len {
                genes.insert(i);
            }
        }
        Self { genes }
    }

    /// Draws `k` uniformly from `[min_count, max_count]` and selects `k` distinct slots
    /// chosen uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, sampling: &SamplingSet) -> Self {
        let len = sampling.len();
        let lo = sampling.min_count().min(len);
        let hi = sampling.max_count().min(len);
        let k = rng.random_range(lo..=hi);
        Self::from_selected(len, rand::seq::index::sample(rng, len, k))
    }

    /// Slots `[0, pivot)` come from `low`, slots `[pivot, len)` from `high`.
    pub fn splice(low: &Chromosome, high: &Chromosome, pivot: usize) -> Chromosome {
        debug_assert_eq!(low.len(), high.len());
        let mut genes = FixedBitSet::with_capacity(low.len());
        genes.extend(low.genes.ones().take_while(|&i| i < pivot));
        genes.extend(high.genes.ones().skip_while(|&i| i < pivot));
        Self { genes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.len() == 0
    }

    #[inline]
    pub fn is_selected(&self, slot: usize) -> bool {
        self.genes.contains(slot)
    }

    #[inline]
    pub fn set(&mut self, slot: usize, selected: bool) {
        self.genes.set(slot, selected);
    }

    #[inline]
    pub fn selected_count(&self) -> usize {
        self.genes.count_ones(..)
    }

    /// Selected slot indices in ascending order.
    #[inline]
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes.ones()
    }

    #[inline]
    pub fn genes(&self) -> &FixedBitSet {
        &self.genes
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.len() {
            f.write_str(if self.genes.contains(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringModel;
    use afforest_model::prelude::Budgets;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sampling() -> SamplingSet {
        // capacities 4, 1, 2 -> 7 slots, min 1, max 4
        let model = ScoringModel::from_items(vec![(1.0, 1, 1), (1.0, 4, 4), (1.0, 2, 2)]);
        SamplingSet::build(&model, &Budgets::new(4, 4, 1).unwrap()).unwrap()
    }

    #[test]
    fn test_from_selected_ignores_out_of_range() {
        let c = Chromosome::from_selected(4, [0, 2, 9]);
        assert_eq!(c.len(), 4);
        assert_eq!(c.selected().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(c.to_string(), "1010");
    }

    #[test]
    fn test_random_selection_count_stays_in_window() {
        let set = sampling();
        assert_eq!((set.min_count(), set.max_count()), (1, 4));
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..2000 {
            let c = Chromosome::random(&mut rng, &set);
            assert_eq!(c.len(), set.len());
            let k = c.selected_count();
            assert!((1..=4).contains(&k), "selected {} slots", k);
            seen[k] = true;
        }
        assert!(seen[1] && seen[2] && seen[3] && seen[4]);
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let set = sampling();
        let a = Chromosome::random(&mut ChaCha8Rng::seed_from_u64(42), &set);
        let b = Chromosome::random(&mut ChaCha8Rng::seed_from_u64(42), &set);
        assert_eq!(a, b);
    }

    #[test]
    fn test_splice_takes_prefix_and_suffix() {
        let low = Chromosome::from_selected(6, [0, 1, 4]);
        let high = Chromosome::from_selected(6, [2, 3, 5]);
        let child = Chromosome::splice(&low, &high, 3);
        assert_eq!(child.to_string(), "110101");
        assert_eq!(child.len(), 6);

        let mirrored = Chromosome::splice(&high, &low, 3);
        assert_eq!(mirrored.to_string(), "001010");
        assert_eq!(mirrored.len(), 6);
    }

    #[test]
    fn test_set_and_clear() {
        let mut c = Chromosome::empty(3);
        assert_eq!(c.selected_count(), 0);
        c.set(1, true);
        assert!(c.is_selected(1));
        c.set(1, false);
        assert!(!c.is_selected(1));
        assert!(Chromosome::empty(0).is_empty());
    }
}
