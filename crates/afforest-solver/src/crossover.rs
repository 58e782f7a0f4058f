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

use crate::chromosome::Chromosome;
use rand::Rng;

/// Single-point crossover that pairs the worst half of a population sorted by
/// ascending fitness with the best half, mirrored around the middle.
///
/// For `i` in `0..X/2` with `j = X/2 - i - 1`, a pivot `p` in `[1, M - 2]` yields
/// `a = low(parent[i], p) + high(parent[j], p)` and
/// `b = low(parent[j], p) + high(parent[i], p)`. The slots of the next generation
/// are written in the order `i <- a`, `X - i - 1 <- b`, `j <- a`, `X/2 + i <- parent[j]`;
/// later writes win. Children are always built from the unmodified parents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirroredCrossover;

impl MirroredCrossover {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Draws a pivot in `[1, len - 2]`.
    #[inline]
    pub fn pivot<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
        rng.random_range(1..=len - 2)
    }

    /// Breeds the next generation from `parents`, which must be sorted by ascending fitness.
    ///
    /// Populations with fewer than two chromosomes or chromosomes shorter than three
    /// slots have no valid pivot and are returned unchanged.
    #[tracing::instrument(level = "trace", skip_all, fields(parents = parents.len()))]
    pub fn breed<R: Rng + ?Sized>(&self, rng: &mut R, parents: &[Chromosome]) -> Vec<Chromosome> {
        let slots = parents.first().map_or(0, Chromosome::len);
        if parents.len() < 2 || slots < 3 {
            return parents.to_vec();
        }
        let pivots: Vec<usize> = (0..parents.len() / 2)
            .map(|_| Self::pivot(rng, slots))
            .collect();
        self.breed_with_pivots(parents, &pivots)
    }

    /// Deterministic core of [`MirroredCrossover::breed`]; `pivots[i]` is used for pair `i`.
    pub fn breed_with_pivots(&self, parents: &[Chromosome], pivots: &[usize]) -> Vec<Chromosome> {
        let x = parents.len();
        let half = x / 2;
        let mut next = parents.to_vec();
        for (i, &pivot) in pivots.iter().enumerate().take(half) {
            let j = half - i - 1;
            let a = Chromosome::splice(&parents[i], &parents[j], pivot);
            let b = Chromosome::splice(&parents[j], &parents[i], pivot);
            next[i] = a.clone();
            next[x - i - 1] = b;
            next[j] = a;
            next[half + i] = parents[j].clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bits(s: &str) -> Chromosome {
        Chromosome::from_selected(
            s.len(),
            s.chars()
                .enumerate()
                .filter(|(_, c)| *c == '1')
                .map(|(i, _)| i),
        )
    }

    #[test]
    fn test_four_parents_with_fixed_pivots() {
        let parents = vec![bits("0000"), bits("1111"), bits("1010"), bits("0101")];
        let next = MirroredCrossover::new().breed_with_pivots(&parents, &[2, 1]);

        // i = 0, j = 1, p = 2: a = 00|11, b = 11|00
        //   next[0] = a, next[3] = b, next[1] = a, next[2] = parent[1]
        // i = 1, j = 0, p = 1: a = 1|000, b = 0|111
        //   next[1] = a, next[2] = b, next[0] = a, next[3] = parent[0]
        let got: Vec<String> = next.iter().map(|c| c.to_string()).collect();
        assert_eq!(got, vec!["1000", "1000", "0111", "0000"]);
    }

    #[test]
    fn test_odd_population_keeps_middle_slot() {
        let parents = vec![bits("000"), bits("111"), bits("101")];
        let next = MirroredCrossover::new().breed_with_pivots(&parents, &[1]);
        // i = 0, j = 0, p = 1: a = b = 0|00 -> next[0] = a, next[2] = b, next[1] = parent[0]
        let got: Vec<String> = next.iter().map(|c| c.to_string()).collect();
        assert_eq!(got, vec!["000", "000", "000"]);
    }

    #[test]
    fn test_breed_preserves_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let parents: Vec<Chromosome> = (0..20)
            .map(|k| Chromosome::from_selected(9, (0..9).filter(move |i| (i + k) % 3 == 0)))
            .collect();
        let next = MirroredCrossover::new().breed(&mut rng, &parents);
        assert_eq!(next.len(), 20);
        assert!(next.iter().all(|c| c.len() == 9));
    }

    #[test]
    fn test_pivot_stays_inside_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let p = MirroredCrossover::pivot(&mut rng, 5);
            assert!((1..=3).contains(&p));
        }
    }

    #[test]
    fn test_too_short_chromosomes_pass_through() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let parents = vec![bits("10"), bits("01")];
        assert_eq!(MirroredCrossover::new().breed(&mut rng, &parents), parents);
    }
}
