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

/// Planting priority tier. Zone I is the most urgent, Zone IV the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriorityZone {
    ZoneI,
    ZoneII,
    ZoneIII,
    ZoneIV,
}

impl PriorityZone {
    pub const ALL: [PriorityZone; 4] = [
        PriorityZone::ZoneI,
        PriorityZone::ZoneII,
        PriorityZone::ZoneIII,
        PriorityZone::ZoneIV,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PriorityZone::ZoneI => 0,
            PriorityZone::ZoneII => 1,
            PriorityZone::ZoneIII => 2,
            PriorityZone::ZoneIV => 3,
        }
    }

    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            PriorityZone::ZoneI => "Zone I",
            PriorityZone::ZoneII => "Zone II",
            PriorityZone::ZoneIII => "Zone III",
            PriorityZone::ZoneIV => "Zone IV",
        }
    }
}

impl std::fmt::Display for PriorityZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Desirability of a species in each priority zone, indexed by [`PriorityZone::index`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneScores([f64; 4]);

impl ZoneScores {
    #[inline]
    pub const fn new(zone_i: f64, zone_ii: f64, zone_iii: f64, zone_iv: f64) -> Self {
        Self([zone_i, zone_ii, zone_iii, zone_iv])
    }

    #[inline]
    pub const fn uniform(value: f64) -> Self {
        Self([value; 4])
    }

    #[inline]
    pub fn get(&self, zone: PriorityZone) -> f64 {
        self.0[zone.index()]
    }

    #[inline]
    pub fn set(&mut self, zone: PriorityZone, value: f64) {
        self.0[zone.index()] = value;
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (PriorityZone, f64)> + '_ {
        PriorityZone::ALL.iter().map(|&z| (z, self.get(z)))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}
