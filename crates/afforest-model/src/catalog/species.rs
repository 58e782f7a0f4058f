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
    catalog::{
        err::{NonFiniteScoreError, Resource, SpeciesError, ZeroResourceError},
        zone::{PriorityZone, ZoneScores},
    },
    common::{Identifier, IdentifierMarkerName},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesIdentifierMarker;

impl IdentifierMarkerName for SpeciesIdentifierMarker {
    const NAME: &'static str = "SpeciesId";
}

pub type SpeciesIdentifier = Identifier<usize, SpeciesIdentifierMarker>;

/// A plantable tree species. Immutable once part of a catalog.
///
/// Cost and area are strictly positive and every score is finite; both are
/// checked on construction so downstream integer divisions are always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    id: SpeciesIdentifier,
    common_name: String,
    scientific_name: String,
    life_form: String,
    zone_scores: ZoneScores,
    canopy_diameter: u32,
    utility: f64,
    cost: u64,
    area: u64,
}

impl Species {
    pub fn new(
        id: SpeciesIdentifier,
        common_name: impl Into<String>,
        zone_scores: ZoneScores,
        utility: f64,
        cost: u64,
        area: u64,
    ) -> Result<Self, SpeciesError> {
        let common_name = common_name.into();
        if cost == 0 {
            return Err(ZeroResourceError::new(common_name, Resource::Cost).into());
        }
        if area == 0 {
            return Err(ZeroResourceError::new(common_name, Resource::Area).into());
        }
        if !zone_scores.is_finite() || !utility.is_finite() {
            return Err(NonFiniteScoreError::new(common_name).into());
        }

        Ok(Self {
            id,
            common_name,
            scientific_name: String::new(),
            life_form: String::new(),
            zone_scores,
            canopy_diameter: 0,
            utility,
            cost,
            area,
        })
    }

    #[inline]
    pub fn with_scientific_name(mut self, name: impl Into<String>) -> Self {
        self.scientific_name = name.into();
        self
    }

    #[inline]
    pub fn with_life_form(mut self, life_form: impl Into<String>) -> Self {
        self.life_form = life_form.into();
        self
    }

    #[inline]
    pub fn with_canopy_diameter(mut self, diameter: u32) -> Self {
        self.canopy_diameter = diameter;
        self
    }

    #[inline]
    pub fn id(&self) -> SpeciesIdentifier {
        self.id
    }

    #[inline]
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    #[inline]
    pub fn scientific_name(&self) -> &str {
        &self.scientific_name
    }

    #[inline]
    pub fn life_form(&self) -> &str {
        &self.life_form
    }

    #[inline]
    pub fn zone_scores(&self) -> &ZoneScores {
        &self.zone_scores
    }

    #[inline]
    pub fn zone_score(&self, zone: PriorityZone) -> f64 {
        self.zone_scores.get(zone)
    }

    #[inline]
    pub fn canopy_diameter(&self) -> u32 {
        self.canopy_diameter
    }

    #[inline]
    pub fn utility(&self) -> f64 {
        self.utility
    }

    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.area
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' (cost: {}, area: {})",
            self.id, self.common_name, self.cost, self.area
        )
    }
}
