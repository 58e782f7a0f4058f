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

use crate::catalog::{
    cat::Catalog,
    err::{CatalogError, SpeciesError},
    loader::SpeciesRecord,
    species::{Species, SpeciesIdentifier},
    zone::ZoneScores,
};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    species: Vec<Species>,
    name_index: Option<HashMap<String, usize>>,
}

impl CatalogBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(species: usize) -> Self {
        Self {
            species: Vec::with_capacity(species),
            name_index: None,
        }
    }

    #[inline]
    pub fn with_name_index(mut self, index: HashMap<String, usize>) -> Self {
        self.name_index = Some(index);
        self
    }

    #[inline]
    pub fn set_name_index(&mut self, index: HashMap<String, usize>) -> &mut Self {
        self.name_index = Some(index);
        self
    }

    #[inline]
    pub fn next_identifier(&self) -> SpeciesIdentifier {
        SpeciesIdentifier::new(self.species.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn add_species(
        &mut self,
        common_name: impl Into<String>,
        zone_scores: ZoneScores,
        utility: f64,
        cost: u64,
        area: u64,
    ) -> Result<SpeciesIdentifier, SpeciesError> {
        let id = self.next_identifier();
        let species = Species::new(id, common_name, zone_scores, utility, cost, area)?;
        self.species.push(species);
        Ok(id)
    }

    pub fn add_record(&mut self, record: SpeciesRecord) -> Result<SpeciesIdentifier, SpeciesError> {
        let id = self.next_identifier();
        let species = Species::new(
            id,
            record.common_name,
            ZoneScores::new(
                record.zone_i,
                record.zone_ii,
                record.zone_iii,
                record.zone_iv,
            ),
            record.utility,
            record.cost,
            record.area,
        )?
        .with_scientific_name(record.plant_species)
        .with_life_form(record.life_form)
        .with_canopy_diameter(record.canopy_diameter);
        self.species.push(species);
        Ok(id)
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        match self.name_index {
            Some(index) => Catalog::with_name_index(self.species, index),
            None => Catalog::new(self.species),
        }
    }
}
