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
    builder::CatalogBuilder,
    cat::Catalog,
    err::{CatalogLoaderError, SpeciesError},
    species::Species,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// One species as persisted in the catalog JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub plant_species: String,
    pub common_name: String,
    #[serde(default)]
    pub life_form: String,
    #[serde(rename = "zoneI")]
    pub zone_i: f64,
    #[serde(rename = "zoneII")]
    pub zone_ii: f64,
    #[serde(rename = "zoneIII")]
    pub zone_iii: f64,
    #[serde(rename = "zoneIV")]
    pub zone_iv: f64,
    #[serde(default)]
    pub canopy_diameter: u32,
    pub utility: f64,
    pub cost: u64,
    pub area: u64,
}

impl From<&Species> for SpeciesRecord {
    fn from(s: &Species) -> Self {
        use crate::catalog::zone::PriorityZone::*;
        Self {
            plant_species: s.scientific_name().to_owned(),
            common_name: s.common_name().to_owned(),
            life_form: s.life_form().to_owned(),
            zone_i: s.zone_score(ZoneI),
            zone_ii: s.zone_score(ZoneII),
            zone_iii: s.zone_score(ZoneIII),
            zone_iv: s.zone_score(ZoneIV),
            canopy_diameter: s.canopy_diameter(),
            utility: s.utility(),
            cost: s.cost(),
            area: s.area(),
        }
    }
}

/// Reads a species list (JSON array of [`SpeciesRecord`]) and an optional
/// `commonName -> position` index (JSON object) into a validated [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogLoader {
    skip_degenerate: bool,
}

impl CatalogLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, species with zero cost, zero area or non-finite scores are
    /// dropped instead of failing the load. Index entries pointing at dropped
    /// species are dropped with them and the remaining positions are compacted.
    #[inline]
    pub fn skip_degenerate(mut self, yes: bool) -> Self {
        self.skip_degenerate = yes;
        self
    }

    pub fn from_records(
        &self,
        records: Vec<SpeciesRecord>,
        index: Option<HashMap<String, usize>>,
    ) -> Result<Catalog, CatalogLoaderError> {
        let (catalog, _) = self.from_records_with_skipped(records, index)?;
        Ok(catalog)
    }

    /// Like [`CatalogLoader::from_records`], also returning the species dropped
    /// by [`CatalogLoader::skip_degenerate`]. Each dropped species is logged at `warn`.
    pub fn from_records_with_skipped(
        &self,
        records: Vec<SpeciesRecord>,
        index: Option<HashMap<String, usize>>,
    ) -> Result<(Catalog, Vec<SpeciesError>), CatalogLoaderError> {
        let total = records.len();
        let mut builder = CatalogBuilder::with_capacity(total);
        let mut remap: Vec<Option<usize>> = Vec::with_capacity(total);
        let mut skipped = Vec::new();

        for record in records {
            match builder.add_record(record) {
                Ok(id) => remap.push(Some(id.index())),
                Err(e) if self.skip_degenerate => {
                    tracing::warn!(species = e.species(), reason = %e, "Skipping species");
                    skipped.push(e);
                    remap.push(None);
                }
                Err(e) => return Err(e.into()),
            }
        }

        if let Some(index) = index {
            let compacted = index
                .into_iter()
                .filter_map(|(name, raw)| match remap.get(raw) {
                    Some(Some(position)) => Some((name, *position)),
                    Some(None) => None,
                    // Leave out-of-range entries untouched so validation reports them.
                    None => Some((name, raw)),
                })
                .collect();
            builder.set_name_index(compacted);
        }

        Ok((builder.build()?, skipped))
    }

    pub fn parse_records<R: Read>(&self, r: R) -> Result<Vec<SpeciesRecord>, CatalogLoaderError> {
        Ok(serde_json::from_reader(BufReader::new(r))?)
    }

    pub fn parse_index<R: Read>(&self, r: R) -> Result<HashMap<String, usize>, CatalogLoaderError> {
        Ok(serde_json::from_reader(BufReader::new(r))?)
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, species: R) -> Result<Catalog, CatalogLoaderError> {
        let records = self.parse_records(species)?;
        self.from_records(records, None)
    }

    #[inline]
    pub fn from_readers<R: Read, I: Read>(
        &self,
        species: R,
        index: I,
    ) -> Result<Catalog, CatalogLoaderError> {
        let records = self.parse_records(species)?;
        let index = self.parse_index(index)?;
        self.from_records(records, Some(index))
    }

    #[inline]
    pub fn from_path(&self, species: impl AsRef<Path>) -> Result<Catalog, CatalogLoaderError> {
        let file = File::open(species)?;
        self.from_reader(file)
    }

    #[inline]
    pub fn from_paths(
        &self,
        species: impl AsRef<Path>,
        index: impl AsRef<Path>,
    ) -> Result<Catalog, CatalogLoaderError> {
        let species = File::open(species)?;
        let index = File::open(index)?;
        self.from_readers(species, index)
    }

    #[inline]
    pub fn from_str(&self, species: &str) -> Result<Catalog, CatalogLoaderError> {
        self.from_reader(species.as_bytes())
    }

    #[inline]
    pub fn from_strs(&self, species: &str, index: &str) -> Result<Catalog, CatalogLoaderError> {
        self.from_readers(species.as_bytes(), index.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        err::CatalogError,
        species::SpeciesIdentifier,
        zone::PriorityZone,
    };

    const SMALL_OK: &str = r#"
    [
        {
            "plantSpecies": "Azadirachta indica",
            "commonName": "Neem",
            "lifeForm": "Tree",
            "zoneI": 8, "zoneII": 7.5, "zoneIII": 6, "zoneIV": 5,
            "canopyDiameter": 10,
            "utility": 2,
            "cost": 10,
            "area": 5
        },
        {
            "plantSpecies": "Ficus religiosa",
            "commonName": "Peepal",
            "lifeForm": "Tree",
            "zoneI": 3, "zoneII": 3, "zoneIII": 3, "zoneIV": 3,
            "canopyDiameter": 14,
            "utility": 9,
            "cost": 5,
            "area": 10
        }
    ]
    "#;

    const SMALL_INDEX: &str = r#"{ "Neem": 0, "Peepal": 1 }"#;

    const WITH_ZERO_COST: &str = r#"
    [
        {
            "plantSpecies": "X", "commonName": "Gift",
            "zoneI": 1, "zoneII": 1, "zoneIII": 1, "zoneIV": 1,
            "utility": 1, "cost": 0, "area": 5
        },
        {
            "plantSpecies": "Y", "commonName": "Paid",
            "zoneI": 1, "zoneII": 1, "zoneIII": 1, "zoneIV": 1,
            "utility": 1, "cost": 3, "area": 5
        }
    ]
    "#;

    #[test]
    fn test_loads_minimal_catalog_without_index() {
        let catalog = CatalogLoader::new().from_str(SMALL_OK).unwrap();
        assert_eq!(catalog.len(), 2);
        let neem = &catalog.species()[0];
        assert_eq!(neem.common_name(), "Neem");
        assert_eq!(neem.zone_score(PriorityZone::ZoneII), 7.5);
        assert_eq!(neem.canopy_diameter(), 10);
        assert_eq!(catalog.lookup("Peepal"), Some(SpeciesIdentifier::new(1)));
    }

    #[test]
    fn test_loads_minimal_catalog_with_index() {
        let catalog = CatalogLoader::new()
            .from_strs(SMALL_OK, SMALL_INDEX)
            .unwrap();
        assert_eq!(catalog.lookup("Neem"), Some(SpeciesIdentifier::new(0)));
    }

    #[test]
    fn test_inconsistent_index_is_rejected() {
        let err = CatalogLoader::new()
            .from_strs(SMALL_OK, r#"{ "Neem": 1, "Peepal": 0 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogLoaderError::Catalog(CatalogError::NameIndex(_))
        ));
    }

    #[test]
    fn test_zero_cost_species_fails_by_default() {
        let err = CatalogLoader::new().from_str(WITH_ZERO_COST).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoaderError::Catalog(CatalogError::Species(SpeciesError::ZeroResource(_)))
        ));
    }

    #[test]
    fn test_zero_cost_species_can_be_skipped_and_index_compacted() {
        let catalog = CatalogLoader::new()
            .skip_degenerate(true)
            .from_strs(WITH_ZERO_COST, r#"{ "Gift": 0, "Paid": 1 }"#)
            .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("Paid"), Some(SpeciesIdentifier::new(0)));
        assert_eq!(catalog.lookup("Gift"), None);
    }

    #[test]
    fn test_skipped_species_are_reported_by_name() {
        let loader = CatalogLoader::new().skip_degenerate(true);
        let records = loader.parse_records(WITH_ZERO_COST.as_bytes()).unwrap();
        let (catalog, skipped) = loader.from_records_with_skipped(records, None).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].species(), "Gift");
        assert!(matches!(skipped[0], SpeciesError::ZeroResource(_)));
    }

    #[test]
    fn test_nothing_skipped_for_clean_catalog() {
        let loader = CatalogLoader::new().skip_degenerate(true);
        let records = loader.parse_records(SMALL_OK.as_bytes()).unwrap();
        let (_, skipped) = loader.from_records_with_skipped(records, None).unwrap();
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = CatalogLoader::new()
            .from_str("[{ \"commonName\": ")
            .unwrap_err();
        assert!(matches!(err, CatalogLoaderError::Json(_)));
    }

    #[test]
    fn test_negative_cost_is_a_json_error() {
        let json = r#"[{ "plantSpecies": "X", "commonName": "Neg",
            "zoneI": 1, "zoneII": 1, "zoneIII": 1, "zoneIV": 1,
            "utility": 1, "cost": -3, "area": 5 }]"#;
        let err = CatalogLoader::new().from_str(json).unwrap_err();
        assert!(matches!(err, CatalogLoaderError::Json(_)));
    }

    #[test]
    fn test_empty_array_is_an_empty_catalog() {
        let err = CatalogLoader::new().from_str("[]").unwrap_err();
        assert!(matches!(err, CatalogLoaderError::Catalog(CatalogError::Empty)));
    }

    #[test]
    fn test_record_roundtrips_through_species() {
        let catalog = CatalogLoader::new().from_str(SMALL_OK).unwrap();
        let record = SpeciesRecord::from(&catalog.species()[1]);
        assert_eq!(record.common_name, "Peepal");
        assert_eq!(record.plant_species, "Ficus religiosa");
        assert_eq!(record.cost, 5);
        assert_eq!(record.area, 10);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["zoneIV"], 3.0);
        assert_eq!(json["commonName"], "Peepal");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CatalogLoader::new()
            .from_path("/definitely/not/here/tree_info.json")
            .unwrap_err();
        assert!(matches!(err, CatalogLoaderError::Io(_)));
    }
}
