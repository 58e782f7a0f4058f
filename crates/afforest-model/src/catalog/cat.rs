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
    err::{
        CatalogError, DuplicateNameError, IdentifierMismatchError, NameIndexError,
        NameIndexMismatch,
    },
    species::{Species, SpeciesIdentifier},
};
use std::collections::HashMap;

/// Immutable, validated list of species plus a common-name lookup table.
///
/// Species are stored densely: the species at position `i` carries the
/// identifier `SpeciesIdentifier::new(i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    species: Vec<Species>,
    name_index: HashMap<String, SpeciesIdentifier>,
}

impl Catalog {
    /// Builds a catalog and derives the name index from the species' common names.
    pub fn new(species: Vec<Species>) -> Result<Self, CatalogError> {
        Self::check_species(&species)?;

        let mut name_index = HashMap::with_capacity(species.len());
        for s in &species {
            if name_index
                .insert(s.common_name().to_owned(), s.id())
                .is_some()
            {
                return Err(DuplicateNameError::new(s.common_name()).into());
            }
        }

        Ok(Self {
            species,
            name_index,
        })
    }

    /// Builds a catalog with an externally supplied name index.
    ///
    /// The index must map every common name to the position of the species
    /// carrying that name, and nothing else.
    pub fn with_name_index(
        species: Vec<Species>,
        index: HashMap<String, usize>,
    ) -> Result<Self, CatalogError> {
        let derived = Self::new(species)?;
        let len = derived.species.len();

        for (name, &position) in &index {
            let Some(s) = derived.species.get(position) else {
                return Err(NameIndexError::new(
                    name,
                    NameIndexMismatch::OutOfRange {
                        index: position,
                        len,
                    },
                )
                .into());
            };
            if s.common_name() != name {
                return Err(NameIndexError::new(
                    name,
                    NameIndexMismatch::NameDiffers {
                        found: s.common_name().to_owned(),
                    },
                )
                .into());
            }
        }

        if let Some(missing) = derived
            .species
            .iter()
            .find(|s| !index.contains_key(s.common_name()))
        {
            return Err(
                NameIndexError::new(missing.common_name(), NameIndexMismatch::Missing).into(),
            );
        }

        Ok(derived)
    }

    fn check_species(species: &[Species]) -> Result<(), CatalogError> {
        if species.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (position, s) in species.iter().enumerate() {
            if s.id().index() != position {
                return Err(IdentifierMismatchError::new(position, s.id()).into());
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    #[inline]
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    #[inline]
    pub fn get(&self, id: SpeciesIdentifier) -> Option<&Species> {
        self.species.get(id.index())
    }

    #[inline]
    pub fn lookup(&self, common_name: &str) -> Option<SpeciesIdentifier> {
        self.name_index.get(common_name).copied()
    }

    #[inline]
    pub fn name_index(&self) -> &HashMap<String, SpeciesIdentifier> {
        &self.name_index
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Species;
    type IntoIter = std::slice::Iter<'a, Species>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::zone::ZoneScores;

    fn species(n: usize, name: &str) -> Species {
        Species::new(
            SpeciesIdentifier::new(n),
            name,
            ZoneScores::uniform(1.0),
            1.0,
            1,
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_new_derives_name_index() {
        let c = Catalog::new(vec![species(0, "Neem"), species(1, "Peepal")]).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.lookup("Peepal"), Some(SpeciesIdentifier::new(1)));
        assert_eq!(c.lookup("Banyan"), None);
        assert_eq!(
            c.get(SpeciesIdentifier::new(0)).unwrap().common_name(),
            "Neem"
        );
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let err = Catalog::new(vec![species(0, "Neem"), species(1, "Neem")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateName(DuplicateNameError::new("Neem"))
        );
    }

    #[test]
    fn test_sparse_identifiers_are_rejected() {
        let err = Catalog::new(vec![species(0, "Neem"), species(5, "Peepal")]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::IdentifierMismatch(e) if e.position() == 1
        ));
    }

    #[test]
    fn test_external_index_must_agree_with_names() {
        let list = vec![species(0, "Neem"), species(1, "Peepal")];

        let ok: HashMap<String, usize> =
            [("Neem".to_string(), 0), ("Peepal".to_string(), 1)].into();
        assert!(Catalog::with_name_index(list.clone(), ok).is_ok());

        let swapped: HashMap<String, usize> =
            [("Neem".to_string(), 1), ("Peepal".to_string(), 0)].into();
        let err = Catalog::with_name_index(list.clone(), swapped).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NameIndex(ref e)
                if matches!(e.mismatch(), NameIndexMismatch::NameDiffers { .. })
        ));

        let out_of_range: HashMap<String, usize> =
            [("Neem".to_string(), 0), ("Peepal".to_string(), 7)].into();
        let err = Catalog::with_name_index(list.clone(), out_of_range).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NameIndex(ref e)
                if matches!(e.mismatch(), NameIndexMismatch::OutOfRange { index: 7, len: 2 })
        ));

        let partial: HashMap<String, usize> = [("Neem".to_string(), 0)].into();
        let err = Catalog::with_name_index(list, partial).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NameIndex(ref e)
                if e.name() == "Peepal" && *e.mismatch() == NameIndexMismatch::Missing
        ));
    }

    #[test]
    fn test_iteration_preserves_catalog_order() {
        let c = Catalog::new(vec![species(0, "A"), species(1, "B"), species(2, "C")]).unwrap();
        let names: Vec<&str> = (&c).into_iter().map(|s| s.common_name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
