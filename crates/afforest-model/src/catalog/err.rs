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

use crate::catalog::species::SpeciesIdentifier;

/// Budgeted resource consumed by a planted species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Cost,
    Area,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Cost => write!(f, "cost"),
            Resource::Area => write!(f, "area"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZeroResourceError {
    species: String,
    resource: Resource,
}

impl ZeroResourceError {
    pub fn new(species: impl Into<String>, resource: Resource) -> Self {
        Self {
            species: species.into(),
            resource,
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }
}

impl std::fmt::Display for ZeroResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Species '{}' has a zero {}; its plantable count would be unbounded",
            self.species, self.resource
        )
    }
}

impl std::error::Error for ZeroResourceError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonFiniteScoreError {
    species: String,
}

impl NonFiniteScoreError {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }
}

impl std::fmt::Display for NonFiniteScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Species '{}' has a non-finite score", self.species)
    }
}

impl std::error::Error for NonFiniteScoreError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpeciesError {
    ZeroResource(ZeroResourceError),
    NonFiniteScore(NonFiniteScoreError),
}

impl SpeciesError {
    /// Common name of the offending species.
    pub fn species(&self) -> &str {
        match self {
            SpeciesError::ZeroResource(e) => e.species(),
            SpeciesError::NonFiniteScore(e) => e.species(),
        }
    }
}

impl std::fmt::Display for SpeciesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeciesError::ZeroResource(e) => write!(f, "{}", e),
            SpeciesError::NonFiniteScore(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SpeciesError {}

impl From<ZeroResourceError> for SpeciesError {
    fn from(err: ZeroResourceError) -> Self {
        SpeciesError::ZeroResource(err)
    }
}

impl From<NonFiniteScoreError> for SpeciesError {
    fn from(err: NonFiniteScoreError) -> Self {
        SpeciesError::NonFiniteScore(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateNameError {
    name: String,
}

impl DuplicateNameError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for DuplicateNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Common name '{}' is used by more than one species",
            self.name
        )
    }
}

impl std::error::Error for DuplicateNameError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentifierMismatchError {
    position: usize,
    found: SpeciesIdentifier,
}

impl IdentifierMismatchError {
    pub fn new(position: usize, found: SpeciesIdentifier) -> Self {
        Self { position, found }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn found(&self) -> SpeciesIdentifier {
        self.found
    }
}

impl std::fmt::Display for IdentifierMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Species at position {} carries identifier {}",
            self.position, self.found
        )
    }
}

impl std::error::Error for IdentifierMismatchError {}

/// Why a name index entry does not agree with the species list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameIndexMismatch {
    OutOfRange { index: usize, len: usize },
    NameDiffers { found: String },
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameIndexError {
    name: String,
    mismatch: NameIndexMismatch,
}

impl NameIndexError {
    pub fn new(name: impl Into<String>, mismatch: NameIndexMismatch) -> Self {
        Self {
            name: name.into(),
            mismatch,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mismatch(&self) -> &NameIndexMismatch {
        &self.mismatch
    }
}

impl std::fmt::Display for NameIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.mismatch {
            NameIndexMismatch::OutOfRange { index, len } => write!(
                f,
                "Name index maps '{}' to {} but the catalog only has {} species",
                self.name, index, len
            ),
            NameIndexMismatch::NameDiffers { found } => write!(
                f,
                "Name index maps '{}' to a species named '{}'",
                self.name, found
            ),
            NameIndexMismatch::Missing => {
                write!(f, "Species '{}' is missing from the name index", self.name)
            }
        }
    }
}

impl std::error::Error for NameIndexError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogError {
    Empty,
    DuplicateName(DuplicateNameError),
    IdentifierMismatch(IdentifierMismatchError),
    NameIndex(NameIndexError),
    Species(SpeciesError),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "The catalog contains no species"),
            CatalogError::DuplicateName(e) => write!(f, "{}", e),
            CatalogError::IdentifierMismatch(e) => write!(f, "{}", e),
            CatalogError::NameIndex(e) => write!(f, "{}", e),
            CatalogError::Species(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<DuplicateNameError> for CatalogError {
    fn from(err: DuplicateNameError) -> Self {
        CatalogError::DuplicateName(err)
    }
}

impl From<IdentifierMismatchError> for CatalogError {
    fn from(err: IdentifierMismatchError) -> Self {
        CatalogError::IdentifierMismatch(err)
    }
}

impl From<NameIndexError> for CatalogError {
    fn from(err: NameIndexError) -> Self {
        CatalogError::NameIndex(err)
    }
}

impl From<SpeciesError> for CatalogError {
    fn from(err: SpeciesError) -> Self {
        CatalogError::Species(err)
    }
}

#[derive(Debug)]
pub enum CatalogLoaderError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Catalog(CatalogError),
}

impl std::fmt::Display for CatalogLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogLoaderError::Io(e) => write!(f, "I/O error: {}", e),
            CatalogLoaderError::Json(e) => write!(f, "Malformed catalog JSON: {}", e),
            CatalogLoaderError::Catalog(e) => write!(f, "Invalid catalog: {}", e),
        }
    }
}

impl std::error::Error for CatalogLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogLoaderError::Io(e) => Some(e),
            CatalogLoaderError::Json(e) => Some(e),
            CatalogLoaderError::Catalog(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CatalogLoaderError {
    fn from(err: std::io::Error) -> Self {
        CatalogLoaderError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogLoaderError {
    fn from(err: serde_json::Error) -> Self {
        CatalogLoaderError::Json(err)
    }
}

impl From<CatalogError> for CatalogLoaderError {
    fn from(err: CatalogError) -> Self {
        CatalogLoaderError::Catalog(err)
    }
}

impl From<SpeciesError> for CatalogLoaderError {
    fn from(err: SpeciesError) -> Self {
        CatalogLoaderError::Catalog(CatalogError::Species(err))
    }
}
