//! # Country Catalog
//!
//! Read-only collection of [`Country`] records, built once from resource data.
//!
//! ```text
//! Catalog
//! ├── countries: Vec<Country>          // resource order = list order
//! └── index: HashMap<CountryId, usize> // id → position in `countries`
//! ```
//!
//! There is no mutating API. A catalog is either fully loaded or it does not
//! exist: every constructor validates the whole resource and returns a
//! [`CatalogError`] on the first problem.

use log::{debug, info};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::country::{Country, CountryId};

/// Country data shipped inside the binary.
pub const BUNDLED_COUNTRIES: &str = include_str!("../../assets/countries.json");

/// Where the catalog reads its records from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled data"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// The resource could not be turned into a catalog. Fatal at startup.
#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    DuplicateId(CountryId),
    MissingName(CountryId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "cannot read country data {}: {source}", path.display())
            }
            CatalogError::Parse(e) => write!(f, "malformed country data: {e}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate country id {id}"),
            CatalogError::MissingName(id) => write!(f, "country {id} has no name"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// A lookup for an id the catalog does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    NotFound(CountryId),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound(id) => write!(f, "unknown country id {id}"),
        }
    }
}

impl std::error::Error for LookupError {}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug)]
pub struct Catalog {
    countries: Vec<Country>,
    index: HashMap<CountryId, usize>,
}

impl Catalog {
    /// Read and validate every record from `source`.
    pub fn load(source: &CatalogSource) -> Result<Self, CatalogError> {
        let catalog = match source {
            CatalogSource::Bundled => Self::from_json(BUNDLED_COUNTRIES)?,
            CatalogSource::File(path) => {
                let contents = fs::read_to_string(path).map_err(|e| CatalogError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                Self::from_json(&contents)?
            }
        };
        info!("Loaded {} countries from {}", catalog.len(), source);
        Ok(catalog)
    }

    /// Parse a JSON array of country objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let countries: Vec<Country> = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::from_countries(countries)
    }

    pub fn from_countries(countries: Vec<Country>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(countries.len());
        for (position, country) in countries.iter().enumerate() {
            if country.name.trim().is_empty() {
                return Err(CatalogError::MissingName(country.id));
            }
            if index.insert(country.id, position).is_some() {
                return Err(CatalogError::DuplicateId(country.id));
            }
        }
        debug!("Indexed {} countries", countries.len());
        Ok(Self { countries, index })
    }

    /// Resolve `id` to its record.
    pub fn lookup(&self, id: CountryId) -> Result<&Country, LookupError> {
        self.index
            .get(&id)
            .map(|&position| &self.countries[position])
            .ok_or(LookupError::NotFound(id))
    }

    /// Record at `position` in list order.
    pub fn get_index(&self, position: usize) -> Option<&Country> {
        self.countries.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
