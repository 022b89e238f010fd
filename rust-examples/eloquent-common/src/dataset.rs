//! # Datasets
//!
//! The exercises compute over two small datasets that ship with the crate:
//!
//! - a genealogy of 39 people from one Flemish family, spanning 1535 to 2012
//! - seven well-known mountains with their height and country
//!
//! Both are stored as JSON arrays of flat objects. They are parsed into typed
//! records exactly once; the chapter crates then work on slices of those.
//!
//! ## Example
//!
//! ```
//! use eloquent_common::dataset::ancestry;
//!
//! let people = ancestry().unwrap();
//! assert_eq!(people.len(), 39);
//!
//! let carolus = &people[0];
//! assert_eq!(carolus.name, "Carolus Haverbeke");
//! assert_eq!(carolus.age(), 73);
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Raw JSON of the embedded genealogy dataset.
pub const ANCESTRY_JSON: &str = include_str!("../data/ancestry.json");

/// Raw JSON of the embedded mountains dataset.
pub const MOUNTAINS_JSON: &str = include_str!("../data/mountains.json");

/// Sex as recorded in the genealogy (`"m"` / `"f"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// One person in the genealogy.
///
/// Parents are referenced by name. A parent may be named without having a
/// record of their own, and may be unknown altogether (`null`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub sex: Sex,
    pub born: i32,
    pub died: i32,
    pub father: Option<String>,
    pub mother: Option<String>,
}

impl Person {
    /// Age at death in whole years.
    pub fn age(&self) -> i32 {
        self.died - self.born
    }
}

/// Parses a JSON array of records.
///
/// An empty array is rejected: every exercise needs at least one record.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    let records: Vec<T> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(records)
}

/// Reads and parses a JSON array of records from `path`.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&json)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded dataset");
    Ok(records)
}

/// The embedded genealogy.
pub fn ancestry() -> Result<Vec<Person>> {
    parse_records(ANCESTRY_JSON)
}

/// The genealogy from `path` if given, the embedded one otherwise.
pub fn ancestry_from(path: Option<&Path>) -> Result<Vec<Person>> {
    match path {
        Some(path) => load_records(path),
        None => ancestry(),
    }
}
