//! TOML catalog format
//!
//! ```toml
//! name = "Ingeniería Civil Industrial"
//!
//! [[course]]
//! name = "Cálculo I"
//! credits = 10
//! kind = "single-term"   # or "spanning"; "Semestral"/"Anual" also accepted
//! term = 1
//! grade = 70             # optional seeded grade
//!
//! [[course]]
//! name = "Cálculo II"
//! credits = 10
//! kind = "single-term"
//! term = 2
//! prerequisites = ["Cálculo I"]
//! ```

use crate::core::models::Catalog;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a catalog TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or does not match the catalog schema
pub fn parse_catalog_toml<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_catalog_toml_str(&content)
}

/// Parse catalog TOML content
///
/// # Errors
/// Returns an error if the content does not match the catalog schema
pub fn parse_catalog_toml_str(content: &str) -> Result<Catalog, Box<dyn Error>> {
    Ok(toml::from_str(content)?)
}

/// Serialize a catalog back to TOML
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_toml_string(catalog: &Catalog) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(catalog)
}
