//! Catalog loading from TOML and CSV files

pub mod csv_parser;
pub mod toml_parser;

pub use csv_parser::{parse_catalog_csv, parse_catalog_csv_str};
pub use toml_parser::{parse_catalog_toml, parse_catalog_toml_str};

use crate::core::models::Catalog;
use crate::info;
use std::error::Error;
use std::path::Path;

/// Catalog file formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `[[course]]` tables
    Toml,
    /// Metadata lines, then a `Courses` section
    Csv,
}

impl CatalogFormat {
    /// Format for a path's extension (case-insensitive); `None` when unsupported
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Load a catalog, choosing the parser from the file extension (`.toml` or `.csv`)
///
/// # Errors
/// Returns an error for an unsupported extension, or if the file cannot be read or parsed
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let path = path.as_ref();
    let catalog = match CatalogFormat::from_path(path) {
        Some(CatalogFormat::Toml) => parse_catalog_toml(path)?,
        Some(CatalogFormat::Csv) => parse_catalog_csv(path)?,
        None => {
            return Err(format!(
                "Unsupported catalog format: {} (expected .toml or .csv)",
                path.display()
            )
            .into())
        }
    };

    info!(
        "Loaded catalog from {} ({} courses, {} credits)",
        path.display(),
        catalog.len(),
        catalog.total_credits()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let err = load_catalog("catalog.json").unwrap_err();
        assert!(err.to_string().contains("Unsupported catalog format"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("ici.toml")), Some(CatalogFormat::Toml));
        assert_eq!(CatalogFormat::from_path(Path::new("ICI.CSV")), Some(CatalogFormat::Csv));
        assert_eq!(CatalogFormat::from_path(Path::new("ici.json")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn test_missing_file() {
        assert!(load_catalog("does/not/exist.toml").is_err());
    }
}
