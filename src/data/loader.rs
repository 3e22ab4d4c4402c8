use std::fs;
use std::path::Path;

use log::info;

use crate::error::CatalogError;
use crate::models::Catalog;

use super::validate::validate_catalog;

const BUNDLED_CATALOG: &str = include_str!("../../assets/quizzes.json");

/// Load the catalog that ships inside the binary.
pub fn load_bundled_catalog() -> Result<Catalog, CatalogError> {
    let catalog = parse_catalog(BUNDLED_CATALOG)?;
    info!(
        "Loaded bundled catalog: {} categories, {} quizzes",
        catalog.list_categories().len(),
        catalog.total_quizzes()
    );
    Ok(catalog)
}

/// Load and validate a catalog document from disk.
pub fn load_catalog_from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&json_content)?;
    info!(
        "Loaded catalog from {}: {} categories, {} quizzes",
        path.display(),
        catalog.list_categories().len(),
        catalog.total_quizzes()
    );
    Ok(catalog)
}

/// Parse a catalog document and check it before handing it out.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}
