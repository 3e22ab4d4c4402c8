mod loader;
mod validate;

pub use loader::{load_bundled_catalog, load_catalog_from_path, parse_catalog};
pub use validate::validate_catalog;
