mod catalog_error;
mod fetch_error;

pub use catalog_error::{CatalogError, CatalogResult, LoadError};
pub use fetch_error::FetchError;
