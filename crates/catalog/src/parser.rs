//! Parsing of catalog data.
//!
//! Handles two kinds of outside input:
//! - single enumeration values typed on the command line ("green", "LARGE")
//! - JSON catalog files: `[{"name": "Apple", "color": "green", "size": "small"}, ...]`

use crate::error::{CatalogError, Result};
use crate::types::{Color, Product, Size};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Parse a JSON array of products.
///
/// Input order is kept, since filtering results are defined in terms of it.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(json)?;

    if let Some(index) = products.iter().position(|p| p.name().trim().is_empty()) {
        return Err(CatalogError::Validation(format!(
            "product at index {} has an empty name",
            index
        )));
    }

    Ok(products)
}

/// Load a catalog file from disk.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let products = parse_products(&content)?;
    debug!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}
