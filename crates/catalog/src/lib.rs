//! # Catalog Crate
//!
//! The data model shared by both filtering styles.
//!
//! ## Main Components
//!
//! - **types**: `Product` plus the `Color` and `Size` enumerations
//! - **parser**: parse enumeration values and JSON catalog files
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{sample_products, Color};
//!
//! let products = sample_products();
//! let green = products.iter().filter(|p| p.color() == Color::Green).count();
//! assert_eq!(green, 2);
//! ```

pub mod error;
pub mod types;
pub mod parser;

pub use error::{CatalogError, Result};
pub use parser::{load_products, parse_products};
pub use types::{sample_products, Color, Product, Size};
