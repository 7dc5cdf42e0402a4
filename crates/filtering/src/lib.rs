//! Two ways to filter a product catalog.
//!
//! This crate provides:
//! - `ProductFilter`: one function per query shape, closed to extension
//! - `Specification` trait and implementations for single criteria
//! - `AndSpecification` for combining criteria
//! - `BetterFilter`: a single filter that accepts any specification
//!
//! ## Example Usage
//! ```
//! use catalog::{sample_products, Color, Size};
//! use filtering::specs::{ColorSpecification, SizeSpecification, SpecificationExt};
//! use filtering::{BetterFilter, Filter, ProductFilter, Specification};
//!
//! let products = sample_products();
//!
//! // Rigid: a dedicated function for this exact combination
//! let rigid = ProductFilter::by_size_and_color(&products, Size::Large, Color::Green);
//!
//! // Composable: any combination of specifications
//! let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
//! let composed = BetterFilter.filter(&products, &spec);
//!
//! assert_eq!(rigid, composed);
//! assert_eq!(spec.describe(), "green and large");
//! ```

pub mod traits;
pub mod specs;
pub mod product_filter;
pub mod better_filter;

// Re-export main types
pub use better_filter::BetterFilter;
pub use product_filter::ProductFilter;
pub use traits::{Filter, Specification};
