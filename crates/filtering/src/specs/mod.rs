//! Specification implementations for products.
//!
//! Adding a criterion means adding a module here (or anywhere else that can
//! implement `Specification<Product>`); the filter stays untouched.

pub mod and;
pub mod color;
pub mod size;

pub use and::{and_of, AndSpecification, SpecificationExt};
pub use color::ColorSpecification;
pub use size::SizeSpecification;
