//! The open/closed filter.
//!
//! `BetterFilter` knows nothing about colors or sizes. Every query shape is
//! expressed as a `Specification`, so new criteria never touch this file.

use crate::traits::{Filter, Specification};
use rayon::prelude::*;
use tracing::debug;

/// Stateless filter driven entirely by a specification.
///
/// ## Usage
/// ```
/// use catalog::{sample_products, Color, Size};
/// use filtering::specs::{and_of, ColorSpecification, SizeSpecification};
/// use filtering::{BetterFilter, Filter};
///
/// let products = sample_products();
/// let spec = and_of(
///     ColorSpecification::new(Color::Green),
///     SizeSpecification::new(Size::Large),
/// );
///
/// let result = BetterFilter.filter(&products, &spec);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].name(), "Tree");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl BetterFilter {
    pub fn new() -> Self {
        Self
    }

    /// Same result as [`Filter::filter`], with the specification evaluated
    /// on the rayon thread pool.
    ///
    /// Output order still follows the input order.
    pub fn par_filter<'a, T: Sync>(
        &self,
        items: &'a [T],
        spec: &dyn Specification<T>,
    ) -> Vec<&'a T> {
        let result: Vec<&T> = items
            .par_iter()
            .filter(|item| spec.is_satisfied(item))
            .collect();
        debug!(
            "BetterFilter::par_filter({}) kept {} of {}",
            spec.describe(),
            result.len(),
            items.len()
        );
        result
    }
}

impl<T> Filter<T> for BetterFilter {
    fn name(&self) -> &str {
        "BetterFilter"
    }

    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        let result: Vec<&T> = items
            .iter()
            .filter(|item| spec.is_satisfied(item))
            .collect();
        debug!(
            "Applying filter: {} ({}) kept {} of {}",
            Filter::<T>::name(self),
            spec.describe(),
            result.len(),
            items.len()
        );
        result
    }
}
