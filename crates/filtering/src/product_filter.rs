//! Fixed-query product filter.
//!
//! One associated function per supported query shape. Supporting a new
//! criterion, or a new combination of existing ones, means adding another
//! function here; compare with `BetterFilter`, which never changes.

use catalog::{Color, Product, Size};
use tracing::debug;

/// Filters products with hard-coded criteria.
pub struct ProductFilter;

impl ProductFilter {
    /// Products whose color equals `color`, in input order.
    pub fn by_color(items: &[Product], color: Color) -> Vec<&Product> {
        let result: Vec<&Product> = items.iter().filter(|p| p.color() == color).collect();
        debug!(
            "ProductFilter::by_color({}) kept {} of {}",
            color,
            result.len(),
            items.len()
        );
        result
    }

    /// Products whose size equals `size`, in input order.
    pub fn by_size(items: &[Product], size: Size) -> Vec<&Product> {
        let result: Vec<&Product> = items.iter().filter(|p| p.size() == size).collect();
        debug!(
            "ProductFilter::by_size({}) kept {} of {}",
            size,
            result.len(),
            items.len()
        );
        result
    }

    /// Products matching both `size` and `color`, in input order.
    pub fn by_size_and_color(items: &[Product], size: Size, color: Color) -> Vec<&Product> {
        let result: Vec<&Product> = items
            .iter()
            .filter(|p| p.size() == size && p.color() == color)
            .collect();
        debug!(
            "ProductFilter::by_size_and_color({}, {}) kept {} of {}",
            size,
            color,
            result.len(),
            items.len()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::sample_products;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn test_by_color() {
        let products = sample_products();

        assert_eq!(names(&ProductFilter::by_color(&products, Color::Green)), ["Apple", "Tree"]);
        assert!(ProductFilter::by_color(&products, Color::Red).is_empty());
    }

    #[test]
    fn test_by_size() {
        let products = sample_products();

        assert_eq!(names(&ProductFilter::by_size(&products, Size::Large)), ["Tree", "House"]);
        assert!(ProductFilter::by_size(&products, Size::Medium).is_empty());
    }

    #[test]
    fn test_by_size_and_color() {
        let products = sample_products();

        let result = ProductFilter::by_size_and_color(&products, Size::Large, Color::Green);
        assert_eq!(names(&result), ["Tree"]);
    }

    #[test]
    fn test_empty_input() {
        let products: Vec<Product> = Vec::new();

        assert!(ProductFilter::by_color(&products, Color::Blue).is_empty());
        assert!(ProductFilter::by_size(&products, Size::Small).is_empty());
        assert!(ProductFilter::by_size_and_color(&products, Size::Small, Color::Blue).is_empty());
    }

    #[test]
    fn test_results_borrow_from_input() {
        let products = sample_products();
        let result = ProductFilter::by_color(&products, Color::Blue);

        assert!(std::ptr::eq(result[0], &products[2]));
    }
}
