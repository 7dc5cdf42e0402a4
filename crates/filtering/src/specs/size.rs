//! Specification matching a single product size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products whose size equals the captured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size() == self.size
    }

    fn describe(&self) -> String {
        self.size.to_string()
    }
}
