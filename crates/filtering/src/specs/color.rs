//! Specification matching a single product color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied by products whose color equals the captured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color() == self.color
    }

    fn describe(&self) -> String {
        self.color.to_string()
    }
}
