//! Conjunction of two specifications.
//!
//! The compound owns both children. To combine specifications the caller
//! wants to keep using, pass them by reference (`&spec`) or share them
//! through `Arc`; either way the children outlive the compound.

use crate::traits::Specification;

/// Satisfied when both children are satisfied.
///
/// `first` is always evaluated; `second` only when `first` holds.
#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("{} and {}", self.first.describe(), self.second.describe())
    }
}

/// Combine two specifications into one that requires both.
pub fn and_of<T, A, B>(first: A, second: B) -> AndSpecification<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    AndSpecification::new(first, second)
}

/// Method form of [`and_of`]: `green.and(large)`.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{ColorSpecification, SizeSpecification};
    use catalog::{Color, Product, Size};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        answer: bool,
        calls: AtomicUsize,
    }

    impl Counting {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Specification<Product> for Counting {
        fn is_satisfied(&self, _item: &Product) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
        }

        fn describe(&self) -> String {
            format!("always {}", self.answer)
        }
    }

    #[test]
    fn test_and_is_logical_conjunction() {
        for spec_color in Color::ALL {
            for spec_size in Size::ALL {
                let color = ColorSpecification::new(spec_color);
                let size = SizeSpecification::new(spec_size);
                let both = and_of(color, size);

                for c in Color::ALL {
                    for s in Size::ALL {
                        let product = Product::new("Thing", c, s);
                        assert_eq!(
                            both.is_satisfied(&product),
                            color.is_satisfied(&product) && size.is_satisfied(&product)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_second_skipped_when_first_fails() {
        let first = Counting::new(false);
        let second = Counting::new(true);
        let product = Product::new("Apple", Color::Green, Size::Small);

        assert!(!and_of(&first, &second).is_satisfied(&product));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn test_second_evaluated_when_first_holds() {
        let first = Counting::new(true);
        let second = Counting::new(false);
        let product = Product::new("Apple", Color::Green, Size::Small);

        assert!(!and_of(&first, &second).is_satisfied(&product));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
    }

    #[test]
    fn test_describe_joins_children() {
        let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
        assert_eq!(spec.describe(), "green and large");
    }

    #[test]
    fn test_nested_and_with_shared_children() {
        let green: Arc<dyn Specification<Product>> =
            Arc::new(ColorSpecification::new(Color::Green));
        let large = Arc::new(SizeSpecification::new(Size::Large));

        let spec = and_of(green.clone(), and_of(large.clone(), green.clone()));

        assert_eq!(spec.describe(), "green and large and green");
        assert!(spec.is_satisfied(&Product::new("Tree", Color::Green, Size::Large)));
        assert!(!spec.is_satisfied(&Product::new("House", Color::Blue, Size::Large)));
        // The compound holds its own handles.
        assert_eq!(Arc::strong_count(&large), 2);
    }

    #[test]
    fn test_boxed_children() {
        let spec: AndSpecification<Box<dyn Specification<Product>>, Box<dyn Specification<Product>>> =
            AndSpecification::new(
                Box::new(ColorSpecification::new(Color::Blue)),
                Box::new(SizeSpecification::new(Size::Large)),
            );

        assert_eq!(spec.first().describe(), "blue");
        assert_eq!(spec.second().describe(), "large");
        assert!(spec.is_satisfied(&Product::new("House", Color::Blue, Size::Large)));
    }
}
