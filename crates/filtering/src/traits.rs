//! Core traits for specification-based filtering.
//!
//! `Specification` is the extension point: new criteria are new
//! implementations. `Filter` never changes when criteria are added.

use std::sync::Arc;

/// A pure predicate over a single item.
///
/// ## Design Note
/// - `Send + Sync` lets one specification be shared across threads
/// - `is_satisfied` must not have side effects; filters may call it in any
///   thread and in any number of passes
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Returns true when `item` meets this criterion.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human readable form of the criterion, e.g. "green and large".
    fn describe(&self) -> String;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Selects the items of a collection that satisfy a specification.
///
/// Implementations must keep the input order and must not modify the
/// items; results borrow from the input slice.
pub trait Filter<T>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply `spec` to every item, returning the matching ones in order.
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}
