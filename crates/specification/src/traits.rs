//! Core traits for specification-based filtering.
//!
//! This module defines:
//! - `Specification`: an infallible predicate over an item
//! - `TrySpecification`: a predicate whose evaluation can fail
//! - `Filter`: anything that can select items using a specification

use crate::combinators::{AndSpecification, NotSpecification, OrSpecification};

/// A predicate that answers "does this item satisfy me?".
///
/// ## Contract
/// - Evaluation must not mutate the item (it only gets `&T`)
/// - Repeated evaluation against the same item yields the same answer
/// - Configuration (e.g. a target color) is captured at construction and
///   never changes afterwards
///
/// Adding a new selection criterion means adding a new type implementing
/// this trait; `BetterFilter` and the existing specifications stay as they are.
pub trait Specification<T: ?Sized> {
    /// Returns true if `item` satisfies this specification
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human readable description (for logging/debugging).
    ///
    /// Defaults to the bare type name, without its path or generic arguments.
    fn name(&self) -> String {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::")
            .next()
            .unwrap_or("Specification")
            .to_string()
    }

    /// Conjunction with another specification.
    ///
    /// `other` is only evaluated when `self` is satisfied.
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }

    /// Disjunction with another specification.
    ///
    /// `other` is only evaluated when `self` is not satisfied.
    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        OrSpecification::new(self, other)
    }

    /// Negation of this specification
    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification::new(self)
    }
}

/// A specification whose evaluation may fail.
///
/// The error type belongs to the specification; `BetterFilter::try_filter`
/// hands it back to the caller exactly as produced.
pub trait TrySpecification<T: ?Sized> {
    type Error;

    fn try_is_satisfied(&self, item: &T) -> Result<bool, Self::Error>;
}

/// Selects the items of a slice that satisfy a specification.
///
/// ## Design Note
/// The filter is generic over the specification rather than exposing one
/// method per criterion (`filter_by_color`, `filter_by_size`, ...), so new
/// criteria never require touching an implementation of this trait.
pub trait Filter<T> {
    /// Returns the items satisfying `spec`, in their original order.
    ///
    /// The input slice is only borrowed; the result borrows from it.
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized;
}

// =============================================================================
// Forwarding impls
// =============================================================================
// These let `&spec`, `Box<spec>` and `Box<dyn Specification<T>>` be used
// anywhere a specification is expected.

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
