//! Generic specifications and the combinators that compose them.
//!
//! Everything here works for any item type `T`; product-specific
//! specifications live in `crate::product`.

use crate::traits::{Specification, TrySpecification};

/// A type-erased specification, for criteria assembled at runtime
pub type BoxedSpecification<T> = Box<dyn Specification<T> + Send + Sync>;

/// Build the conjunction of two specifications.
///
/// Free-function form of `Specification::and`. It places no bound on the
/// children so it can combine fallible (`TrySpecification`) children too.
pub fn and<A, B>(first: A, second: B) -> AndSpecification<A, B> {
    AndSpecification::new(first, second)
}

// =============================================================================
// AND / OR / NOT
// =============================================================================

/// Satisfied iff both children are satisfied.
///
/// Evaluation short-circuits: `second` is never evaluated for an item that
/// fails `first`. A composite can itself be a child, so arbitrary
/// conjunctions nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
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

    fn name(&self) -> String {
        format!("({} AND {})", self.first.name(), self.second.name())
    }
}

impl<T, A, B, E> TrySpecification<T> for AndSpecification<A, B>
where
    T: ?Sized,
    A: TrySpecification<T, Error = E>,
    B: TrySpecification<T, Error = E>,
{
    type Error = E;

    fn try_is_satisfied(&self, item: &T) -> Result<bool, E> {
        Ok(self.first.try_is_satisfied(item)? && self.second.try_is_satisfied(item)?)
    }
}

/// Satisfied iff at least one child is satisfied (short-circuits on the first)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for OrSpecification<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }

    fn name(&self) -> String {
        format!("({} OR {})", self.first.name(), self.second.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for NotSpecification<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn name(&self) -> String {
        format!("NOT {}", self.inner.name())
    }
}

// =============================================================================
// Constants
// =============================================================================

/// Satisfied by every item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysTrue;

impl<T: ?Sized> Specification<T> for AlwaysTrue {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }

    fn name(&self) -> String {
        "always".to_string()
    }
}

/// Satisfied by no item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysFalse;

impl<T: ?Sized> Specification<T> for AlwaysFalse {
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }

    fn name(&self) -> String {
        "never".to_string()
    }
}

// =============================================================================
// Runtime-built specifications
// =============================================================================

/// Wraps a closure as a named specification.
///
/// ```ignore
/// let cheap = from_fn("price < 10", |p: &Product| p.price < 10);
/// ```
#[derive(Clone)]
pub struct FnSpecification<F> {
    name: String,
    predicate: F,
}

pub fn from_fn<T, F>(name: impl Into<String>, predicate: F) -> FnSpecification<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    FnSpecification {
        name: name.into(),
        predicate,
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for FnSpecification<F> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Satisfied iff every contained specification is satisfied.
///
/// An empty `AllOf` is satisfied by everything. Children are evaluated in
/// insertion order and evaluation stops at the first failure.
pub struct AllOf<T> {
    specs: Vec<BoxedSpecification<T>>,
}

impl<T> AllOf<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a specification (builder pattern)
    pub fn with(mut self, spec: impl Specification<T> + Send + Sync + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn push(&mut self, spec: BoxedSpecification<T>) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }

    fn name(&self) -> String {
        if self.specs.is_empty() {
            return "always".to_string();
        }
        let names: Vec<String> = self.specs.iter().map(|s| s.name()).collect();
        format!("({})", names.join(" AND "))
    }
}

/// Satisfied iff at least one contained specification is satisfied.
///
/// An empty `AnyOf` is satisfied by nothing.
pub struct AnyOf<T> {
    specs: Vec<BoxedSpecification<T>>,
}

impl<T> AnyOf<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn with(mut self, spec: impl Specification<T> + Send + Sync + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }
}

impl<T> Default for AnyOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> for AnyOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }

    fn name(&self) -> String {
        if self.specs.is_empty() {
            return "never".to_string();
        }
        let names: Vec<String> = self.specs.iter().map(|s| s.name()).collect();
        format!("({})", names.join(" OR "))
    }
}
