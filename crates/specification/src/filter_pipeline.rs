//! The FilterPipeline narrows a collection in stages.
//!
//! Each stage is a specification. Running the stages one after another
//! selects the same items as a single filter with the stages AND-ed
//! together; the pipeline additionally logs how many items survive each
//! stage.

use crate::combinators::BoxedSpecification;
use crate::traits::Specification;

/// Chains specifications into a sequence of filter stages.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_stage(SizeSpecification::new(Size::Large))
///     .add_stage(ColorSpecification::new(Color::Blue));
///
/// let selected = pipeline.apply(catalog.products());
/// ```
pub struct FilterPipeline<T> {
    stages: Vec<BoxedSpecification<T>>,
}

impl<T> FilterPipeline<T> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, spec: impl Specification<T> + Send + Sync + 'static) -> Self {
        self.stages.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Apply all stages in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with every item of the input
    /// 2. For each stage in order, keep the survivors that satisfy it
    /// 3. Return the final survivors, in input order
    ///
    /// An empty pipeline returns every item.
    pub fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut current: Vec<&T> = items.iter().collect();
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} (input count: {})",
                stage.name(),
                current.len()
            );
            current.retain(|item| stage.is_satisfied(*item));
            tracing::debug!(
                "Stage applied: {} (output count: {})",
                stage.name(),
                current.len()
            );
        }
        current
    }
}

impl<T> Default for FilterPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
