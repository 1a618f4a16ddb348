// Copyright 2025 Cowboy AI, LLC.

//! Relation-derived categories
//!
//! Given an ordered element sequence `E[0..n]` and a pairwise predicate `P`,
//! a single left-to-right pass over `i = 0..n-1` emits:
//!
//! 1. the adjacency morphism `E[i] -> E[i+1]`, always;
//! 2. a reach morphism `E[i] -> E[j]` where `E[j]` is the last element of the
//!    unbroken run `E[i+2..=j]` for which `P(E[i+1], E[k])` holds. The scan
//!    stops at the first `k` where `P` fails, even if a later element would
//!    satisfy it. No reach morphism is added when the run is empty.
//!
//! Each position therefore contributes at most two morphisms, a compact cover
//! of containment or overlap chains rather than their transitive closure.
//!
//! ```mermaid
//! graph LR
//!     A -->|adjacent| B
//!     B -->|adjacent| C
//!     C -->|adjacent| D
//!     A -.->|reach: P(B,C)| C
//! ```

use tracing::{debug, trace};

use crate::category::{Element, FiniteCategory, FiniteMorphisms};
use crate::errors::{CategoryError, CategoryResult};

/// Minimum sequence length accepted by the builder
pub const MIN_ELEMENTS: usize = 2;

/// A collection that yields an ordered element sequence.
///
/// The collection itself becomes the source object of the derived category.
pub trait OrderedSource {
    /// Element type of the sequence
    type Element: Element;

    /// Elements in the order the relation is scanned
    fn ordered_elements(&self) -> &[Self::Element];
}

impl<E: Element> OrderedSource for Vec<E> {
    type Element = E;

    fn ordered_elements(&self) -> &[E] {
        self
    }
}

/// Derives a [`FiniteCategory`] from an ordered sequence and a predicate
#[derive(Debug, Clone)]
pub struct RelationCategoryBuilder<P> {
    predicate: P,
    relation: String,
}

impl<P> RelationCategoryBuilder<P> {
    /// Builder for the relation `predicate`
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            relation: "relation".to_string(),
        }
    }

    /// Name the relation in log output
    pub fn named(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }

    /// Name used in log output
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Build the category of `elements`, carrying `source` as provenance.
    ///
    /// Fails with [`CategoryError::InvalidArgument`] when fewer than two
    /// elements are supplied.
    pub fn build<S, E>(&self, source: S, elements: &[E]) -> CategoryResult<FiniteCategory<S, E>>
    where
        E: Element,
        P: Fn(&E, &E) -> bool,
    {
        if elements.len() < MIN_ELEMENTS {
            return Err(CategoryError::invalid_argument(format!(
                "a {} category needs at least {MIN_ELEMENTS} elements, got {}",
                self.relation,
                elements.len()
            )));
        }

        let morphisms = self.morphisms(elements);
        debug!(
            relation = %self.relation,
            elements = elements.len(),
            morphisms = morphisms.edge_count(),
            "built relation category"
        );
        FiniteCategory::from_parts(source, elements.iter().cloned(), &morphisms)
    }

    /// Build the category of an [`OrderedSource`], which becomes the source
    pub fn build_from<Src>(&self, source: Src) -> CategoryResult<FiniteCategory<Src, Src::Element>>
    where
        Src: OrderedSource,
        P: Fn(&Src::Element, &Src::Element) -> bool,
    {
        let elements = source.ordered_elements().to_vec();
        self.build(source, &elements)
    }

    fn morphisms<E>(&self, elements: &[E]) -> FiniteMorphisms<E>
    where
        E: Element,
        P: Fn(&E, &E) -> bool,
    {
        let mut morphisms = FiniteMorphisms::new();
        for (i, pair) in elements.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);
            trace!(from = %current, to = %next, "adjacency morphism");
            morphisms.add(current.clone(), next.clone());

            if let Some(terminal) = find_terminal(elements, i + 1, &self.predicate) {
                trace!(from = %current, to = %terminal, "reach morphism");
                morphisms.add(current.clone(), terminal.clone());
            }
        }
        morphisms
    }
}

/// Last element of the unbroken run after `anchor` related to `elements[anchor]`.
///
/// Scans `k = anchor+1..` while `predicate(elements[anchor], elements[k])`
/// holds and returns the last match; `None` if the first candidate already
/// fails or `anchor` has no successors.
pub fn find_terminal<'a, E, P>(elements: &'a [E], anchor: usize, predicate: &P) -> Option<&'a E>
where
    P: Fn(&E, &E) -> bool,
{
    let origin = elements.get(anchor)?;
    elements
        .get(anchor + 1..)?
        .iter()
        .take_while(|&candidate| predicate(origin, candidate))
        .last()
}
