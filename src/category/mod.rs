// Copyright 2025 Cowboy AI, LLC.

//! Finite categories
//!
//! A finite category here is a set of elements (objects) together with an
//! ordered, duplicate-tolerant index of directed morphisms between them.
//! Identity morphisms are implicit and never stored, and no composition law
//! is modelled: the structure exists to capture a relation over a finite
//! element set so it can be inspected and rendered.
//!
//! Two variants share the [`Category`] read interface:
//! - [`FiniteCategory`] is built incrementally and validates every morphism
//!   endpoint against the element set as it is added.
//! - [`ImmutableFiniteCategory`] is built once from an element list and a
//!   morphism index, takes its own deep copy of that index and exposes no
//!   mutators.

mod element;
mod finite;
mod immutable;
mod morphisms;
pub(crate) mod validation;

pub use element::Element;
pub use finite::FiniteCategory;
pub use immutable::ImmutableFiniteCategory;
pub use morphisms::FiniteMorphisms;

use indexmap::{IndexMap, IndexSet};

/// Read access shared by every category variant
pub trait Category {
    /// Opaque payload identifying where the elements came from
    type Source;

    /// Element (object) type
    type Element: Element;

    /// The originating source object
    fn source(&self) -> &Self::Source;

    /// Elements in insertion order
    fn elements(&self) -> &IndexSet<Self::Element>;

    /// The morphism index
    fn morphisms(&self) -> &FiniteMorphisms<Self::Element>;

    /// Mapping from each source element to its ordered targets
    fn morphism_map(&self) -> &IndexMap<Self::Element, Vec<Self::Element>> {
        self.morphisms().morphism_map()
    }

    /// Whether `element` is an object of this category
    fn contains_element(&self, element: &Self::Element) -> bool {
        self.elements().contains(element)
    }

    /// Total number of stored morphisms, counting duplicates
    fn morphism_count(&self) -> usize {
        self.morphisms().edge_count()
    }
}
