// Copyright 2025 Cowboy AI, LLC.

//! Immutable finite category

use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use super::validation::{categories_equal, ensure_endpoints, hash_category};
use super::{Category, Element, FiniteMorphisms};
use crate::config::ValidationMode;
use crate::errors::CategoryResult;

/// Finite category fixed at construction.
///
/// Holds its own deep copy of the morphism index it was built from, so later
/// changes to the caller's index are never observed. There are no mutators.
#[derive(Debug, Clone, Serialize)]
pub struct ImmutableFiniteCategory<S, E> {
    source: S,
    elements: IndexSet<E>,
    morphisms: FiniteMorphisms<E>,
}

impl<S, E: Element> ImmutableFiniteCategory<S, E> {
    /// Build and validate a category from elements and a morphism index
    pub fn new<I>(source: S, elements: I, morphisms: &FiniteMorphisms<E>) -> CategoryResult<Self>
    where
        I: IntoIterator<Item = E>,
    {
        Self::with_mode(source, elements, morphisms, ValidationMode::Validated)
    }

    /// Build a category, choosing whether to check morphism endpoints.
    ///
    /// [`ValidationMode::Trusted`] skips the membership check; the caller
    /// then guarantees every endpoint is among `elements`.
    pub fn with_mode<I>(
        source: S,
        elements: I,
        morphisms: &FiniteMorphisms<E>,
        mode: ValidationMode,
    ) -> CategoryResult<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let elements: IndexSet<E> = elements.into_iter().collect();
        match mode {
            ValidationMode::Validated => {
                for (from, to) in morphisms.iter() {
                    ensure_endpoints(&elements, from, to)?;
                }
            }
            ValidationMode::Trusted => {
                debug!(
                    morphisms = morphisms.edge_count(),
                    "skipping endpoint validation for trusted input"
                );
            }
        }

        Ok(Self {
            source,
            elements,
            morphisms: FiniteMorphisms::from_other(morphisms),
        })
    }

    /// Wrap parts that were already validated and are exclusively owned
    pub(super) fn from_validated(
        source: S,
        elements: IndexSet<E>,
        morphisms: FiniteMorphisms<E>,
    ) -> Self {
        Self {
            source,
            elements,
            morphisms,
        }
    }
}

impl<S, E: Element> Category for ImmutableFiniteCategory<S, E> {
    type Source = S;
    type Element = E;

    fn source(&self) -> &S {
        &self.source
    }

    fn elements(&self) -> &IndexSet<E> {
        &self.elements
    }

    fn morphisms(&self) -> &FiniteMorphisms<E> {
        &self.morphisms
    }
}

impl<S: PartialEq, E: Element> PartialEq for ImmutableFiniteCategory<S, E> {
    fn eq(&self, other: &Self) -> bool {
        categories_equal(self, other)
    }
}

impl<S: Eq, E: Element> Eq for ImmutableFiniteCategory<S, E> {}

impl<S: Hash, E: Element> Hash for ImmutableFiniteCategory<S, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_category(self, state);
    }
}
