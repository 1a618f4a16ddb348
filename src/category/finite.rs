// Copyright 2025 Cowboy AI, LLC.

//! Mutable finite category

use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use serde::Serialize;
use tracing::trace;

use super::immutable::ImmutableFiniteCategory;
use super::validation::{categories_equal, ensure_endpoints, hash_category};
use super::{Category, Element, FiniteMorphisms};
use crate::errors::CategoryResult;

/// Finite category that grows incrementally.
///
/// Elements may be added at any time; re-adding an element is a no-op.
/// Every morphism is checked against the element set when it is added, and a
/// rejected morphism leaves the category untouched.
#[derive(Debug, Clone, Serialize)]
pub struct FiniteCategory<S, E> {
    source: S,
    elements: IndexSet<E>,
    morphisms: FiniteMorphisms<E>,
}

impl<S, E: Element> FiniteCategory<S, E> {
    /// Create an empty category for `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            elements: IndexSet::new(),
            morphisms: FiniteMorphisms::new(),
        }
    }

    /// Build a category from a final element list and a morphism index.
    ///
    /// Elements are inserted first, then every morphism is replayed through
    /// [`Self::add_morphism`], so bulk construction rejects an unknown
    /// endpoint with the same error an incremental call would produce.
    pub fn from_parts<I>(
        source: S,
        elements: I,
        morphisms: &FiniteMorphisms<E>,
    ) -> CategoryResult<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut category = Self::new(source);
        category.add_elements(elements);
        for (from, to) in morphisms.iter() {
            category.add_morphism(from.clone(), to.clone())?;
        }
        Ok(category)
    }

    /// Add one element, returning whether it was new
    pub fn add_element(&mut self, element: E) -> bool {
        self.elements.insert(element)
    }

    /// Add several elements, keeping first-insertion order
    pub fn add_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        self.elements.extend(elements);
    }

    /// Add a morphism between two existing elements
    pub fn add_morphism(&mut self, from: E, to: E) -> CategoryResult<()> {
        ensure_endpoints(&self.elements, &from, &to)?;
        trace!(from = %from, to = %to, "adding morphism");
        self.morphisms.add(from, to);
        Ok(())
    }

    /// Freeze into an immutable category.
    ///
    /// The morphism index is moved rather than copied since nothing else can
    /// reach it.
    pub fn into_immutable(self) -> ImmutableFiniteCategory<S, E> {
        ImmutableFiniteCategory::from_validated(self.source, self.elements, self.morphisms)
    }
}

impl<S: Default, E: Element> Default for FiniteCategory<S, E> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S, E: Element> Category for FiniteCategory<S, E> {
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

impl<S: PartialEq, E: Element> PartialEq for FiniteCategory<S, E> {
    fn eq(&self, other: &Self) -> bool {
        categories_equal(self, other)
    }
}

impl<S: Eq, E: Element> Eq for FiniteCategory<S, E> {}

impl<S: Hash, E: Element> Hash for FiniteCategory<S, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_category(self, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CategoryError;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_incremental_construction() {
        let mut category: FiniteCategory<Option<u32>, &str> = FiniteCategory::default();
        assert_eq!(category.source(), &None);

        assert!(category.add_element("A"));
        assert!(category.add_element("B"));
        category.add_morphism("A", "B").unwrap();

        assert!(category.contains_element(&"A"));
        assert!(category.contains_element(&"B"));
        assert_eq!(category.morphisms().targets(&"A"), Some(&["B"][..]));
    }

    #[test]
    fn test_source_is_carried() {
        let category: FiniteCategory<&str, &str> = FiniteCategory::new("intervals.list");
        assert_eq!(*category.source(), "intervals.list");
    }

    #[test]
    fn test_re_adding_element_is_noop() {
        let mut category: FiniteCategory<(), &str> = FiniteCategory::new(());
        category.add_elements(["A", "B"]);
        assert!(!category.add_element("A"));
        category.add_elements(["B", "C"]);

        let order: Vec<_> = category.elements().iter().copied().collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_from_parts() {
        let morphisms: FiniteMorphisms<&str> = [("X", "Y"), ("Y", "Z")].into_iter().collect();
        let category = FiniteCategory::from_parts("src", ["X", "Y", "Z"], &morphisms).unwrap();

        assert_eq!(*category.source(), "src");
        assert_eq!(category.elements().len(), 3);
        assert_eq!(category.morphisms(), &morphisms);
    }

    #[test]
    fn test_from_parts_rejects_unknown_endpoint() {
        let morphisms: FiniteMorphisms<&str> = [("X", "Y"), ("Y", "A")].into_iter().collect();
        let err = FiniteCategory::from_parts((), ["X", "Y", "Z"], &morphisms).unwrap_err();

        assert_eq!(
            err,
            CategoryError::UnknownElement {
                role: "to",
                element: "A".to_string()
            }
        );
    }

    #[test]
    fn test_rejected_morphism_does_not_mutate() {
        let mut category: FiniteCategory<(), &str> = FiniteCategory::new(());
        assert!(category.add_morphism("X", "Y").unwrap_err().is_invalid_argument());

        category.add_elements(["X", "Y"]);
        category.add_morphism("X", "Y").unwrap();
        let before = category.clone();

        assert!(category.add_morphism("X", "Q").is_err());
        assert!(category.add_morphism("Q", "X").is_err());
        assert_eq!(category, before);
        assert_eq!(category.morphism_count(), 1);
    }

    #[test]
    fn test_copy_through_parts_is_independent() {
        let mut original: FiniteCategory<(), &str> = FiniteCategory::new(());
        original.add_elements(["p", "q", "r", "s"]);
        original.add_morphism("p", "q").unwrap();
        original.add_morphism("r", "s").unwrap();

        let copy = FiniteCategory::from_parts(
            (),
            original.elements().iter().copied(),
            &FiniteMorphisms::from_other(original.morphisms()),
        )
        .unwrap();
        assert_eq!(original, copy);
        assert_eq!(hash_of(&original), hash_of(&copy));

        original.add_morphism("p", "s").unwrap();
        original.add_elements(["t", "u"]);
        original.add_morphism("t", "u").unwrap();

        assert_eq!(copy.morphisms().targets(&"p"), Some(&["q"][..]));
        assert!(!copy.morphism_map().contains_key("t"));
    }

    #[test]
    fn test_equality_and_hash_contract() {
        let mut a: FiniteCategory<(), &str> = FiniteCategory::new(());
        let mut b: FiniteCategory<(), &str> = FiniteCategory::new(());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        a.add_elements(["m", "n"]);
        a.add_morphism("m", "n").unwrap();
        assert_ne!(a, b);

        b.add_elements(["m", "n"]);
        b.add_morphism("m", "n").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.add_element("o");
        assert_ne!(a, b);
    }

    #[test]
    fn test_element_order_does_not_affect_equality() {
        let mut forward: FiniteCategory<(), &str> = FiniteCategory::new(());
        forward.add_elements(["A", "B"]);
        let mut backward: FiniteCategory<(), &str> = FiniteCategory::new(());
        backward.add_elements(["B", "A"]);

        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn test_different_sources_are_unequal() {
        let a: FiniteCategory<&str, &str> = FiniteCategory::new("left");
        let b: FiniteCategory<&str, &str> = FiniteCategory::new("right");
        assert_ne!(a, b);
    }

    #[test]
    fn test_into_immutable_keeps_content() {
        let mut category: FiniteCategory<u8, &str> = FiniteCategory::new(7);
        category.add_elements(["a", "b"]);
        category.add_morphism("a", "b").unwrap();
        category.add_morphism("a", "b").unwrap();

        let frozen = category.clone().into_immutable();
        assert_eq!(frozen.source(), &7);
        assert_eq!(frozen.elements(), category.elements());
        assert_eq!(frozen.morphisms(), category.morphisms());
        assert_eq!(frozen.morphism_count(), 2);
    }
}
