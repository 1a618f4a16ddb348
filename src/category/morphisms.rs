// Copyright 2025 Cowboy AI, LLC.

//! Ordered, duplicate-tolerant morphism index

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::validation::unordered_hash;
use super::Element;

/// Append-only multimap from a source element to its ordered targets.
///
/// Targets keep the exact order they were added in and duplicates are kept.
/// A source with no morphisms is absent rather than mapped to an empty list.
/// No membership validation happens here; that belongs to the categories.
///
/// Equality compares the full mapping, including per-source target order and
/// multiplicity. The order in which sources were first seen does not take
/// part in equality or hashing.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FiniteMorphisms<E> {
    morphisms: IndexMap<E, Vec<E>>,
}

impl<E: Element> FiniteMorphisms<E> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            morphisms: IndexMap::new(),
        }
    }

    /// Deep copy of a raw source-to-targets mapping.
    ///
    /// Every target list is copied, so the result shares nothing with `map`.
    /// Sources mapped to an empty list are dropped.
    pub fn from_map(map: &IndexMap<E, Vec<E>>) -> Self {
        let mut copy = Self::new();
        for (from, targets) in map {
            for to in targets {
                copy.add(from.clone(), to.clone());
            }
        }
        copy
    }

    /// Deep copy of another index; identical in effect to [`Self::from_map`]
    pub fn from_other(other: &FiniteMorphisms<E>) -> Self {
        Self::from_map(&other.morphisms)
    }

    /// Append `to` to the targets of `from`
    pub fn add(&mut self, from: E, to: E) {
        self.morphisms.entry(from).or_default().push(to);
    }

    /// Ordered targets of `from`, if it has any morphisms
    pub fn targets(&self, from: &E) -> Option<&[E]> {
        self.morphisms.get(from).map(Vec::as_slice)
    }

    /// The underlying mapping
    pub fn morphism_map(&self) -> &IndexMap<E, Vec<E>> {
        &self.morphisms
    }

    /// Source elements in first-seen order
    pub fn sources(&self) -> impl Iterator<Item = &E> {
        self.morphisms.keys()
    }

    /// Every `(from, to)` pair, grouped by source, targets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&E, &E)> {
        self.morphisms
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    /// Number of morphisms, counting duplicates
    pub fn edge_count(&self) -> usize {
        self.morphisms.values().map(Vec::len).sum()
    }

    /// Number of distinct sources
    pub fn source_count(&self) -> usize {
        self.morphisms.len()
    }

    /// True when no morphism has been added
    pub fn is_empty(&self) -> bool {
        self.morphisms.is_empty()
    }
}

impl<E: Element> Default for FiniteMorphisms<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> PartialEq for FiniteMorphisms<E> {
    fn eq(&self, other: &Self) -> bool {
        self.morphisms == other.morphisms
    }
}

impl<E: Element> Eq for FiniteMorphisms<E> {}

impl<E: Element> Hash for FiniteMorphisms<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.morphisms.len());
        state.write_u64(unordered_hash(self.morphisms.iter()));
    }
}

impl<E: Element> From<IndexMap<E, Vec<E>>> for FiniteMorphisms<E> {
    fn from(mut morphisms: IndexMap<E, Vec<E>>) -> Self {
        morphisms.retain(|_, targets| !targets.is_empty());
        Self { morphisms }
    }
}

impl<'de, E: Element + Deserialize<'de>> Deserialize<'de> for FiniteMorphisms<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<E, Vec<E>>::deserialize(deserializer).map(Self::from)
    }
}

impl<E: Element> FromIterator<(E, E)> for FiniteMorphisms<E> {
    fn from_iter<I: IntoIterator<Item = (E, E)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<E: Element> Extend<(E, E)> for FiniteMorphisms<E> {
    fn extend<I: IntoIterator<Item = (E, E)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add(from, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_add_and_retrieve() {
        let mut index = FiniteMorphisms::new();
        index.add("a", "b");

        assert!(index.morphism_map().contains_key("a"));
        assert_eq!(index.targets(&"a"), Some(&["b"][..]));
        assert_eq!(index.targets(&"b"), None);
    }

    #[test]
    fn test_preserves_insertion_order_and_duplicates() {
        let mut index = FiniteMorphisms::new();
        index.add("k", "v1");
        index.add("k", "v2");
        index.add("k", "v1");

        assert_eq!(index.targets(&"k"), Some(&["v1", "v2", "v1"][..]));
        assert_eq!(index.edge_count(), 3);
        assert_eq!(index.source_count(), 1);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = FiniteMorphisms::new();
        original.add("x", "a");
        original.add("y", "b");

        let mut copy = FiniteMorphisms::from_other(&original);
        assert_eq!(original, copy);
        assert_eq!(hash_of(&original), hash_of(&copy));

        original.add("x", "c");
        original.add("z", "d");
        assert_eq!(copy.targets(&"x"), Some(&["a"][..]));
        assert!(!copy.morphism_map().contains_key("z"));

        copy.add("y", "e");
        assert_eq!(original.targets(&"y"), Some(&["b"][..]));
    }

    #[test]
    fn test_from_map_and_from_other_agree() {
        let mut map: IndexMap<&str, Vec<&str>> = IndexMap::new();
        map.insert("p", vec!["q", "q"]);
        map.insert("empty", vec![]);

        let from_map = FiniteMorphisms::from_map(&map);
        let from_other = FiniteMorphisms::from_other(&from_map);
        let from_owned = FiniteMorphisms::from(map.clone());

        assert_eq!(from_map, from_other);
        assert_eq!(from_map, from_owned);
        assert!(!from_map.morphism_map().contains_key("empty"));
        assert!(!from_owned.morphism_map().contains_key("empty"));

        map.get_mut("p").unwrap().push("r");
        assert_eq!(from_map.targets(&"p"), Some(&["q", "q"][..]));
    }

    #[test]
    fn test_equality_and_hash_contract() {
        let mut a = FiniteMorphisms::new();
        let mut b = FiniteMorphisms::new();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        a.add("k", "v");
        assert_ne!(a, b);

        b.add("k", "v");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_target_order_matters_but_source_order_does_not() {
        let ab: FiniteMorphisms<&str> = [("k", "a"), ("k", "b")].into_iter().collect();
        let ba: FiniteMorphisms<&str> = [("k", "b"), ("k", "a")].into_iter().collect();
        assert_ne!(ab, ba);

        let xy: FiniteMorphisms<&str> = [("x", "1"), ("y", "2")].into_iter().collect();
        let yx: FiniteMorphisms<&str> = [("y", "2"), ("x", "1")].into_iter().collect();
        assert_eq!(xy, yx);
        assert_eq!(hash_of(&xy), hash_of(&yx));
    }

    #[test]
    fn test_iter_yields_pairs_grouped_by_source() {
        let index: FiniteMorphisms<&str> =
            [("a", "b"), ("c", "d"), ("a", "e")].into_iter().collect();
        let pairs: Vec<_> = index.iter().map(|(f, t)| (*f, *t)).collect();
        assert_eq!(pairs, vec![("a", "b"), ("a", "e"), ("c", "d")]);
        assert_eq!(index.sources().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_json_shape() {
        let index: FiniteMorphisms<String> = [("a".to_string(), "b".to_string())]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"a":["b"]}"#);

        let back: FiniteMorphisms<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, index);
    }

    #[test]
    fn test_json_drops_sources_without_targets() {
        let index: FiniteMorphisms<String> =
            serde_json::from_str(r#"{"a": [], "b": ["c"]}"#).unwrap();

        assert!(!index.morphism_map().contains_key("a"));
        assert_eq!(index.source_count(), 1);
        assert_eq!(index.edge_count(), 1);

        let empty: FiniteMorphisms<String> = serde_json::from_str(r#"{"a": []}"#).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty, FiniteMorphisms::new());
        assert_eq!(hash_of(&empty), hash_of(&FiniteMorphisms::<String>::new()));
    }
}
