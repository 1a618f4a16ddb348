// Copyright 2025 Cowboy AI, LLC.

//! Membership checks and equality helpers shared by the category variants

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use tracing::warn;

use super::{Category, Element};
use crate::errors::{CategoryError, CategoryResult};

/// Fails unless `element` is a member of `elements`
pub(crate) fn ensure_member<E: Element>(
    elements: &IndexSet<E>,
    role: &'static str,
    element: &E,
) -> CategoryResult<()> {
    if elements.contains(element) {
        return Ok(());
    }
    warn!(role, element = %element, "rejecting morphism with unknown endpoint");
    Err(CategoryError::UnknownElement {
        role,
        element: element.to_string(),
    })
}

/// Both endpoints of a morphism must already be elements
pub(crate) fn ensure_endpoints<E: Element>(
    elements: &IndexSet<E>,
    from: &E,
    to: &E,
) -> CategoryResult<()> {
    ensure_member(elements, "from", from)?;
    ensure_member(elements, "to", to)
}

/// Hash of a collection that does not depend on iteration order.
///
/// Each item is hashed independently with a fixed-key hasher and the results
/// are summed, so collections that compare equal as sets hash equally.
pub(crate) fn unordered_hash<T, I>(items: I) -> u64
where
    T: Hash,
    I: IntoIterator<Item = T>,
{
    items.into_iter().fold(0u64, |acc, item| {
        let mut hasher = DefaultHasher::new();
        item.hash(&mut hasher);
        acc.wrapping_add(hasher.finish())
    })
}

/// Structural equality over source, element set and morphism index
pub(crate) fn categories_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Category,
    B: Category<Source = A::Source, Element = A::Element>,
    A::Source: PartialEq,
{
    a.source() == b.source() && a.elements() == b.elements() && a.morphisms() == b.morphisms()
}

/// Hash consistent with [`categories_equal`]
pub(crate) fn hash_category<C, H>(category: &C, state: &mut H)
where
    C: Category,
    C::Source: Hash,
    H: Hasher,
{
    category.source().hash(state);
    state.write_usize(category.elements().len());
    state.write_u64(unordered_hash(category.elements()));
    category.morphisms().hash(state);
}
