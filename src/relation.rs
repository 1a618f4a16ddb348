// Copyright 2025 Cowboy AI, LLC.

//! Standard relations for deriving categories
//!
//! Containment and overlap are the two relations categories are usually
//! derived from. Any element type that can answer both questions gets the
//! ready-made builders below; other relations go through
//! [`RelationCategoryBuilder`] with a closure.

use serde::{Deserialize, Serialize};

use crate::builder::{OrderedSource, RelationCategoryBuilder};
use crate::category::FiniteCategory;
use crate::errors::CategoryResult;

/// Elements that occupy a span and can be compared spatially
pub trait SpatialRelations {
    /// `self` fully covers `other`
    fn contains(&self, other: &Self) -> bool;

    /// `self` and `other` share at least one position
    fn overlaps(&self, other: &Self) -> bool;
}

/// The built-in relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardRelation {
    /// Anchor contains candidate
    Contains,
    /// Anchor overlaps candidate
    Overlaps,
}

impl StandardRelation {
    /// Evaluate the relation for `(anchor, candidate)`
    pub fn holds<E: SpatialRelations>(&self, anchor: &E, candidate: &E) -> bool {
        match self {
            StandardRelation::Contains => anchor.contains(candidate),
            StandardRelation::Overlaps => anchor.overlaps(candidate),
        }
    }

    /// Lower-case name, used in log output
    pub fn name(&self) -> &'static str {
        match self {
            StandardRelation::Contains => "contains",
            StandardRelation::Overlaps => "overlaps",
        }
    }

    /// Derive the category of `source` under this relation
    pub fn category<Src>(&self, source: Src) -> CategoryResult<FiniteCategory<Src, Src::Element>>
    where
        Src: OrderedSource,
        Src::Element: SpatialRelations,
    {
        let relation = *self;
        RelationCategoryBuilder::new(move |anchor: &Src::Element, candidate: &Src::Element| {
            relation.holds(anchor, candidate)
        })
        .named(self.name())
        .build_from(source)
    }
}

/// Category whose reach morphisms follow containment chains
pub fn contains_category<Src>(source: Src) -> CategoryResult<FiniteCategory<Src, Src::Element>>
where
    Src: OrderedSource,
    Src::Element: SpatialRelations,
{
    StandardRelation::Contains.category(source)
}

/// Category whose reach morphisms follow overlap chains
pub fn overlaps_category<Src>(source: Src) -> CategoryResult<FiniteCategory<Src, Src::Element>>
where
    Src: OrderedSource,
    Src::Element: SpatialRelations,
{
    StandardRelation::Overlaps.category(source)
}
