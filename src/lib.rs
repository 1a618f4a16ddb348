// Copyright 2025 Cowboy AI, LLC.

//! # Relation Category
//!
//! Finite categories derived from ordered element sequences and pairwise
//! relations, with export to directed-multigraph descriptions.
//!
//! This crate provides:
//! - **FiniteMorphisms**: ordered, duplicate-tolerant morphism index
//! - **FiniteCategory**: mutable category that validates every morphism endpoint
//! - **ImmutableFiniteCategory**: category fixed at construction, with its own
//!   deep copy of the morphism index
//! - **RelationCategoryBuilder**: derives a category from an ordered sequence
//!   and a predicate such as "contains" or "overlaps"
//! - **GraphView**: directed multigraph view, serializable to DOT and JSON
//! - **GraphRenderer**: drives an external renderer (Graphviz `dot`)
//!
//! ## Design Principles
//!
//! 1. **Membership**: every morphism endpoint is an element of its category
//! 2. **Fail Fast**: rejected operations leave state untouched
//! 3. **Implicit Identities**: identity morphisms are never stored
//! 4. **Isolation**: process execution stays behind a trait seam
//!
//! ## Example
//!
//! ```rust
//! use relation_category::{contains_category, Category, Interval, IntervalList};
//!
//! let mut list = IntervalList::new("regions");
//! list.push(Interval::new("20", 1, 100)?);
//! list.push(Interval::new("20", 2, 99)?);
//! list.push(Interval::new("20", 3, 98)?);
//!
//! let category = contains_category(list)?;
//! assert_eq!(category.elements().len(), 3);
//! assert_eq!(category.morphism_count(), 3);
//! # Ok::<(), relation_category::CategoryError>(())
//! ```

#![warn(missing_docs)]

mod builder;
pub mod category;
pub mod config;
mod errors;
pub mod export;
mod interval;
mod relation;

pub use builder::{find_terminal, OrderedSource, RelationCategoryBuilder, MIN_ELEMENTS};
pub use category::{Category, Element, FiniteCategory, FiniteMorphisms, ImmutableFiniteCategory};
pub use config::{DotOptions, ExportConfig, RenderConfig, ValidationMode};
pub use errors::{CategoryError, CategoryResult};
pub use export::{
    write_category_dot, CommandOutcome, CommandRunner, Edge, GraphFileType, GraphRenderer,
    GraphView, SystemCommandRunner, Vertex,
};
pub use interval::{Interval, IntervalList};
pub use relation::{contains_category, overlaps_category, SpatialRelations, StandardRelation};
