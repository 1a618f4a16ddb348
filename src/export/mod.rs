// Copyright 2025 Cowboy AI, LLC.

//! Graph export for finite categories
//!
//! A category is viewed as a directed multigraph: one vertex per element,
//! labelled with the element's display string, and one edge per stored
//! morphism, so duplicate morphisms become parallel edges. The view can be
//! serialized to DOT for Graphviz or to JSON, and [`render`] drives an
//! external renderer to turn a DOT file into an image.

pub mod dot;
pub mod render;

pub use dot::write_category_dot;
pub use render::{
    CommandOutcome, CommandRunner, GraphFileType, GraphRenderer, SystemCommandRunner,
};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{CategoryError, CategoryResult};

/// A vertex of the exported graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// 1-based vertex id, in element insertion order
    pub id: usize,
    /// Display string of the element
    pub label: String,
}

/// A directed edge between two vertex ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Id of the source vertex
    pub source: usize,
    /// Id of the target vertex
    pub target: usize,
}

/// Directed multigraph view of a category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    /// One vertex per element
    pub vertices: Vec<Vertex>,
    /// One edge per morphism entry, duplicates included
    pub edges: Vec<Edge>,
}

impl GraphView {
    /// Build the multigraph view of `category`.
    ///
    /// Fails if a morphism endpoint is not an element, which can only happen
    /// for categories built from trusted, unvalidated input.
    pub fn from_category<C: Category>(category: &C) -> CategoryResult<Self> {
        let elements = category.elements();
        let vertices = elements
            .iter()
            .enumerate()
            .map(|(index, element)| Vertex {
                id: index + 1,
                label: element.to_string(),
            })
            .collect();

        let vertex_id = |role: &'static str, element: &C::Element| {
            elements
                .get_index_of(element)
                .map(|index| index + 1)
                .ok_or_else(|| CategoryError::UnknownElement {
                    role,
                    element: element.to_string(),
                })
        };

        let edges = category
            .morphisms()
            .iter()
            .map(|(from, to)| -> CategoryResult<Edge> {
                Ok(Edge {
                    source: vertex_id("from", from)?,
                    target: vertex_id("to", to)?,
                })
            })
            .collect::<CategoryResult<Vec<_>>>()?;

        Ok(Self { vertices, edges })
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, parallel edges counted separately
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Pretty-printed JSON description
    pub fn to_json(&self) -> CategoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{FiniteCategory, FiniteMorphisms, ImmutableFiniteCategory};
    use crate::config::ValidationMode;
    use pretty_assertions::assert_eq;

    fn sample() -> FiniteCategory<(), &'static str> {
        let mut category = FiniteCategory::new(());
        category.add_elements(["A", "B", "C"]);
        category.add_morphism("A", "B").unwrap();
        category.add_morphism("A", "C").unwrap();
        category.add_morphism("A", "B").unwrap();
        category
    }

    #[test]
    fn test_one_vertex_per_element() {
        let view = GraphView::from_category(&sample()).unwrap();
        assert_eq!(
            view.vertices,
            vec![
                Vertex {
                    id: 1,
                    label: "A".to_string(),
                },
                Vertex {
                    id: 2,
                    label: "B".to_string(),
                },
                Vertex {
                    id: 3,
                    label: "C".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_morphisms_become_parallel_edges() {
        let view = GraphView::from_category(&sample()).unwrap();
        assert_eq!(
            view.edges,
            vec![
                Edge {
                    source: 1,
                    target: 2,
                },
                Edge {
                    source: 1,
                    target: 3,
                },
                Edge {
                    source: 1,
                    target: 2,
                },
            ]
        );
        assert_eq!(view.edge_count(), 3);
    }

    #[test]
    fn test_isolated_elements_are_kept() {
        let mut category: FiniteCategory<(), &str> = FiniteCategory::new(());
        category.add_elements(["lonely"]);
        let view = GraphView::from_category(&category).unwrap();
        assert_eq!(view.vertex_count(), 1);
        assert!(view.edges.is_empty());
    }

    #[test]
    fn test_trusted_category_with_dangling_endpoint_fails() {
        let morphisms: FiniteMorphisms<&str> = [("a", "ghost")].into_iter().collect();
        let category =
            ImmutableFiniteCategory::with_mode((), ["a"], &morphisms, ValidationMode::Trusted)
                .unwrap();

        let err = GraphView::from_category(&category).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_json_round_trip() {
        let view = GraphView::from_category(&sample()).unwrap();
        let json = view.to_json().unwrap();
        let back: GraphView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
