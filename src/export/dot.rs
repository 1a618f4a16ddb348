// Copyright 2025 Cowboy AI, LLC.

//! DOT serialization

use std::fs;
use std::path::Path;

use tracing::info;

use super::GraphView;
use crate::category::Category;
use crate::config::DotOptions;
use crate::errors::CategoryResult;

impl GraphView {
    /// Serialize as a DOT digraph with a `label` attribute per vertex
    pub fn to_dot(&self, options: &DotOptions) -> String {
        let mut dot = format!("digraph {} {{\n", dot_id(&options.graph_name));
        for vertex in &self.vertices {
            dot.push_str(&format!(
                "  {} [ label=\"{}\" ];\n",
                vertex.id,
                escape(&vertex.label)
            ));
        }
        for edge in &self.edges {
            dot.push_str(&format!("  {} -> {};\n", edge.source, edge.target));
        }
        dot.push_str("}\n");
        dot
    }

    /// Write the DOT description to `path`
    pub fn write_dot(&self, path: &Path, options: &DotOptions) -> CategoryResult<()> {
        fs::write(path, self.to_dot(options))?;
        info!(
            path = %path.display(),
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "wrote DOT graph"
        );
        Ok(())
    }
}

/// Export `category` as a DOT file at `path`
pub fn write_category_dot<C: Category>(
    category: &C,
    path: &Path,
    options: &DotOptions,
) -> CategoryResult<()> {
    GraphView::from_category(category)?.write_dot(path, options)
}

fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Bare identifiers pass through, anything else is quoted
fn dot_id(name: &str) -> String {
    let bare = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare {
        name.to_string()
    } else {
        format!("\"{}\"", escape(name))
    }
}
