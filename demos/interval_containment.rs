//! Interval containment and overlap categories
//!
//! This example shows:
//! - Building an interval list as an ordered element source
//! - Deriving "contains" and "overlaps" categories from it
//! - Writing both as DOT files and rendering them with Graphviz, if present
//!
//! Set `RELATION_CATEGORY_DOT` to point at a non-default `dot` binary.
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::path::PathBuf;

use relation_category::{
    contains_category, overlaps_category, Category, DotOptions, GraphFileType, GraphRenderer,
    Interval, IntervalList, RenderConfig,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut intervals = IntervalList::new("chr20_nested");
    for (start, end) in [(1, 100), (2, 99), (3, 98), (4, 97), (101, 200), (150, 250)] {
        intervals.push(Interval::new("20", start, end)?);
    }

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    let renderer = GraphRenderer::new(RenderConfig::from_env().with_format(GraphFileType::Pdf));

    let categories = [
        ("contains", contains_category(intervals.clone())?),
        ("overlaps", overlaps_category(intervals)?),
    ];

    for (name, category) in &categories {
        println!("{} category of {}:", name, category.source().name());
        for (from, to) in category.morphisms().iter() {
            println!("  {} -> {}", from, to);
        }

        let dot_path = out_dir.join(format!("{}.dot", name));
        let pdf_path = out_dir.join(format!("{}.pdf", name));
        let options = DotOptions {
            graph_name: name.to_string(),
        };

        // Rendering is optional: a missing or failing renderer still leaves the DOT file.
        match renderer.render_category(category, &dot_path, &pdf_path, &options) {
            Ok(()) => info!(path = %pdf_path.display(), "rendered"),
            Err(e) if e.is_external_tool_failure() => {
                warn!(error = %e, dot = %dot_path.display(), "rendering skipped")
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
