//! Categories from a custom relation
//!
//! This example shows:
//! - Using any `Eq + Hash + Clone + Display` type as an element
//! - Deriving a category from a closure predicate
//! - Freezing the result and exporting it as JSON

use relation_category::{Category, GraphView, RelationCategoryBuilder};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Each word "reaches" later words it is a prefix of.
    let words = vec!["c", "ca", "cat", "catalog", "dog", "do"];
    let is_prefix = |a: &&str, b: &&str| b.starts_with(*a);

    let category = RelationCategoryBuilder::new(is_prefix)
        .named("prefix")
        .build_from(words)?
        .into_immutable();

    for source in category.morphisms().sources() {
        let targets = category.morphisms().targets(source).unwrap_or_default();
        println!("{} -> {:?}", source, targets);
    }

    let view = GraphView::from_category(&category)?;
    println!("{}", view.to_json()?);
    Ok(())
}
