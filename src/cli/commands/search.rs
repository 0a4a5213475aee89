//! `grimoire search` / `grimoire category` — query the corpus.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::application::RagSystem;
use crate::domain::models::{MetadataValue, SearchResult, StructuredMetadata};

pub async fn execute(
    system: &RagSystem,
    query: &str,
    limit: usize,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let filter = category.map(|value| {
        let mut filter = StructuredMetadata::new();
        filter.insert("category".to_string(), MetadataValue::Scalar(value.to_string()));
        filter
    });

    let results = system.search(query, limit, filter.as_ref()).await?;
    render(&results, json)
}

pub async fn execute_category(system: &RagSystem, name: &str, json: bool) -> Result<()> {
    let results = system.search_by_category(name).await?;
    render(&results, json)
}

fn render(results: &[SearchResult], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Name", "Category", "Score", "Text"]);

    for result in results {
        let field = |key: &str| match result.metadata.get(key) {
            Some(MetadataValue::Scalar(value)) => value.clone(),
            _ => String::new(),
        };
        let mut text: String = result.text.chars().take(80).collect();
        if text.len() < result.text.len() {
            text.push_str("...");
        }
        table.add_row([
            field("name"),
            field("category"),
            format!("{:.4}", result.score),
            text,
        ]);
    }

    println!("{table}");
    Ok(())
}
