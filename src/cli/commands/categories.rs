//! `grimoire categories` — list distinct corpus categories.

use anyhow::Result;

use crate::application::RagSystem;

pub async fn execute(system: &RagSystem, json: bool) -> Result<()> {
    let categories = system.list_categories().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    if categories.is_empty() {
        println!("No categories found.");
    } else {
        for category in categories {
            println!("{category}");
        }
    }

    Ok(())
}
