//! `grimoire ask` — answer a question from the corpus.

use anyhow::Result;

use crate::application::RagSystem;
use crate::domain::models::MetadataValue;

pub async fn execute(system: &RagSystem, question: &str, json: bool) -> Result<()> {
    let answer = system.ask(question).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
        return Ok(());
    }

    println!("{}", answer.answer);

    if !answer.sources.is_empty() {
        println!("\nSources:");
        for source in &answer.sources {
            let name = match source.metadata.get("name") {
                Some(MetadataValue::Scalar(name)) => name.as_str(),
                _ => "(unnamed)",
            };
            println!("  - {name}");
        }
    }

    Ok(())
}
