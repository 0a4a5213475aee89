//! Command-line surface for the answering system.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Retrieval-augmented answering over a fixed knowledge base.
#[derive(Parser)]
#[command(name = "grimoire", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit machine-readable JSON instead of human-oriented output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a question and get an answer grounded in the corpus
    Ask {
        /// The question to answer
        question: String,
    },

    /// Search the corpus by semantic similarity
    Search {
        /// The search query (may be empty to match everything)
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 3)]
        limit: usize,

        /// Restrict the search to one category
        #[arg(long)]
        category: Option<String>,
    },

    /// List the distinct categories present in the corpus
    Categories,

    /// List every document in one category
    Category {
        /// The category to list
        name: String,
    },

    /// Load a character corpus file into the index
    Load {
        /// Path to the corpus JSON file
        file: PathBuf,
    },
}

/// Log a fatal error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        tracing::error!("{err:#}");
    }
    std::process::exit(1);
}
