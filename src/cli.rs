use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookdex")]
#[command(about = "bookdex - Autocomplete and search over a book catalog.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order).
    #[arg(long, action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    /// CSV catalog to load. Overrides `catalog.path` from the config.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },

    /// Start the HTTP API (default).
    Serve,

    /// Print autocomplete suggestions for a prefix.
    Suggest {
        text: String,

        /// Maximum number of suggestions. Defaults to `app.num_suggestions`.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search books by title, author or tag.
    Search {
        text: String,

        /// Maximum number of results. Defaults to `app.max_results`.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single book by ID.
    Book { id: String },
}
