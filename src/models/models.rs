use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog record. Fields are fixed at construction and only exposed as
/// borrowed views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: String,
    title: String,
    author: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            tags,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.title,
            self.author,
            self.tags.join(", ")
        )
    }
}

/// Suggestion query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestQuery {
    #[serde(rename = "q", default)]
    pub query: String,
    #[serde(default)]
    pub limit: usize,
}

/// Search query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "q", default)]
    pub query: String,
    #[serde(default)]
    pub limit: usize,
}

/// Search results wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub books: Vec<Book>,
    pub total: usize,
}

/// Index statistics.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub books: usize,
    pub titles: usize,
    pub authors: usize,
    pub tags: usize,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub num_suggestions: usize,
    #[serde(default)]
    pub max_suggestions: usize,
    #[serde(default)]
    pub max_results: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:9000".to_string(),
            num_suggestions: 8,
            max_suggestions: 20,
            max_results: 50,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// CSV file to load. Empty loads the built-in sample records.
    #[serde(default)]
    pub path: String,
}
