use serde::Serialize;

use crate::{index::Index, models::Book};

/// Result of submitting a query from the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing was asked (blank input).
    Idle,
    /// A query ran and matched nothing.
    NoResults { query: String },
    Found { query: String, books: Vec<Book> },
}

impl Outcome {
    pub fn books(&self) -> &[Book] {
        match self {
            Outcome::Found { books, .. } => books,
            _ => &[],
        }
    }
}

/// Entry points a presentation layer calls on input events. Rendering is
/// entirely up to the caller; lists are returned in display order.
pub struct SearchBox<'a> {
    index: &'a Index,
    num_suggestions: usize,
    max_results: usize,
}

impl<'a> SearchBox<'a> {
    pub fn new(index: &'a Index, num_suggestions: usize, max_results: usize) -> Self {
        Self {
            index,
            num_suggestions,
            max_results,
        }
    }

    /// Called on every edit of the input text.
    pub fn on_text_changed(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        self.index.suggest_queries(text, self.num_suggestions)
    }

    /// Called when the user confirms the input (eg. presses enter).
    pub fn on_query_submitted(&self, text: &str) -> Outcome {
        let query = text.trim();
        if query.is_empty() {
            return Outcome::Idle;
        }

        let books = self.index.search(query, self.max_results);
        if books.is_empty() {
            Outcome::NoResults {
                query: query.to_string(),
            }
        } else {
            Outcome::Found {
                query: query.to_string(),
                books,
            }
        }
    }

    /// Called when a suggestion is picked; it is searched as typed.
    pub fn on_suggestion_selected(&self, suggestion: &str) -> Outcome {
        self.on_query_submitted(suggestion)
    }

    /// Detail view for a picked result.
    pub fn on_result_selected(&self, id: &str) -> Option<&'a Book> {
        self.index.get_by_id(id)
    }
}
