//! Prefix autocomplete and substring search over an in-memory book catalog.
//!
//! [`index::Index`] owns the records and the title, author and tag tries.
//! [`searchbox::SearchBox`] is the boundary a presentation layer drives; the
//! HTTP API in [`http`] exposes the same operations as JSON.

pub mod catalog;
pub mod cli;
pub mod handlers;
pub mod http;
pub mod index;
pub mod init;
pub mod models;
pub mod searchbox;
pub mod trie;
