use std::collections::{HashMap, HashSet};

use crate::{
    models::{Book, Stats},
    trie::{fold_case, Trie},
};

/// In-memory book catalog with title, author and tag tries.
///
/// Built once via `add_book` and then queried. Queries take `&self`, so once
/// the index is shared (eg. behind an `Arc`) it can no longer be mutated.
#[derive(Debug, Default)]
pub struct Index {
    books: Vec<Book>,
    positions: HashMap<String, usize>,
    titles: Trie,
    authors: Trie,
    tags: Trie,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book and index its title, author and tags.
    ///
    /// A book with an existing id replaces the stored one in place. Trie
    /// entries of the old record are kept and resolve to the new one.
    pub fn add_book(&mut self, b: Book) {
        self.titles.insert(b.title(), b.id());
        self.authors.insert(b.author(), b.id());
        for tag in b.tags() {
            self.tags.insert(tag, b.id());
        }

        match self.positions.get(b.id()) {
            Some(&pos) => {
                log::debug!("replacing book '{}'", b.id());
                self.books[pos] = b;
            }
            None => {
                self.positions.insert(b.id().to_string(), self.books.len());
                self.books.push(b);
            }
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Book> {
        self.positions.get(id).map(|&pos| &self.books[pos])
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            books: self.books.len(),
            titles: self.titles.len(),
            authors: self.authors.len(),
            tags: self.tags.len(),
        }
    }

    /// Whole field values completing `prefix`: titles first, then authors,
    /// then tags. Deduplicated, at most `limit` entries.
    pub fn suggest_queries(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut out = Suggestions::new(limit);

        for id in self.titles.suggest(prefix, limit) {
            if let Some(b) = self.get_by_id(&id) {
                out.add(b.title());
            }
            if out.is_full() {
                return out.into_vec();
            }
        }

        for id in self.authors.suggest(prefix, limit) {
            if let Some(b) = self.get_by_id(&id) {
                out.add(b.author());
            }
            if out.is_full() {
                return out.into_vec();
            }
        }

        let folded = fold_case(prefix);
        for id in self.tags.suggest(prefix, limit) {
            // The record may have been replaced and no longer carry the tag
            // that put its id in the trie.
            let tag = self
                .get_by_id(&id)
                .and_then(|b| b.tags().iter().find(|t| fold_case(t).starts_with(&folded)));
            if let Some(tag) = tag {
                out.add(tag);
            }
            if out.is_full() {
                break;
            }
        }

        out.into_vec()
    }

    /// Books whose title, author or any tag contains `query`, ignoring case.
    /// Results follow insertion order; there is no ranking.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Book> {
        let q = fold_case(query.trim());
        if q.is_empty() {
            return Vec::new();
        }

        self.books
            .iter()
            .filter(|b| {
                fold_case(b.title()).contains(&q)
                    || fold_case(b.author()).contains(&q)
                    || b.tags().iter().any(|t| fold_case(t).contains(&q))
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Insertion-ordered set of suggestion strings capped at a limit.
struct Suggestions {
    items: Vec<String>,
    seen: HashSet<String>,
    limit: usize,
}

impl Suggestions {
    fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            limit,
        }
    }

    fn add(&mut self, s: &str) {
        if self.seen.insert(s.to_string()) {
            self.items.push(s.to_string());
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    fn into_vec(mut self) -> Vec<String> {
        self.items.truncate(self.limit);
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use proptest::prelude::*;
    use rstest::rstest;

    fn sample() -> Index {
        let mut idx = Index::new();
        catalog::load_sample(&mut idx);
        idx
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id()).collect()
    }

    #[test]
    fn test_suggest_prog() {
        let got = sample().suggest_queries("prog", 8);
        assert_eq!(got, vec!["programming"]);
        assert!(!got.iter().any(|s| s == "Clean Code" || s == "Effective Java"));
    }

    #[test]
    fn test_suggest_priority() {
        let mut idx = sample();
        idx.add_book(Book::new(
            "b6",
            "Programming Pearls",
            "Jon Bentley",
            vec!["programming".to_string()],
        ));
        idx.add_book(Book::new(
            "b7",
            "Structure and Interpretation",
            "Prof. Abelson",
            vec!["lisp".to_string()],
        ));

        assert_eq!(
            idx.suggest_queries("PRO", 8),
            vec!["Programming Pearls", "Prof. Abelson", "programming"]
        );
        assert_eq!(idx.suggest_queries("pro", 2), vec!["Programming Pearls", "Prof. Abelson"]);
        assert!(idx.suggest_queries("pro", 0).is_empty());
    }

    #[test]
    fn test_suggest_first_matching_tag() {
        let mut idx = Index::new();
        idx.add_book(Book::new(
            "x",
            "Title",
            "Author",
            vec!["software".to_string(), "Systems".to_string(), "sql".to_string()],
        ));

        assert_eq!(idx.suggest_queries("s", 8), vec!["software"]);
        assert_eq!(idx.suggest_queries("sy", 8), vec!["Systems"]);
    }

    #[test]
    fn test_suggest_replaced_record_without_tag() {
        let mut idx = Index::new();
        idx.add_book(Book::new("x", "Old", "Someone", vec!["rust".to_string()]));
        idx.add_book(Book::new("x", "New", "Someone", vec!["go".to_string()]));

        // "rust" still points at "x", but the current record has no such tag.
        assert!(idx.suggest_queries("ru", 8).is_empty());
        // Stale title entry resolves to the replacement.
        assert_eq!(idx.suggest_queries("old", 8), vec!["New"]);
    }

    #[test]
    fn test_algo_reaches_b1_through_tags() {
        let idx = sample();
        assert_eq!(idx.tags.suggest("algo", 8), vec!["b1"]);
        assert_eq!(idx.suggest_queries("algo", 8), vec!["algorithms"]);
    }

    #[test]
    fn test_capital_sigma_in_tags_and_search() {
        let mut idx = Index::new();
        idx.add_book(Book::new("g1", "Title", "Author", vec!["ΟΔΟΣΑ".to_string()]));

        assert_eq!(idx.suggest_queries("ΟΔΟΣ", 8), vec!["ΟΔΟΣΑ"]);
        assert_eq!(ids(&idx.search("ΟΔΟΣ", 8)), vec!["g1"]);
    }

    #[test]
    fn test_empty_prefix() {
        assert!(sample().suggest_queries("", 8).is_empty());
    }

    #[rstest]
    #[case("java", &["b4"])]
    #[case("JAVA", &["b4"])]
    #[case("  design ", &["b3"])]
    #[case("zzz", &[])]
    #[case("", &[])]
    #[case("   ", &[])]
    #[case("programming", &["b2", "b4", "b5"])]
    #[case("martin", &["b2"])]
    #[case("best pr", &["b2"])]
    #[case("e", &["b1", "b2", "b3", "b4", "b5"])]
    fn test_search(#[case] q: &str, #[case] want: &[&str]) {
        assert_eq!(ids(&sample().search(q, 50)), want);
    }

    #[test]
    fn test_search_limit() {
        assert_eq!(ids(&sample().search("programming", 2)), vec!["b2", "b4"]);
        assert!(sample().search("programming", 0).is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let idx = sample();
        assert_eq!(idx.get_by_id("b3").map(|b| b.title()), Some("Design Patterns"));
        assert!(idx.get_by_id("nope").is_none());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut idx = sample();
        idx.add_book(Book::new("b1", "Algorithms Unlocked", "Thomas H. Cormen", vec![]));

        assert_eq!(idx.len(), 5);
        assert_eq!(idx.books[0].title(), "Algorithms Unlocked");
        assert_eq!(ids(&idx.search("cormen", 50)), vec!["b1"]);
    }

    #[test]
    fn test_readding_same_book_is_invisible() {
        let mut idx = sample();
        let before_suggest = idx.suggest_queries("p", 8);
        let before_search = idx.search("software", 50);

        let b2 = idx.get_by_id("b2").cloned().unwrap();
        idx.add_book(b2);

        assert_eq!(idx.suggest_queries("p", 8), before_suggest);
        assert_eq!(idx.search("software", 50), before_search);
        assert_eq!(idx.len(), 5);
    }

    #[test]
    fn test_stats() {
        let s = sample().stats();
        assert_eq!(
            s,
            Stats {
                books: 5,
                titles: 5,
                authors: 5,
                tags: 10,
            }
        );
    }

    proptest! {
        #[test]
        fn prop_search_has_no_false_positives(q in "[a-zA-Z ]{0,4}") {
            let idx = sample();
            let needle = fold_case(q.trim());
            for b in idx.search(&q, 50) {
                let hit = fold_case(b.title()).contains(&needle)
                    || fold_case(b.author()).contains(&needle)
                    || b.tags().iter().any(|t| fold_case(t).contains(&needle));
                prop_assert!(hit);
            }
        }

        #[test]
        fn prop_suggest_queries_bounded_and_unique(p in "[a-z]{0,3}", limit in 0usize..10) {
            let got = sample().suggest_queries(&p, limit);
            prop_assert!(got.len() <= limit);
            let uniq: HashSet<_> = got.iter().collect();
            prop_assert_eq!(uniq.len(), got.len());
        }
    }
}
