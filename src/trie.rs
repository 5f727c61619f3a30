use std::collections::{HashMap, HashSet};

/// Fold a key for trie paths and substring matching.
///
/// Lowercases char by char with `char::to_lowercase`, so the fold of a
/// string is the concatenation of the folds of its chars and a prefix folds
/// to a prefix of the whole key. No locale and no context rules apply (a
/// word-final 'Σ' folds to 'σ', never 'ς'). A single char may still fold to
/// several (e.g. 'İ' becomes "i\u{307}").
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
    // Every id whose key passed through this node, in insertion order.
    values: Vec<String>,
}

/// Character-keyed prefix tree mapping lowercased keys to record ids.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    keys: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`. The id is appended to the root and to
    /// every node on the key's path, once per node.
    pub fn insert(&mut self, key: &str, value: &str) {
        let mut cur = &mut self.root;
        cur.values.push(value.to_string());

        for ch in fold_case(key).chars() {
            cur = cur.children.entry(ch).or_default();
            cur.values.push(value.to_string());
        }

        if !cur.terminal {
            cur.terminal = true;
            self.keys += 1;
        }
    }

    /// Ids stored under `prefix`, deduplicated in first-seen order and cut
    /// to `limit`. An empty prefix or a prefix with no path yields nothing.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }

        let node = match self.find(prefix) {
            Some(n) => n,
            None => return Vec::new(),
        };

        let mut seen = HashSet::new();
        node.values
            .iter()
            .filter(|v| seen.insert(v.as_str()))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Whether `key` was inserted as a whole (not just as a prefix).
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some_and(|n| n.terminal)
    }

    /// Number of distinct folded keys.
    pub fn len(&self) -> usize {
        self.keys
    }

    fn find(&self, key: &str) -> Option<&Node> {
        let mut cur = &self.root;
        for ch in fold_case(key).chars() {
            cur = cur.children.get(&ch)?;
        }
        Some(cur)
    }
}
