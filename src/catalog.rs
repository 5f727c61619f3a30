use std::{io::Read, path::Path};

use regex::Regex;

use crate::{index::Index, models::Book};

const COL_COUNT: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Validation(String),
}

/// Reference records loaded when no catalog file is configured.
pub fn sample_books() -> Vec<Book> {
    let tags = |t: &[&str]| t.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Book::new(
            "b1",
            "Introduction to Algorithms",
            "Thomas H. Cormen",
            tags(&["algorithms", "cs", "textbook"]),
        ),
        Book::new(
            "b2",
            "Clean Code",
            "Robert C. Martin",
            tags(&["programming", "software", "best practices"]),
        ),
        Book::new(
            "b3",
            "Design Patterns",
            "Erich Gamma",
            tags(&["design", "patterns", "oop"]),
        ),
        Book::new(
            "b4",
            "Effective Java",
            "Joshua Bloch",
            tags(&["java", "programming"]),
        ),
        Book::new(
            "b5",
            "The Pragmatic Programmer",
            "Andrew Hunt",
            tags(&["programming", "software"]),
        ),
    ]
}

/// Add the reference records to the index.
pub fn load_sample(idx: &mut Index) -> usize {
    let books = sample_books();
    let n = books.len();
    for b in books {
        idx.add_book(b);
    }
    n
}

/// Load books from a CSV file into the index.
///
/// Rows are `id, title, author, tags` without a header, tags being
/// `|` separated. Returns the number of rows read.
pub fn load_csv(path: &Path, idx: &mut Index) -> Result<usize, CatalogError> {
    log::info!("importing books from {} ...", path.display());

    let file = std::fs::File::open(path)?;
    let n = read_csv(file, idx)?;

    log::info!("finished. imported {} books", n);
    Ok(n)
}

/// Read CSV rows from `r` into the index. Nothing is added if any row is
/// invalid.
pub fn read_csv<R: Read>(r: R, idx: &mut Index) -> Result<usize, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(r);

    let re_spaces = Regex::new(r"\s+").map_err(|e| CatalogError::Validation(e.to_string()))?;

    let mut books = Vec::new();
    for (n, result) in reader.records().enumerate() {
        let record = result?;
        books.push(read_book(&record, n + 1, &re_spaces)?);
    }

    let n = books.len();
    for b in books {
        idx.add_book(b);
    }

    Ok(n)
}

fn read_book(
    record: &csv::StringRecord,
    line: usize,
    re_spaces: &Regex,
) -> Result<Book, CatalogError> {
    if record.len() != COL_COUNT {
        return Err(CatalogError::Validation(format!(
            "line {}: every line should have exactly {} columns. Found {}",
            line,
            COL_COUNT,
            record.len()
        )));
    }

    let get = |i: usize| clean_string(record.get(i).unwrap_or(""), re_spaces);

    let id = get(0);
    if id.is_empty() {
        return Err(CatalogError::Validation(format!(
            "line {}: empty id at column 0",
            line
        )));
    }

    let title = get(1);
    if title.is_empty() {
        return Err(CatalogError::Validation(format!(
            "line {}: empty title at column 1",
            line
        )));
    }

    Ok(Book::new(id, title, get(2), split_string(&get(3))))
}

fn clean_string(s: &str, re_spaces: &Regex) -> String {
    re_spaces.replace_all(s.trim(), " ").to_string()
}

fn split_string(s: &str) -> Vec<String> {
    s.split('|')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_sample() {
        let mut idx = Index::new();
        assert_eq!(load_sample(&mut idx), 5);
        assert_eq!(idx.get_by_id("b5").map(|b| b.author()), Some("Andrew Hunt"));
    }

    #[test]
    fn test_read_csv() {
        let data = "\
r1,  The   Rust Programming Language ,Steve Klabnik, rust | programming |
r2,Zero To Production,Luca Palmieri,rust|web
r3,Untitled,,
";
        let mut idx = Index::new();
        assert_eq!(read_csv(data.as_bytes(), &mut idx).unwrap(), 3);

        let b = idx.get_by_id("r1").unwrap();
        assert_eq!(b.title(), "The Rust Programming Language");
        assert_eq!(b.tags(), ["rust", "programming"]);
        assert!(idx.get_by_id("r3").unwrap().tags().is_empty());
        assert_eq!(idx.suggest_queries("ru", 8), vec!["rust"]);
    }

    #[test]
    fn test_read_csv_quoted_fields() {
        let data = "q1,\"Gödel, Escher, Bach\",Douglas Hofstadter,math|music\n";
        let mut idx = Index::new();
        read_csv(data.as_bytes(), &mut idx).unwrap();
        assert_eq!(idx.search("escher", 10).len(), 1);
    }

    #[test]
    fn test_read_csv_validation() {
        let cases = [
            ("a,b,c\n", "line 1: every line should have exactly 4 columns. Found 3"),
            ("x,T,A,t\n ,T,A,t\n", "line 2: empty id at column 0"),
            ("x,  ,A,t\n", "line 1: empty title at column 1"),
        ];

        for (data, want) in cases {
            let mut idx = Index::new();
            let err = read_csv(data.as_bytes(), &mut idx).unwrap_err();
            assert_eq!(err.to_string(), want);
            assert!(idx.is_empty());
        }
    }

    #[test]
    fn test_load_csv_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "f1,Refactoring,Martin Fowler,refactoring|design").unwrap();

        let mut idx = Index::new();
        assert_eq!(load_csv(f.path(), &mut idx).unwrap(), 1);
        assert_eq!(idx.search("fowler", 10)[0].id(), "f1");
    }

    #[test]
    fn test_load_csv_missing_file() {
        let mut idx = Index::new();
        let err = load_csv(Path::new("/nonexistent/books.csv"), &mut idx).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
