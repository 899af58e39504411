#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub first_publish_year: Option<i32>,
    pub cover_id: Option<i64>,
    pub isbns: Vec<String>,
}

impl BookRecord {
    /// Case-sensitive substring match against every stored ISBN.
    pub fn has_isbn_containing(&self, fragment: &str) -> bool {
        self.isbns.iter().any(|isbn| isbn.contains(fragment))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub records: Vec<BookRecord>,
    pub total_found: u64,
}
