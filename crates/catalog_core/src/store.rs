use crate::{BookRecord, SearchResult};

/// Most recent successful search result, kept for local re-filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultStore {
    last: Option<SearchResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, result: SearchResult) {
        self.last = Some(result);
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<&SearchResult> {
        self.last.as_ref()
    }

    /// True when there is no result or the last result had no records.
    pub fn is_empty(&self) -> bool {
        self.last
            .as_ref()
            .map_or(true, |result| result.records.is_empty())
    }

    pub fn filter_by_isbn_substring(&self, fragment: &str) -> Vec<BookRecord> {
        self.last
            .iter()
            .flat_map(|result| result.records.iter())
            .filter(|record| record.has_isbn_containing(fragment))
            .cloned()
            .collect()
    }
}
