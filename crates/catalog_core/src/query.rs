use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://openlibrary.org/search.json";

/// Record attribute a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Isbn,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Isbn];

    /// Name of the query parameter sent to the search endpoint.
    pub fn param_name(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Isbn => "isbn",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search field '{0}' (expected title, author or isbn)")]
pub struct UnknownFieldError(pub String);

impl FromStr for SearchField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.param_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: String,
    pub field: SearchField,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("search query is empty")]
    EmptyQuery,
    #[error("isbn must contain exactly 10 or 13 digits")]
    InvalidIsbn,
    #[error("search endpoint is not a valid url")]
    InvalidEndpoint,
}

/// Outbound request for one page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub endpoint: Url,
    pub limit: u32,
    pub offset: u64,
    pub field: SearchField,
    /// Trimmed query, or the normalized ISBN. Not yet URL-encoded.
    pub value: String,
}

impl RequestDescriptor {
    /// Full request URL; the query value is percent-encoded here.
    pub fn to_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string())
            .append_pair("offset", &self.offset.to_string())
            .append_pair(self.field.param_name(), &self.value);
        url
    }
}

/// Turns search criteria into request descriptors for a fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    endpoint: String,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl QueryBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Checks the configured endpoint without building a request.
    pub fn validate_endpoint(&self) -> Result<Url, ValidationError> {
        Url::parse(&self.endpoint).map_err(|_| ValidationError::InvalidEndpoint)
    }

    pub fn build(&self, criteria: &SearchCriteria) -> Result<RequestDescriptor, ValidationError> {
        let query = criteria.query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        let value = match criteria.field {
            SearchField::Isbn => {
                let isbn = normalize_isbn(query);
                if isbn.len() != 10 && isbn.len() != 13 {
                    return Err(ValidationError::InvalidIsbn);
                }
                isbn
            }
            SearchField::Title | SearchField::Author => query.to_string(),
        };

        let endpoint = self.validate_endpoint()?;
        let page = criteria.page.max(1);
        let limit = criteria.page_size.max(1);

        Ok(RequestDescriptor {
            endpoint,
            limit,
            offset: u64::from(page - 1) * u64::from(limit),
            field: criteria.field,
            value,
        })
    }
}

/// Keeps only digits and the ISBN-10 check character `X`/`x`.
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'X' | 'x'))
        .collect()
}
