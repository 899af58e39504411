use serde::{Deserialize, Deserializer};

/// Body of a search endpoint response. Only the consumed fields are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub docs: Vec<SearchDoc>,
    #[serde(rename = "numFound", default, deserialize_with = "null_as_default")]
    pub num_found: u64,
}

/// One record. A field that is missing or `null` decodes to its empty value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SearchDoc {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_name: Vec<String>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub cover_i: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub isbn: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid search response at line {line}, column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
}

pub fn decode_search_page(bytes: &[u8]) -> Result<SearchPage, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })
}
