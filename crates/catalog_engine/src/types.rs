use crate::SearchPage;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

/// A failed search fetch. `kind` drives how the front end reports it;
/// `message` is the underlying detail for the log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },
    #[error("timed out")]
    Timeout,
    #[error("response exceeds {max_bytes} bytes")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("unexpected content type {content_type}")]
    UnsupportedContentType { content_type: String },
    #[error("network error")]
    Network,
    #[error("malformed search response")]
    Decode,
}
