use crate::{RequestId, SearchField, SearchResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the search form.
    Submit { query: String, field: SearchField },
    /// User clicked a page number, previous or next.
    GoToPage(u32),
    /// User asked to narrow the shown results to ISBNs containing a fragment.
    FilterLocal(String),
    /// Viewport height changed; recomputes the page size only.
    Resize { viewport_height: u32 },
    /// Engine finished a fetch.
    SearchCompleted {
        request_id: RequestId,
        outcome: FetchOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Result of one search fetch as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(SearchResult),
    HttpError { status: u16, status_text: String },
    /// Network, timeout or malformed response. `message` is for diagnostics only.
    TransportError { message: String },
}
