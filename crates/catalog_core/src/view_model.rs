use crate::{BookRow, Locale, PageControl, SearchField, ValidationError};

/// User-facing status shown in place of (or above) the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Invalid(ValidationError),
    Loading,
    HttpError { status: u16, status_text: String },
    TransportError,
    NoResults,
    NoIsbnMatch { fragment: String },
    /// Local filter requested with nothing to filter; a new search follows.
    FilterFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    Empty,
    Message(StatusMessage),
    Books(Vec<BookRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub locale: Locale,
    pub busy: bool,
    pub query: String,
    pub field: SearchField,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub notice: Option<StatusMessage>,
    pub results: ResultsView,
    pub pagination: Vec<PageControl>,
    pub dirty: bool,
}
