use catalog_logging::catalog_debug;

use crate::view_model::{AppViewModel, ResultsView, StatusMessage};
use crate::{
    plan, render_list, render_pagination, BookRecord, FetchOutcome, Locale, PaginationPlan,
    QueryBuilder, ResultStore, SearchCriteria, SearchField, DEFAULT_COVER_HOST,
    DEFAULT_WINDOW_SIZE,
};

pub type RequestId = u64;

/// Viewport height assumed until the front end reports a real one.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;

/// How many result rows fit in a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub row_height: u32,
    /// Space taken by the form, status line and pagination.
    pub reserved_height: u32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            row_height: 120,
            reserved_height: 200,
        }
    }
}

impl PageLayout {
    /// Always at least one row, even for tiny viewports.
    pub fn page_size_for(&self, viewport_height: u32) -> u32 {
        (viewport_height.saturating_sub(self.reserved_height) / self.row_height.max(1)).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub query_builder: QueryBuilder,
    pub window_size: u32,
    pub layout: PageLayout,
    pub locale: Locale,
    pub cover_host: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            query_builder: QueryBuilder::default(),
            window_size: DEFAULT_WINDOW_SIZE,
            layout: PageLayout::default(),
            locale: Locale::default(),
            cover_host: DEFAULT_COVER_HOST.to_string(),
        }
    }
}

/// Search session: the single owner of everything the controller mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: SessionSettings,
    current_page: u32,
    current_query: String,
    current_field: SearchField,
    page_size: u32,
    store: ResultStore,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    notice: Option<StatusMessage>,
    results: ResultsView,
    pagination: PaginationPlan,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(SessionSettings::default(), DEFAULT_VIEWPORT_HEIGHT)
    }

    pub fn with_settings(settings: SessionSettings, viewport_height: u32) -> Self {
        let page_size = settings.layout.page_size_for(viewport_height);
        Self {
            settings,
            current_page: 1,
            current_query: String::new(),
            current_field: SearchField::default(),
            page_size,
            store: ResultStore::new(),
            next_request_id: 1,
            in_flight: None,
            notice: None,
            results: ResultsView::Empty,
            pagination: PaginationPlan::default(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            locale: self.settings.locale,
            busy: self.is_busy(),
            query: self.current_query.clone(),
            field: self.current_field,
            current_page: self.current_page,
            page_size: self.page_size,
            total_pages: self.pagination.total_pages,
            notice: self.notice.clone(),
            results: self.results.clone(),
            pagination: render_pagination(&self.pagination, self.current_page),
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(crate) fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self.current_query.clone(),
            field: self.current_field,
            page: self.current_page,
            page_size: self.page_size,
        }
    }

    /// New search: page 1, prior render and stored results dropped.
    pub(crate) fn begin_submission(&mut self, query: &str, field: SearchField) {
        self.current_page = 1;
        self.current_query = query.to_string();
        self.current_field = field;
        self.store.clear();
        self.notice = None;
        self.results = ResultsView::Empty;
        self.pagination = PaginationPlan::default();
        self.dirty = true;
    }

    pub(crate) fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
        self.notice = None;
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: StatusMessage) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub(crate) fn resize(&mut self, viewport_height: u32) {
        let page_size = self.settings.layout.page_size_for(viewport_height);
        if page_size != self.page_size {
            catalog_debug!("page size {} -> {}", self.page_size, page_size);
            self.page_size = page_size;
            self.dirty = true;
        }
    }

    pub(crate) fn show_message(&mut self, message: StatusMessage) {
        self.results = ResultsView::Message(message);
        self.pagination = PaginationPlan::default();
        self.dirty = true;
    }

    /// Allocates the next request id and marks it as the only one in flight.
    pub(crate) fn start_fetch(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.results = ResultsView::Message(StatusMessage::Loading);
        self.dirty = true;
        request_id
    }

    pub(crate) fn show_books(&mut self, records: &[BookRecord], total_items: u64) {
        self.results = ResultsView::Books(render_list(
            records,
            self.settings.locale,
            &self.settings.cover_host,
        ));
        self.pagination = plan(
            total_items,
            self.page_size,
            self.current_page,
            self.settings.window_size,
        );
        self.dirty = true;
    }

    pub(crate) fn complete_fetch(&mut self, request_id: RequestId, outcome: FetchOutcome) {
        if self.in_flight != Some(request_id) {
            catalog_debug!(
                "discarding response for request {} (in flight: {:?})",
                request_id,
                self.in_flight
            );
            return;
        }
        self.in_flight = None;
        self.notice = None;

        match outcome {
            FetchOutcome::Success(result) if result.records.is_empty() => {
                self.show_message(StatusMessage::NoResults);
            }
            FetchOutcome::Success(result) => {
                self.show_books(&result.records, result.total_found);
                self.store.replace(result);
            }
            FetchOutcome::HttpError {
                status,
                status_text,
            } => {
                self.show_message(StatusMessage::HttpError {
                    status,
                    status_text,
                });
            }
            FetchOutcome::TransportError { .. } => {
                self.show_message(StatusMessage::TransportError);
            }
        }
    }
}
