//! Catalog core: pure search session state machine, query building,
//! pagination planning and render instructions.
mod effect;
mod locale;
mod model;
mod msg;
mod pagination;
mod query;
mod render;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use locale::Locale;
pub use model::{BookRecord, SearchResult};
pub use msg::{FetchOutcome, Msg};
pub use pagination::{plan, total_pages, PageEntry, PaginationPlan, DEFAULT_WINDOW_SIZE};
pub use query::{
    normalize_isbn, QueryBuilder, RequestDescriptor, SearchCriteria, SearchField,
    UnknownFieldError, ValidationError, DEFAULT_ENDPOINT,
};
pub use render::{
    cover_url, render_list, render_pagination, BookRow, CoverRef, PageControl,
    DEFAULT_COVER_HOST, PLACEHOLDER_COVER,
};
pub use state::{AppState, PageLayout, RequestId, SessionSettings, DEFAULT_VIEWPORT_HEIGHT};
pub use store::ResultStore;
pub use update::update;
pub use view_model::{AppViewModel, ResultsView, StatusMessage};
