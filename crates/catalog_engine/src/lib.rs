//! Catalog engine: search fetches, response decoding and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_search_page, DecodeError, SearchDoc, SearchPage};
pub use engine::EngineHandle;
pub use fetch::{search, FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, RequestId};
