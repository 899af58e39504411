use std::time::Duration;

use catalog_core::{BookRecord, Effect, FetchOutcome, Msg, SearchResult};
use catalog_engine::{EngineEvent, EngineHandle, FailureKind, FetchError, SearchDoc, SearchPage};
use catalog_logging::{catalog_error, catalog_info, catalog_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { request_id, url } => {
                    catalog_info!("FetchPage request_id={} url={}", request_id, url);
                    self.engine.enqueue(request_id, url);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next completed fetch.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
            request_id,
            outcome: match result {
                Ok(page) => FetchOutcome::Success(map_page(page)),
                Err(err) => map_failure(request_id, err),
            },
        },
    }
}

fn map_failure(request_id: u64, err: FetchError) -> FetchOutcome {
    match err.kind {
        FailureKind::HttpStatus {
            status,
            status_text,
        } => {
            catalog_warn!("Search {} failed with http status {}", request_id, status);
            FetchOutcome::HttpError {
                status,
                status_text,
            }
        }
        _ => {
            catalog_error!("Search {} fetch error: {}", request_id, err);
            FetchOutcome::TransportError {
                message: err.to_string(),
            }
        }
    }
}

fn map_page(page: SearchPage) -> SearchResult {
    SearchResult {
        records: page.docs.into_iter().map(map_doc).collect(),
        total_found: page.num_found,
    }
}

fn map_doc(doc: SearchDoc) -> BookRecord {
    BookRecord {
        title: doc.title,
        authors: doc.author_name,
        first_publish_year: doc.first_publish_year,
        cover_id: doc.cover_i,
        isbns: doc.isbn,
    }
}
