use catalog_logging::{catalog_debug, catalog_info};

use crate::view_model::StatusMessage;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// At most one fetch is in flight. While one is pending, intents that would
/// start another are dropped, and completions for any other request id are
/// discarded.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Submit { query, field } => {
            if state.is_busy() {
                catalog_debug!("submit ignored while a search is in flight");
                return (state, Vec::new());
            }
            state.begin_submission(query.trim(), field);
            run_search(&mut state)
        }
        Msg::GoToPage(page) => {
            if page == 0 || state.is_busy() {
                return (state, Vec::new());
            }
            state.set_current_page(page);
            run_search(&mut state)
        }
        Msg::FilterLocal(fragment) => {
            if state.is_busy() {
                return (state, Vec::new());
            }
            filter_local(&mut state, &fragment)
        }
        Msg::Resize { viewport_height } => {
            state.resize(viewport_height);
            Vec::new()
        }
        Msg::SearchCompleted {
            request_id,
            outcome,
        } => {
            state.complete_fetch(request_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn run_search(state: &mut AppState) -> Vec<Effect> {
    let criteria = state.criteria();
    match state.settings().query_builder.build(&criteria) {
        Err(err) => {
            catalog_debug!("search rejected: {}", err);
            state.show_message(StatusMessage::Invalid(err));
            Vec::new()
        }
        Ok(descriptor) => {
            let url = descriptor.to_url().to_string();
            let request_id = state.start_fetch();
            catalog_info!(
                "search request {} field={} page={} url={}",
                request_id,
                criteria.field,
                criteria.page,
                url
            );
            vec![Effect::FetchPage { request_id, url }]
        }
    }
}

/// Narrows the stored results without touching the network, unless there is
/// nothing stored, in which case it falls back to a fresh search.
fn filter_local(state: &mut AppState, fragment: &str) -> Vec<Effect> {
    if state.store().is_empty() {
        let effects = run_search(state);
        if !effects.is_empty() {
            state.set_notice(StatusMessage::FilterFallback);
        }
        return effects;
    }

    state.clear_notice();
    let filtered = state.store().filter_by_isbn_substring(fragment);
    if filtered.is_empty() {
        state.show_message(StatusMessage::NoIsbnMatch {
            fragment: fragment.to_string(),
        });
    } else {
        let count = filtered.len() as u64;
        state.show_books(&filtered, count);
    }
    Vec::new()
}
