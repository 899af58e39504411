use std::sync::Once;

use catalog_core::{
    update, AppState, BookRecord, Effect, FetchOutcome, Msg, PageControl, PageLayout,
    ResultsView, SearchField, SearchResult, SessionSettings, StatusMessage, ValidationError,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

/// One row per unit of height, so the viewport height is the page size.
fn state_with_page_size(page_size: u32) -> AppState {
    let settings = SessionSettings {
        layout: PageLayout {
            row_height: 1,
            reserved_height: 0,
        },
        ..SessionSettings::default()
    };
    AppState::with_settings(settings, page_size)
}

fn submit(state: AppState, query: &str, field: SearchField) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::Submit {
            query: query.to_string(),
            field,
        },
    )
}

fn fetched_request_id(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::FetchPage { request_id, .. }] => *request_id,
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

fn book(title: &str, isbns: &[&str]) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        authors: vec!["Ursula K. Le Guin".to_string()],
        first_publish_year: Some(1968),
        cover_id: Some(42),
        isbns: isbns.iter().map(|s| s.to_string()).collect(),
    }
}

fn complete(state: AppState, request_id: u64, outcome: FetchOutcome) -> AppState {
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            outcome,
        },
    );
    assert!(effects.is_empty());
    state
}

fn searched(records: Vec<BookRecord>, total_found: u64) -> AppState {
    let (state, effects) = submit(state_with_page_size(10), "earthsea", SearchField::Title);
    let id = fetched_request_id(&effects);
    complete(
        state,
        id,
        FetchOutcome::Success(SearchResult {
            records,
            total_found,
        }),
    )
}

#[test]
fn submit_trims_and_emits_fetch_for_page_one() {
    init_logging();
    let (mut state, effects) = submit(
        state_with_page_size(10),
        "  a wizard of earthsea ",
        SearchField::Title,
    );

    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            request_id: 1,
            url: "https://openlibrary.org/search.json?limit=10&offset=0&title=a+wizard+of+earthsea"
                .to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.query, "a wizard of earthsea");
    assert_eq!(view.current_page, 1);
    assert!(view.busy);
    assert_eq!(view.results, ResultsView::Message(StatusMessage::Loading));
    assert!(state.consume_dirty());
}

#[test]
fn empty_query_renders_message_without_fetch() {
    init_logging();
    let (state, effects) = submit(state_with_page_size(10), "   ", SearchField::Author);

    assert!(effects.is_empty());
    assert!(!state.is_busy());
    assert_eq!(
        state.view().results,
        ResultsView::Message(StatusMessage::Invalid(ValidationError::EmptyQuery))
    );
}

#[test]
fn invalid_isbn_renders_message_without_fetch() {
    init_logging();
    let (state, effects) = submit(state_with_page_size(10), "123", SearchField::Isbn);

    assert!(effects.is_empty());
    assert_eq!(
        state.view().results,
        ResultsView::Message(StatusMessage::Invalid(ValidationError::InvalidIsbn))
    );
}

#[test]
fn successful_fetch_stores_result_and_plans_pagination() {
    init_logging();
    let state = searched(vec![book("A Wizard of Earthsea", &["9780553383041"])], 95);

    assert!(!state.is_busy());
    assert_eq!(state.store().last().map(|r| r.total_found), Some(95));
    let view = state.view();
    match &view.results {
        ResultsView::Books(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].title, "A Wizard of Earthsea");
            assert_eq!(rows[0].cover.as_str(), "https://covers.openlibrary.org/b/id/42-M.jpg");
        }
        other => panic!("expected books, got {other:?}"),
    }
    assert_eq!(view.total_pages, 10);
    assert_eq!(
        view.pagination,
        vec![
            PageControl::Page {
                number: 1,
                active: true
            },
            PageControl::Page {
                number: 2,
                active: false
            },
            PageControl::Page {
                number: 3,
                active: false
            },
            PageControl::Page {
                number: 4,
                active: false
            },
            PageControl::Page {
                number: 5,
                active: false
            },
            PageControl::Gap,
            PageControl::Page {
                number: 10,
                active: false
            },
            PageControl::Next { target: 2 },
        ]
    );
}

#[test]
fn empty_result_set_shows_no_results_and_clears_pagination() {
    init_logging();
    let state = searched(Vec::new(), 0);

    let view = state.view();
    assert_eq!(view.results, ResultsView::Message(StatusMessage::NoResults));
    assert!(view.pagination.is_empty());
    assert!(state.store().is_empty());
}

#[test]
fn http_error_keeps_status_and_previous_store() {
    init_logging();
    let state = searched(vec![book("Tehanu", &["0689315953"])], 30);
    let (state, effects) = update(state, Msg::GoToPage(2));
    let id = fetched_request_id(&effects);
    assert!(matches!(&effects[0], Effect::FetchPage { url, .. } if url.contains("offset=10")));

    let state = complete(
        state,
        id,
        FetchOutcome::HttpError {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        },
    );

    let view = state.view();
    let ResultsView::Message(message) = &view.results else {
        panic!("expected message, got {:?}", view.results);
    };
    assert!(view.locale.message(message).contains("503"));
    assert!(view.pagination.is_empty());
    assert_eq!(state.store().last().map(|r| r.records.len()), Some(1));
}

#[test]
fn transport_error_shows_generic_message() {
    init_logging();
    let (state, effects) = submit(state_with_page_size(10), "dune", SearchField::Title);
    let id = fetched_request_id(&effects);
    let state = complete(
        state,
        id,
        FetchOutcome::TransportError {
            message: "dns error".to_string(),
        },
    );

    assert!(!state.is_busy());
    assert_eq!(
        state.view().results,
        ResultsView::Message(StatusMessage::TransportError)
    );
}

#[test]
fn double_submit_issues_single_fetch() {
    init_logging();
    let (state, first) = submit(state_with_page_size(10), "dune", SearchField::Title);
    let (state, second) = submit(state, "emma", SearchField::Title);
    let (state, third) = update(state, Msg::GoToPage(3));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert!(third.is_empty());
    assert_eq!(state.view().query, "dune");
    assert_eq!(state.current_page(), 1);
}

#[test]
fn stale_response_is_discarded() {
    init_logging();
    let state = searched(vec![book("Tehanu", &["0689315953"])], 30);
    let (state, effects) = update(state, Msg::GoToPage(3));
    let id = fetched_request_id(&effects);
    assert_eq!(id, 2);

    // A late delivery for the first request must not replace page 3's results.
    let state = complete(
        state,
        1,
        FetchOutcome::Success(SearchResult {
            records: vec![book("Stale", &[])],
            total_found: 1,
        }),
    );
    assert_eq!(state.in_flight(), Some(2));
    assert_eq!(
        state.view().results,
        ResultsView::Message(StatusMessage::Loading)
    );

    let state = complete(
        state,
        2,
        FetchOutcome::Success(SearchResult {
            records: vec![book("The Farthest Shore", &["0689316836"])],
            total_found: 30,
        }),
    );
    assert_eq!(
        state.store().last().map(|r| r.records[0].title.as_str()),
        Some("The Farthest Shore")
    );
    assert!(state.view().pagination.contains(&PageControl::Page {
        number: 3,
        active: true
    }));
}

#[test]
fn local_filter_on_stored_results_never_fetches() {
    init_logging();
    let state = searched(
        vec![
            book("A Wizard of Earthsea", &["9780553383041", "0553383043"]),
            book("The Tombs of Atuan", &["9781481465519"]),
            book("No Isbn", &[]),
        ],
        3,
    );

    let (state, effects) = update(state, Msg::FilterLocal("0553".to_string()));
    assert!(effects.is_empty());
    match state.view().results {
        ResultsView::Books(rows) => {
            let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
            assert_eq!(titles, vec!["A Wizard of Earthsea"]);
        }
        other => panic!("expected books, got {other:?}"),
    }
    assert_eq!(state.store().last().map(|r| r.records.len()), Some(3));

    let (state, effects) = update(state, Msg::FilterLocal("0000".to_string()));
    assert!(effects.is_empty());
    assert_eq!(
        state.view().results,
        ResultsView::Message(StatusMessage::NoIsbnMatch {
            fragment: "0000".to_string()
        })
    );
    assert!(state.view().pagination.is_empty());
}

#[test]
fn local_filter_paginates_filtered_count() {
    init_logging();
    let records = (0..5)
        .map(|i| book(&format!("Book {i}"), &[format!("97800000000{i:02}").as_str()]))
        .collect();
    let (state, _) = update(searched(records, 500), Msg::Resize { viewport_height: 2 });

    let (state, effects) = update(state, Msg::FilterLocal("978".to_string()));
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.page_size, 2);
    assert_eq!(view.total_pages, 3);
}

#[test]
fn local_filter_without_results_falls_back_to_one_fetch() {
    init_logging();
    let state = searched(Vec::new(), 0);

    let (state, effects) = update(state, Msg::FilterLocal("978".to_string()));
    assert_eq!(fetched_request_id(&effects), 2);
    assert_eq!(state.view().notice, Some(StatusMessage::FilterFallback));
}

#[test]
fn local_filter_after_rejected_search_shows_no_fallback_notice() {
    init_logging();
    let (state, effects) = submit(state_with_page_size(10), "123", SearchField::Isbn);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::FilterLocal("97".to_string()));
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.notice, None);
    assert_eq!(
        view.results,
        ResultsView::Message(StatusMessage::Invalid(ValidationError::InvalidIsbn))
    );
}

#[test]
fn case_matters_for_isbn_fragment() {
    init_logging();
    let state = searched(vec![book("Check Digit", &["080442957X"])], 1);

    let (state, _) = update(state, Msg::FilterLocal("57x".to_string()));
    assert!(matches!(
        state.view().results,
        ResultsView::Message(StatusMessage::NoIsbnMatch { .. })
    ));
    let (state, _) = update(state, Msg::FilterLocal("57X".to_string()));
    assert!(matches!(state.view().results, ResultsView::Books(_)));
}

#[test]
fn resize_changes_page_size_without_fetching() {
    init_logging();
    let (state, _) = submit(state_with_page_size(10), "dune", SearchField::Title);
    let (mut state, effects) = update(state, Msg::Resize { viewport_height: 4 });

    assert!(effects.is_empty());
    assert_eq!(state.page_size(), 4);
    assert_eq!(state.in_flight(), Some(1));
    assert!(state.consume_dirty());
}

#[test]
fn new_submit_resets_page_and_store() {
    init_logging();
    let state = searched(vec![book("Tehanu", &["0689315953"])], 30);
    let (state, effects) = update(state, Msg::GoToPage(2));
    let id = fetched_request_id(&effects);
    let state = complete(
        state,
        id,
        FetchOutcome::Success(SearchResult {
            records: vec![book("Tales from Earthsea", &[])],
            total_found: 30,
        }),
    );
    assert_eq!(state.current_page(), 2);

    let (state, effects) = submit(state, "0-8044-2957-X", SearchField::Isbn);
    assert_eq!(state.current_page(), 1);
    assert!(state.store().is_empty());
    assert!(matches!(
        &effects[..],
        [Effect::FetchPage { url, .. }] if url.ends_with("offset=0&isbn=080442957X")
    ));
}

#[test]
fn page_zero_is_ignored() {
    init_logging();
    let state = searched(vec![book("Tehanu", &[])], 30);
    let (state, effects) = update(state, Msg::GoToPage(0));

    assert!(effects.is_empty());
    assert_eq!(state.current_page(), 1);
}
