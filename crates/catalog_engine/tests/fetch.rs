use std::time::Duration;

use catalog_engine::{search, FailureKind, FetchSettings, Fetcher, ReqwestFetcher, SearchDoc};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(settings: FetchSettings) -> ReqwestFetcher {
    ReqwestFetcher::new(settings).expect("client builds")
}

#[tokio::test]
async fn search_decodes_docs_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("title", "the left hand of darkness"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numFound": 12,
            "start": 0,
            "docs": [
                {
                    "title": "The Left Hand of Darkness",
                    "author_name": ["Ursula K. Le Guin"],
                    "first_publish_year": 1969,
                    "cover_i": 12345,
                    "isbn": ["0441478123", "9780441478125"],
                    "key": "/works/OL59800W"
                },
                { "title": "Untitled Draft" }
            ]
        })))
        .mount(&server)
        .await;

    let url = format!(
        "{}/search.json?limit=5&offset=0&title=the+left+hand+of+darkness",
        server.uri()
    );
    let page = search(&fetcher(FetchSettings::default()), &url)
        .await
        .expect("search ok");

    assert_eq!(page.num_found, 12);
    assert_eq!(
        page.docs,
        vec![
            SearchDoc {
                title: "The Left Hand of Darkness".to_string(),
                author_name: vec!["Ursula K. Le Guin".to_string()],
                first_publish_year: Some(1969),
                cover_i: Some(12345),
                isbn: vec!["0441478123".to_string(), "9780441478125".to_string()],
            },
            SearchDoc {
                title: "Untitled Draft".to_string(),
                ..SearchDoc::default()
            },
        ]
    );
}

#[tokio::test]
async fn search_reports_http_status_with_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = format!("{}/search.json?title=dune", server.uri());
    let err = search(&fetcher(FetchSettings::default()), &url)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::HttpStatus {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"docs\": [", "application/json"))
        .mount(&server)
        .await;

    let url = format!("{}/search.json?title=dune", server.uri());
    let err = search(&fetcher(FetchSettings::default()), &url)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn html_error_page_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/search.json?title=dune", server.uri());
    let err = fetcher(FetchSettings::default())
        .fetch(&url)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "docs": [], "numFound": 0 })),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let url = format!("{}/search.json?title=dune", server.uri());
    let err = search(&fetcher(settings), &url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{\"docs\":[],\"numFound\":0}", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let url = format!("{}/search.json", server.uri());
    let err = fetcher(settings).fetch(&url).await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[tokio::test]
async fn invalid_url_is_rejected_before_sending() {
    let err = fetcher(FetchSettings::default())
        .fetch("not a url")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
