//! Action service wire-level tests
//!
//! Verifies the exact query parameters sent upstream and the normalized
//! results, using a local mock of the action API

use httpmock::prelude::*;
use serde_json::json;
use wikipedia_graphql::config::settings::{
    LoggingConfig, ServerConfig, Settings, WikipediaConfig,
};
use wikipedia_graphql::models::options::*;
use wikipedia_graphql::models::Language;
use wikipedia_graphql::services::WikiActions;

/// Settings pointing at the mock server instead of wikipedia.org
fn mock_settings(server: &MockServer) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        wikipedia: WikipediaConfig {
            endpoint_template: server.url("/w/api.php"),
            timeout: 5,
            user_agent: "wikipedia-graphql/test".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "text".to_string(),
        },
    }
}

#[tokio::test]
async fn test_open_search_sends_defaults_when_options_omitted() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/w/api.php")
            .query_param("action", "opensearch")
            .query_param("format", "json")
            .query_param("search", "Albert Einstein")
            .query_param("namespace", "0")
            .query_param("limit", "10")
            .query_param("profile", "engine_autoselect")
            .query_param("suggest", "true")
            .query_param("warningaserror", "false");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                "Albert Einstein",
                ["Albert Einstein"],
                ["German-born physicist"],
                ["https://en.wikipedia.org/wiki/Albert_Einstein"]
            ]));
    });

    let actions = WikiActions::new(mock_settings(&server)).unwrap();
    let results = actions
        .open_search(
            Language::En,
            "Albert Einstein",
            &OpenSearchOptions::default(),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Albert Einstein");
    assert_eq!(results[0].description, "German-born physicist");
    assert_eq!(
        results[0].link,
        "https://en.wikipedia.org/wiki/Albert_Einstein"
    );
}

#[tokio::test]
async fn test_open_search_explicit_values_override_defaults() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/w/api.php")
            .query_param("limit", "15")
            .query_param("profile", "classic")
            // explicitly supplied false overrides the truthy default
            .query_param("suggest", "false");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!(["q", [], [], []]));
    });

    let actions = WikiActions::new(mock_settings(&server)).unwrap();
    let options = OpenSearchOptions {
        limit: Some(15),
        profile: Some(SearchProfile::Classic),
        suggest: Some(false),
        ..Default::default()
    };
    let results = actions
        .open_search(Language::En, "q", &options)
        .await
        .unwrap();

    mock.assert();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_random_sends_defaults_when_options_omitted() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/w/api.php")
            .query_param("action", "query")
            .query_param("format", "json")
            .query_param("list", "random")
            .query_param("rnnamespace", "*")
            .query_param("rnfilterredir", "nonredirects")
            .query_param("rnlimit", "10");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "query": {
                    "random": [
                        {"id": 42, "ns": 0, "title": "Answer"},
                        {"id": 7, "ns": 4, "title": "Wikipedia:About"}
                    ]
                }
            }));
    });

    let actions = WikiActions::new(mock_settings(&server)).unwrap();
    let pages = actions
        .random(Language::En, &RandomOptions::default())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].id, 42);
    assert_eq!(pages[0].namespace, 0);
    assert_eq!(pages[1].title, "Wikipedia:About");
}

#[tokio::test]
async fn test_random_namespace_zero_overrides_wildcard() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/w/api.php")
            .query_param("rnnamespace", "0")
            .query_param("rnfilterredir", "all")
            .query_param("rnlimit", "3");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"query": {"random": []}}));
    });

    let actions = WikiActions::new(mock_settings(&server)).unwrap();
    let options = RandomOptions {
        namespace: Some(0),
        filter_redirect: Some(RedirectFilter::All),
        limit: Some(3),
    };
    let pages = actions.random(Language::En, &options).await.unwrap();

    mock.assert();
    assert!(pages.is_empty());
}

#[tokio::test]
async fn test_categories_docs_example_parameters() {
    // categories("Albert Einstein", {limit: 15, order: descending})
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/w/api.php")
            .query_param("action", "query")
            .query_param("prop", "categories")
            .query_param("titles", "Albert Einstein")
            .query_param("cllimit", "15")
            .query_param("cldir", "descending");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "query": {
                    "pages": {
                        "736": {
                            "pageid": 736,
                            "ns": 0,
                            "title": "Albert Einstein",
                            "categories": [
                                {"ns": 14, "title": "Category:X"},
                                {"ns": 14, "title": "Category:Y"}
                            ]
                        }
                    }
                }
            }));
    });

    let actions = WikiActions::new(mock_settings(&server)).unwrap();
    let options = CategoriesOptions {
        limit: Some(15),
        timestamp: None,
        order: Some(ListOrder::Descending),
    };
    let map = actions
        .categories(Language::En, "Albert Einstein", &options)
        .await
        .unwrap();

    mock.assert();
    let entries = map.get("736").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Category:X");
    assert_eq!(entries[1].title, "Category:Y");
}

#[tokio::test]
async fn test_categories_timestamp_option_requests_clprop() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/w/api.php")
            .query_param("clprop", "timestamp");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "query": {
                    "pages": {
                        "5": {
                            "pageid": 5,
                            "ns": 0,
                            "title": "Page",
                            "categories": [
                                {"ns": 14, "title": "Category:Z", "timestamp": "2021-06-01T10:00:00Z"}
                            ]
                        }
                    }
                }
            }));
    });

    let actions = WikiActions::new(mock_settings(&server)).unwrap();
    let options = CategoriesOptions {
        timestamp: Some(true),
        ..Default::default()
    };
    let map = actions
        .categories(Language::En, "Page", &options)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(
        map.get("5").unwrap()[0].timestamp.as_deref(),
        Some("2021-06-01T10:00:00Z")
    );
}

#[tokio::test]
async fn test_upstream_error_status_propagates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(503).body("upstream unavailable");
    });

    let actions = WikiActions::new(mock_settings(&server)).unwrap();
    let err = actions
        .open_search(Language::En, "q", &OpenSearchOptions::default())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("503"));
    assert!(message.contains("upstream unavailable"));
}

#[tokio::test]
async fn test_malformed_body_fails_loudly() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"not\": \"an opensearch payload\"}");
    });

    let actions = WikiActions::new(mock_settings(&server)).unwrap();
    let result = actions
        .open_search(Language::En, "q", &OpenSearchOptions::default())
        .await;

    assert!(result.is_err());
}
