//! Live tests against Yahoo
//!
//! These hit the real endpoints and depend on Yahoo's current markup.
//! They require network access.
//!
//! # Running tests
//!
//! ```bash
//! cargo test -p yahoo-search --test live -- --ignored
//! ```

mod common;

use yahoo_search::{Weekday, YahooClient};

fn client() -> YahooClient {
    common::init_test_tracing();
    YahooClient::new().expect("default client builds")
}

#[tokio::test]
#[ignore = "live test - requires network access to Yahoo"]
async fn live_search_chocolate() {
    let result = client().search("chocolate").await.unwrap();
    assert!(
        result.pages.iter().any(|p| p.title.contains("Chocolate")),
        "no Chocolate title in {:?}",
        result.pages
    );
    for page in &result.pages {
        assert!(!page.title.is_empty());
        assert_ne!(page.text.as_deref(), Some(""));
    }
}

#[tokio::test]
#[ignore = "live test - requires network access to Yahoo"]
async fn live_autocomplete_hello() {
    let suggestions = client().autocomplete("hello").await.unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions
        .iter()
        .any(|s| s.to_lowercase().contains("hello")));
}

#[tokio::test]
#[ignore = "live test - requires network access to Yahoo"]
async fn live_search_news() {
    let result = client().search_news("taiwan").await.unwrap();
    for item in &result.news {
        assert!(!item.title.is_empty());
    }
}

#[tokio::test]
#[ignore = "live test - requires network access to Yahoo"]
async fn live_search_videos() {
    let result = client().search_videos("jvke - this is what autumn feels like").await.unwrap();
    assert!(!result.videos.is_empty());
}

#[tokio::test]
#[ignore = "live test - requires network access to Yahoo"]
async fn live_weather() {
    let weather = client().weather().await.unwrap();
    assert!(weather.forecast.len() <= Weekday::ALL.len());
    for forecast in weather.forecast.values() {
        assert!(forecast.celsius.highest >= forecast.celsius.lowest);
    }
}
