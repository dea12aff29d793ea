//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yahoo_search::{Config, EndpointConfig, HttpConfig, HttpTransport, YahooClient};

/// Install a stderr subscriber once per test binary, honouring RUST_LOG
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yahoo_search=debug"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Endpoint overrides pointing every vertical at `base`
pub fn endpoints_at(base: &str) -> EndpointConfig {
    EndpointConfig {
        search: Some(format!("{base}/search")),
        news: Some(format!("{base}/news/search")),
        videos: Some(format!("{base}/video/search")),
        video_host: Some(base.to_string()),
        images: Some(format!("{base}/images/search")),
        weather: Some(format!("{base}/weather/")),
        autocomplete: Some(format!("{base}/gossip")),
        ..Default::default()
    }
}

/// A client backed by the real HTTP transport, aimed at `base`
pub fn client_at(base: &str) -> YahooClient {
    init_test_tracing();
    let config = Config {
        http: HttpConfig {
            timeout_seconds: 5,
            ..Default::default()
        },
        endpoints: endpoints_at(base),
    };
    YahooClient::from_config(&config).expect("client builds")
}

/// Same as [`client_at`] but with a custom body size limit
pub fn client_with_limit(base: &str, max_response_size: usize) -> YahooClient {
    init_test_tracing();
    let http = HttpConfig {
        max_response_size,
        ..Default::default()
    };
    let transport = HttpTransport::new(&http).expect("transport builds");
    let endpoints = endpoints_at(base).resolve().expect("endpoints resolve");
    YahooClient::with_transport(Arc::new(transport), endpoints)
}
