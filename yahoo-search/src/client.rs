//! The Yahoo client
//!
//! Every operation is one GET followed by in-process parsing. Nothing is
//! cached, retried or shared between calls beyond the transport's
//! connection pool.

use std::sync::Arc;
use url::Url;

use crate::config::{Config, Endpoints};
use crate::error::{Context, Operation, Result, YahooError};
use crate::extract::{
    autocomplete::parse_autocomplete, news::parse_news, videos::parse_videos, weather::parse_weather,
    web::parse_search,
};
use crate::transport::{HttpTransport, Transport};
use crate::types::{NewsSearchResult, SearchResult, Tabs, VideoSearchResult, WeatherInformation};

/// Client for Yahoo search, news, videos, weather and autocomplete
#[derive(Clone)]
pub struct YahooClient {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl YahooClient {
    /// Create a client with default settings (Singapore region)
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoints = config.endpoints.resolve()?;
        let transport = HttpTransport::new(&config.http)
            .map_err(|e| YahooError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::info!(
            region = %config.endpoints.region,
            timeout_seconds = config.http.timeout_seconds,
            "Yahoo client ready"
        );

        Ok(Self::with_transport(Arc::new(transport), endpoints))
    }

    /// Create a client over a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// The resolved URLs this client sends requests to
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Search the web
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let ctx = Context::new(Operation::Search, query);
        let url = with_params(&self.endpoints.search, &[("q", query)]);

        let body = self.fetch(&ctx, &url).await?;
        let result = parse_search(&body, query)?;

        tracing::info!(
            query,
            pages = result.pages.len(),
            card = result.card.is_some(),
            related = result.related_searches.len(),
            "search complete"
        );
        Ok(result)
    }

    /// Search the news vertical
    pub async fn search_news(&self, query: &str) -> Result<NewsSearchResult> {
        let ctx = Context::new(Operation::News, query);
        let url = with_params(&self.endpoints.news, &[("q", query)]);

        let body = self.fetch(&ctx, &url).await?;
        let result = parse_news(&body, query)?;

        tracing::info!(query, articles = result.news.len(), "news search complete");
        Ok(result)
    }

    /// Search the video vertical
    pub async fn search_videos(&self, query: &str) -> Result<VideoSearchResult> {
        let ctx = Context::new(Operation::Videos, query);
        let url = with_params(&self.endpoints.videos, &[("q", query)]);

        let body = self.fetch(&ctx, &url).await?;
        let result = parse_videos(&body, query, &self.endpoints.video_host)?;

        tracing::info!(query, videos = result.videos.len(), "video search complete");
        Ok(result)
    }

    /// Current weather and forecast for wherever Yahoo places the caller
    pub async fn weather(&self) -> Result<WeatherInformation> {
        let ctx = Context::new(Operation::Weather, "");

        let body = self.fetch(&ctx, &self.endpoints.weather).await?;
        let result = parse_weather(&body)?;

        tracing::info!(
            location = %result.location,
            forecast_days = result.forecast.len(),
            "weather complete"
        );
        Ok(result)
    }

    /// Query suggestions in Yahoo's ranking order
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<String>> {
        let ctx = Context::new(Operation::Autocomplete, query);
        let url = with_params(
            &self.endpoints.autocomplete,
            &[("output", "fxjson"), ("query", query)],
        );

        let body = self.fetch(&ctx, &url).await?;
        let suggestions = parse_autocomplete(&body, query)?;

        tracing::info!(query, suggestions = suggestions.len(), "autocomplete complete");
        Ok(suggestions)
    }

    /// Links to the image, news and video verticals for `query`
    pub fn tabs(&self, query: &str) -> Tabs {
        Tabs {
            images: with_params(&self.endpoints.images, &[("q", query)]).into(),
            news: with_params(&self.endpoints.news, &[("q", query)]).into(),
            videos: with_params(&self.endpoints.videos, &[("q", query)]).into(),
        }
    }

    async fn fetch(&self, ctx: &Context<'_>, url: &Url) -> Result<String> {
        tracing::info!(
            operation = %ctx.operation,
            query = ctx.query,
            transport = self.transport.name(),
            "fetching"
        );

        self.transport.get(url).await.map_err(|e| {
            tracing::warn!(operation = %ctx.operation, error = %e, "fetch failed");
            ctx.fetch(e)
        })
    }
}

/// Append form-encoded query parameters (spaces become `+`)
fn with_params(base: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointConfig;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport that records requested URLs and replays one canned answer
    struct CannedTransport {
        body: std::result::Result<String, u16>,
        requested: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        fn ok(body: &str) -> Arc<Self> {
            Arc::new(Self {
                body: Ok(body.to_string()),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn status(status: u16) -> Arc<Self> {
            Arc::new(Self {
                body: Err(status),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        fn name(&self) -> &str {
            "canned"
        }

        async fn get(&self, url: &Url) -> std::result::Result<String, TransportError> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.body {
                Ok(body) => Ok(body.clone()),
                Err(status) => Err(TransportError::Status {
                    status: *status,
                    url: url.to_string(),
                }),
            }
        }
    }

    fn client(transport: Arc<CannedTransport>) -> YahooClient {
        let endpoints = EndpointConfig::default().resolve().unwrap();
        YahooClient::with_transport(transport, endpoints)
    }

    #[test]
    fn test_with_params_encodes_spaces_as_plus() {
        let base = Url::parse("https://sg.search.yahoo.com/search").unwrap();
        let url = with_params(&base, &[("q", "dark chocolate & nuts")]);
        assert_eq!(
            url.as_str(),
            "https://sg.search.yahoo.com/search?q=dark+chocolate+%26+nuts"
        );
    }

    #[test]
    fn test_from_config_resolves_region_endpoints() {
        let config = Config::from_toml(
            r#"
            [endpoints]
            region = "uk"
            "#,
        )
        .unwrap();
        let client = YahooClient::from_config(&config).unwrap();
        assert_eq!(client.endpoints().search.as_str(), "https://uk.search.yahoo.com/search");
        assert_eq!(client.endpoints().video_host.as_str(), "https://uk.video.search.yahoo.com/");
    }

    #[test]
    fn test_from_config_rejects_bad_region() {
        let mut config = Config::default();
        config.endpoints.region = "not a region".to_string();
        assert!(matches!(YahooClient::from_config(&config), Err(YahooError::Config(_))));
    }

    #[test]
    fn test_tabs() {
        let tabs = client(CannedTransport::ok("")).tabs("hello world");
        assert_eq!(tabs.images, "https://sg.image.search.yahoo.com/search?q=hello+world");
        assert_eq!(tabs.news, "https://sg.news.search.yahoo.com/search?q=hello+world");
        assert_eq!(tabs.videos, "https://sg.video.search.yahoo.com/search?q=hello+world");
    }

    #[tokio::test]
    async fn test_search_requests_query_url() {
        let transport = CannedTransport::ok(r#"<div class="reg searchCenterMiddle"></div>"#);
        let result = client(transport.clone()).search("chocolate").await.unwrap();
        assert!(result.pages.is_empty());
        assert_eq!(
            transport.requested(),
            vec!["https://sg.search.yahoo.com/search?q=chocolate"]
        );
    }

    #[tokio::test]
    async fn test_autocomplete_requests_gossip_url() {
        let transport = CannedTransport::ok(r#"["hel",["hello","help"]]"#);
        let suggestions = client(transport.clone()).autocomplete("hel").await.unwrap();
        assert_eq!(suggestions, vec!["hello", "help"]);
        assert_eq!(
            transport.requested(),
            vec!["https://ff.search.yahoo.com/gossip?output=fxjson&query=hel"]
        );
    }

    #[tokio::test]
    async fn test_weather_has_no_query_parameter() {
        let transport = CannedTransport::ok("<html></html>");
        let err = client(transport.clone()).weather().await.unwrap_err();
        assert!(err.is_extraction());
        assert_eq!(transport.requested(), vec!["https://sg.news.yahoo.com/weather/"]);
    }

    #[tokio::test]
    async fn test_unavailable_is_fetch_error_not_empty_result() {
        let err = client(CannedTransport::status(503)).search("chocolate").await.unwrap_err();
        assert!(err.is_fetch());
        assert_eq!(err.operation(), Some(Operation::Search));
        assert!(err.to_string().contains("chocolate"));
    }

    #[tokio::test]
    async fn test_each_call_fetches_once() {
        let transport = CannedTransport::ok(r#"<div id="main"><div id="web"></div></div>"#);
        let client = client(transport.clone());
        client.search_news("a").await.unwrap();
        client.search_news("b").await.unwrap();
        assert_eq!(transport.requested().len(), 2);
    }
}
