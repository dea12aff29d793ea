//! Yahoo Search Library
//!
//! Scrapes Yahoo web search, news, videos, weather and autocomplete into
//! typed results. Each call is one request and one parse; nothing is
//! cached or retried.
//!
//! # Usage
//!
//! ```rust,ignore
//! use yahoo_search::YahooClient;
//!
//! let client = YahooClient::new()?;
//! let result = client.search("chocolate").await?;
//! println!("{}", result.pages[0].title);
//! // Chocolate - Wikipedia
//!
//! let weather = client.weather().await?;
//! println!("{}°C in {}", weather.celsius, weather.location);
//! ```
//!
//! # Errors
//!
//! Failures are split so that "nothing found" never looks like "the
//! parser broke":
//! - [`YahooError::Fetch`]: the request failed or returned a non-2xx status
//! - [`YahooError::Extraction`]: the page loaded but its results container is gone
//! - [`YahooError::Parse`]: a value could not be read (temperatures, JSON)
//!
//! # Configuration
//! `Config::load()` reads `YAHOO_SEARCH_CONFIG_PATH` or
//! `~/.config/yahoo-search/config.toml`; see [`config`].

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod transport;
pub mod types;

pub use client::YahooClient;
pub use config::{Config, EndpointConfig, Endpoints, HttpConfig};
pub use error::{Operation, Result, TransportError, YahooError};
pub use transport::{HttpTransport, Transport};
pub use types::{
    AlsoTryItem, CardResult, CardResultSource, HighLowTemperature, News, NewsSearchResult, PageResult,
    Precipitation, RelatedSearch, SearchResult, Tabs, Video, VideoSearchResult, WeatherForecast,
    WeatherForecastInner, WeatherInformation, Weekday,
};

// Parsers for saved pages
pub use extract::{
    autocomplete::parse_autocomplete, news::parse_news, videos::parse_videos, weather::parse_weather,
    web::parse_search,
};
