//! Result types returned by every Yahoo operation
//!
//! Optional fields are either a non-empty value or `None`; sequences are
//! always present, possibly empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A suggested alternate query shown next to the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlsoTryItem {
    pub link: String,
    pub text: String,
}

/// A single organic web result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// The title of the result
    pub title: String,
    /// The absolute URL of the result (Yahoo redirect removed)
    pub link: String,
    /// The snippet, when Yahoo shows one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Attribution for a featured card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResultSource {
    pub link: String,
    pub text: String,
}

/// The featured/knowledge-panel card shown above organic results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<CardResultSource>,
}

impl CardResult {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.heading.is_none() && self.text.is_none() && self.source.is_none()
    }
}

/// A related query suggestion from the results footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSearch {
    pub link: String,
    pub text: String,
}

/// Web search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub also_try: Vec<AlsoTryItem>,
    pub pages: Vec<PageResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardResult>,
    pub related_searches: Vec<RelatedSearch>,
}

/// A news search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    /// The headline
    pub title: String,
    /// The URL of the article
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Thumbnail image URL (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// The publisher
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Relative age as Yahoo prints it, e.g. "2 hours ago"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// A snippet of the article
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// News search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSearchResult {
    pub news: Vec<News>,
}

/// A video search result
///
/// `video_preview` is a still image, not a playable stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub title: String,
    pub link: String,
}

/// Video search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSearchResult {
    pub videos: Vec<Video>,
}

/// Daily high and low, in one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighLowTemperature {
    pub highest: i32,
    pub lowest: i32,
}

/// Condition description with its icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherForecastInner {
    pub text: String,
    pub icon: String,
}

/// Chance of precipitation with its icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precipitation {
    pub icon: String,
    /// Formatted as shown, e.g. "0%"
    pub percentage: String,
}

/// One day's forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub fahrenheit: HighLowTemperature,
    pub celsius: HighLowTemperature,
    pub weather: WeatherForecastInner,
    pub precipitation: Precipitation,
}

/// Day of the week used as the forecast key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a day name that is not one of the seven weekdays
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday: {0:?}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Accepts full names and three-letter abbreviations, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.name();
                trimmed.eq_ignore_ascii_case(name) || trimmed.eq_ignore_ascii_case(&name[..3])
            })
            .ok_or_else(|| UnknownWeekday(trimmed.to_string()))
    }
}

/// Current conditions and forecast for the caller's location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherInformation {
    pub location: String,
    pub country: String,
    pub time: String,
    pub celsius: i32,
    pub fahrenheit: i32,
    pub weather: String,
    pub weather_icon: String,
    /// Days missing from the page are absent, never zero-filled
    pub forecast: BTreeMap<Weekday, WeatherForecast>,
}

/// Links to the other search verticals for a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tabs {
    pub images: String,
    pub news: String,
    pub videos: String,
}
