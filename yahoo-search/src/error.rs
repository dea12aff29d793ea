//! Error types for Yahoo scraping operations
//!
//! Every failure carries the operation and query that produced it so a
//! caller can tell "the page had nothing" apart from "the parser broke".

use std::fmt;

/// The public operation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Search,
    News,
    Videos,
    Weather,
    Autocomplete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::News => "search_news",
            Operation::Videos => "search_videos",
            Operation::Weather => "weather",
            Operation::Autocomplete => "autocomplete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the HTTP transport
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error {status} from {url}")]
    Status { status: u16, url: String },

    /// The body exceeded the configured size limit
    #[error("response too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: usize, max: usize },
}

/// Errors returned by every public operation
#[derive(Debug, thiserror::Error)]
pub enum YahooError {
    /// The page could not be fetched
    #[error("{operation} ({query:?}): fetch failed: {source}")]
    Fetch {
        operation: Operation,
        query: String,
        #[source]
        source: TransportError,
    },

    /// The page loaded but a required structural anchor is missing
    #[error("{operation} ({query:?}): could not find {anchor}")]
    Extraction {
        operation: Operation,
        query: String,
        anchor: String,
    },

    /// A field could not be coerced to its declared type
    #[error("{operation} ({query:?}): {message}")]
    Parse {
        operation: Operation,
        query: String,
        message: String,
    },

    /// The client could not be built from its configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl YahooError {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            YahooError::Fetch { operation, .. }
            | YahooError::Extraction { operation, .. }
            | YahooError::Parse { operation, .. } => Some(*operation),
            YahooError::Config(_) => None,
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, YahooError::Fetch { .. })
    }

    pub fn is_extraction(&self) -> bool {
        matches!(self, YahooError::Extraction { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, YahooError::Parse { .. })
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, YahooError>;

/// Operation and query pair threaded through extractors for error reporting
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context<'a> {
    pub operation: Operation,
    pub query: &'a str,
}

impl<'a> Context<'a> {
    pub fn new(operation: Operation, query: &'a str) -> Self {
        Self { operation, query }
    }

    pub fn fetch(&self, source: TransportError) -> YahooError {
        YahooError::Fetch {
            operation: self.operation,
            query: self.query.to_string(),
            source,
        }
    }

    pub fn missing(&self, anchor: impl Into<String>) -> YahooError {
        YahooError::Extraction {
            operation: self.operation,
            query: self.query.to_string(),
            anchor: anchor.into(),
        }
    }

    pub fn parse(&self, message: impl Into<String>) -> YahooError {
        YahooError::Parse {
            operation: self.operation,
            query: self.query.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_operation_and_query() {
        let err = Context::new(Operation::Search, "chocolate").missing("'.reg.searchCenterMiddle'");
        let message = err.to_string();
        assert!(message.contains("search"));
        assert!(message.contains("\"chocolate\""));
        assert!(message.contains(".reg.searchCenterMiddle"));
        assert!(err.is_extraction());
        assert_eq!(err.operation(), Some(Operation::Search));
    }

    #[test]
    fn test_status_error_is_fetch() {
        let err = Context::new(Operation::News, "taiwan").fetch(TransportError::Status {
            status: 503,
            url: "https://example.com".to_string(),
        });
        assert!(err.is_fetch());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_config_error_has_no_operation() {
        let err = YahooError::Config("bad url".to_string());
        assert_eq!(err.operation(), None);
        assert!(!err.is_parse());
    }
}
