use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSelectionError {
    #[error("metric must be one of 'cases', 'recovered' or 'deaths', got '{0}'")]
    UnknownMetric(String),
    #[error("country must not be empty")]
    EmptyCountry,
}

/// Shape faults found while walking a historical document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("historical document has no 'timeline' for {0}")]
    MissingTimeline(String),
    #[error("historical document has no 'cases' mapping for {0}")]
    MissingCases(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("upstream answered {status} for {url}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },
    #[error("could not decode body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name}: {source}")]
    InvalidSelection {
        name: &'static str,
        #[source]
        source: ParseSelectionError,
    },
}

/// Fetch or build failure for one refresh of the chart.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl From<ParseSelectionError> for AppError {
    fn from(err: ParseSelectionError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<RefreshError> for AppError {
    fn from(err: RefreshError) -> Self {
        Self::bad_gateway(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
