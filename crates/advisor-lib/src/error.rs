//! Error types for the advisor library

/// Convenience alias for advisor results
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced while querying Prometheus or analyzing results
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The endpoint URL did not parse
    #[error("invalid Prometheus URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The rate window string did not validate
    #[error("invalid rate window {window:?}: expected a positive integer followed by s, m, h or d")]
    InvalidWindow { window: String },

    /// The HTTP client itself could not be constructed
    #[error("failed to initialize HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// The request never reached the server, or the connection dropped
    #[error("failed to reach Prometheus at {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status
    #[error("Prometheus returned HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the Prometheus query-result format
    #[error("unexpected Prometheus response: {0}")]
    BadResponse(String),

    /// The server accepted the request but rejected the query
    #[error("Prometheus query failed ({error_type}): {message}")]
    QueryFailed { error_type: String, message: String },

    /// An explicitly requested workload had no metric data
    #[error("no metric data found for workload {workload}")]
    NoData { workload: String },
}
