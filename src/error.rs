use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Failure of a single prediction call.
///
/// Every outcome of `submit` other than a well-formed response lands in
/// exactly one of these variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The endpoint could not be reached or the exchange was cut short
    /// (DNS, connection refused, timeout, interrupted body).
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The endpoint answered with a non-2xx status.
    #[error("Server returned HTTP {0}")]
    ServerError(u16),

    /// The body was not JSON or had no string `prediction` field.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Stable snake_case tag used in gateway error bodies and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure(_) => "network_failure",
            Self::ServerError(_) => "server_error",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
