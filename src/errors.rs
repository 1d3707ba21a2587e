use thiserror::Error;

/// Everything that can go wrong outside the proxy handlers.
#[derive(Error, Debug)]
pub enum Error {
    /// The decade fixture is not valid JSON of the expected shape.
    #[error("Failed to parse decade data, error: {0}")]
    DataError(#[from] serde_json::Error),

    /// No decade with this id.
    #[error("Unknown decade: {0}")]
    UnknownDecade(String),

    /// Hit index out of range for the decade.
    #[error("Decade {decade} has no hit #{index}")]
    UnknownHit {
        /// Decade id
        decade: String,
        /// Requested 0-based index
        index: usize,
    },

    /// User input rejected before anything was generated.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Bad or missing settings.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Reading or writing a file, or binding a socket, failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Transport failure talking to a remote generator.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The remote generator answered with an error status.
    #[error("Remote generator responded with {status}: {message}")]
    RemoteError {
        /// HTTP status code
        status: u16,
        /// The server's `error` text
        message: String,
    },

    /// The remote generator answered 2xx with a body we can't use.
    #[error("Remote generator unexpected response: {0}")]
    RemoteUnexpectedResponse(String),
}

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

impl From<std::net::AddrParseError> for Error {
    fn from(err: std::net::AddrParseError) -> Self {
        Error::ConfigurationError(format!("invalid listen address: {err}"))
    }
}
