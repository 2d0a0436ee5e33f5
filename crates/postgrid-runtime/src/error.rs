use std::fmt;

/// Result type for postgrid-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Catalog payload could not be parsed
    Payload(postgrid_types::Error),

    /// HTTP transport failed (connect, timeout, body read)
    Http(reqwest::Error),

    /// Catalog resource answered with a non-success status
    Status { url: String, status: u16 },

    /// Source deliberately reports no catalog
    Unavailable(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Local state could not be encoded or decoded as JSON
    Json(serde_json::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Payload(err) => write!(f, "{}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { url, status } => {
                write!(f, "Failed to fetch posts: status={} url={}", status, url)
            }
            Error::Unavailable(msg) => write!(f, "Post source unavailable: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Payload(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Status { .. } | Error::Unavailable(_) | Error::Config(_) => None,
        }
    }
}

impl From<postgrid_types::Error> for Error {
    fn from(err: postgrid_types::Error) -> Self {
        Error::Payload(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
