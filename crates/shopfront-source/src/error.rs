use std::fmt;

/// Result type for shopfront-source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the data-source boundary.
///
/// Callers see only the kind plus a human-readable message; no finer
/// structure is exposed or inspected downstream.
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connection, DNS, timeout)
    Network(String),

    /// The remote answered with a non-success status
    Server { status: u16 },

    /// Valid request, but no matching resource
    NotFound(String),

    /// Response body did not match the expected shape
    Decode(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Server { status } => write!(f, "Server error: HTTP {}", status),
            Error::NotFound(what) => write!(f, "{} not found", what),
            Error::Decode(err) => write!(f, "Malformed response: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Network(_) | Error::Server { .. } | Error::NotFound(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Server {
                status: status.as_u16(),
            },
            None => Error::Network(err.to_string()),
        }
    }
}

impl Error {
    /// True for the "valid request, nothing matched" case, which controllers
    /// present without a retry affordance.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
