use std::fmt;

/// Custom error type for ReadyCloud operations
#[derive(Debug)]
pub enum RcError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API envelope carried an `error_message`; holds the server's text
    Api { message: String },
    /// No stored access token
    NotAuthorized(String),
    /// `authorize` was invoked without a client id
    MissingClientId,
    /// Response body was not a JSON object
    MalformedResponse(String),
    /// Requested field order names a field the object does not have
    FieldMismatch { label: String, missing: Vec<String> },
    /// Failed to read, write or parse the credential file
    Credentials(String),
    /// Interactive console prompt failed
    Prompt(String),
}

impl fmt::Display for RcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RcError::Http(e) => write!(f, "HTTP request failed: {}", e),
            RcError::Api { message } => write!(
                f,
                "Error: {} Your access token may be revoked or invalid.",
                message
            ),
            RcError::NotAuthorized(msg) => write!(f, "{}", msg),
            RcError::MissingClientId => {
                write!(f, "You must enter a client id in order to authorize.")
            }
            RcError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            RcError::FieldMismatch { label, missing } => write!(
                f,
                "Headers do not match {} values. Missing fields: {}",
                label,
                missing.join(", ")
            ),
            RcError::Credentials(msg) => write!(f, "{}", msg),
            RcError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
        }
    }
}

impl std::error::Error for RcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RcError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RcError {
    fn from(err: reqwest::Error) -> Self {
        RcError::Http(err)
    }
}

impl From<serde_json::Error> for RcError {
    fn from(err: serde_json::Error) -> Self {
        RcError::MalformedResponse(err.to_string())
    }
}

impl From<std::io::Error> for RcError {
    fn from(err: std::io::Error) -> Self {
        RcError::Credentials(err.to_string())
    }
}

impl From<dialoguer::Error> for RcError {
    fn from(err: dialoguer::Error) -> Self {
        RcError::Prompt(err.to_string())
    }
}

/// Result type alias for ReadyCloud operations
pub type Result<T> = std::result::Result<T, RcError>;
