use std::fmt;

/// Unified error type for the product lookup function.
///
/// Each variant maps to an HTTP status code on the response envelope.
#[derive(Debug)]
pub enum FindProductError {
    /// The request was malformed, e.g. the `id` path parameter was absent.
    BadRequest(String),
    /// The point lookup against the product table failed.
    Lookup(String),
}

impl fmt::Display for FindProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindProductError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            FindProductError::Lookup(msg) => write!(f, "Lookup failed: {msg}"),
        }
    }
}

impl std::error::Error for FindProductError {}
