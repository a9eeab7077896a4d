use bytes::Bytes;

use crate::http_client::request::Headers;

/// Decoded payload of a documented status.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<S, V> {
    Success(S),
    ValidationError(V),
}

impl<S, V> Parsed<S, V> {
    pub fn success(self) -> Option<S> {
        match self {
            Parsed::Success(success) => Some(success),
            Parsed::ValidationError(_) => None,
        }
    }

    pub fn validation_error(self) -> Option<V> {
        match self {
            Parsed::Success(_) => None,
            Parsed::ValidationError(invalid) => Some(invalid),
        }
    }
}

/// Everything one call returned. `parsed` is `None` for redirects and for
/// statuses the client was told to ignore.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub content: Bytes,
    pub headers: Headers,
    pub parsed: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn into_parsed(self) -> Option<T> {
        self.parsed
    }
}
