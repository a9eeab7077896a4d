pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Transport failures. Each variant keeps the underlying error as its source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[source] BoxError),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] BoxError),

    #[error("Timeout: {0}")]
    Timeout(#[source] BoxError),
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn into_source(self) -> BoxError;
}

impl<T: HttpClientErrorChecker> From<T> for Error {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.into_source())
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.into_source())
        } else {
            Error::InvalidRequest(err.into_source())
        }
    }
}
