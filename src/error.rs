use bytes::Bytes;

use crate::http_client;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A status outside the endpoint's contract while the client raises on them.
    #[error(
        "Unexpected status code: {status}\n\nResponse content:\n{}",
        String::from_utf8_lossy(.content)
    )]
    UnexpectedStatus { status: u16, content: Bytes },

    #[error(transparent)]
    Transport(#[from] http_client::error::Error),

    #[error("Failed to decode {status} response: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
