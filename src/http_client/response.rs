use bytes::Bytes;

use crate::http_client::request::Headers;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}
