use bytes::Bytes;
use serde::de::DeserializeOwned;

pub type Decoder<T> = fn(&Bytes) -> Result<T, serde_json::Error>;

/// How one endpoint reads its responses: a decoder for 200, a decoder for 422,
/// and whether a bodiless 302 is part of its contract.
pub struct ResponseSpec<S, V> {
    pub success: Decoder<S>,
    pub validation_error: Decoder<V>,
    pub redirect: bool,
}

impl<S, V> ResponseSpec<S, V> {
    pub fn new(success: Decoder<S>, validation_error: Decoder<V>) -> Self {
        Self {
            success,
            validation_error,
            redirect: false,
        }
    }

    pub fn with_redirect(mut self) -> Self {
        self.redirect = true;
        self
    }
}

impl<S: DeserializeOwned, V: DeserializeOwned> ResponseSpec<S, V> {
    pub fn json() -> Self {
        Self::new(decode_json::<S>, decode_json::<V>)
    }
}

impl<S, V> Clone for ResponseSpec<S, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, V> Copy for ResponseSpec<S, V> {}

pub fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, serde_json::Error> {
    serde_json::from_slice(body)
}

pub fn passthrough(body: &Bytes) -> Result<Bytes, serde_json::Error> {
    Ok(body.clone())
}
