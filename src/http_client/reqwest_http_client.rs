use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::http_client::{
    error::{BoxError, Error, HttpClientErrorChecker},
    http_client::HttpClient,
    request::{Headers, Request, RequestMethod},
    response::Response,
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Wraps a caller-built client. Redirect handling is whatever that client
    /// was configured with; use [`Default`] to keep 302 responses visible.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("Failed to build reqwest client"),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        debug!("Sending {} {} {:?}", request.method, request.url, request.headers);

        let mut request_builder = self
            .client
            .request(request.method.into(), request.url)
            .query(&request.query)
            .headers(request.headers.into());

        if let Some(timeout) = request.timeout {
            request_builder = request_builder.timeout(timeout);
        }

        let reqwest_response = request_builder.send().await.map_err(Error::from)?;

        let status = reqwest_response.status().as_u16();

        let headers: Headers = reqwest_response.headers().into();

        let body = reqwest_response.bytes().await.map_err(Error::from)?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn into_source(self) -> BoxError {
        Box::new(self)
    }
}

impl From<&HeaderMap> for Headers {
    fn from(headers: &HeaderMap) -> Self {
        let map = headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();
        Headers(map)
    }
}

impl From<Headers> for HeaderMap {
    fn from(h: Headers) -> Self {
        let mut header_map = HeaderMap::new();
        for (k, v) in h.iter() {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                header_map.insert(name, value);
            }
        }
        header_map
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(value: RequestMethod) -> Self {
        match value {
            RequestMethod::Get => reqwest::Method::GET,
        }
    }
}
