use std::{fmt, sync::Arc, time::Duration};

use crate::{
    client::credential::Credential,
    http_client::{
        http_client::HttpClient,
        request::{Headers, Request, RequestMethod},
        reqwest_http_client::ReqwestHttpClient,
    },
    query::query_params::QueryParams,
};

pub const DEFAULT_BASE_URL: &str = "https://api.tikhub.io";

/// What a dispatch does with a status its endpoint does not document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnexpectedStatusPolicy {
    /// Fail with [`Error::UnexpectedStatus`](crate::error::Error::UnexpectedStatus).
    Raise,
    /// Return an envelope with no parsed payload.
    Ignore,
}

/// Immutable connection settings shared by every call.
///
/// Cloning is cheap; the transport sits behind an `Arc`.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    headers: Headers,
    cookies: Vec<(String, String)>,
    credential: Option<Credential>,
    timeout: Option<Duration>,
    unexpected_status: UnexpectedStatusPolicy,
    http_client: Arc<dyn HttpClient>,
}

impl Client {
    pub fn builder(
        base_url: impl Into<String>,
        unexpected_status: UnexpectedStatusPolicy,
    ) -> ClientBuilder {
        ClientBuilder::new(base_url, unexpected_status)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn unexpected_status(&self) -> UnexpectedStatusPolicy {
        self.unexpected_status
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub(crate) fn http_client(&self) -> &dyn HttpClient {
        self.http_client.as_ref()
    }

    /// Outbound GET for `path`, with unset and null parameters left out.
    pub fn build_request(&self, path: &str, query: &QueryParams) -> Request {
        let mut headers = self.headers.clone();

        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            headers.insert("Cookie".to_string(), cookie);
        }

        if let Some(credential) = &self.credential {
            headers.insert(
                credential.header_name().to_string(),
                credential.header_value(),
            );
        }

        Request {
            method: RequestMethod::Get,
            url: join_url(&self.base_url, path),
            query: query.to_pairs(),
            headers,
            timeout: self.timeout,
        }
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base_url, path)
    } else {
        format!("{}/{}", base_url, path)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .field("credential", &self.credential)
            .field("timeout", &self.timeout)
            .field("unexpected_status", &self.unexpected_status)
            .finish_non_exhaustive()
    }
}

pub struct ClientBuilder {
    base_url: String,
    headers: Headers,
    cookies: Vec<(String, String)>,
    credential: Option<Credential>,
    timeout: Option<Duration>,
    unexpected_status: UnexpectedStatusPolicy,
    http_client: Option<Arc<dyn HttpClient>>,
}

impl ClientBuilder {
    pub fn new(base_url: impl Into<String>, unexpected_status: UnexpectedStatusPolicy) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: Headers::default(),
            cookies: Vec::new(),
            credential: None,
            timeout: None,
            unexpected_status,
            http_client: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    pub fn token(self, token: impl Into<String>) -> Self {
        self.credential(Credential::bearer(token))
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> Client {
        let http_client = self
            .http_client
            .unwrap_or_else(|| Arc::new(ReqwestHttpClient::default()));

        Client {
            base_url: self.base_url,
            headers: self.headers,
            cookies: self.cookies,
            credential: self.credential,
            timeout: self.timeout,
            unexpected_status: self.unexpected_status,
            http_client,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use http::{HeaderMap, HeaderValue};

    use crate::{
        client::client::{Client, UnexpectedStatusPolicy},
        http_client::{http_client::MockHttpClient, request::RequestMethod},
        query::{param::Param, query_params::QueryParams},
    };

    fn builder() -> crate::client::client::ClientBuilder {
        Client::builder("https://api.tikhub.io/", UnexpectedStatusPolicy::Raise)
            .http_client(Arc::new(MockHttpClient::new()))
    }

    #[test]
    fn builds_a_get_against_the_base_url() {
        let client = builder().build();

        let request = client.build_request(
            "/api/v1/example",
            &QueryParams::new()
                .value("x", 1)
                .with("cursor", Param::<i64>::Unset),
        );

        assert_eq!(request.method, RequestMethod::Get);
        assert_eq!(request.url, "https://api.tikhub.io/api/v1/example");
        assert_eq!(request.query, vec![("x".to_string(), "1".to_string())]);
        assert!(request.headers.is_empty());
        assert_eq!(request.timeout, None);
    }

    #[test]
    fn carries_headers_cookies_credential_and_timeout() {
        let client = builder()
            .header("Accept", "application/json")
            .cookie("sessionid", "abc")
            .cookie("ttwid", "def")
            .token("secret")
            .timeout(Duration::from_secs(10))
            .build();

        let request = client.build_request("/api/v1/example", &QueryParams::new());

        assert!(client.is_authenticated());
        assert_eq!(request.headers.get("Accept"), Some(&"application/json".to_string()));
        assert_eq!(
            request.headers.get("Cookie"),
            Some(&"sessionid=abc; ttwid=def".to_string())
        );
        assert_eq!(
            request.headers.get("Authorization"),
            Some(&"Bearer secret".to_string())
        );
        assert_eq!(request.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn credential_and_cookies_replace_defaults_in_any_casing() {
        let client = builder()
            .header("authorization", "Basic other")
            .header("COOKIE", "stale=1")
            .cookie("sessionid", "abc")
            .token("secret")
            .build();

        let headers: HeaderMap = client
            .build_request("/api/v1/example", &QueryParams::new())
            .headers
            .into();

        let authorization: Vec<_> = headers.get_all("authorization").iter().collect();
        assert_eq!(authorization, vec![&HeaderValue::from_static("Bearer secret")]);

        let cookie: Vec<_> = headers.get_all("cookie").iter().collect();
        assert_eq!(cookie, vec![&HeaderValue::from_static("sessionid=abc")]);
    }

    #[test]
    fn adds_the_missing_leading_slash() {
        let client = builder().build();

        let request = client.build_request("api/v1/example", &QueryParams::new());

        assert_eq!(request.url, "https://api.tikhub.io/api/v1/example");
    }

    #[test]
    fn debug_output_hides_the_token() {
        let client = builder().token("secret").build();

        assert!(!format!("{:?}", client).contains("secret"));
    }
}
