use std::{
    collections::HashMap,
    fmt::{self, Display},
    ops::{Deref, DerefMut},
    time::Duration,
};

/// Header names are stored lowercased, so a later `insert` of the same
/// header in any casing replaces the earlier value.
#[derive(Clone, Default, PartialEq)]
pub struct Headers(pub HashMap<String, String>);

impl Headers {
    pub fn get(&self, key: &str) -> Option<&String> {
        HashMap::get(self, key.to_ascii_lowercase().as_str())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        HashMap::insert(self, name.into().to_ascii_lowercase(), value.into())
    }
}

impl Deref for Headers {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Headers {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for Headers {
    fn from(arr: [(String, String); N]) -> Self {
        let mut headers = Headers::default();
        for (name, value) in arr {
            headers.insert(name, value);
        }
        headers
    }
}

// Header values may carry the bearer token, only names are printed.
impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.0.keys().collect();
        names.sort();
        f.debug_tuple("Headers").field(&names).finish()
    }
}

/// A single outbound call handed to an [`HttpClient`](super::http_client::HttpClient).
#[derive(Debug, Clone)]
pub struct Request {
    pub method: RequestMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Headers,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestMethod {
    Get,
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestMethod::Get => "GET",
        };
        write!(f, "{}", s)
    }
}
