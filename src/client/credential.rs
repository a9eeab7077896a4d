use std::fmt;

pub const DEFAULT_AUTH_HEADER_NAME: &str = "Authorization";
pub const DEFAULT_AUTH_PREFIX: &str = "Bearer";

/// API token plus how it is presented on the wire.
#[derive(Clone, PartialEq)]
pub struct Credential {
    token: String,
    prefix: String,
    header_name: String,
}

impl Credential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            prefix: DEFAULT_AUTH_PREFIX.to_string(),
            header_name: DEFAULT_AUTH_HEADER_NAME.to_string(),
        }
    }

    /// An empty prefix sends the bare token.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = header_name.into();
        self
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn header_value(&self) -> String {
        if self.prefix.is_empty() {
            self.token.clone()
        } else {
            format!("{} {}", self.prefix, self.token)
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("prefix", &self.prefix)
            .field("header_name", &self.header_name)
            .finish()
    }
}
