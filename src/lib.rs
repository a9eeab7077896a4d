//! Typed GET dispatcher for the TikHub API.
//!
//! Every endpoint reduces to one operation: drop unset and null query
//! parameters, send a single GET through an injected [`HttpClient`], then read
//! 200 as the success model and 422 as the validation-error model. Any other
//! status either fails with [`Error::UnexpectedStatus`] or yields no payload,
//! depending on the client's [`UnexpectedStatusPolicy`].
//!
//! ```rust,no_run
//! use tikhub_client::{Client, FetchOneVideoV2, Parsed, UnexpectedStatusPolicy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tikhub_client::Error> {
//!     let client = Client::builder("https://api.tikhub.io", UnexpectedStatusPolicy::Raise)
//!         .token("your_token_here")
//!         .build();
//!
//!     match client.send(&FetchOneVideoV2::new("7345492945006595379")).await? {
//!         Some(Parsed::Success(video)) => println!("{}", video.data),
//!         Some(Parsed::ValidationError(invalid)) => println!("{:?}", invalid.detail),
//!         None => {}
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod dispatch;
pub mod error;
pub mod http_client;
pub mod models;
pub mod query;

pub use api::{
    douyin::FetchOneVideoV2,
    generic::{BinaryGet, GenericGet, RedirectGet},
    tikhub::DownloadLatestRelease,
};
pub use client::{
    client::{Client, ClientBuilder, DEFAULT_BASE_URL, UnexpectedStatusPolicy},
    credential::Credential,
};
pub use dispatch::{
    api_response::{ApiResponse, Parsed},
    endpoint::Endpoint,
    response_spec::ResponseSpec,
};
pub use error::Error;
pub use http_client::{http_client::HttpClient, reqwest_http_client::ReqwestHttpClient};
pub use models::{
    http_validation_error::{HttpValidationError, Location, ValidationError},
    response_model::ResponseModel,
};
pub use query::{param::Param, query_params::QueryParams, query_value::QueryValue};
