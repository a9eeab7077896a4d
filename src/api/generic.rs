use bytes::Bytes;

use crate::{
    dispatch::{
        endpoint::Endpoint,
        response_spec::{ResponseSpec, decode_json, passthrough},
    },
    models::{http_validation_error::HttpValidationError, response_model::ResponseModel},
    query::query_params::QueryParams,
};

/// Any JSON endpoint, addressed by path.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericGet {
    pub path: String,
    pub params: QueryParams,
}

impl GenericGet {
    pub fn new(path: impl Into<String>, params: QueryParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }
}

impl Endpoint for GenericGet {
    type Success = ResponseModel;
    type Invalid = HttpValidationError;

    fn path(&self) -> String {
        self.path.clone()
    }

    fn query(&self) -> QueryParams {
        self.params.clone()
    }

    fn response_spec(&self) -> ResponseSpec<ResponseModel, HttpValidationError> {
        ResponseSpec::json()
    }
}

/// Endpoint whose 200 body is not JSON (images, QR codes).
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryGet {
    pub path: String,
    pub params: QueryParams,
}

impl BinaryGet {
    pub fn new(path: impl Into<String>, params: QueryParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }
}

impl Endpoint for BinaryGet {
    type Success = Bytes;
    type Invalid = HttpValidationError;

    fn path(&self) -> String {
        self.path.clone()
    }

    fn query(&self) -> QueryParams {
        self.params.clone()
    }

    fn response_spec(&self) -> ResponseSpec<Bytes, HttpValidationError> {
        ResponseSpec::new(passthrough, decode_json)
    }
}

/// Endpoint that answers with a bodiless 302, such as a download link.
/// The target is in the `location` header of the envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectGet {
    pub path: String,
    pub params: QueryParams,
}

impl RedirectGet {
    pub fn new(path: impl Into<String>, params: QueryParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }
}

impl Endpoint for RedirectGet {
    type Success = ResponseModel;
    type Invalid = HttpValidationError;

    fn path(&self) -> String {
        self.path.clone()
    }

    fn query(&self) -> QueryParams {
        self.params.clone()
    }

    fn response_spec(&self) -> ResponseSpec<ResponseModel, HttpValidationError> {
        ResponseSpec::json().with_redirect()
    }
}
