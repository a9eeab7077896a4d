use crate::{
    dispatch::{endpoint::Endpoint, response_spec::ResponseSpec},
    models::{http_validation_error::HttpValidationError, response_model::ResponseModel},
};

pub const DOWNLOAD_LATEST_RELEASE_PATH: &str = "/api/v1/tikhub/downloader/download_latest_release";

/// Latest desktop release. The server answers with a bodiless 302 whose
/// `location` header holds the download link.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DownloadLatestRelease;

impl Endpoint for DownloadLatestRelease {
    type Success = ResponseModel;
    type Invalid = HttpValidationError;

    fn path(&self) -> String {
        DOWNLOAD_LATEST_RELEASE_PATH.to_string()
    }

    fn response_spec(&self) -> ResponseSpec<ResponseModel, HttpValidationError> {
        ResponseSpec::json().with_redirect()
    }
}
