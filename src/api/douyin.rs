use crate::{
    dispatch::{endpoint::Endpoint, response_spec::ResponseSpec},
    models::{http_validation_error::HttpValidationError, response_model::ResponseModel},
    query::{param::Param, query_params::QueryParams},
};

pub const FETCH_ONE_VIDEO_V2_PATH: &str = "/api/v1/douyin/web/fetch_one_video_v2";

/// Single Douyin video by id.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOneVideoV2 {
    pub aweme_id: Param<String>,
}

impl FetchOneVideoV2 {
    pub fn new(aweme_id: impl Into<String>) -> Self {
        Self {
            aweme_id: Param::Value(aweme_id.into()),
        }
    }
}

impl Endpoint for FetchOneVideoV2 {
    type Success = ResponseModel;
    type Invalid = HttpValidationError;

    fn path(&self) -> String {
        FETCH_ONE_VIDEO_V2_PATH.to_string()
    }

    fn query(&self) -> QueryParams {
        QueryParams::new().with("aweme_id", self.aweme_id.clone())
    }

    fn response_spec(&self) -> ResponseSpec<ResponseModel, HttpValidationError> {
        ResponseSpec::json()
    }
}
