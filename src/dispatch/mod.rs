pub mod api_response;
pub mod dispatcher;
pub mod endpoint;
pub mod response_spec;
