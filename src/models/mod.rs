pub mod http_validation_error;
pub mod response_model;
