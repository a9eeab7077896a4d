pub mod param;
pub mod query_params;
pub mod query_value;
