use crate::{dispatch::response_spec::ResponseSpec, query::query_params::QueryParams};

/// A call site: where to go, what to send, how to read the answer.
pub trait Endpoint {
    type Success;
    type Invalid;

    fn path(&self) -> String;

    fn query(&self) -> QueryParams {
        QueryParams::new()
    }

    fn response_spec(&self) -> ResponseSpec<Self::Success, Self::Invalid>;
}
