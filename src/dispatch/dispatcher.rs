use std::future::Future;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    client::client::{Client, UnexpectedStatusPolicy},
    dispatch::{
        api_response::{ApiResponse, Parsed},
        endpoint::Endpoint,
        response_spec::ResponseSpec,
    },
    error::Error,
    http_client::response::Response,
    query::query_params::QueryParams,
};

pub type Dispatched<S, V> = ApiResponse<Parsed<S, V>>;

impl Client {
    /// One GET to `path`, classified by status. Transport failures are
    /// returned as they come; nothing is retried.
    pub async fn dispatch_detailed<S, V>(
        &self,
        path: &str,
        query: &QueryParams,
        spec: ResponseSpec<S, V>,
    ) -> Result<Dispatched<S, V>, Error> {
        let request_id = Uuid::new_v4();
        let request = self.build_request(path, query);

        debug!(%request_id, "Dispatching {} {}", request.method, path);

        let response = self.http_client().execute(request).await?;

        info!(%request_id, status = response.status, "Received response for {}", path);

        classify(response, spec, self.unexpected_status())
    }

    pub async fn dispatch<S, V>(
        &self,
        path: &str,
        query: &QueryParams,
        spec: ResponseSpec<S, V>,
    ) -> Result<Option<Parsed<S, V>>, Error> {
        self.dispatch_detailed(path, query, spec)
            .await
            .map(ApiResponse::into_parsed)
    }

    /// Blocking form of [`Client::dispatch_detailed`]. Panics if called from
    /// inside an async runtime.
    pub fn dispatch_detailed_blocking<S, V>(
        &self,
        path: &str,
        query: &QueryParams,
        spec: ResponseSpec<S, V>,
    ) -> Result<Dispatched<S, V>, Error> {
        block_on(self.dispatch_detailed(path, query, spec))?
    }

    pub fn dispatch_blocking<S, V>(
        &self,
        path: &str,
        query: &QueryParams,
        spec: ResponseSpec<S, V>,
    ) -> Result<Option<Parsed<S, V>>, Error> {
        block_on(self.dispatch(path, query, spec))?
    }

    pub async fn send_detailed<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<Dispatched<E::Success, E::Invalid>, Error> {
        self.dispatch_detailed(&endpoint.path(), &endpoint.query(), endpoint.response_spec())
            .await
    }

    pub async fn send<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<Option<Parsed<E::Success, E::Invalid>>, Error> {
        self.dispatch(&endpoint.path(), &endpoint.query(), endpoint.response_spec())
            .await
    }

    pub fn send_detailed_blocking<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<Dispatched<E::Success, E::Invalid>, Error> {
        block_on(self.send_detailed(endpoint))?
    }

    pub fn send_blocking<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<Option<Parsed<E::Success, E::Invalid>>, Error> {
        block_on(self.send(endpoint))?
    }
}

pub(crate) fn classify<S, V>(
    response: Response,
    spec: ResponseSpec<S, V>,
    policy: UnexpectedStatusPolicy,
) -> Result<Dispatched<S, V>, Error> {
    let status = response.status;

    let parsed = match status {
        200 => Some(Parsed::Success(
            (spec.success)(&response.body).map_err(|source| Error::Decode { status, source })?,
        )),
        422 => Some(Parsed::ValidationError(
            (spec.validation_error)(&response.body)
                .map_err(|source| Error::Decode { status, source })?,
        )),
        302 if spec.redirect => None,
        _ => match policy {
            UnexpectedStatusPolicy::Raise => {
                return Err(Error::UnexpectedStatus {
                    status,
                    content: response.body,
                });
            }
            UnexpectedStatusPolicy::Ignore => {
                warn!(status, "Ignoring unexpected status");
                None
            }
        },
    };

    Ok(ApiResponse {
        status,
        content: response.body,
        headers: response.headers,
        parsed,
    })
}

fn block_on<F: Future>(future: F) -> Result<F::Output, Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;

    Ok(runtime.block_on(future))
}
