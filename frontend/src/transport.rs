//! Browser transport built on the fetch API.

use async_trait::async_trait;
use futures::{
    future::{select, Either},
    pin_mut,
};
use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use gloo_timers::future::TimeoutFuture;

use crate::http::{ApiError, Method, RawResponse, Transport, TransportRequest};

/// [`Transport`] sending requests with `window.fetch`.
///
/// The request races a timer; whichever finishes first wins, and an expired
/// timer is reported as [`ApiError::Network`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, ApiError> {
        let timeout_ms = request.timeout_ms;
        let call = perform(request);
        let timer = TimeoutFuture::new(timeout_ms);
        pin_mut!(call, timer);

        match select(call, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                Err(ApiError::Network(format!("timeout of {timeout_ms}ms exceeded")))
            },
        }
    }
}

async fn perform(request: TransportRequest) -> Result<RawResponse, ApiError> {
    let mut builder = RequestBuilder::new(&request.url).method(fetch_method(request.method));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let pending = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(format!("Network Error: {e}")))?;

    let response = pending
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network Error: {e}")))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Network Error: {e}")))?;

    Ok(RawResponse {
        status,
        body,
    })
}

fn fetch_method(method: Method) -> FetchMethod {
    match method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Put => FetchMethod::PUT,
        Method::Delete => FetchMethod::DELETE,
    }
}
