//! Forwarding handler.
//!
//! Per request there are two states: the request is sent and awaited
//! (`FORWARDING`), then resolved either by relaying the backend response or
//! by synthesizing the 502 contract. Nothing is retried.
//!
//! If the client disconnects first, axum drops this future and the in-flight
//! backend call is dropped with it.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
};
use hyper::body::Incoming;
use hyper_util::client::legacy::{connect::HttpConnector, Client};

use crate::http::response::GatewayError;
use crate::http::upstream::Upstream;
use crate::observability::{ForwardContext, ProxyHooks};

/// Pooled HTTP/1.1 client used for backend calls.
pub type UpstreamClient = Client<HttpConnector, Body>;

/// State shared by all forwarding tasks. Read-only after startup.
#[derive(Clone)]
pub struct ProxyState {
    pub upstream: Arc<Upstream>,
    pub client: UpstreamClient,
    pub hooks: Arc<dyn ProxyHooks>,
    pub request_timeout: Duration,
}

/// Forward a signed request to the auth service and relay its answer.
pub async fn forward(State(state): State<ProxyState>, request: Request<Body>) -> Response {
    let mut ctx = ForwardContext::from_request(&request);

    let outbound = match state.upstream.prepare(request) {
        Ok(outbound) => outbound,
        Err(e) => return fail(&state, &ctx, GatewayError::from(e)),
    };
    ctx.target = Some(outbound.uri().clone());

    state.hooks.on_forward(&ctx);

    let result = tokio::time::timeout(state.request_timeout, state.client.request(outbound)).await;

    match result {
        Ok(Ok(response)) => {
            state.hooks.on_response(&ctx, response.status());
            relay(response)
        }
        Ok(Err(e)) => fail(&state, &ctx, GatewayError::from(e)),
        Err(_) => fail(&state, &ctx, GatewayError::UpstreamTimeout(state.request_timeout)),
    }
}

/// Hand the backend response to the client untouched, body still streaming.
fn relay(response: hyper::Response<Incoming>) -> Response {
    let (parts, body) = response.into_parts();
    Response::from_parts(parts, Body::new(body))
}

fn fail(state: &ProxyState, ctx: &ForwardContext, error: GatewayError) -> Response {
    state.hooks.on_error(ctx, &error);
    error.into_response()
}
