//! Tower middleware applied to the whole API.

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Wraps the router with request ids, request tracing and a per-request
/// timeout (408 on expiry).
pub fn with_middleware(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(request_timeout))
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}
