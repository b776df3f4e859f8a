//! Panic recovery for request handlers.

use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::FutureExt;
use tracing::error;

use gantry_protocol::RpcErrorResponse;

/// Correlation id used when a panic destroys the request context.
const RECOVERED_ID: &str = "recover";

/// Catches panics from downstream handlers and converts them into a
/// well-formed JSON-RPC error response with HTTP 200, so a crashing
/// method is delivered to the caller like any other failure.
pub(crate) async fn recover(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            error!(
                path = %path,
                panic = %panic_message(&panic),
                backtrace = %Backtrace::force_capture(),
                "recovered from panic while handling request"
            );
            Json(RpcErrorResponse::error(RECOVERED_ID, "Internal Server Error")).into_response()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::{panic_message, recover};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use serde_json::Value;
    use std::any::Any;
    use tower::ServiceExt;

    #[test]
    fn panic_message_handles_common_payloads() {
        let s: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(&*s), "static message");

        let owned: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(&*owned), "owned message");

        let other: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(&*other), "non-string panic payload");
    }

    async fn boom() -> &'static str {
        panic!("kaboom");
    }

    #[tokio::test]
    async fn panic_becomes_json_rpc_error() {
        let app = Router::new()
            .route("/explode", get(boom))
            .layer(axum::middleware::from_fn(recover));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/explode")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["id"], "recover");
        assert_eq!(value["error"]["message"], "Internal Server Error");
        assert_eq!(value["error"]["code"], -32000);
    }
}
