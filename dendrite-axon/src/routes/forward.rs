//! The forward operation.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use dendrite_wire::{decode_features, encode_features, Envelope};

use crate::error::{AxonError, Result};
use crate::state::AppState;

/// POST /v1/forward — decode one envelope, compute, answer in kind.
///
/// The response envelope mirrors the request: this node becomes the
/// caller, the requester becomes the target, and the nonce is fresh.
pub async fn forward(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let request = Envelope::decode(&body)?;

    if request.target != state.local_key {
        return Err(AxonError::WrongTarget {
            expected: state.local_key,
            got: request.target,
        });
    }

    let query = decode_features(&request.payload)?;
    tracing::debug!(
        caller = %request.caller,
        nonce = ?request.nonce,
        dim = query.dim(),
        "forward request"
    );

    let response = state
        .handler
        .forward(request.caller, query)
        .await
        .map_err(|e| AxonError::Handler(e.to_string()))?;

    let reply = Envelope::new(state.local_key, request.caller, encode_features(&response));
    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        reply.encode(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::EchoHandler;
    use crate::routes::create_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use dendrite_core::{FeatureVec, PeerKey, PEER_KEY_LEN};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn key(tag: u8) -> PeerKey {
        PeerKey::from_bytes([tag; PEER_KEY_LEN])
    }

    fn app() -> axum::Router {
        create_router(AppState::new(key(9), Arc::new(EchoHandler)))
    }

    fn post_forward(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/forward")
            .header("content-type", "application/octet-stream")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn echoes_features_in_a_response_envelope() {
        let features = FeatureVec::new(vec![1.0, -2.0, 3.5]);
        let request = Envelope::new(key(1), key(9), encode_features(&features));

        let response = app().oneshot(post_forward(request.encode())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let reply = Envelope::decode(&body).unwrap();
        assert_eq!(reply.caller, key(9));
        assert_eq!(reply.target, key(1));
        assert_ne!(reply.nonce, request.nonce);
        assert_eq!(decode_features(&reply.payload).unwrap(), features);
    }

    #[tokio::test]
    async fn garbage_body_is_a_bad_request() {
        let response = app().oneshot(post_forward(vec![0; 10])).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn misaddressed_envelope_is_rejected() {
        let request = Envelope::new(
            key(1),
            key(8), // not this node
            encode_features(&FeatureVec::zeros(2)),
        );
        let response = app().oneshot(post_forward(request.encode())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_reports_identity() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
