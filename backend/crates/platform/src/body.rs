//! JSON Request Bodies
//!
//! [`JsonBody`] reads the body as JSON regardless of `Content-Type`.
//! An empty body deserializes as `T::default()`, so a request that sends
//! nothing reaches the handler and gets the same "missing field" answer
//! as one that sends `{}`.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[derive(Debug, Error)]
pub enum BodyRejection {
    /// Body could not be buffered (too large, connection dropped)
    #[error("Request body could not be read")]
    Unreadable(#[source] BytesRejection),

    /// Body is present but is not the expected JSON shape
    #[error("Invalid request body")]
    InvalidJson(#[source] serde_json::Error),
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(BodyRejection::Unreadable)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(BodyRejection::InvalidJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        name: Option<String>,
        quantity: Option<i64>,
    }

    async fn extract(body: &'static str) -> Result<Payload, BodyRejection> {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        JsonBody::<Payload>::from_request(req, &()).await.map(|b| b.0)
    }

    #[tokio::test]
    async fn test_empty_body_is_default() {
        assert_eq!(extract("").await.unwrap(), Payload::default());
        assert_eq!(extract(" \n").await.unwrap(), Payload::default());
    }

    #[tokio::test]
    async fn test_json_without_content_type() {
        let payload = extract(r#"{"name":"pen","quantity":2}"#).await.unwrap();
        assert_eq!(payload.name.as_deref(), Some("pen"));
        assert_eq!(payload.quantity, Some(2));
    }

    #[tokio::test]
    async fn test_bad_json_has_fixed_message() {
        for body in ["{", "null", r#"{"quantity":1.5}"#, "[]"] {
            let err = extract(body).await.unwrap_err();
            assert!(matches!(err, BodyRejection::InvalidJson(_)), "{body}");
            assert_eq!(err.to_string(), "Invalid request body");
        }
    }
}
