use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor whose every rejection is a 400 `INVALID_BODY`.
///
/// axum's own `Json` answers 415 or 422 for some failures; clients of this
/// API only ever see 400 for a body that cannot be decoded.
///
/// ```ignore
/// async fn create(JsonBody(req): JsonBody<CreateUserRequest>) -> impl IntoResponse { ... }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    async fn echo(JsonBody(p): JsonBody<Payload>) -> String {
        p.name
    }

    fn app() -> Router {
        Router::new().route("/", post(echo))
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let response = app()
            .oneshot(request(Some("application/json"), r#"{"name":"ada"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ada");
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let response = app()
            .oneshot(request(Some("application/json"), "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let response = app().oneshot(request(None, r#"{"name":"ada"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_bad_request_with_fixed_message() {
        let response = app()
            .oneshot(request(Some("application/json"), r#"{"name":42}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Invalid request body");
        assert_eq!(body["error"], "INVALID_BODY");
    }
}
