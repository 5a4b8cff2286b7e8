//! JSON extractors answering rejections inside the API envelope.
//!
//! Validation failures are answered with 422 and one entry per failing
//! field. Malformed JSON keeps the status axum assigns it (400 for syntax,
//! 422 for mistyped fields).

use crate::responses::ApiResponse;
use auction_core::{collect_field_errors, ErrorResponse};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// `Json<T>` that additionally runs `T::validate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

/// `Json<T>` whose rejection is wrapped in [`ApiResponse`].
///
/// Field rules are left to the service layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

/// Rejection type for the JSON extractors.
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Json(rejection) => (
                rejection.status(),
                ErrorResponse {
                    code: "INVALID_JSON".to_string(),
                    message: format!("Invalid JSON: {}", rejection),
                    details: None,
                },
            ),
            Self::Invalid(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "Request validation failed".to_string(),
                    details: Some(collect_field_errors(&errors)),
                },
            ),
        };
        (status, Json(ApiResponse::<()>::error(error))).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;

        value.validate().map_err(ValidatedJsonRejection::Invalid)?;

        Ok(ValidatedJson(value))
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;

        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_service::{CategoryRequest, LoginRequest};
    use http_body_util::BodyExt;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_is_extracted() {
        let request = json_request(r#"{"email":"ada@example.com","password":"pw"}"#);
        let ValidatedJson(login) = ValidatedJson::<LoginRequest>::from_request(request, &())
            .await
            .ok()
            .unwrap();
        assert_eq!(login.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_empty_fields_are_unprocessable() {
        let request = json_request(r#"{"email":"","password":""}"#);
        let Err(rejection) = ValidatedJson::<LoginRequest>::from_request(request, &()).await else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = json_request("{not json");
        let Err(rejection) = ValidatedJson::<LoginRequest>::from_request(request, &()).await else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_body_rejection_is_enveloped() {
        let request = json_request(r#"{"nam"#);
        let Err(rejection) = JsonBody::<CategoryRequest>::from_request(request, &()).await else {
            panic!("expected rejection");
        };
        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_JSON");
    }

    #[tokio::test]
    async fn test_body_skips_field_rules() {
        let request = json_request(r#"{"email":"","password":""}"#);
        let JsonBody(login) = JsonBody::<LoginRequest>::from_request(request, &())
            .await
            .ok()
            .unwrap();
        assert!(login.email.is_empty());
    }
}
