use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON body extractor that runs the payload's `validator` rules after
/// deserialization. Deserialization failures become `BadRequest`;
/// validation failures become `ValidationErrors`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string extractor for the list parameters. Both unparsable values
/// and out-of-range values are reported as `InvalidParameter`; absent
/// fields fall back to their serde defaults before validation runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate().map_err(invalid_parameters)?;
        Ok(ValidatedQuery(value))
    }
}

fn invalid_parameters(errors: validator::ValidationErrors) -> AppError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let reason = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{field}: {reason}")
            })
        })
        .collect();
    parts.sort();
    AppError::InvalidParameter {
        message: parts.join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"))]
        username: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct TestQuery {
        #[serde(default = "default_page")]
        #[validate(range(min = 1, message = "page must be at least 1"))]
        page: u32,
    }

    fn default_page() -> u32 {
        1
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn query_parts(uri: &str) -> Parts {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        request.into_parts().0
    }

    #[tokio::test]
    async fn test_valid_json_body() {
        let request = json_request(r#"{"username":"testuser","email":"test@example.com"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_ok());
        let ValidatedJson(payload) = result.unwrap();
        assert_eq!(payload.username, "testuser");
        assert_eq!(payload.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_validation_error_short_username() {
        let request = json_request(r#"{"username":"ab","email":"test@example.com"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "username");
                assert!(errors[0].message.contains("between 3 and 20 characters"));
            }
            error => panic!("Expected ValidationErrors error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_validation_error_multiple_fields_sorted() {
        let request = json_request(r#"{"username":"ab","email":"invalid-email"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "email");
                assert_eq!(errors[1].field, "username");
            }
            error => panic!("Expected ValidationErrors error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_json_rejection_missing_field() {
        let request = json_request(r#"{"username":"testuser"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::BadRequest { message } => {
                assert!(!message.is_empty());
            }
            error => panic!("Expected BadRequest error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_query_defaults_apply_when_absent() {
        let mut parts = query_parts("/test");

        let result = ValidatedQuery::<TestQuery>::from_request_parts(&mut parts, &()).await;

        assert!(result.is_ok());
        let ValidatedQuery(query) = result.unwrap();
        assert_eq!(query.page, 1);
    }

    #[tokio::test]
    async fn test_query_zero_page_is_invalid_parameter() {
        let mut parts = query_parts("/test?page=0");

        let result = ValidatedQuery::<TestQuery>::from_request_parts(&mut parts, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::InvalidParameter { message } => {
                assert!(message.contains("page"));
            }
            error => panic!("Expected InvalidParameter error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_query_non_numeric_page_is_invalid_parameter() {
        let mut parts = query_parts("/test?page=abc");

        let result = ValidatedQuery::<TestQuery>::from_request_parts(&mut parts, &()).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AppError::InvalidParameter { .. }
        ));
    }
}
