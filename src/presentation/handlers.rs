use crate::application::service::UserService;
use crate::domain::error::DomainError;
use crate::domain::user::NewUser;
use crate::presentation::middleware::RequestId;
use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, web};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

pub const USER_CREATED: &str = "User created successfully";
pub const INTERNAL_ERROR: &str = "Internal server error";

// AppState holding the service
pub struct AppState {
    pub service: UserService,
}

/// Errors surfaced to HTTP clients. Each renders as one plain-text line.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("{0}")]
    Validation(String),
    /// Detail is logged, never sent.
    #[error("Internal server error")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            ApiError::Internal(detail) => {
                error!(error = %detail, status = %status, "Internal error")
            }
            other => warn!(error = %other, status = %status, "Rejected request"),
        }

        let mut response = plain_text(status, &self.to_string());
        if let ApiError::MethodNotAllowed = self {
            response.headers_mut().insert(
                header::ALLOW,
                header::HeaderValue::from_static("POST"),
            );
        }
        response
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::Validation(msg)) => ApiError::Validation(msg.clone()),
            // Constraint violations land here too and stay 500.
            _ => ApiError::Internal(format!("{err:#}")),
        }
    }
}

fn plain_text(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(format!("{message}\n"))
}

/// `POST /users`
///
/// The body is decoded as JSON whatever the `Content-Type` says. Its size
/// is capped by the `PayloadConfig` registered in `routes::configure`.
#[instrument(skip(state, req, body), fields(body_len = body.len(), request_id))]
pub async fn create_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    if let Some(RequestId(id)) = req.extensions().get::<RequestId>() {
        tracing::Span::current().record("request_id", tracing::field::display(id));
    }

    let user = NewUser::from_json(&body).map_err(|e| {
        warn!(error = %e, "Failed to decode user payload");
        ApiError::InvalidJson
    })?;

    info!(username = %user.username, email = %user.email, "Creating user");
    state.service.create_user(user).await?;

    Ok(plain_text(StatusCode::CREATED, USER_CREATED))
}

/// Fallback for every non-POST method on `/users`.
#[instrument(skip(req), fields(method = %req.method()))]
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
