use crate::{
	models::{ErrorResponse, MessageResponse, ValidationResponse},
	store::StoreError,
	validation::{self, FieldErrors},
};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Everything a handler can answer with besides success.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("validation failed: {0:?}")]
	Validation(FieldErrors),

	#[error("{0}")]
	NotFound(&'static str),

	#[error("conflicting values: {0:?}")]
	Conflict(FieldErrors),

	#[error("invalid reference: {0:?}")]
	InvalidReference(FieldErrors),

	#[error("{0}")]
	InUse(&'static str),

	#[error("{0}")]
	Internal(String),
}

impl From<StoreError> for ApiError {
	fn from(err: StoreError) -> Self {
		match err {
			StoreError::UniqueViolation { field } => ApiError::Conflict(validation::single_error(
				&field,
				&format!("A record with this {} already exists.", field),
			)),
			StoreError::ForeignKeyViolation { field, .. } => ApiError::InvalidReference(
				validation::single_error(&field, "Referenced record does not exist."),
			),
			StoreError::Pool(e) | StoreError::Database(e) => ApiError::Internal(e),
			err @ StoreError::Blocking(_) => ApiError::Internal(err.to_string()),
		}
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Validation(_) | ApiError::InvalidReference(_) => StatusCode::BAD_REQUEST,
			ApiError::NotFound(_) => StatusCode::NOT_FOUND,
			ApiError::Conflict(_) | ApiError::InUse(_) => StatusCode::CONFLICT,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let mut response = HttpResponse::build(self.status_code());
		match self {
			ApiError::Validation(errors) |
			ApiError::Conflict(errors) |
			ApiError::InvalidReference(errors) => {
				log::warn!("Rejected request: {}", self);
				response.json(ValidationResponse { errors: errors.clone() })
			},
			ApiError::NotFound(message) | ApiError::InUse(message) => {
				log::info!("{}", message);
				response.json(MessageResponse::new(message))
			},
			ApiError::Internal(error) => {
				log::error!("Internal error: {}", error);
				response.json(ErrorResponse { error: error.clone() })
			},
		}
	}
}
