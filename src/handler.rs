use crate::{
	constants::{
		MESSAGE_CURRENCY_DELETED, MESSAGE_CURRENCY_IN_USE, MESSAGE_CURRENCY_NOT_FOUND,
		MESSAGE_CURRENCY_UPDATED, MESSAGE_TRANSACTION_NOT_FOUND, MESSAGE_USER_NOT_FOUND,
		MESSAGE_USER_UPDATED,
	},
	errors::ApiError,
	models::{CurrencyUpdated, MessageResponse, UserUpdated},
	store::{RecordStore, StoreError, StoreResult},
	validation,
};
use actix_web::{web, HttpResponse};
use serde_json::Value;

type Store = web::Data<dyn RecordStore>;

/// Runs a store call on the blocking pool; diesel connections are synchronous.
async fn run<T, F>(store: &Store, call: F) -> StoreResult<T>
where
	F: FnOnce(&dyn RecordStore) -> StoreResult<T> + Send + 'static,
	T: Send + 'static,
{
	let store = store.clone();
	web::block(move || call(store.get_ref()))
		.await
		.unwrap_or_else(|e| Err(StoreError::Blocking(e.to_string())))
}

/// Body extractor settings: anything that is not parseable JSON is reported
/// the same way as a body of the wrong shape.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		log::warn!("Unreadable request body: {}", err);
		ApiError::Validation(validation::schema_error()).into()
	})
}

pub struct CurrencyHandler {}

impl CurrencyHandler {
	pub async fn create_currency_handler(
		store: Store,
		body: web::Json<Value>,
	) -> Result<HttpResponse, ApiError> {
		let new_currency = validation::currency_payload(&body).map_err(ApiError::Validation)?;
		let currency = run(&store, move |s| s.create_currency(new_currency)).await?;
		log::info!("Created currency {} ({})", currency.id, currency.code);
		Ok(HttpResponse::Created().json(currency))
	}

	pub async fn list_currencies_handler(store: Store) -> Result<HttpResponse, ApiError> {
		let currencies = run(&store, |s| s.list_currencies()).await?;
		Ok(HttpResponse::Ok().json(currencies))
	}

	pub async fn get_currency_handler(
		store: Store,
		path: web::Path<i32>,
	) -> Result<HttpResponse, ApiError> {
		let id = path.into_inner();
		match run(&store, move |s| s.find_currency(id)).await? {
			Some(currency) => Ok(HttpResponse::Ok().json(currency)),
			None => Err(ApiError::NotFound(MESSAGE_CURRENCY_NOT_FOUND)),
		}
	}

	/// Full replace: the body must carry every field, nothing is kept from
	/// the stored row.
	pub async fn update_currency_handler(
		store: Store,
		path: web::Path<i32>,
		body: web::Json<Value>,
	) -> Result<HttpResponse, ApiError> {
		let id = path.into_inner();
		let currency = validation::currency_payload(&body).map_err(ApiError::Validation)?;
		match run(&store, move |s| s.replace_currency(id, currency)).await? {
			Some(currency) => {
				log::info!("Updated currency {}", id);
				Ok(HttpResponse::Ok().json(CurrencyUpdated {
					message: MESSAGE_CURRENCY_UPDATED.to_string(),
					currency,
				}))
			},
			None => Err(ApiError::NotFound(MESSAGE_CURRENCY_NOT_FOUND)),
		}
	}

	pub async fn delete_currency_handler(
		store: Store,
		path: web::Path<i32>,
	) -> Result<HttpResponse, ApiError> {
		let id = path.into_inner();
		let deleted = run(&store, move |s| s.delete_currency(id)).await.map_err(|err| match err {
			StoreError::ForeignKeyViolation { .. } => ApiError::InUse(MESSAGE_CURRENCY_IN_USE),
			other => other.into(),
		})?;
		if !deleted {
			return Err(ApiError::NotFound(MESSAGE_CURRENCY_NOT_FOUND));
		}
		log::info!("Deleted currency {}", id);
		Ok(HttpResponse::Ok().json(MessageResponse::new(MESSAGE_CURRENCY_DELETED)))
	}
}

pub struct UserHandler {}

impl UserHandler {
	pub async fn create_user_handler(
		store: Store,
		body: web::Json<Value>,
	) -> Result<HttpResponse, ApiError> {
		let new_user = validation::user_payload(&body).map_err(ApiError::Validation)?;
		let user = run(&store, move |s| s.create_user(new_user)).await?;
		log::info!("Created user {} ({})", user.id, user.username);
		Ok(HttpResponse::Created().json(user))
	}

	pub async fn list_users_handler(store: Store) -> Result<HttpResponse, ApiError> {
		let users = run(&store, |s| s.list_users()).await?;
		Ok(HttpResponse::Ok().json(users))
	}

	/// Partial merge: fields missing from the body keep their stored value.
	pub async fn update_user_handler(
		store: Store,
		path: web::Path<i32>,
		body: web::Json<Value>,
	) -> Result<HttpResponse, ApiError> {
		let id = path.into_inner();
		let patch = validation::user_patch(&body).map_err(ApiError::Validation)?;
		match run(&store, move |s| s.merge_user(id, patch)).await? {
			Some(user) => {
				log::info!("Updated user {}", id);
				Ok(HttpResponse::Ok()
					.json(UserUpdated { message: MESSAGE_USER_UPDATED.to_string(), user }))
			},
			None => Err(ApiError::NotFound(MESSAGE_USER_NOT_FOUND)),
		}
	}
}

pub struct TransactionHandler {}

impl TransactionHandler {
	pub async fn create_transaction_handler(
		store: Store,
		body: web::Json<Value>,
	) -> Result<HttpResponse, ApiError> {
		let new_transaction =
			validation::transaction_payload(&body).map_err(ApiError::Validation)?;
		// Anything the store rejects here, dangling references included, is
		// reported with its raw text.
		let transaction = run(&store, move |s| s.create_transaction(new_transaction))
			.await
			.map_err(|err| match err {
				StoreError::ForeignKeyViolation { .. } | StoreError::UniqueViolation { .. } =>
					ApiError::Internal(err.to_string()),
				other => other.into(),
			})?;
		log::info!(
			"Created transaction {} for user {} in currency {}",
			transaction.id,
			transaction.user_id,
			transaction.currency_id
		);
		Ok(HttpResponse::Created().json(transaction))
	}

	pub async fn list_transactions_handler(store: Store) -> Result<HttpResponse, ApiError> {
		let transactions = run(&store, |s| s.list_transactions()).await?;
		log::info!("Retrieved {} transactions", transactions.len());
		Ok(HttpResponse::Ok().json(transactions))
	}

	pub async fn get_transaction_handler(
		store: Store,
		path: web::Path<i32>,
	) -> Result<HttpResponse, ApiError> {
		let id = path.into_inner();
		match run(&store, move |s| s.find_transaction(id)).await? {
			Some(transaction) => Ok(HttpResponse::Ok().json(transaction)),
			None => Err(ApiError::NotFound(MESSAGE_TRANSACTION_NOT_FOUND)),
		}
	}
}
