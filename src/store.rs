//! Persistence port. Handlers only see this trait; `repo::PgStore` is the
//! Postgres adapter.

use crate::models::{
	Currency, NewCurrency, NewTransaction, NewUser, Transaction, User, UserPatch,
};
#[cfg(test)]
use mockall::automock;

/// Failures a store call can report. Integrity violations carry the request
/// field the violated constraint is attached to.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("duplicate value for {field}")]
	UniqueViolation { field: String },

	/// `detail` is the storage engine's own wording of the violation.
	#[error("{detail}")]
	ForeignKeyViolation { field: String, detail: String },

	#[error("connection pool error: {0}")]
	Pool(String),

	#[error("{0}")]
	Database(String),

	#[error("blocking task failed: {0}")]
	Blocking(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Every mutating call is one unit of work: it commits entirely or not at all.
#[cfg_attr(test, automock)]
pub trait RecordStore: Send + Sync {
	fn create_currency(&self, new_currency: NewCurrency) -> StoreResult<Currency>;
	fn list_currencies(&self) -> StoreResult<Vec<Currency>>;
	fn find_currency(&self, id: i32) -> StoreResult<Option<Currency>>;
	/// Overwrites every column. `None` when the id does not exist.
	fn replace_currency(&self, id: i32, currency: NewCurrency) -> StoreResult<Option<Currency>>;
	/// `false` when the id does not exist.
	fn delete_currency(&self, id: i32) -> StoreResult<bool>;

	fn create_user(&self, new_user: NewUser) -> StoreResult<User>;
	fn list_users(&self) -> StoreResult<Vec<User>>;
	/// Writes only the fields set in `patch`. `None` when the id does not exist.
	fn merge_user(&self, id: i32, patch: UserPatch) -> StoreResult<Option<User>>;

	fn create_transaction(&self, new_transaction: NewTransaction) -> StoreResult<Transaction>;
	fn list_transactions(&self) -> StoreResult<Vec<Transaction>>;
	fn find_transaction(&self, id: i32) -> StoreResult<Option<Transaction>>;
}
