use crate::{
	constants::{
		CURRENCIES_CODE_KEY, TRANSACTIONS_CURRENCY_FKEY, TRANSACTIONS_USER_FKEY,
		USERS_DEFAULT_CURRENCY_FKEY, USERS_EMAIL_KEY, USERS_USERNAME_KEY,
	},
	db::{DbConn, DbPool},
	models::{Currency, NewCurrency, NewTransaction, NewUser, Transaction, User, UserPatch},
	schema::{currencies, transactions, users},
	store::{RecordStore, StoreError, StoreResult},
};
use diesel::{
	prelude::*,
	result::{DatabaseErrorKind, Error as DieselError},
};

pub struct PgStore {
	pool: DbPool,
}

impl PgStore {
	pub fn new(pool: DbPool) -> Self {
		Self { pool }
	}

	fn conn(&self) -> StoreResult<DbConn> {
		self.pool.get().map_err(|e| {
			log::error!("Database connection error: {:?}", e);
			StoreError::Pool(e.to_string())
		})
	}
}

impl From<DieselError> for StoreError {
	fn from(err: DieselError) -> Self {
		match err {
			DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) =>
				StoreError::UniqueViolation { field: constraint_field(info.constraint_name()) },
			DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) =>
				StoreError::ForeignKeyViolation {
					field: constraint_field(info.constraint_name()),
					detail: info.message().to_string(),
				},
			other => StoreError::Database(other.to_string()),
		}
	}
}

/// Maps a Postgres constraint name back to the request field it guards.
fn constraint_field(constraint: Option<&str>) -> String {
	match constraint {
		Some(CURRENCIES_CODE_KEY) => "code",
		Some(USERS_USERNAME_KEY) => "username",
		Some(USERS_EMAIL_KEY) => "email",
		Some(USERS_DEFAULT_CURRENCY_FKEY) => "default_currency_id",
		Some(TRANSACTIONS_CURRENCY_FKEY) => "currency_id",
		Some(TRANSACTIONS_USER_FKEY) => "user_id",
		Some(other) => other,
		None => crate::validation::SCHEMA_FIELD,
	}
	.to_string()
}

impl RecordStore for PgStore {
	fn create_currency(&self, new_currency: NewCurrency) -> StoreResult<Currency> {
		let mut conn = self.conn()?;
		let currency = conn.transaction::<_, DieselError, _>(|conn| {
			diesel::insert_into(currencies::table)
				.values(&new_currency)
				.returning(Currency::as_returning())
				.get_result(conn)
		})?;
		Ok(currency)
	}

	fn list_currencies(&self) -> StoreResult<Vec<Currency>> {
		let mut conn = self.conn()?;
		let all = currencies::table
			.order(currencies::id.asc())
			.select(Currency::as_select())
			.load(&mut conn)?;
		Ok(all)
	}

	fn find_currency(&self, id: i32) -> StoreResult<Option<Currency>> {
		let mut conn = self.conn()?;
		let currency = currencies::table
			.find(id)
			.select(Currency::as_select())
			.first(&mut conn)
			.optional()?;
		Ok(currency)
	}

	fn replace_currency(&self, id: i32, currency: NewCurrency) -> StoreResult<Option<Currency>> {
		let mut conn = self.conn()?;
		let updated = conn.transaction::<_, DieselError, _>(|conn| {
			diesel::update(currencies::table.find(id))
				.set(&currency)
				.returning(Currency::as_returning())
				.get_result(conn)
				.optional()
		})?;
		Ok(updated)
	}

	fn delete_currency(&self, id: i32) -> StoreResult<bool> {
		let mut conn = self.conn()?;
		let deleted = conn.transaction::<_, DieselError, _>(|conn| {
			diesel::delete(currencies::table.find(id)).execute(conn)
		})?;
		Ok(deleted > 0)
	}

	fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
		let mut conn = self.conn()?;
		let user = conn.transaction::<_, DieselError, _>(|conn| {
			diesel::insert_into(users::table)
				.values(&new_user)
				.returning(User::as_returning())
				.get_result(conn)
		})?;
		Ok(user)
	}

	fn list_users(&self) -> StoreResult<Vec<User>> {
		let mut conn = self.conn()?;
		let all = users::table.order(users::id.asc()).select(User::as_select()).load(&mut conn)?;
		Ok(all)
	}

	fn merge_user(&self, id: i32, patch: UserPatch) -> StoreResult<Option<User>> {
		let mut conn = self.conn()?;
		let user = conn.transaction::<_, DieselError, _>(|conn| {
			// diesel refuses an UPDATE with nothing to SET
			if patch.is_empty() {
				return users::table.find(id).select(User::as_select()).first(conn).optional();
			}
			diesel::update(users::table.find(id))
				.set(&patch)
				.returning(User::as_returning())
				.get_result(conn)
				.optional()
		})?;
		Ok(user)
	}

	fn create_transaction(&self, new_transaction: NewTransaction) -> StoreResult<Transaction> {
		let mut conn = self.conn()?;
		let transaction = conn.transaction::<_, DieselError, _>(|conn| {
			diesel::insert_into(transactions::table)
				.values(&new_transaction)
				.returning(Transaction::as_returning())
				.get_result(conn)
		})?;
		Ok(transaction)
	}

	fn list_transactions(&self) -> StoreResult<Vec<Transaction>> {
		let mut conn = self.conn()?;
		let all = transactions::table
			.order(transactions::id.asc())
			.select(Transaction::as_select())
			.load(&mut conn)?;
		Ok(all)
	}

	fn find_transaction(&self, id: i32) -> StoreResult<Option<Transaction>> {
		let mut conn = self.conn()?;
		let transaction = transactions::table
			.find(id)
			.select(Transaction::as_select())
			.first(&mut conn)
			.optional()?;
		Ok(transaction)
	}
}
