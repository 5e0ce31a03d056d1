use crate::{schema::*, validation::FieldErrors};
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = currencies)]
#[diesel(check_for_backend(Pg))]
pub struct Currency {
	pub id: i32,
	pub name: String,
	pub code: String,
	pub exchange_rate: f64,
}

/// Body of both create and full-replace update; every column is written.
#[derive(Insertable, AsChangeset, Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = currencies)]
pub struct NewCurrency {
	#[validate(length(min = 1, max = 80, message = "Length must be between 1 and 80."))]
	pub name: String,
	#[validate(length(min = 1, max = 10, message = "Length must be between 1 and 10."))]
	pub code: String,
	#[validate(range(exclusive_min = 0.0, message = "Must be greater than 0."))]
	pub exchange_rate: f64,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(Pg))]
pub struct User {
	pub id: i32,
	pub username: String,
	pub email: String,
	pub default_currency_id: Option<i32>,
}

#[derive(Insertable, Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = users)]
pub struct NewUser {
	#[validate(length(min = 1, max = 80, message = "Length must be between 1 and 80."))]
	pub username: String,
	#[validate(length(min = 1, max = 120, message = "Length must be between 1 and 120."))]
	pub email: String,
	pub default_currency_id: i32,
}

/// Partial update. `None` keeps the stored value; `Some(None)` on
/// `default_currency_id` clears it.
#[derive(AsChangeset, Validate, Default, Clone, Debug, PartialEq)]
#[diesel(table_name = users)]
pub struct UserPatch {
	#[validate(length(min = 1, max = 80, message = "Length must be between 1 and 80."))]
	pub username: Option<String>,
	#[validate(length(min = 1, max = 120, message = "Length must be between 1 and 120."))]
	pub email: Option<String>,
	pub default_currency_id: Option<Option<i32>>,
}

impl UserPatch {
	pub fn is_empty(&self) -> bool {
		self.username.is_none() && self.email.is_none() && self.default_currency_id.is_none()
	}
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = transactions)]
#[diesel(check_for_backend(Pg))]
pub struct Transaction {
	pub id: i32,
	pub amount: f64,
	pub currency_id: i32,
	pub user_id: i32,
}

#[derive(Insertable, Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = transactions)]
pub struct NewTransaction {
	pub amount: f64,
	pub currency_id: i32,
	pub user_id: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
	pub message: String,
}

impl MessageResponse {
	pub fn new(message: &str) -> Self {
		Self { message: message.to_string() }
	}
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CurrencyUpdated {
	pub message: String,
	pub currency: Currency,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserUpdated {
	pub message: String,
	pub user: User,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
	pub error: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ValidationResponse {
	pub errors: FieldErrors,
}
