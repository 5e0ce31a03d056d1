//! Request decoding. Each entity gets a pure function that turns a JSON body
//! into its typed payload or a `field -> [message]` map.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::models::{NewCurrency, NewTransaction, NewUser, UserPatch};

pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key used for errors that concern the whole body rather than one field.
pub const SCHEMA_FIELD: &str = "_schema";

const MISSING: &str = "Missing data for required field.";
const NULL: &str = "Field may not be null.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_NUMBER: &str = "Not a valid number.";
const NOT_AN_INTEGER: &str = "Not a valid integer.";
const INVALID_INPUT: &str = "Invalid input type.";

pub fn single_error(field: &str, message: &str) -> FieldErrors {
	let mut errors = FieldErrors::new();
	errors.insert(field.to_string(), vec![message.to_string()]);
	errors
}

/// Error map for a body that is not a JSON object at all.
pub fn schema_error() -> FieldErrors {
	single_error(SCHEMA_FIELD, INVALID_INPUT)
}

pub fn currency_payload(body: &Value) -> Result<NewCurrency, FieldErrors> {
	let mut fields = Fields::new(body)?;
	let name = fields.required("name", as_string);
	let code = fields.required("code", as_string);
	let exchange_rate = fields.required("exchange_rate", as_number);

	match (name, code, exchange_rate) {
		(Some(name), Some(code), Some(exchange_rate)) =>
			fields.finish(NewCurrency { name, code, exchange_rate }),
		_ => Err(fields.errors),
	}
}

pub fn user_payload(body: &Value) -> Result<NewUser, FieldErrors> {
	let mut fields = Fields::new(body)?;
	let username = fields.required("username", as_string);
	let email = fields.required("email", as_string);
	let default_currency_id = fields.required("default_currency_id", as_integer);

	match (username, email, default_currency_id) {
		(Some(username), Some(email), Some(default_currency_id)) =>
			fields.finish(NewUser { username, email, default_currency_id }),
		_ => Err(fields.errors),
	}
}

/// Only the keys present in the body end up in the patch. An explicit `null`
/// clears `default_currency_id`; the text columns are not nullable.
pub fn user_patch(body: &Value) -> Result<UserPatch, FieldErrors> {
	let mut fields = Fields::new(body)?;
	let patch = UserPatch {
		username: fields.optional("username", as_string),
		email: fields.optional("email", as_string),
		default_currency_id: fields.nullable("default_currency_id", as_integer),
	};
	fields.finish(patch)
}

pub fn transaction_payload(body: &Value) -> Result<NewTransaction, FieldErrors> {
	let mut fields = Fields::new(body)?;
	let amount = fields.required("amount", as_number);
	let currency_id = fields.required("currency_id", as_integer);
	let user_id = fields.required("user_id", as_integer);

	match (amount, currency_id, user_id) {
		(Some(amount), Some(currency_id), Some(user_id)) =>
			fields.finish(NewTransaction { amount, currency_id, user_id }),
		_ => Err(fields.errors),
	}
}

fn as_string(value: &Value) -> Result<String, &'static str> {
	value.as_str().map(str::to_owned).ok_or(NOT_A_STRING)
}

/// Numbers may also arrive as numeric strings (`"1.5"`).
fn as_number(value: &Value) -> Result<f64, &'static str> {
	let number = match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok(),
		_ => None,
	};
	number.filter(|n| n.is_finite()).ok_or(NOT_A_NUMBER)
}

/// Accepts `3`, `3.0` and `"3"`; rejects fractions and anything outside `i32`.
fn as_integer(value: &Value) -> Result<i32, &'static str> {
	let integer = match value {
		Value::Number(n) => n.as_i64().or_else(|| {
			n.as_f64().filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64).map(|f| f as i64)
		}),
		Value::String(s) => s.trim().parse::<i64>().ok(),
		_ => None,
	};
	integer.and_then(|n| i32::try_from(n).ok()).ok_or(NOT_AN_INTEGER)
}

struct Fields<'a> {
	body: &'a Map<String, Value>,
	errors: FieldErrors,
}

impl<'a> Fields<'a> {
	fn new(body: &'a Value) -> Result<Self, FieldErrors> {
		match body {
			Value::Object(body) => Ok(Self { body, errors: FieldErrors::new() }),
			_ => Err(schema_error()),
		}
	}

	fn reject(&mut self, field: &str, message: &str) {
		self.errors.entry(field.to_string()).or_default().push(message.to_string());
	}

	fn required<T>(
		&mut self,
		field: &str,
		parse: fn(&Value) -> Result<T, &'static str>,
	) -> Option<T> {
		match self.body.get(field) {
			None => {
				self.reject(field, MISSING);
				None
			},
			Some(Value::Null) => {
				self.reject(field, NULL);
				None
			},
			Some(value) => self.decode(field, value, parse),
		}
	}

	fn optional<T>(
		&mut self,
		field: &str,
		parse: fn(&Value) -> Result<T, &'static str>,
	) -> Option<T> {
		match self.body.get(field) {
			None => None,
			Some(Value::Null) => {
				self.reject(field, NULL);
				None
			},
			Some(value) => self.decode(field, value, parse),
		}
	}

	fn nullable<T>(
		&mut self,
		field: &str,
		parse: fn(&Value) -> Result<T, &'static str>,
	) -> Option<Option<T>> {
		match self.body.get(field) {
			None => None,
			Some(Value::Null) => Some(None),
			Some(value) => self.decode(field, value, parse).map(Some),
		}
	}

	fn decode<T>(
		&mut self,
		field: &str,
		value: &Value,
		parse: fn(&Value) -> Result<T, &'static str>,
	) -> Option<T> {
		match parse(value) {
			Ok(parsed) => Some(parsed),
			Err(message) => {
				self.reject(field, message);
				None
			},
		}
	}

	/// Runs the declarative rules on the decoded payload and merges their
	/// messages with any decoding errors collected so far.
	fn finish<T: Validate>(mut self, payload: T) -> Result<T, FieldErrors> {
		if let Err(errors) = payload.validate() {
			self.merge(errors);
		}
		if self.errors.is_empty() {
			Ok(payload)
		} else {
			Err(self.errors)
		}
	}

	fn merge(&mut self, errors: ValidationErrors) {
		for (field, field_errors) in errors.field_errors() {
			for error in field_errors {
				let message = error
					.message
					.as_ref()
					.map(|m| m.to_string())
					.unwrap_or_else(|| format!("Invalid value ({}).", error.code));
				self.reject(&field, &message);
			}
		}
	}
}
