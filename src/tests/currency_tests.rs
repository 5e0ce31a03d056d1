use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use super::{
	fixtures::TestFixtures,
	test_utils::{memory_store, test_app},
};
use crate::{
	models::{Currency, CurrencyUpdated, MessageResponse, ValidationResponse},
	store::RecordStore,
};

#[actix_web::test]
async fn test_create_then_get_currency() {
	let app = test_app!(memory_store());

	let resp = test::TestRequest::post()
		.uri("/currencies")
		.set_json(TestFixtures::usd_body())
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let created: Currency = test::read_body_json(resp).await;
	assert_eq!(created.name, "US Dollar");
	assert_eq!(created.code, "USD");
	assert_eq!(created.exchange_rate, 1.0);

	let resp = test::TestRequest::get()
		.uri(&format!("/currencies/{}", created.id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let fetched: Currency = test::read_body_json(resp).await;
	assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_duplicate_code_is_rejected() {
	let store = memory_store();
	store.create_currency(TestFixtures::usd()).unwrap();
	let app = test_app!(store.clone());

	let resp = test::TestRequest::post()
		.uri("/currencies")
		.set_json(json!({"name": "Another Dollar", "code": "USD", "exchange_rate": 1.1}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CONFLICT);
	let body: ValidationResponse = test::read_body_json(resp).await;
	assert!(body.errors.contains_key("code"));
	assert_eq!(store.list_currencies().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_create_currency_missing_fields() {
	let app = test_app!(memory_store());

	let resp = test::TestRequest::post()
		.uri("/currencies")
		.set_json(json!({"name": "Euro"}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ValidationResponse = test::read_body_json(resp).await;
	assert_eq!(body.errors.len(), 2);
	assert_eq!(body.errors["code"], vec!["Missing data for required field.".to_string()]);
	assert!(body.errors.contains_key("exchange_rate"));
}

#[actix_web::test]
async fn test_create_currency_wrong_types() {
	let app = test_app!(memory_store());

	let resp = test::TestRequest::post()
		.uri("/currencies")
		.set_json(json!({"name": "Euro", "code": 978, "exchange_rate": "high"}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ValidationResponse = test::read_body_json(resp).await;
	assert_eq!(body.errors["code"], vec!["Not a valid string.".to_string()]);
	assert_eq!(body.errors["exchange_rate"], vec!["Not a valid number.".to_string()]);
}

#[actix_web::test]
async fn test_create_currency_rejects_non_positive_rate() {
	let app = test_app!(memory_store());

	let resp = test::TestRequest::post()
		.uri("/currencies")
		.set_json(json!({"name": "Euro", "code": "EUR", "exchange_rate": -0.5}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_body_is_a_schema_error() {
	let app = test_app!(memory_store());

	let resp = test::TestRequest::post()
		.uri("/currencies")
		.insert_header(("Content-Type", "application/json"))
		.set_payload("{\"name\": ")
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ValidationResponse = test::read_body_json(resp).await;
	assert_eq!(body.errors["_schema"], vec!["Invalid input type.".to_string()]);

	let resp = test::TestRequest::post()
		.uri("/currencies")
		.set_json(json!(["USD"]))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_currencies_is_stable() {
	let store = memory_store();
	store.create_currency(TestFixtures::usd()).unwrap();
	store.create_currency(TestFixtures::eur()).unwrap();
	let app = test_app!(store);

	let first: Vec<Currency> = test::read_body_json(
		test::TestRequest::get().uri("/currencies").send_request(&app).await,
	)
	.await;
	let second: Vec<Currency> = test::read_body_json(
		test::TestRequest::get().uri("/currencies").send_request(&app).await,
	)
	.await;
	assert_eq!(first.len(), 2);
	assert_eq!(first, second);
}

#[actix_web::test]
async fn test_update_currency_replaces_every_field() {
	let store = memory_store();
	let usd = store.create_currency(TestFixtures::usd()).unwrap();
	let app = test_app!(store.clone());

	let resp = test::TestRequest::put()
		.uri(&format!("/currencies/{}", usd.id))
		.set_json(json!({"name": "Dollar", "code": "USD", "exchange_rate": 1.05}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let body: CurrencyUpdated = test::read_body_json(resp).await;
	assert_eq!(body.message, "Currency updated");
	assert_eq!(
		body.currency,
		Currency { id: usd.id, name: "Dollar".into(), code: "USD".into(), exchange_rate: 1.05 }
	);
	assert_eq!(store.find_currency(usd.id).unwrap(), Some(body.currency));
}

#[actix_web::test]
async fn test_update_currency_requires_full_body() {
	let store = memory_store();
	let usd = store.create_currency(TestFixtures::usd()).unwrap();
	let app = test_app!(store.clone());

	let resp = test::TestRequest::put()
		.uri(&format!("/currencies/{}", usd.id))
		.set_json(json!({"name": "Dollar", "code": "USD"}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ValidationResponse = test::read_body_json(resp).await;
	assert!(body.errors.contains_key("exchange_rate"));
	assert_eq!(store.find_currency(usd.id).unwrap(), Some(usd));
}

#[actix_web::test]
async fn test_update_currency_to_taken_code() {
	let store = memory_store();
	let usd = store.create_currency(TestFixtures::usd()).unwrap();
	store.create_currency(TestFixtures::eur()).unwrap();
	let app = test_app!(store);

	let resp = test::TestRequest::put()
		.uri(&format!("/currencies/{}", usd.id))
		.set_json(json!({"name": "US Dollar", "code": "EUR", "exchange_rate": 1.0}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_missing_currency_is_not_found() {
	let app = test_app!(memory_store());

	let get = test::TestRequest::get().uri("/currencies/42").send_request(&app).await;
	let put = test::TestRequest::put()
		.uri("/currencies/42")
		.set_json(TestFixtures::usd_body())
		.send_request(&app)
		.await;
	let delete = test::TestRequest::delete().uri("/currencies/42").send_request(&app).await;

	for resp in [get, put, delete] {
		assert_eq!(resp.status(), StatusCode::NOT_FOUND);
		let body: MessageResponse = test::read_body_json(resp).await;
		assert_eq!(body.message, "Currency not found");
	}
}

#[actix_web::test]
async fn test_delete_currency() {
	let store = memory_store();
	let eur = store.create_currency(TestFixtures::eur()).unwrap();
	let app = test_app!(store.clone());

	let resp = test::TestRequest::delete()
		.uri(&format!("/currencies/{}", eur.id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let body: MessageResponse = test::read_body_json(resp).await;
	assert_eq!(body.message, "Currency deleted");

	let resp = test::TestRequest::get()
		.uri(&format!("/currencies/{}", eur.id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_referenced_currency_is_restricted() {
	let store = memory_store();
	let usd = store.create_currency(TestFixtures::usd()).unwrap();
	store.create_user(TestFixtures::user("ana", usd.id)).unwrap();
	let app = test_app!(store.clone());

	let resp = test::TestRequest::delete()
		.uri(&format!("/currencies/{}", usd.id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CONFLICT);
	let body: Value = test::read_body_json(resp).await;
	assert!(body.get("message").is_some());
	assert_eq!(store.find_currency(usd.id).unwrap(), Some(usd));
}

#[actix_web::test]
async fn test_non_numeric_id_does_not_match() {
	let app = test_app!(memory_store());

	let resp = test::TestRequest::get().uri("/currencies/usd").send_request(&app).await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
