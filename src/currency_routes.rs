use crate::handler::CurrencyHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// currency mgmt routes
		.route("/currencies", web::post().to(CurrencyHandler::create_currency_handler))
		.route("/currencies", web::get().to(CurrencyHandler::list_currencies_handler))
		.route("/currencies/{id}", web::get().to(CurrencyHandler::get_currency_handler))
		.route("/currencies/{id}", web::put().to(CurrencyHandler::update_currency_handler))
		.route("/currencies/{id}", web::delete().to(CurrencyHandler::delete_currency_handler));
}
