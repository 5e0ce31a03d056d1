use crate::handler::UserHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// user mgmt routes; no single-get or delete
		.route("/users", web::post().to(UserHandler::create_user_handler))
		.route("/users", web::get().to(UserHandler::list_users_handler))
		.route("/users/{id}", web::put().to(UserHandler::update_user_handler));
}
