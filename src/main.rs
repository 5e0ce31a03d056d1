mod config;
mod constants;
mod currency_routes;
mod db;
mod errors;
mod handler;
mod models;
mod repo;
mod schema;
mod store;
#[cfg(test)]
mod tests;
mod transaction_routes;
mod user_routes;
mod validation;
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use config::Config;
use dotenvy::dotenv;
use env_logger::Env;
use repo::PgStore;
use std::sync::Arc;
use store::RecordStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	dotenv().ok();
	env_logger::init_from_env(Env::default().default_filter_or("info"));
	let config = Config::parse();

	let pool = db::build_pool(&config.database_url, config.pool_size)?;
	if config.run_migrations {
		db::run_migrations(&pool)?;
	}
	let store: Arc<dyn RecordStore> = Arc::new(PgStore::new(pool));
	let store = web::Data::from(store);

	log::info!("Listening on: {}..", config.socket_url);
	HttpServer::new(move || {
		App::new()
			.app_data(store.clone())
			.app_data(handler::json_config())
			.wrap(
				Cors::default()
					.allow_any_origin()
					.allow_any_method()
					.allow_any_header()
					.max_age(3600),
			)
			.wrap(Logger::default())
			.configure(currency_routes::init)
			.configure(user_routes::init)
			.configure(transaction_routes::init)
	})
	.bind(&config.socket_url)?
	.run()
	.await?;

	Ok(())
}
