use clap::Parser;

/// Runtime settings. Every flag falls back to the environment (and `.env`).
#[derive(Parser, Debug, Clone)]
#[command(name = "currency-ledger", version, about = "Currency, user and transaction records over HTTP")]
pub struct Config {
	/// Postgres connection string.
	#[arg(long, env = "DATABASE_URL")]
	pub database_url: String,

	/// Address the HTTP server binds to.
	#[arg(long, env = "SOCKET_URL", default_value = "0.0.0.0:8080")]
	pub socket_url: String,

	/// Maximum number of pooled database connections.
	#[arg(long, env = "DB_POOL_SIZE", default_value_t = 10)]
	pub pool_size: u32,

	/// Apply pending migrations before serving.
	#[arg(long, env = "RUN_MIGRATIONS", default_value_t = true, action = clap::ArgAction::Set)]
	pub run_migrations: bool,
}
