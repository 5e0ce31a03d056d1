use anyhow::{anyhow, Context};
use diesel::{
	prelude::*,
	r2d2::{self, ConnectionManager, PooledConnection},
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn build_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
	let manager = ConnectionManager::<PgConnection>::new(database_url);
	r2d2::Pool::builder().max_size(max_size).build(manager).context("Failed to create pool.")
}

pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
	let mut conn = pool.get().context("can not get a connection from the pool")?;
	let applied = conn
		.run_pending_migrations(MIGRATIONS)
		.map_err(|e| anyhow!("Unable to run migrations. Err: {}", e))?;
	if applied.is_empty() {
		log::info!("Database schema is up to date");
	}
	for version in applied {
		log::info!("Applied migration {}", version);
	}
	Ok(())
}
