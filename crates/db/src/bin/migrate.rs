//! Maintenance binary: connect, health-check, and apply pending migrations.
//!
//! Run once at deploy time (or locally after pulling schema changes):
//!
//! ```sh
//! DATABASE_URL=postgres://... cargo run --bin qna-migrate
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qna_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = qna_db::DbConfig::from_env();

    let pool = qna_db::create_pool(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    qna_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    qna_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");
}
