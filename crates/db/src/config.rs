/// Database configuration loaded from environment variables.
///
/// All fields except `DATABASE_URL` have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Pool size cap (default: `20`).
    pub max_connections: u32,
    /// How long to wait for a free connection, in seconds (default: `5`).
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default    |
    /// |---------------------------------|------------|
    /// | `DATABASE_URL`                  | (required) |
    /// | `DATABASE_MAX_CONNECTIONS`      | `20`       |
    /// | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `5`        |
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let acquire_timeout_secs: u64 = std::env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DATABASE_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        Self {
            database_url,
            max_connections,
            acquire_timeout_secs,
        }
    }
}
