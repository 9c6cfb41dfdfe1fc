use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development
/// except the JWT signing secret and the database password, which must
/// be supplied.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Database connection parameters.
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `8000`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }
}

/// Database connection parameters, assembled into a URL for sqlx.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl DatabaseConfig {
    /// Load database parameters from environment variables.
    ///
    /// | Env Var       | Required | Default     |
    /// |---------------|----------|-------------|
    /// | `DB_NAME`     | no       | `campus`    |
    /// | `DB_USER`     | no       | `postgres`  |
    /// | `DB_PASSWORD` | **yes**  | --          |
    /// | `DB_HOST`     | no       | `localhost` |
    /// | `DB_PORT`     | no       | `5432`      |
    ///
    /// # Panics
    ///
    /// Panics if `DB_PASSWORD` is not set.
    pub fn from_env() -> Self {
        let name = std::env::var("DB_NAME").unwrap_or_else(|_| "campus".into());
        let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into());
        let password =
            std::env::var("DB_PASSWORD").expect("DB_PASSWORD must be set in the environment");
        let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
        let port: u16 = std::env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");

        Self {
            name,
            user,
            password,
            host,
            port,
        }
    }

    /// Build the connection URL consumed by the pool.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
