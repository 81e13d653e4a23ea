pub type Pool = sqlx::sqlite::SqlitePool;
pub type Session = sqlx::pool::PoolConnection<sqlx::Sqlite>;
pub type Error = sqlx::Error;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_url")]
    url: String,
    #[serde(default = "Config::default_max_connections")]
    max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            max_connections: Self::default_max_connections(),
        }
    }
}

impl Config {
    pub fn default_url() -> String {
        String::from("sqlite::memory:")
    }

    pub fn default_max_connections() -> u32 {
        5
    }

    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL").unwrap_or_else(|_| Self::default_url()),
            max_connections: Self::default_max_connections(),
        }
    }

    // in-memory sqlite gives every connection its own empty database,
    // a single connection keeps the fixtures visible across queries
    #[cfg(test)]
    pub fn test_env() -> Self {
        Self {
            url: Self::default_url(),
            max_connections: 1,
        }
    }

    pub async fn build(&self) -> Result<Pool, Error> {
        sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.url)
            .await
    }
}

pub async fn migrate(pool: &Pool) -> Result<(), Error> {
    sqlx::migrate!().run(pool).await.map_err(Error::from)
}
