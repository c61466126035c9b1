//! Database connection settings read from the process environment.
//!
//! The connection target defaults to a local `mini_project` database owned by
//! `postgres`; the password is the only required secret. `DATABASE_URL`
//! overrides everything when present. Call [`load_dotenv`] first so values
//! kept in a `.env` file reach the process environment.

use std::path::PathBuf;

use mockable::Env;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::pool::PoolConfig;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const PASSWORD_ENV: &str = "PASSWORD";
const HOST_ENV: &str = "DATABASE_HOST";
const NAME_ENV: &str = "DATABASE_NAME";
const USER_ENV: &str = "DATABASE_USER";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_NAME: &str = "mini_project";
const DEFAULT_USER: &str = "postgres";

/// Errors raised while reading database settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseSettingsError {
    /// A required environment variable is missing or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
}

/// Resolved database connection target.
///
/// The URL embeds the password, so it is wiped from memory on drop and never
/// printed by `Debug`.
pub struct DatabaseSettings {
    url: Zeroizing<String>,
    host: String,
    name: String,
}

impl DatabaseSettings {
    /// Read settings from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseSettingsError::MissingEnv`] when neither
    /// `DATABASE_URL` nor `PASSWORD` is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::MockEnv;
    /// use users_backend::outbound::persistence::DatabaseSettings;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "PASSWORD" => Some("secret".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = DatabaseSettings::from_env(&env).expect("password present");
    /// assert_eq!(settings.database_name(), "mini_project");
    /// ```
    pub fn from_env<E: Env>(env: &E) -> Result<Self, DatabaseSettingsError> {
        let host = env_or_default(env, HOST_ENV, DEFAULT_HOST);
        let name = env_or_default(env, NAME_ENV, DEFAULT_NAME);

        if let Some(url) = non_blank(env.string(DATABASE_URL_ENV)) {
            return Ok(Self {
                url: Zeroizing::new(url),
                host,
                name,
            });
        }

        let user = env_or_default(env, USER_ENV, DEFAULT_USER);
        let password = non_blank(env.string(PASSWORD_ENV))
            .map(Zeroizing::new)
            .ok_or(DatabaseSettingsError::MissingEnv { name: PASSWORD_ENV })?;
        let url = Zeroizing::new(format!(
            "postgresql://{user}:{}@{host}/{name}",
            password.as_str()
        ));

        Ok(Self { url, host, name })
    }

    /// Host the service connects to (informational when a URL override is used).
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Database name (informational when a URL override is used).
    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.name
    }

    /// Pool configuration targeting this database.
    #[must_use]
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.url.as_str())
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &"<redacted>")
            .field("host", &self.host)
            .field("name", &self.name)
            .finish()
    }
}

/// Load `.env` from the working directory or one of its ancestors.
///
/// Variables already present in the process environment win over the file.
/// A missing file is normal; an unreadable one is logged and skipped.
pub fn load_dotenv() -> Option<PathBuf> {
    report_dotenv(dotenvy::dotenv())
}

fn report_dotenv(result: dotenvy::Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(path) => {
            debug!(path = %path.display(), "loaded environment file");
            Some(path)
        }
        Err(err) if err.not_found() => {
            debug!("no environment file found");
            None
        }
        Err(err) => {
            warn!(error = %err, "ignoring unreadable environment file");
            None
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn env_or_default<E: Env>(env: &E, name: &'static str, default: &str) -> String {
    match env.string(name) {
        Some(value) if !value.trim().is_empty() => value,
        Some(_) => {
            warn!(name, default, "blank database setting; using default");
            default.to_owned()
        }
        None => default.to_owned(),
    }
}
