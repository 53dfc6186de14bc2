use serde::Deserialize;
use tokio::sync::OnceCell;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config};

mod error;
pub use error::{ConfigError, ConfigResult};

const DEFAULT_TOKEN_LENGTH: usize = 32;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    token: TokenSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TokenSettings {
    length: usize,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl Config {
    /// Returns the process wide configuration, loading it on first use.
    ///
    /// A missing file yields the defaults. An unreadable or invalid file is an error and leaves
    /// the cache empty, so a later call reads the file again.
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> ConfigResult<&'static Config> {
        CONFIG
            .get_or_try_init(|| async { Self::load(use_local) })
            .await
            .inspect_err(|e| crate::error::log_error(e))
    }

    /// Reads and validates the config file. A missing file yields the defaults.
    pub fn load(use_local: bool) -> ConfigResult<Self> {
        let bytes = match read_config(use_local) {
            Ok(b) => b,
            Err(ConfigError::ConfigNotFound) => {
                tracing::debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(e),
        };

        let config = Self::from_slice(&bytes)?;
        Ok(config)
    }

    pub fn from_slice(bytes: &[u8]) -> ConfigResult<Self> {
        let config: Self = toml::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.token.length == 0 {
            return Err(ConfigError::InvalidTokenLength(self.token.length));
        }
        Ok(())
    }

    #[inline]
    pub fn token(&self) -> &TokenSettings {
        &self.token
    }
}

impl TokenSettings {
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }
}
