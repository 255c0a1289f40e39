//! Provider profiles loaded from TOML.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (`include_str!` of `bayou.toml`)
//! - `~/.config/bayou/bayou.toml`
//! - `./bayou.toml`
//! - `BAYOU__*` environment variables

use bayou_core::{EndpointShape, ProviderConfig, DEFAULT_TIMEOUT};
use bayou_error::{BayouError, BayouResult, ConfigError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::DEFAULT_API_KEY_ENV;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// Settings shared across profiles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// Profile used when the caller names none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// One named provider.
///
/// ```toml
/// [providers.sora]
/// endpoint_shape = "sora"
/// base_url = "https://api.example.com/v1"
/// model = "sora-2"
/// timeout_secs = 30
/// api_key_env = "BAYOU_VIDEO_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderProfile {
    /// Dialect the provider speaks
    pub endpoint_shape: EndpointShape,

    /// Base URL the dialect paths are appended to
    pub base_url: String,

    /// Model identifier overriding the dialect default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl ProviderProfile {
    /// Resolves the profile into per-call settings.
    ///
    /// The API key is read from `api_key_env`; an unset variable leaves the
    /// key empty so the job client can apply its own fallback.
    pub fn to_provider_config(&self) -> ProviderConfig {
        let mut config = ProviderConfig::new(self.endpoint_shape, self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Ok(key) = std::env::var(&self.api_key_env) {
            config = config.with_api_key(key);
        }
        config
    }
}

/// Top-level Bayou configuration.
///
/// # Example
///
/// ```no_run
/// use bayou_providers::BayouConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BayouConfig::load()?;
/// let provider = config.provider_config(None)?;
/// println!("Submitting to {}", provider.base_url());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct BayouConfig {
    /// Shared settings
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Map of profile name to provider profile
    #[serde(default)]
    pub providers: HashMap<String, ProviderProfile>,
}

impl BayouConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> BayouResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                BayouError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                BayouError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn from_toml(text: &str) -> BayouResult<Self> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                BayouError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    #[instrument]
    pub fn load() -> BayouResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        const DEFAULT_CONFIG: &str = include_str!("../../../bayou.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/bayou/bayou.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("bayou").required(false))
            .add_source(Environment::with_prefix("BAYOU").separator("__"));

        builder
            .build()
            .map_err(|e| {
                BayouError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                BayouError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Name of the default profile, if configured.
    pub fn default_provider(&self) -> Option<&str> {
        self.defaults.provider.as_deref()
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&ProviderProfile> {
        self.providers.get(name)
    }

    /// Resolve a profile into per-call settings.
    ///
    /// `None` selects the default profile.
    ///
    /// # Errors
    ///
    /// Returns an error if no profile is named and there is no default, or the
    /// named profile does not exist.
    pub fn provider_config(&self, name: Option<&str>) -> BayouResult<ProviderConfig> {
        let name = name.or(self.default_provider()).ok_or_else(|| {
            BayouError::from(ConfigError::new(
                "No provider named and no defaults.provider configured",
            ))
        })?;
        let profile = self.profile(name).ok_or_else(|| {
            BayouError::from(ConfigError::new(format!(
                "Unknown provider profile: {}",
                name
            )))
        })?;
        debug!(provider = name, shape = %profile.endpoint_shape, "Resolved provider profile");
        Ok(profile.to_provider_config())
    }
}
