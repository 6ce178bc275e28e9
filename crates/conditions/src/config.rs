//! Process-wide settings for failure messages.
//!
//! The configuration is read on every failure and never changes once a chain
//! has observed it: [`install`] succeeds at most once, and before that the
//! defaults apply.
//!
//! ```
//! use nebula_conditions::config::ConditionsConfig;
//!
//! let config = ConditionsConfig::from_json(r#"{ "show_actual_values": false }"#).unwrap();
//! assert_eq!(config.default_name, "value");
//! assert!(!config.show_actual_values);
//! ```

use std::sync::{LazyLock, OnceLock};

use serde::{Deserialize, Serialize};

use crate::checks::TextChecks;
use crate::entry::requires;
use crate::foundation::ConditionError;

/// Message rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConditionsConfig {
    /// Name used when a validator is created without one.
    pub default_name: String,

    /// Whether failure messages end with "The actual value is ...".
    pub show_actual_values: bool,

    /// Maximum rendered length of an actual value, in chars.
    pub max_actual_value_len: usize,
}

impl Default for ConditionsConfig {
    fn default() -> Self {
        Self {
            default_name: "value".to_string(),
            show_actual_values: true,
            max_actual_value_len: 256,
        }
    }
}

impl ConditionsConfig {
    /// Parses and validates a JSON configuration. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// [`ConfigError::Invalid`] for values rejected by [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the default name is not blank and the length limit is positive.
    ///
    /// # Errors
    ///
    /// The first violated precondition.
    pub fn validate(&self) -> Result<(), ConditionError> {
        requires(&self.default_name, "default_name").is_not_null_or_white_space()?;
        requires(&self.max_actual_value_len, "max_actual_value_len").is_greater_than(0)?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration was already installed.
    #[error("conditions configuration is already installed")]
    AlreadyInstalled,

    #[error("invalid conditions configuration: {0}")]
    Invalid(#[from] ConditionError),

    #[error("failed to parse conditions configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

static INSTALLED: OnceLock<ConditionsConfig> = OnceLock::new();
static DEFAULT: LazyLock<ConditionsConfig> = LazyLock::new(ConditionsConfig::default);

/// The installed configuration, or the defaults.
pub fn current() -> &'static ConditionsConfig {
    INSTALLED.get().unwrap_or_else(|| LazyLock::force(&DEFAULT))
}

/// Installs `config` for the rest of the process.
///
/// # Errors
///
/// [`ConfigError::Invalid`] if the configuration does not validate,
/// [`ConfigError::AlreadyInstalled`] on every call after the first successful one.
pub fn install(config: ConditionsConfig) -> Result<(), ConfigError> {
    config.validate()?;
    INSTALLED
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;

    let installed = current();
    tracing::debug!(
        default_name = %installed.default_name,
        show_actual_values = installed.show_actual_values,
        max_actual_value_len = installed.max_actual_value_len,
        "conditions configuration installed"
    );
    Ok(())
}
