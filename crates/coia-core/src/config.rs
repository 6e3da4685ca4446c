//! Deployment configuration

use crate::languages;
use crate::normalize::{DeletionClass, Normalizer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or building an [`AliasConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported default language: {lang}")]
    UnsupportedLanguage { lang: String },
}

/// Settings that stay fixed for a deployment.
///
/// ```toml
/// deletion = "strict"
/// default_lang = "fr"
/// locale = "es"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AliasConfig {
    /// Characters deleted during normalization.
    pub deletion: DeletionClass,

    /// Alias language used when the caller does not name one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lang: Option<String>,

    /// Locale for user-facing messages. Never affects alias output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl AliasConfig {
    pub fn builder() -> AliasConfigBuilder {
        AliasConfigBuilder::new()
    }

    /// Parse and validate a TOML document.
    ///
    /// `path` is only used for error reporting.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AliasConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        tracing::debug!(path = %path.display(), deletion = ?config.deletion, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(lang) = &self.default_lang {
            if !languages::is_supported(lang) {
                return Err(ConfigError::UnsupportedLanguage { lang: lang.clone() });
            }
        }
        Ok(())
    }

    /// Normalizer using this configuration's deletion class.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.deletion)
    }
}

/// Builder for [`AliasConfig`], validated on [`build`](Self::build).
///
/// ```rust
/// use coia_core::{AliasConfig, DeletionClass};
///
/// let config = AliasConfig::builder()
///     .deletion(DeletionClass::Strict)
///     .default_lang("fr")
///     .build()
///     .expect("valid config");
/// assert_eq!(config.deletion, DeletionClass::Strict);
/// ```
#[derive(Debug, Default)]
pub struct AliasConfigBuilder {
    deletion: Option<DeletionClass>,
    default_lang: Option<String>,
    locale: Option<String>,
}

impl AliasConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    pub fn deletion(&mut self, deletion: DeletionClass) -> &mut Self {
        self.deletion = Some(deletion);
        self
    }

    pub fn default_lang(&mut self, lang: impl Into<String>) -> &mut Self {
        self.default_lang = Some(lang.into());
        self
    }

    pub fn locale(&mut self, locale: impl Into<String>) -> &mut Self {
        self.locale = Some(locale.into());
        self
    }

    /// Drains the builder; a second call yields a default config.
    pub fn build(&mut self) -> Result<AliasConfig, ConfigError> {
        let config = AliasConfig {
            deletion: self.deletion.take().unwrap_or_default(),
            default_lang: self.default_lang.take(),
            locale: self.locale.take(),
        };
        config.validate()?;
        Ok(config)
    }
}
