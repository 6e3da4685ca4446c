//! Error types for alias resolution

use thiserror::Error;

pub type AliasResult<T> = Result<T, AliasError>;

/// Reasons an alias cannot be produced.
///
/// Every variant aborts the call; nothing is retried and there is no
/// fallback language. Normalization itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("Role cannot be empty")]
    EmptyRole,

    #[error("Flags must be all digits or empty")]
    InvalidFlags,

    #[error("Flags must be at most {max} characters", max = crate::resolver::MAX_FLAGS_LEN)]
    FlagsTooLong,

    #[error("No translation for 'me' in language {0}")]
    NoPronounTranslation(String),

    #[error("No scope template for language {0}")]
    NoScopeTemplate(String),

    #[error("No template for language {0}")]
    NoTemplate(String),
}

impl AliasError {
    /// Stable machine-readable identifier for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AliasError::EmptyRole => "empty_role",
            AliasError::InvalidFlags => "invalid_flags",
            AliasError::FlagsTooLong => "flags_too_long",
            AliasError::NoPronounTranslation(_) => "no_pronoun_translation",
            AliasError::NoScopeTemplate(_) => "no_scope_template",
            AliasError::NoTemplate(_) => "no_template",
        }
    }

    /// Language code the failure is attributed to, if any.
    pub fn lang(&self) -> Option<&str> {
        match self {
            AliasError::NoPronounTranslation(lang)
            | AliasError::NoScopeTemplate(lang)
            | AliasError::NoTemplate(lang) => Some(lang),
            _ => None,
        }
    }
}
