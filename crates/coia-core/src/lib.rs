//! # coia-core
//!
//! Localized alias generation.
//!
//! An alias is built in two stages:
//! - [`resolver`] validates role/flags/who/scope input and fills the
//!   per-language phrase template
//! - [`normalize`](mod@normalize) reduces that phrase to a lowercase, hyphen-separated
//!   string safe to use as an identifier
//!
//! ```
//! let alias = coia_core::create_alias(
//!     "fr",
//!     Some("20"),
//!     None,
//!     "Directeur général",
//!     Some("Crédit Agricole"),
//! )
//! .unwrap();
//! assert_eq!(alias, "02-moi-comme-directeur-général-à-crédit-agricole");
//! ```

pub mod config;
pub mod error;
pub mod languages;
pub mod normalize;
pub mod resolver;
pub mod template;

pub use config::{AliasConfig, AliasConfigBuilder, ConfigError};
pub use error::{AliasError, AliasResult};
pub use normalize::{DEFAULT_DELETION_CLASS, DeletionClass, Normalizer, normalize};
pub use resolver::{AliasRequest, ME_AS_ARG, resolve};

/// Create an alias with the default configuration.
///
/// Passing `None` or `Some("")` for `who` substitutes the localized
/// first-person pronoun; `None` or an empty `scope` omits the scope clause.
pub fn create_alias(
    lang: &str,
    flags: Option<&str>,
    who: Option<&str>,
    role: &str,
    scope: Option<&str>,
) -> AliasResult<String> {
    let request = AliasRequest::from_parts(lang, flags, who, role, scope);
    create_alias_with(&request, &AliasConfig::default())
}

/// Create an alias for `request` using `config`'s normalizer.
pub fn create_alias_with(request: &AliasRequest, config: &AliasConfig) -> AliasResult<String> {
    let phrase = resolve(request)?;
    Ok(config.normalizer().normalize(&phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_alias() {
        let alias = create_alias(
            "fr",
            Some("20"),
            Some(""),
            "Directeur général",
            Some("Crédit Agricole"),
        )
        .unwrap();
        assert_eq!(alias, "02-moi-comme-directeur-général-à-crédit-agricole");
    }

    #[test]
    fn test_english_scope_collapses_double_space() {
        let alias = create_alias("en", None, None, "CEO", Some("Acme")).unwrap();
        assert_eq!(alias, "me-as-ceo-at-acme");
    }

    #[test]
    fn test_errors_pass_through() {
        assert_eq!(
            create_alias("en", Some("abc"), None, "", None),
            Err(AliasError::EmptyRole)
        );
        assert_eq!(
            create_alias("xx", None, Some("bob"), "ceo", None),
            Err(AliasError::NoTemplate("xx".into()))
        );
    }

    #[test]
    fn test_create_alias_with_strict_config() {
        let config = AliasConfig::builder()
            .deletion(DeletionClass::Strict)
            .build()
            .unwrap();
        let request = AliasRequest::new("ja", "マネージャー");
        assert_eq!(
            create_alias_with(&request, &config).unwrap(),
            "私としてマネジャ"
        );
        assert_eq!(
            create_alias_with(&request, &AliasConfig::default()).unwrap(),
            "私としてマネージャー"
        );
    }
}
