//! Cross-crate integration tests verifying the contracts the CLI relies on.
//!
//! The coia binary reads a TOML config, builds an `AliasRequest` from its
//! flags and reports errors by `AliasError::kind()`. These tests exercise
//! coia-core through the same entry points.

use coia_core::{AliasConfig, AliasError, AliasRequest, DeletionClass, languages};
use std::io::Write;

// ============================================================================
// CLI <-> core contracts
// ============================================================================

#[test]
fn cli_request_from_parts_matches_create_alias() {
    let request = AliasRequest::from_parts(
        "fr",
        Some("20"),
        None,
        "Directeur général",
        Some("Crédit Agricole"),
    );
    let via_config = coia_core::create_alias_with(&request, &AliasConfig::default()).unwrap();
    let direct = coia_core::create_alias(
        "fr",
        Some("20"),
        None,
        "Directeur général",
        Some("Crédit Agricole"),
    )
    .unwrap();

    assert_eq!(via_config, direct);
    assert_eq!(direct, "02-moi-comme-directeur-général-à-crédit-agricole");
}

#[test]
fn cli_config_file_drives_normalizer() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"deletion = \"strict\"\ndefault_lang = \"ja\"\n")
        .unwrap();
    file.flush().unwrap();

    let config = AliasConfig::load(file.path()).unwrap();
    let lang = config.default_lang.as_deref().unwrap();
    let request = AliasRequest::new(lang, "マネージャー");

    assert_eq!(config.deletion, DeletionClass::Strict);
    assert_eq!(
        coia_core::create_alias_with(&request, &config).unwrap(),
        "私としてマネジャ"
    );
}

#[test]
fn cli_error_kinds_are_stable() {
    // The CLI's JSON output and locale keys are keyed on these identifiers
    let expected = [
        (AliasError::EmptyRole, "empty_role"),
        (AliasError::InvalidFlags, "invalid_flags"),
        (AliasError::FlagsTooLong, "flags_too_long"),
        (
            AliasError::NoPronounTranslation("xx".into()),
            "no_pronoun_translation",
        ),
        (AliasError::NoScopeTemplate("xx".into()), "no_scope_template"),
        (AliasError::NoTemplate("xx".into()), "no_template"),
    ];
    for (error, kind) in expected {
        assert_eq!(error.kind(), kind);
    }
}

#[test]
fn cli_locale_keys_cover_every_error_kind() {
    let root = env!("CARGO_MANIFEST_DIR");
    for locale in ["en", "es", "zh-CN"] {
        let path = format!("{root}/crates/coia-cli/locales/{locale}.yml");
        let content = std::fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Failed to read {path}"));
        for kind in [
            "empty_role",
            "invalid_flags",
            "flags_too_long",
            "no_pronoun_translation",
            "no_scope_template",
            "no_template",
        ] {
            assert!(
                content.contains(&format!("{kind}:")),
                "{locale}.yml is missing cli.alias_error.{kind}"
            );
        }
    }
}

// ============================================================================
// Language table contracts
// ============================================================================

#[test]
fn every_supported_language_produces_an_alias() {
    for &(lang, _) in languages::SUPPORTED_LANGUAGES {
        let alias = coia_core::create_alias(lang, Some("1"), None, "Role", Some("Org"))
            .unwrap_or_else(|e| panic!("{lang}: {e}"));
        assert!(alias.starts_with("1-"), "{lang}: {alias}");
        assert!(alias.ends_with("org"), "{lang}: {alias}");
    }
}

#[test]
fn every_supported_language_is_idempotent() {
    for &(lang, _) in languages::SUPPORTED_LANGUAGES {
        let alias = coia_core::create_alias(lang, Some("42"), None, "Head of R&D", Some("Acme, Inc."))
            .unwrap();
        assert_eq!(coia_core::normalize(&alias), alias, "{lang}");
    }
}
