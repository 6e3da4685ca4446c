//! Embedded per-language tables.
//!
//! Three independent tables drive alias resolution: the first-person
//! pronoun, the phrase template and the scope template. They are compiled
//! into the binary and never change at runtime. A language is only usable
//! for a given call if every table that call reaches has an entry for it.
//!
//! Adding a language means adding a row to all three tables (and to
//! [`SUPPORTED_LANGUAGES`]).

/// Languages with an entry in every table, with their display names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "French / Francais"),
    ("es", "Spanish / Espanol"),
    ("de", "German / Deutsch"),
    ("pt", "Portuguese / Portugues"),
    ("ja", "Japanese / Nihongo"),
    ("zh", "Chinese / Zhongwen"),
    ("ko", "Korean / Hangugeo"),
    ("ar", "Arabic / Al-Arabiyya"),
    ("he", "Hebrew / Ivrit"),
    ("ru", "Russian / Russkiy"),
];

/// First-person pronoun substituted when no explicit `who` is given.
pub const PRONOUNS: &[(&str, &str)] = &[
    ("en", "me"),
    ("fr", "moi"),
    ("es", "yo"),
    ("de", "ich"),
    ("pt", "eu"),
    ("ja", "私"),
    ("zh", "我"),
    ("ko", "나"),
    ("ar", "أنا"),
    ("he", "אני"),
    ("ru", "я"),
];

/// Phrase templates with `{flags}`, `{who}`, `{role}` and `{scope}` slots.
pub const PHRASE_TEMPLATES: &[(&str, &str)] = &[
    ("en", "{flags}{who} as {role}{scope}"),
    ("fr", "{flags}{who} comme {role}{scope}"),
    ("es", "{flags}{who} como {role}{scope}"),
    ("de", "{flags}{who} als {role}{scope}"),
    ("pt", "{flags}{who} como {role}{scope}"),
    ("ja", "{flags}{who}として{role}{scope}"),
    ("zh", "{flags}{who}作为{role}{scope}"),
    ("ko", "{flags}{who}로서{role}{scope}"),
    ("ar", "{flags}{who} بصفتي {role}{scope}"),
    ("he", "{flags}{who} בתור {role}{scope}"),
    ("ru", "{flags}{who} как {role}{scope}"),
];

/// Scope clause templates with an `{org}` slot.
///
/// Spacing differs per language on purpose: CJK and Korean use a hyphen
/// instead of a leading space, Hebrew attaches the preposition directly to
/// the organization name.
pub const SCOPE_TEMPLATES: &[(&str, &str)] = &[
    ("en", " at {org}"),
    ("fr", " à {org}"),
    ("es", " en {org}"),
    ("de", " bei {org}"),
    ("pt", " na {org}"),
    ("ja", "に-{org}"),
    ("zh", "在-{org}"),
    ("ko", "-{org}"),
    ("ar", " في {org}"),
    ("he", " ב{org}"),
    ("ru", " в {org}"),
];

fn lookup(table: &'static [(&'static str, &'static str)], lang: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, value)| *value)
}

/// Localized first-person pronoun for `lang`.
pub fn pronoun(lang: &str) -> Option<&'static str> {
    lookup(PRONOUNS, lang)
}

/// Phrase template for `lang`.
pub fn phrase_template(lang: &str) -> Option<&'static str> {
    lookup(PHRASE_TEMPLATES, lang)
}

/// Scope clause template for `lang`.
pub fn scope_template(lang: &str) -> Option<&'static str> {
    lookup(SCOPE_TEMPLATES, lang)
}

/// Human-readable name of a supported language.
pub fn display_name(lang: &str) -> Option<&'static str> {
    lookup(SUPPORTED_LANGUAGES, lang)
}

/// Check if a language code is fully supported.
pub fn is_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|&(code, _)| code == lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(table: &[(&str, &str)]) -> Vec<String> {
        let mut codes: Vec<String> = table.iter().map(|(c, _)| c.to_string()).collect();
        codes.sort();
        codes
    }

    #[test]
    fn test_tables_cover_same_languages() {
        let supported = codes(SUPPORTED_LANGUAGES);
        assert_eq!(codes(PRONOUNS), supported);
        assert_eq!(codes(PHRASE_TEMPLATES), supported);
        assert_eq!(codes(SCOPE_TEMPLATES), supported);
    }

    #[test]
    fn test_no_duplicate_codes() {
        let mut all = codes(SUPPORTED_LANGUAGES);
        let original_len = all.len();
        all.dedup();
        assert_eq!(all.len(), original_len, "Should have no duplicate language codes");
    }

    #[test]
    fn test_phrase_templates_have_each_slot_once() {
        for (lang, template) in PHRASE_TEMPLATES {
            for slot in ["{flags}", "{who}", "{role}", "{scope}"] {
                assert_eq!(
                    template.matches(slot).count(),
                    1,
                    "{lang} template should contain {slot} exactly once"
                );
            }
        }
    }

    #[test]
    fn test_scope_templates_have_org_slot_once() {
        for (lang, template) in SCOPE_TEMPLATES {
            assert_eq!(template.matches("{org}").count(), 1, "{lang}");
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(pronoun("fr"), Some("moi"));
        assert_eq!(pronoun("ja"), Some("私"));
        assert_eq!(phrase_template("en"), Some("{flags}{who} as {role}{scope}"));
        assert_eq!(scope_template("ko"), Some("-{org}"));
        assert_eq!(display_name("en"), Some("English"));
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(pronoun("xx"), None);
        assert_eq!(phrase_template("xx"), None);
        assert_eq!(scope_template("xx"), None);
        assert!(!is_supported("xx"));
    }

    #[test]
    fn test_lookup_is_exact() {
        // Codes are matched verbatim; no case folding or region stripping
        assert!(!is_supported("EN"));
        assert!(!is_supported("fr_FR"));
        assert!(!is_supported(" en"));
        assert!(is_supported("en"));
    }
}
