//! Template resolution: validates an [`AliasRequest`] and renders the
//! human-readable phrase for its language.

use crate::error::{AliasError, AliasResult};
use crate::languages;
use crate::template::interpolate;

/// Maximum number of characters accepted in `flags`.
pub const MAX_FLAGS_LEN: usize = 10;

/// Value of `who` that requests the localized first-person pronoun.
///
/// NOTE: this is the same empty string an omitted `who` defaults to, so a
/// request without `who` always gets the pronoun. Callers rely on passing
/// `""` deliberately; do not split "absent" from "use pronoun".
pub const ME_AS_ARG: &str = "";

/// Input for a single alias.
///
/// Optional fields default to empty strings. All fields are trimmed before
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasRequest {
    pub lang: String,
    pub flags: String,
    pub who: String,
    pub role: String,
    pub scope: String,
}

impl AliasRequest {
    /// Create a request with only the mandatory fields.
    pub fn new(lang: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }

    pub fn with_who(mut self, who: impl Into<String>) -> Self {
        self.who = who.into();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Build a request from optional parts, as the public entry point takes them.
    pub fn from_parts(
        lang: &str,
        flags: Option<&str>,
        who: Option<&str>,
        role: &str,
        scope: Option<&str>,
    ) -> Self {
        Self {
            lang: lang.to_string(),
            flags: flags.unwrap_or_default().to_string(),
            who: who.unwrap_or_default().to_string(),
            role: role.to_string(),
            scope: scope.unwrap_or_default().to_string(),
        }
    }
}

/// Check `role` and `flags` in order: empty role, non-digit flags, length.
fn validate(role: &str, flags: &str) -> AliasResult<()> {
    if role.is_empty() {
        return Err(AliasError::EmptyRole);
    }
    if !flags.is_empty() && !flags.chars().all(|c| c.is_ascii_digit()) {
        return Err(AliasError::InvalidFlags);
    }
    if flags.chars().count() > MAX_FLAGS_LEN {
        return Err(AliasError::FlagsTooLong);
    }
    Ok(())
}

/// Sort the flag digits ascending and append a separator space.
///
/// Empty flags render as an empty string with no separator.
pub fn render_flags(flags: &str) -> String {
    if flags.is_empty() {
        return String::new();
    }
    let mut chars: Vec<char> = flags.chars().collect();
    chars.sort_unstable();
    let mut rendered: String = chars.into_iter().collect();
    rendered.push(' ');
    rendered
}

/// Render the scope clause for `lang`, or an empty string if `scope` is empty.
///
/// One space is always prepended on top of whatever the language template
/// starts with. Normalization later collapses the resulting double space.
pub fn render_scope(lang: &str, scope: &str) -> AliasResult<String> {
    if scope.is_empty() {
        return Ok(String::new());
    }
    let template = languages::scope_template(lang)
        .ok_or_else(|| AliasError::NoScopeTemplate(lang.to_string()))?;
    Ok(format!(" {}", interpolate(template, &[("org", scope)])))
}

/// Resolve the pronoun sentinel; explicit `who` values pass through.
fn resolve_who<'a>(lang: &str, who: &'a str) -> AliasResult<&'a str> {
    if who != ME_AS_ARG {
        return Ok(who);
    }
    languages::pronoun(lang).ok_or_else(|| AliasError::NoPronounTranslation(lang.to_string()))
}

/// Produce the interpolated, not yet normalized phrase for a request.
///
/// Lookups happen in a fixed order (pronoun, scope template, phrase
/// template), so an unknown language is reported by the first table the
/// request actually needs.
pub fn resolve(request: &AliasRequest) -> AliasResult<String> {
    let lang = request.lang.as_str();
    let flags = request.flags.trim();
    let who = request.who.trim();
    let role = request.role.trim();
    let scope = request.scope.trim();

    if let Err(e) = validate(role, flags) {
        tracing::debug!(lang, error = %e, "alias request rejected");
        return Err(e);
    }

    let who = resolve_who(lang, who)?;
    let flags = render_flags(flags);
    let scope = render_scope(lang, scope)?;
    let template =
        languages::phrase_template(lang).ok_or_else(|| AliasError::NoTemplate(lang.to_string()))?;

    let phrase = interpolate(template, &[
        ("flags", flags.as_str()),
        ("who", who),
        ("role", role),
        ("scope", scope.as_str()),
    ]);
    tracing::trace!(lang, phrase = %phrase, "resolved phrase");
    Ok(phrase)
}
