//! Message locale selection for the coia CLI.
//!
//! This only picks the language of CLI messages. The alias language always
//! comes from `--lang` or `default_lang` and never from the environment.
//!
//! An explicit request (`--locale`, then the config `locale` field) wins
//! outright; an unsupported one warns and uses English. Otherwise the first
//! recognizable value among `COIA_LOCALE`, `LC_ALL`, `LANG` and the system
//! locale is used, falling back to English.

use colored::Colorize;
use rust_i18n::{set_locale, t};

const DEFAULT_LOCALE: &str = "en";

const ENV_VARS: [&str; 3] = ["COIA_LOCALE", "LC_ALL", "LANG"];

/// Map a POSIX or BCP 47 locale string onto a message catalog.
///
/// Encoding and modifier suffixes are ignored. Traditional Chinese regions
/// and scripts have no catalog and are not matched.
fn catalog_for(raw: &str) -> Option<&'static str> {
    let base = raw.trim().split(['.', '@']).next()?;
    let mut subtags = base.split(['_', '-']).map(str::to_ascii_lowercase);
    let lang = subtags.next()?;
    let traditional = subtags.any(|s| matches!(s.as_str(), "tw" | "hk" | "mo" | "hant"));

    match lang.as_str() {
        "en" => Some("en"),
        "es" => Some("es"),
        "zh" if !traditional => Some("zh-CN"),
        _ => None,
    }
}

fn detect() -> &'static str {
    ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .chain(sys_locale::get_locale())
        .find_map(|raw| catalog_for(&raw))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Select and activate the message locale, returning the catalog used.
pub fn init(cli_locale: Option<&str>, config_locale: Option<&str>) -> &'static str {
    let locale = match cli_locale.or(config_locale) {
        Some(requested) => catalog_for(requested).unwrap_or_else(|| {
            set_locale(DEFAULT_LOCALE);
            eprintln!(
                "{} {}",
                t!("cli.warning_prefix").yellow().bold(),
                t!("cli.unsupported_locale", locale = requested)
            );
            DEFAULT_LOCALE
        }),
        None => detect(),
    };

    tracing::debug!(locale, "message locale selected");
    set_locale(locale);
    locale
}
