//! Unicode normalization of resolved phrases into identifier-safe aliases.
//!
//! The pipeline is ordered and lossy:
//!
//! 1. NFKC composition
//! 2. Lowercasing
//! 3. Boundary punctuation (dashes, quotes, ampersands, periods, commas,
//!    apostrophes) replaced with a space
//! 4. Leading/trailing whitespace trimmed
//! 5. Disallowed characters deleted (see [`DeletionClass`]), then the
//!    survivors recomposed (NFC)
//! 6. Whitespace runs collapsed into a single `-`
//!
//! Step 3 must run before step 5: deleting boundary punctuation outright
//! would fuse the words on either side of it.
//!
//! Character classes are written as Unicode property queries and `\x{..}`
//! escapes only, never as literal non-ASCII characters.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

static PUNCT_TO_SPACE_PATTERN: OnceLock<Regex> = OnceLock::new();
static STANDARD_DELETION_PATTERN: OnceLock<Regex> = OnceLock::new();
static STRICT_DELETION_PATTERN: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUN_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Punctuation replaced by a space in step 3.
///
/// Dash punctuation, quotes (initial/final, `"`, and the CJK corner
/// brackets U+300C..U+300F), ampersand variants (`&` U+FE60 U+FF06), periods
/// and commas (`.` `,` U+201A U+060C U+2024 U+3002 U+FE52 U+FF0E U+FF61) and
/// apostrophes (`'` U+2019 U+2018 U+201B U+FF07).
pub const PUNCT_TO_SPACE_CLASS: &str = concat!(
    r"[\p{Pd}\p{Pi}\p{Pf}",
    r"\x{22}\x{300C}-\x{300F}",
    r"&\x{FE60}\x{FF06}",
    r".,\x{201A}\x{060C}\x{2024}\x{3002}\x{FE52}\x{FF0E}\x{FF61}",
    r"'\x{2019}\x{2018}\x{201B}\x{FF07}",
    r"]"
);

// Cs is not listed: a Rust `str` cannot contain surrogate code points.
/// Characters deleted in step 5 under [`DeletionClass::Standard`].
///
/// Control, format, private-use and unassigned code points; other, math,
/// currency and modifier symbols; all punctuation; all combining marks.
pub const STANDARD_DELETION_CLASS: &str =
    r"[\p{Cc}\p{Cf}\p{Co}\p{Cn}\p{So}\p{Sm}\p{Sc}\p{Sk}\p{P}\p{M}]";

/// Characters deleted in step 5 under [`DeletionClass::Strict`].
///
/// Everything in [`STANDARD_DELETION_CLASS`] plus modifier letters (`Lm`),
/// e.g. U+02BC MODIFIER LETTER APOSTROPHE or U+30FC KATAKANA-HIRAGANA
/// PROLONGED SOUND MARK.
pub const STRICT_DELETION_CLASS: &str =
    r"[\p{Cc}\p{Cf}\p{Co}\p{Cn}\p{So}\p{Sm}\p{Sc}\p{Sk}\p{P}\p{M}\p{Lm}]";

/// Which characters step 5 deletes.
///
/// A deployment picks one and keeps it: aliases generated under different
/// classes are not comparable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionClass {
    /// [`STANDARD_DELETION_CLASS`]
    #[default]
    Standard,
    /// [`STRICT_DELETION_CLASS`]
    Strict,
}

impl DeletionClass {
    /// The regular expression class this variant deletes.
    pub fn pattern(self) -> &'static str {
        match self {
            DeletionClass::Standard => STANDARD_DELETION_CLASS,
            DeletionClass::Strict => STRICT_DELETION_CLASS,
        }
    }

    fn regex(self) -> &'static Regex {
        let cell = match self {
            DeletionClass::Standard => &STANDARD_DELETION_PATTERN,
            DeletionClass::Strict => &STRICT_DELETION_PATTERN,
        };
        cell.get_or_init(|| Regex::new(self.pattern()).unwrap())
    }
}

/// Deletion class used by [`normalize`].
pub const DEFAULT_DELETION_CLASS: DeletionClass = DeletionClass::Standard;

fn punct_to_space_pattern() -> &'static Regex {
    PUNCT_TO_SPACE_PATTERN.get_or_init(|| Regex::new(PUNCT_TO_SPACE_CLASS).unwrap())
}

fn whitespace_run_pattern() -> &'static Regex {
    WHITESPACE_RUN_PATTERN.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Reduces text to lowercase, hyphen-separated, punctuation-free form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    deletion: DeletionClass,
}

impl Normalizer {
    pub fn new(deletion: DeletionClass) -> Self {
        Self { deletion }
    }

    pub fn deletion(&self) -> DeletionClass {
        self.deletion
    }

    /// Run the full pipeline. Total over all input; may return `""`.
    pub fn normalize(&self, text: &str) -> String {
        let composed: String = text.nfkc().collect();
        let lowered = composed.to_lowercase();
        let spaced = punct_to_space_pattern().replace_all(&lowered, " ");
        let kept = self.deletion.regex().replace_all(spaced.trim(), "");
        // Deletion can bring conjoining jamo together; marks are already gone,
        // so recomposition only joins letters into syllables.
        let recomposed: String = kept.nfc().collect();
        // Deleting an edge character can expose whitespace next to it
        let alias = whitespace_run_pattern().replace_all(recomposed.trim(), "-");

        tracing::trace!(
            input_len = text.len(),
            output_len = alias.len(),
            deletion = ?self.deletion,
            "normalized"
        );
        alias.into_owned()
    }
}

/// Normalize with [`DEFAULT_DELETION_CLASS`].
pub fn normalize(text: &str) -> String {
    Normalizer::new(DEFAULT_DELETION_CLASS).normalize(text)
}
