#![deny(missing_docs)]

//! Convert Hebrew (and mixed-script) text into a URL-safe slug.
//!
//! Hebrew text carries combining vocalization marks (niqqud and cantillation)
//! that have no place in a URL, and Hebrew letters themselves are not ASCII.
//! This crate strips the marks, transliterates the letters to Latin
//! approximations, and collapses everything that is neither a letter nor a
//! number into a single separator:
//!
//! ```
//! use hebrew_slug::slugify;
//!
//! assert_eq!(slugify("שָׁלוֹם עוֹלָם"), "shlvm-avlm");
//! assert_eq!(slugify("café résumé"), "cafe-resume");
//! ```
//!
//! Transliteration, lowercasing and the separator can be configured per call
//! through [`SlugifyOptions`]; vocalization marks are always stripped.

mod niqqud;
mod translit;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use unicode_normalization::UnicodeNormalization;

use crate::niqqud::strip_niqqud;
use crate::translit::transliterate;

/// Per-call configuration for [`slugify_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugifyOptions {
    /// Replacement for every run of non-alphanumeric characters. May be empty,
    /// in which case such runs are deleted instead of replaced.
    pub separator: String,
    /// Lowercase the result using locale-independent case folding.
    pub lowercase: bool,
    /// Replace Hebrew letters with Latin approximations. When disabled,
    /// Hebrew letters are kept verbatim.
    pub transliterate: bool,
}

impl Default for SlugifyOptions {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            lowercase: true,
            transliterate: true,
        }
    }
}

/// Converts the text to a slug using the default options: `-` as the
/// separator, lowercasing and transliteration enabled.
pub fn slugify(text: &str) -> String {
    slugify_with_options(text, &SlugifyOptions::default())
}

/// Converts the text to a slug.
///
/// The transformation runs in a fixed order:
/// 1. Trim surrounding whitespace.
/// 2. Strip Hebrew vocalization marks (U+0591..=U+05C7). Always performed,
///    independent of the options.
/// 3. Transliterate Hebrew letters to Latin, if enabled.
/// 4. Lowercase, if enabled.
/// 5. Decompose to NFD and drop Latin combining accents (U+0300..=U+036F),
///    so that e.g. "é" degrades to "e". Always performed.
/// 6. Replace every run of characters that are neither letters nor numbers
///    with a single instance of the separator.
/// 7. Strip one leading and one trailing occurrence of the separator.
///
/// The result contains only letters, numbers and interior separators; empty
/// input, or input consisting entirely of removable characters, yields an
/// empty string.
pub fn slugify_with_options(text: &str, options: &SlugifyOptions) -> String {
    static NON_ALPHANUMERIC: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("Invalid regex"));

    let mut slug = strip_niqqud(text.trim());

    if options.transliterate {
        slug = transliterate(&slug);
    }

    if options.lowercase {
        slug = slug.to_lowercase();
    }

    // NFD splits accented Latin characters into base letter plus combining
    // mark; dropping the marks leaves the bare letter.
    let decomposed: String = slug
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .collect();

    // The separator is a literal replacement string; `NoExpand` keeps the
    // regex engine from interpreting `$` references inside it.
    let collapsed = NON_ALPHANUMERIC.replace_all(&decomposed, NoExpand(options.separator.as_str()));

    // Strip exactly one occurrence on each side, matching the separator as a
    // literal string.
    let slug = collapsed
        .strip_prefix(options.separator.as_str())
        .unwrap_or(&collapsed);
    let slug = slug
        .strip_suffix(options.separator.as_str())
        .unwrap_or(slug);
    slug.to_string()
}
