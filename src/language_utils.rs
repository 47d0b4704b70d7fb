use anyhow::{Result, anyhow};
use isolang::Language;

/// Language tag utilities for the document's xml:lang attribute
///
/// The generator inserts the configured tag verbatim; these helpers only
/// check that a tag like "vi-VN" starts with a known ISO 639 code so a typo
/// is caught before it reaches a synthesis consumer.
/// Extract the primary subtag of a BCP 47 style language tag ("vi-VN" -> "vi")
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Validate that a language tag's primary subtag is a known ISO 639 code.
///
/// Region and script subtags are not checked; synthesis voices use vendor
/// specific region casing that ISO tables do not cover.
pub fn validate_language_tag(tag: &str) -> Result<()> {
    let primary = primary_subtag(tag).trim().to_lowercase();

    let known = match primary.len() {
        2 => Language::from_639_1(&primary).is_some(),
        3 => Language::from_639_3(&primary).is_some(),
        _ => false,
    };

    if known {
        Ok(())
    } else {
        Err(anyhow!("Invalid language tag: {}", tag))
    }
}

/// English name of the tag's primary language, if known
pub fn language_name(tag: &str) -> Option<&'static str> {
    let primary = primary_subtag(tag).trim().to_lowercase();

    let language = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    };

    language.map(|l| l.to_name())
}
