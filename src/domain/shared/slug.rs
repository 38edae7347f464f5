// src/domain/shared/slug.rs
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::text::MAX_TITLE_LENGTH;
use crate::domain::validate;

pub const MAX_SLUG_LENGTH: usize = MAX_TITLE_LENGTH + 10;

const SLUG_INVALID_CHARS: &str = "Slug contains invalid characters.";
const SLUG_GENERATION: &str = "Slug could not be generated.";

static SLUG_FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug format pattern"));
static NON_ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9]+").expect("non-alphanumeric pattern"));

/// URL-friendly identifier derived from display text.
///
/// Always lowercase ASCII alphanumerics separated by single hyphens, at
/// most [`MAX_SLUG_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Accepts an already-formatted slug, e.g. one loaded from storage.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "Slug::new";

        let slug = Self(value.into());
        slug.validate().map_err(|err| DomainError::wrap(OP, err))?;
        Ok(slug)
    }

    /// Derives a slug from arbitrary display text.
    ///
    /// Deterministic and side-effect-free: the same input always produces
    /// the same slug, and feeding a generated slug back through produces
    /// itself.
    pub fn generate(input: &str) -> DomainResult<Self> {
        const OP: &str = "Slug::generate";

        let value = generate_slug(input).map_err(|err| DomainError::wrap(OP, err))?;
        let slug = Self(value);
        slug.validate().map_err(|err| DomainError::wrap(OP, err))?;
        Ok(slug)
    }

    pub fn validate(&self) -> DomainResult<()> {
        const OP: &str = "Slug::validate";

        validate::presence("slug", &self.0, OP)?;
        validate::max_length("slug", &self.0, MAX_SLUG_LENGTH, OP)?;
        if !SLUG_FORMAT_RE.is_match(&self.0) {
            return Err(DomainError::invalid(OP, SLUG_INVALID_CHARS));
        }
        Ok(())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

fn generate_slug(input: &str) -> DomainResult<String> {
    const OP: &str = "generate_slug";

    let input = input.trim();
    if input.is_empty() {
        return Err(DomainError::invalid(OP, SLUG_GENERATION));
    }

    let transliterated = transliterate(input).to_lowercase();

    // Strip any combining marks the table does not cover: decompose,
    // drop the marks, recompose.
    let stripped: String = transliterated
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect();

    let collapsed = NON_ALPHANUMERIC_RE.replace_all(&stripped, "-");
    let trimmed = collapsed.trim_matches('-');

    if trimmed.is_empty() || !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::invalid(OP, SLUG_GENERATION));
    }

    if trimmed.chars().count() > MAX_SLUG_LENGTH {
        let truncated: String = trimmed.chars().take(MAX_SLUG_LENGTH).collect();
        return Ok(truncated.trim_end_matches('-').to_string());
    }

    Ok(trimmed.to_string())
}

/// Fixed substitution table for characters whose ASCII form is not the
/// plain removal of a diacritic (ligatures, eszett) and for symbols with a
/// conventional URL spelling. Currency symbols are dropped outright.
fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            // French
            'À' | 'Â' | 'Ä' => out.push('A'),
            'à' | 'â' | 'ä' => out.push('a'),
            'Æ' => out.push_str("AE"),
            'æ' => out.push_str("ae"),
            'Ç' => out.push('C'),
            'ç' => out.push('c'),
            'È' | 'É' | 'Ê' | 'Ë' => out.push('E'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'Î' | 'Ï' => out.push('I'),
            'î' | 'ï' => out.push('i'),
            'Ô' => out.push('O'),
            'ô' => out.push('o'),
            'Œ' => out.push_str("OE"),
            'œ' => out.push_str("oe"),
            'Ù' | 'Û' | 'Ü' => out.push('U'),
            'ù' | 'û' | 'ü' => out.push('u'),
            'Ÿ' => out.push('Y'),
            'ÿ' => out.push('y'),

            // Spanish
            'Á' => out.push('A'),
            'á' => out.push('a'),
            'Í' => out.push('I'),
            'í' => out.push('i'),
            'Ñ' => out.push('N'),
            'ñ' => out.push('n'),
            'Ó' => out.push('O'),
            'ó' => out.push('o'),
            'Ú' => out.push('U'),
            'ú' => out.push('u'),
            '¿' | '¡' => {}

            // Portuguese
            'Ã' => out.push('A'),
            'ã' => out.push('a'),
            'Õ' => out.push('O'),
            'õ' => out.push('o'),

            // Icelandic and Old English
            'Ð' => out.push('D'),
            'ð' => out.push('d'),
            'Þ' => out.push_str("TH"),
            'þ' => out.push_str("th"),

            // Polish
            'Ł' => out.push('L'),
            'ł' => out.push('l'),
            'Ą' => out.push('A'),
            'ą' => out.push('a'),
            'Ć' => out.push('C'),
            'ć' => out.push('c'),
            'Ę' => out.push('E'),
            'ę' => out.push('e'),
            'Ń' => out.push('N'),
            'ń' => out.push('n'),
            'Ś' => out.push('S'),
            'ś' => out.push('s'),
            'Ź' => out.push('Z'),
            'ź' => out.push('z'),
            'Ż' => out.push('Z'),
            'ż' => out.push('z'),

            // German
            'Ö' => out.push('O'),
            'ö' => out.push('o'),
            'ß' => out.push_str("ss"),

            // Scandinavian
            'Å' => out.push('A'),
            'å' => out.push('a'),
            'Ø' => out.push('O'),
            'ø' => out.push('o'),

            // Symbols with a conventional spelling, currency dropped
            '&' | '@' | '°' => out.push('-'),
            '€' | '£' | '$' => {}

            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(input: &str) -> String {
        Slug::generate(input).unwrap().as_str().to_string()
    }

    #[test]
    fn generates_from_simple_text() {
        let cases = [
            ("Hello World", "hello-world"),
            ("Learn French Today", "learn-french-today"),
            ("UPPERCASE TEXT", "uppercase-text"),
            ("Mixed-Case_Text", "mixed-case-text"),
            ("Numbers 123 456", "numbers-123-456"),
            ("   Trimmed   Spaces   ", "trimmed-spaces"),
            ("Hyphen-Already-Present", "hyphen-already-present"),
        ];

        for (input, want) in cases {
            assert_eq!(slug(input), want, "input {input:?}");
        }
    }

    #[test]
    fn removes_accents_and_diacritics() {
        let cases = [
            ("café", "cafe"),
            ("naïve", "naive"),
            ("résumé", "resume"),
            ("Zürich", "zurich"),
            ("piñata", "pinata"),
            ("São Paulo", "sao-paulo"),
            ("Łódź", "lodz"),
            ("Åland", "aland"),
            ("Malmö", "malmo"),
            ("Compréhension écrite", "comprehension-ecrite"),
        ];

        for (input, want) in cases {
            assert_eq!(slug(input), want, "input {input:?}");
        }
    }

    #[test]
    fn handles_symbols_and_punctuation() {
        let cases = [
            ("Café & Culture", "cafe-culture"),
            ("Hello! World?", "hello-world"),
            ("Price: $99.99", "price-99-99"),
            ("Email@Example.com", "email-example-com"),
            ("C++ Programming", "c-programming"),
            ("50% Off!", "50-off"),
            ("Hello (World)", "hello-world"),
            ("Path/To/File", "path-to-file"),
            ("New\nLine", "new-line"),
            ("Straße", "strasse"),
            ("Cœur de l'Œuvre", "coeur-de-l-oeuvre"),
        ];

        for (input, want) in cases {
            assert_eq!(slug(input), want, "input {input:?}");
        }
    }

    #[test]
    fn collapses_hyphen_runs_and_trims_ends() {
        assert_eq!(slug("---Multiple---Hyphens---"), "multiple-hyphens");
        assert_eq!(slug("___Underscores___"), "underscores");
    }

    #[test]
    fn rejects_inputs_without_alphanumerics() {
        for input in ["", "   ", "!!!", "€£", "¿¡"] {
            let err = Slug::generate(input).unwrap_err();
            assert_eq!(
                err.code(),
                crate::domain::errors::ErrorCode::Invalid,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn truncates_to_max_length_and_retrims_hyphens() {
        let long = "a".repeat(MAX_SLUG_LENGTH + 50);
        assert_eq!(slug(&long).len(), MAX_SLUG_LENGTH);

        // A hyphen landing on the cut point is trimmed away.
        let input = format!("Test-{}", "a".repeat(MAX_SLUG_LENGTH));
        let got = slug(&input);
        assert_eq!(got, format!("test-{}", "a".repeat(MAX_SLUG_LENGTH - 5)));
        assert!(!got.ends_with('-'));
    }

    #[test]
    fn generation_is_idempotent() {
        for input in ["Café & Culture", "Hello World", "Łódź 2024"] {
            let once = slug(input);
            assert_eq!(slug(&once), once);
        }
    }

    #[test]
    fn output_charset_is_clean() {
        for input in ["Quelle heure est-il ?", "A1 — Débutant", "über Äpfel & Öl"] {
            let got = slug(input);
            assert!(got.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
            assert!(!got.starts_with('-') && !got.ends_with('-'));
            assert!(!got.contains("--"));
        }
    }

    #[test]
    fn new_validates_format() {
        assert!(Slug::new("valid-slug-123").is_ok());
        assert!(Slug::new("Invalid Slug").is_err());
        assert!(Slug::new("-leading").is_err());
        assert!(Slug::new("double--hyphen").is_err());
        assert!(Slug::new("").is_err());
    }
}
