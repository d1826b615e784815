//! # String Normalization
//!
//! Canonicalizes text for case- and accent-insensitive comparison.
//!
//! ## Why NFD?
//! NFD decomposition splits accented characters into their base character
//! plus combining marks ("é" → "e" + U+0301). Dropping the combining
//! diacritical marks block afterwards leaves the bare base characters, so
//! "Çafé" and "cafe" normalize to the same string.

use unicode_normalization::UnicodeNormalization;

/// Produces the canonical comparison form of a string.
///
/// Decomposes to NFD, strips combining diacritical marks, trims
/// whitespace, and lower-cases. Empty input yields the empty string.
///
/// ## Example
/// ```rust
/// use stockroom_core::normalize;
///
/// assert_eq!(normalize("  Teclado "), "teclado");
/// assert_eq!(normalize("Maçã"), "maca");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !matches!(c, '\u{0300}'..='\u{036f}'))
        .collect::<String>()
        .trim()
        .to_lowercase()
}
