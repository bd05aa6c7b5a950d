//! Registry name normalisation.

/// Canonical form used for storing and comparing registry names.
///
/// Surrounding whitespace is dropped, inner runs of whitespace collapse to a
/// single space and the result is uppercased, so `" coca  cola "` and
/// `"COCA COLA"` name the same product.
#[must_use]
pub fn normalise_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
