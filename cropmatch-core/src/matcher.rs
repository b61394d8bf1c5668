//! Crop input normalization and catalog matching.
//!
//! Turns free-form input (a crop name or an NFT-style ID like
//! "Tomato #124") into a [`MatchResult`] against the fixed catalog.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;

use crate::catalog::Catalog;
use crate::types::MatchResult;

/// Confidence reported for an exact match. Matching is binary: this
/// value or zero, never a similarity score.
pub const CONFIDENCE_EXACT: u8 = 95;

/// NFT-style token suffixes ("#124"), stripped anywhere in the input.
static NFT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+").expect("NFT ID pattern is valid"));

/// Normalize raw crop input into a catalog key: lowercase, strip NFT-style
/// "#<digits>" tokens, trim surrounding whitespace.
///
/// The algorithm is fixed for compatibility with existing callers, so
/// "Tomato #124" and "  TOMATO  " both normalize to "tomato".
pub fn normalize_crop_input(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = NFT_ID.replace_all(&lowered, "");
    stripped.trim().to_string()
}

/// Match raw crop input against the catalog.
///
/// Pure and stateless: every call observes the same immutable catalog,
/// and a miss is a valid result (confidence 0), not an error. The `crop`
/// field of the result echoes `crop_input` verbatim.
pub fn match_crop(catalog: &Catalog, crop_input: &str) -> MatchResult {
    let crop_name = normalize_crop_input(crop_input);

    let matched_product = catalog.find_by_crop_type(&crop_name).cloned();

    let confidence = if matched_product.is_some() {
        CONFIDENCE_EXACT
    } else {
        0
    };

    let match_reason = if matched_product.is_some() {
        format!("Exact match found for {crop_name} in product database")
    } else {
        let available: Vec<&str> = catalog.crop_types().collect();
        format!(
            "No matching product found for \"{crop_name}\". Available crops: {}",
            available.join(", ")
        )
    };

    MatchResult {
        crop: crop_input.to_string(),
        matched_product,
        confidence,
        match_reason,
        timestamp: Utc::now(),
    }
}
