use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry: one real-world product keyed by crop type.
///
/// Field names serialize as camelCase (with the two `_ko` exceptions)
/// because the wire contract predates this service and the UI consumes
/// the original field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Lookup key, stored normalized (lowercase). Unique per catalog.
    pub crop_type: String,
    pub title: String,
    #[serde(rename = "title_ko", skip_serializing_if = "Option::is_none")]
    pub title_ko: Option<String>,
    /// Display price string, e.g. "19,000 KRW".
    pub price: String,
    /// URI of the display asset.
    pub image: String,
    /// External purchase link.
    pub buy_link: String,
    /// Slug used by the product detail endpoint.
    pub slug: String,
    pub description: String,
    #[serde(rename = "description_ko", skip_serializing_if = "Option::is_none")]
    pub description_ko: Option<String>,
    pub seller: String,
    /// 0-5 star rating, fractional allowed (half-star rendering).
    pub rating: f64,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Outcome of one matching operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The caller's input, echoed verbatim. Normalization stays internal
    /// and must never be visible in this field.
    pub crop: String,
    /// The matched product, or null when nothing matched. A null here is
    /// a valid outcome, not an error.
    pub matched_product: Option<Product>,
    /// 95 on an exact match, 0 otherwise. Not a similarity score.
    pub confidence: u8,
    /// Human-readable explanation: either confirms the match or lists the
    /// supported crop types.
    pub match_reason: String,
    /// Set when the result is built.
    pub timestamp: DateTime<Utc>,
}
