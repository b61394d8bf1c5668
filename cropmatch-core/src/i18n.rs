//! Static UI translations.
//!
//! The locale is an explicit value passed by the caller; there is no
//! ambient language state. `translate` is a pure lookup over a fixed
//! table and falls back to the key itself when no entry exists, so a
//! missing translation degrades visibly instead of failing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::Product;

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Locale::En),
            "ko" => Some(Locale::Ko),
            _ => None,
        }
    }
}

/// Translate a UI string key for the given locale.
///
/// Unknown keys are returned unchanged.
pub fn translate(locale: Locale, key: &str) -> &str {
    match TRANSLATIONS.iter().find(|(k, _, _)| *k == key) {
        Some(&(_, en, ko)) => match locale {
            Locale::En => en,
            Locale::Ko => ko,
        },
        None => key,
    }
}

impl Product {
    /// Title in the requested locale, falling back to English when no
    /// Korean title exists.
    pub fn localized_title(&self, locale: Locale) -> &str {
        match (locale, &self.title_ko) {
            (Locale::Ko, Some(ko)) => ko,
            _ => &self.title,
        }
    }

    /// Description in the requested locale, falling back to English.
    pub fn localized_description(&self, locale: Locale) -> &str {
        match (locale, &self.description_ko) {
            (Locale::Ko, Some(ko)) => ko,
            _ => &self.description,
        }
    }
}

/// (key, English, Korean) rows for every UI string.
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("norishop", "NoriShop", "노리샵"),
    ("our_mission", "Our Mission", "우리의 미션"),
    ("why", "Why", "왜"),
    ("how", "How", "어떻게"),
    ("contact", "Contact", "문의"),
    ("hero_title_line1", "BRING ALL FARMS", "모든 농장을"),
    ("hero_title_line2", "IN YOUR HAND!", "손안에!"),
    (
        "hero_subtitle_line1",
        "Grow crops on Nori Farm App",
        "노리팜 앱에서 작물을 키우고",
    ),
    (
        "hero_subtitle_line2",
        "get fresh harvest at your door",
        "집으로 신선한 수확물을 받으세요",
    ),
    (
        "crop_matcher_title",
        "Crop to Product Matcher",
        "작물-제품 매칭기",
    ),
    (
        "crop_matcher_description",
        "Enter a virtual crop name (e.g., \"tomato\", \"carrot\") or NFT ID (e.g., \"Tomato #124\") to find its real-world counterpart.",
        "가상 작물 이름 (예: \"토마토\", \"당근\") 또는 NFT ID (예: \"토마토 #124\")를 입력하여 실제 제품을 찾아보세요.",
    ),
    (
        "input_placeholder",
        "Enter crop name or NFT ID...",
        "작물 이름 또는 NFT ID를 입력하세요...",
    ),
    ("searching", "Searching", "검색 중"),
    ("find_product", "Find Product", "제품 찾기"),
    ("try", "Try", "예시"),
    ("match_result_title", "Match Result", "매칭 결과"),
    ("card_view", "Card View", "카드 보기"),
    ("json_view", "JSON View", "JSON 보기"),
    ("match", "Match", "매칭"),
    ("for", "for", "에 대한"),
    ("price", "Price", "가격"),
    ("seller", "Seller", "판매자"),
    ("rating", "Rating", "평점"),
    ("stock", "Stock", "재고"),
    ("in_stock", "In Stock", "재고 있음"),
    ("out_of_stock", "Out of Stock", "재고 없음"),
    ("buy_now", "Buy Now", "지금 구매"),
    (
        "no_matching_product_found",
        "No matching product found",
        "일치하는 제품을 찾을 수 없습니다",
    ),
    (
        "api_doc_title",
        "API Documentation & Usage",
        "API 문서 및 사용법",
    ),
    (
        "api_doc_description",
        "This prototype demonstrates the integration between Nori Farm virtual crops and real product databases.",
        "이 프로토타입은 노리팜 가상 작물과 실제 제품 데이터베이스 간의 통합을 보여줍니다.",
    ),
    ("supported_crops", "Supported Crops", "지원되는 작물"),
    ("input_formats", "Input Formats", "입력 형식"),
    (
        "crop_name_format",
        "Crop name: \"tomato\", \"carrot\", \"lettuce\", etc.",
        "작물 이름: \"토마토\", \"당근\", \"상추\" 등",
    ),
    (
        "nft_id_format",
        "NFT ID format: \"Tomato #124\", \"Carrot #456\"",
        "NFT ID 형식: \"토마토 #124\", \"당근 #456\"",
    ),
    (
        "case_insensitive_matching",
        "Case-insensitive matching is supported.",
        "대소문자 구분 없이 매칭됩니다.",
    ),
    ("response_format", "Response Format", "응답 형식"),
    (
        "response_format_description",
        "The raw JSON response is provided for demonstration purposes, showing the exact data structure returned by the API. This can be toggled off in the UI if a cleaner presentation is preferred.",
        "원시 JSON 응답은 API에서 반환되는 정확한 데이터 구조를 보여주기 위한 시연 목적으로 제공됩니다. 더 깔끔한 프레젠테이션을 선호하는 경우 UI에서 이 기능을 끌 수 있습니다.",
    ),
    (
        "product_not_found",
        "Product Not Found",
        "제품을 찾을 수 없습니다",
    ),
    (
        "product_not_found_description",
        "The product you are looking for does not exist.",
        "찾으시는 제품이 존재하지 않습니다.",
    ),
    (
        "back_to_nori_farm_integration",
        "Back to Nori Farm Integration",
        "노리팜 통합으로 돌아가기",
    ),
    ("back_to_nori_farm", "Back to Nori Farm", "노리팜으로 돌아가기"),
    ("reviews", "reviews", "리뷰"),
    ("category", "Category", "카테고리"),
    ("availability", "Availability", "재고"),
    ("add_to_cart", "Add to Cart", "장바구니에 추가"),
    (
        "notify_me_when_back_in_stock",
        "Notify Me When Back in Stock",
        "재고 입고 시 알림",
    ),
    (
        "item_added_to_cart",
        "Item Added to Cart!",
        "상품이 장바구니에 추가되었습니다!",
    ),
    (
        "added_to_mock_cart",
        "has been added to your mock cart",
        "이(가) 모의 장바구니에 추가되었습니다",
    ),
    ("out_of_stock_toast_title", "Out of Stock", "재고 없음"),
    (
        "out_of_stock_toast_description",
        "is currently out of stock",
        "은(는) 현재 재고가 없습니다",
    ),
    ("error_occurred", "An error occurred", "오류가 발생했습니다"),
    ("try_again", "Please try again", "다시 시도해주세요"),
    ("search_failed", "Search Failed", "검색 실패"),
    (
        "could_not_find_match",
        "Could not find a match",
        "일치하는 항목을 찾을 수 없습니다",
    ),
    (
        "buy_now_mock_payment",
        "Buy Now (Mock Payment)",
        "지금 구매 (모의 결제)",
    ),
    (
        "mock_payment_success_title",
        "Payment Successful!",
        "결제 성공!",
    ),
    (
        "mock_payment_success_description",
        "has been successfully purchased via mock payment",
        "이(가) 모의 결제를 통해 성공적으로 구매되었습니다",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Locale::En, "find_product"), "Find Product");
        assert_eq!(translate(Locale::Ko, "find_product"), "제품 찾기");
    }

    #[test]
    fn test_translate_unknown_key_falls_back_to_key() {
        assert_eq!(translate(Locale::En, "no_such_key"), "no_such_key");
        assert_eq!(translate(Locale::Ko, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_translation_keys_are_unique() {
        let mut keys: Vec<&str> = TRANSLATIONS.iter().map(|(k, _, _)| *k).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_locale_round_trip() {
        for locale in [Locale::En, Locale::Ko] {
            assert_eq!(Locale::from_str(locale.as_str()), Some(locale));
        }
        assert_eq!(Locale::from_str("jp"), None);
    }

    #[test]
    fn test_localized_title_prefers_korean_when_present() {
        let product = Catalog::shared().find_by_crop_type("tomato").unwrap();
        assert_eq!(product.localized_title(Locale::En), product.title);
        assert_eq!(
            product.localized_title(Locale::Ko),
            product.title_ko.as_deref().unwrap()
        );
    }

    #[test]
    fn test_localized_description_falls_back_to_english() {
        let mut product = Catalog::shared()
            .find_by_crop_type("carrot")
            .unwrap()
            .clone();
        product.description_ko = None;
        assert_eq!(
            product.localized_description(Locale::Ko),
            product.description
        );
    }
}
