//! The fixed product catalog.
//!
//! Mock data standing in for a real product database or external shop API.
//! The catalog is built once at startup and never mutated; lookups are
//! side-effect-free and absence of a match is a normal outcome.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::Product;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::builtin);

/// Immutable product catalog with an index by crop type.
///
/// Storage keeps insertion order so "available crops" listings and slug
/// scans see the catalog in a stable order; the index gives O(1) lookup
/// by normalized crop type.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    by_crop_type: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a product list. Crop types must be unique.
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_crop_type = HashMap::with_capacity(products.len());
        for (i, product) in products.iter().enumerate() {
            let previous = by_crop_type.insert(product.crop_type.clone(), i);
            debug_assert!(
                previous.is_none(),
                "duplicate crop type in catalog: {}",
                product.crop_type
            );
        }
        Self {
            products,
            by_crop_type,
        }
    }

    /// The shared built-in catalog.
    pub fn shared() -> &'static Catalog {
        &BUILTIN
    }

    /// Exact lookup by crop type. The key is assumed already normalized;
    /// the catalog performs no normalization of its own.
    pub fn find_by_crop_type(&self, key: &str) -> Option<&Product> {
        self.by_crop_type.get(key).map(|&i| &self.products[i])
    }

    /// Lookup by routing slug, used by the product detail endpoint.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// All crop types in catalog order.
    pub fn crop_types(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.crop_type.as_str())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The built-in mock catalog.
    fn builtin() -> Self {
        Self::new(vec![
            Product {
                crop_type: "tomato".to_string(),
                title: "Fresh Organic Tomato Box (2kg)".to_string(),
                title_ko: Some("유기농 토마토 박스 (2kg)".to_string()),
                price: "19,000 KRW".to_string(),
                image: "https://example.com/tomato.jpg".to_string(),
                buy_link: "https://mock-shop.com/product/organic-tomato-box".to_string(),
                slug: "organic-tomato-box".to_string(),
                description: "Premium organic tomatoes grown in sustainable farms".to_string(),
                description_ko: Some(
                    "지속 가능한 농장에서 재배한 프리미엄 유기농 토마토".to_string(),
                ),
                seller: "Green Valley Farm".to_string(),
                rating: 4.8,
                in_stock: true,
                category: Some("Vegetables".to_string()),
                tags: vec!["organic".to_string(), "fresh".to_string()],
            },
            Product {
                crop_type: "carrot".to_string(),
                title: "Premium Carrot Bundle (1.5kg)".to_string(),
                title_ko: Some("프리미엄 당근 묶음 (1.5kg)".to_string()),
                price: "12,500 KRW".to_string(),
                image: "https://example.com/carrot.jpg".to_string(),
                buy_link: "https://mock-shop.com/product/premium-carrots".to_string(),
                slug: "premium-carrots".to_string(),
                description: "Sweet and crunchy carrots perfect for cooking".to_string(),
                description_ko: Some("요리에 안성맞춤인 달고 아삭한 당근".to_string()),
                seller: "Sunrise Agriculture".to_string(),
                rating: 4.6,
                in_stock: true,
                category: Some("Vegetables".to_string()),
                tags: vec!["fresh".to_string()],
            },
            Product {
                crop_type: "lettuce".to_string(),
                title: "Fresh Lettuce Head (3 pieces)".to_string(),
                title_ko: Some("신선한 상추 (3개입)".to_string()),
                price: "8,900 KRW".to_string(),
                image: "https://example.com/lettuce.jpg".to_string(),
                buy_link: "https://mock-shop.com/product/fresh-lettuce".to_string(),
                slug: "fresh-lettuce".to_string(),
                description: "Crisp and fresh lettuce heads for salads".to_string(),
                description_ko: Some("샐러드용 아삭하고 신선한 상추".to_string()),
                seller: "Urban Greens".to_string(),
                rating: 4.7,
                in_stock: true,
                category: Some("Vegetables".to_string()),
                tags: vec!["fresh".to_string(), "salad".to_string()],
            },
            Product {
                crop_type: "eggplant".to_string(),
                title: "Korean Eggplant (1kg)".to_string(),
                title_ko: Some("국산 가지 (1kg)".to_string()),
                price: "15,800 KRW".to_string(),
                image: "https://example.com/eggplant.jpg".to_string(),
                buy_link: "https://mock-shop.com/product/korean-eggplant".to_string(),
                slug: "korean-eggplant".to_string(),
                description: "Fresh Korean eggplants perfect for traditional dishes".to_string(),
                description_ko: Some("전통 요리에 어울리는 신선한 국산 가지".to_string()),
                seller: "Heritage Farms".to_string(),
                rating: 4.5,
                in_stock: false,
                category: Some("Vegetables".to_string()),
                tags: vec!["fresh".to_string()],
            },
            Product {
                crop_type: "potato".to_string(),
                title: "Organic Potato Bag (3kg)".to_string(),
                title_ko: Some("유기농 감자 (3kg)".to_string()),
                price: "16,200 KRW".to_string(),
                image: "https://example.com/potato.jpg".to_string(),
                buy_link: "https://mock-shop.com/product/organic-potatoes".to_string(),
                slug: "organic-potatoes".to_string(),
                description: "Versatile organic potatoes for all cooking needs".to_string(),
                description_ko: Some("어떤 요리에도 잘 어울리는 유기농 감자".to_string()),
                seller: "Mountain View Farm".to_string(),
                rating: 4.9,
                in_stock: true,
                category: Some("Vegetables".to_string()),
                tags: vec!["organic".to_string()],
            },
        ])
    }
}
