pub mod catalog;
pub mod i18n;
pub mod matcher;
pub mod types;

pub use catalog::Catalog;
pub use i18n::{translate, Locale};
pub use matcher::{match_crop, normalize_crop_input, CONFIDENCE_EXACT};
pub use types::{MatchResult, Product};
