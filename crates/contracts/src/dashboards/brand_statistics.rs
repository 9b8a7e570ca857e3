use serde::{Deserialize, Serialize};

/// Row of `GET /products/statistics/by-brand`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProductCount {
    pub brand_name: String,
    pub product_count: u64,
}
