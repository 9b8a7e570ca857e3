use serde::{Deserialize, Serialize};

use crate::domain::brand::{Brand, BrandId};
use crate::domain::common::aggregate_id::numeric_id;

// ============================================================================
// ID Type
// ============================================================================

numeric_id!(
    /// Уникальный идентификатор товара
    ProductId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Ссылка на бренд внутри товара: id (если сервер его отдаёт) и
/// денормализованное наименование для отображения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRef {
    #[serde(rename = "brandId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BrandId>,
    #[serde(rename = "brandName")]
    pub name: String,
}

impl BrandRef {
    /// Find the brand this reference points to. The id wins when present;
    /// otherwise the display name is matched exactly.
    pub fn resolve<'a>(&self, brands: &'a [Brand]) -> Option<&'a Brand> {
        match self.id {
            Some(id) => brands.iter().find(|b| b.id == id),
            None => brands.iter().find(|b| b.name == self.name),
        }
    }
}

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(flatten)]
    pub brand: BrandRef,
    pub price: f64,
    pub quantity: i64,
    /// Soft-delete flag. The list endpoint filters on it server-side.
    #[serde(default)]
    pub deleted: bool,
}

/// Payload for `POST /products` and `PUT /products/{id}`.
///
/// Only produced by form validation on the client, so its invariants
/// (non-empty name, price > 0, quantity >= 0, known brand) already hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub brand_id: BrandId,
    pub quantity: i64,
    pub price: f64,
}

/// One page of the product list as returned by the server (Spring `Page`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(rename = "content", alias = "items")]
    pub items: Vec<Product>,
    pub total_pages: usize,
    #[serde(default)]
    pub total_elements: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_page_from_server_json() {
        let json = r#"{
            "content": [
                {"id": 7, "name": "Laptop X", "brandName": "Dell", "quantity": 3, "price": 999.5}
            ],
            "totalPages": 4,
            "totalElements": 31,
            "number": 0,
            "size": 10
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_elements, 31);
        let product = &page.items[0];
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.brand.name, "Dell");
        assert_eq!(product.brand.id, None);
        assert!(!product.deleted);
    }

    #[test]
    fn test_brand_ref_resolves_by_id_then_name() {
        let brands = vec![Brand::new(1, "Apple"), Brand::new(2, "Dell")];

        let by_name = BrandRef { id: None, name: "Dell".into() };
        assert_eq!(by_name.resolve(&brands).map(|b| b.id), Some(BrandId(2)));

        let by_id = BrandRef { id: Some(BrandId(1)), name: "stale name".into() };
        assert_eq!(by_id.resolve(&brands).map(|b| b.id), Some(BrandId(1)));

        let unknown = BrandRef { id: None, name: "Lenovo".into() };
        assert!(unknown.resolve(&brands).is_none());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = ProductDraft {
            name: "Mouse".into(),
            brand_id: BrandId(3),
            quantity: 5,
            price: 19.5,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["brandId"], 3);
        assert_eq!(value["quantity"], 5);
        assert_eq!(value["price"], 19.5);
    }
}
