use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::numeric_id;

numeric_id!(
    /// Уникальный идентификатор бренда
    BrandId
);

/// Бренд (справочник, только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Brand {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: BrandId(id),
            name: name.into(),
            country: None,
            founded_year: None,
            website: None,
            description: None,
        }
    }
}

/// `GET /brands` answers with a bare array on the current backend; older
/// deployments wrap it into a Spring page.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BrandListResponse {
    Plain(Vec<Brand>),
    Paged { content: Vec<Brand> },
}

impl BrandListResponse {
    pub fn into_items(self) -> Vec<Brand> {
        match self {
            BrandListResponse::Plain(items) => items,
            BrandListResponse::Paged { content } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_list_accepts_both_shapes() {
        let plain: BrandListResponse =
            serde_json::from_str(r#"[{"id":1,"name":"Apple"}]"#).unwrap();
        assert_eq!(plain.into_items(), vec![Brand::new(1, "Apple")]);

        let paged: BrandListResponse = serde_json::from_str(
            r#"{"content":[{"id":2,"name":"Dell","country":"US","foundedYear":1984}],"totalPages":1}"#,
        )
        .unwrap();
        let items = paged.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Dell");
        assert_eq!(items[0].founded_year, Some(1984));
    }
}
