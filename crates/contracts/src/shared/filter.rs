use serde::{Deserialize, Serialize};

use super::pagination::PageRequest;
use super::validation::ValidationError;

/// Критерии фильтрации списка товаров.
///
/// Empty strings and `None` bounds mean "unrestricted". The default value is
/// the cleared filter bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPredicate {
    pub name: String,
    pub brand: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterPredicate {
    /// Rejects an inverted price range. Equal bounds are allowed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) if max < min => Err(ValidationError::InvertedRange),
            _ => Ok(()),
        }
    }

    /// Trims the text criteria so that whitespace-only input counts as empty.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            brand: self.brand.trim().to_string(),
            ..self
        }
    }
}

/// Query string of `GET /products`.
///
/// Optional criteria are skipped rather than sent empty: the server treats an
/// empty `name=` as a real (and very restrictive) filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub page: usize,
    pub size: usize,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl ProductListQuery {
    pub fn new(filter: &FilterPredicate, page: &PageRequest) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            page: page.page,
            size: page.size,
            deleted: false,
            name: non_empty(&filter.name),
            brand: non_empty(&filter.brand),
            min_price: filter.min_price,
            max_price: filter.max_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_rejected() {
        let filter = FilterPredicate {
            name: "lap".into(),
            min_price: Some(100.0),
            max_price: Some(50.0),
            ..Default::default()
        };
        assert_eq!(filter.validate(), Err(ValidationError::InvertedRange));
    }

    #[test]
    fn test_open_and_equal_ranges_accepted() {
        let equal = FilterPredicate {
            min_price: Some(50.0),
            max_price: Some(50.0),
            ..Default::default()
        };
        assert!(equal.validate().is_ok());

        let only_max = FilterPredicate {
            max_price: Some(10.0),
            ..Default::default()
        };
        assert!(only_max.validate().is_ok());
        assert!(FilterPredicate::default().validate().is_ok());
    }

    #[test]
    fn test_query_skips_empty_criteria() {
        let filter = FilterPredicate {
            name: "   ".into(),
            brand: "Dell".into(),
            min_price: None,
            max_price: Some(250.0),
        };
        let query = ProductListQuery::new(&filter, &PageRequest::new(2));
        assert_eq!(query.page, 2);
        assert_eq!(query.size, 10);
        assert!(!query.deleted);
        assert_eq!(query.name, None);
        assert_eq!(query.brand.as_deref(), Some("Dell"));
        assert_eq!(query.min_price, None);

        let value = serde_json::to_value(&query).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("name"));
        assert!(!object.contains_key("minPrice"));
        assert_eq!(object["maxPrice"], 250.0);
    }

    #[test]
    fn test_normalized_trims_text() {
        let filter = FilterPredicate {
            name: "  lap ".into(),
            brand: " ".into(),
            ..Default::default()
        }
        .normalized();
        assert_eq!(filter.name, "lap");
        assert!(filter.brand.is_empty());
        assert_ne!(filter, FilterPredicate::default());
    }
}
