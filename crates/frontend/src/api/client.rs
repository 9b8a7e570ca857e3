use async_trait::async_trait;
use contracts::dashboards::brand_statistics::BrandProductCount;
use contracts::domain::brand::{Brand, BrandListResponse};
use contracts::domain::product::{Product, ProductDraft, ProductId, ProductPage};
use contracts::shared::filter::{FilterPredicate, ProductListQuery};
use contracts::shared::pagination::PageRequest;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::TransportError;
use super::transport::CatalogTransport;
use crate::shared::api_utils::{api_base, api_url};

/// Session credential (JWT access token).
///
/// Passed explicitly into [`ApiClient`]; nothing reads the token from ambient
/// storage while building a request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// HTTP client of the catalog backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    credential: Option<Credential>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credential: Option<Credential>) -> Self {
        Self {
            base_url: base_url.into(),
            credential,
        }
    }

    /// Client pointed at the configured backend (see [`api_base`]).
    pub fn from_env(credential: Option<Credential>) -> Self {
        Self::new(api_base(), credential)
    }

    pub fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }

    /// `GET /products?...` URL for the given filter and page.
    pub fn products_url(
        &self,
        filter: &FilterPredicate,
        page: &PageRequest,
    ) -> Result<String, TransportError> {
        let query = serde_qs::to_string(&ProductListQuery::new(filter, page))
            .map_err(|e| TransportError::Encode(e.to_string()))?;
        Ok(format!("{}?{}", self.url("/products"), query))
    }

    pub fn product_url(&self, id: ProductId) -> String {
        self.url(&format!("/products/{}", id))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Some(credential) => builder.header("Authorization", &credential.bearer_header()),
            None => builder,
        }
    }

    /// Product count per brand for the statistics panel.
    pub async fn fetch_brand_statistics(&self) -> Result<Vec<BrandProductCount>, TransportError> {
        let builder = self.authorized(Request::get(&self.url("/products/statistics/by-brand")));
        let response = builder.send().await.map_err(network)?;
        read_json(response).await
    }
}

fn network(e: gloo_net::Error) -> TransportError {
    TransportError::Network(e.to_string())
}

/// Turn a non-2xx response into [`TransportError::Status`].
async fn ensure_ok(response: Response) -> Result<Response, TransportError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("request to {} failed with {}", response.url(), status);
    Err(TransportError::from_response(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl CatalogTransport for ApiClient {
    async fn list_products(
        &self,
        filter: &FilterPredicate,
        page: &PageRequest,
    ) -> Result<ProductPage, TransportError> {
        let url = self.products_url(filter, page)?;
        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, TransportError> {
        let response = self
            .authorized(Request::get(&self.url("/brands")))
            .send()
            .await
            .map_err(network)?;
        read_json::<BrandListResponse>(response)
            .await
            .map(BrandListResponse::into_items)
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, TransportError> {
        let request = self
            .authorized(Request::post(&self.url("/products")))
            .json(draft)
            .map_err(|e| TransportError::Encode(e.to_string()))?;
        let response = request.send().await.map_err(network)?;
        read_json(response).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, TransportError> {
        let request = self
            .authorized(Request::put(&self.product_url(id)))
            .json(draft)
            .map_err(|e| TransportError::Encode(e.to_string()))?;
        let response = request.send().await.map_err(network)?;
        read_json(response).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError> {
        let response = self
            .authorized(Request::delete(&self.product_url(id)))
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8080/api", Some(Credential::new("abc.def.ghi")))
    }

    #[test]
    fn test_products_url_for_default_filter() {
        let url = client()
            .products_url(&FilterPredicate::default(), &PageRequest::new(3))
            .unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/api/products?page=3&size=10&deleted=false"
        );
    }

    #[test]
    fn test_products_url_includes_only_set_criteria() {
        let filter = FilterPredicate {
            name: "lap".into(),
            brand: String::new(),
            min_price: Some(99.5),
            max_price: None,
        };
        let url = client().products_url(&filter, &PageRequest::new(0)).unwrap();
        assert!(url.contains("name=lap"));
        assert!(url.contains("minPrice=99.5"));
        assert!(!url.contains("brand="));
        assert!(!url.contains("maxPrice"));
    }

    #[test]
    fn test_credential_is_explicit() {
        let credential = Credential::new("token-1");
        assert_eq!(credential.bearer_header(), "Bearer token-1");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(client().product_url(ProductId(12)), "http://localhost:8080/api/products/12");
    }
}
