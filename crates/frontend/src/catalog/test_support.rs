//! In-memory transport for catalog tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use contracts::domain::brand::Brand;
use contracts::domain::product::{BrandRef, Product, ProductDraft, ProductId, ProductPage};
use contracts::shared::filter::FilterPredicate;
use contracts::shared::pagination::PageRequest;
use futures::channel::oneshot;

use crate::api::{CatalogTransport, TransportError};

type PageResult = Result<ProductPage, TransportError>;

enum Scripted {
    Ready(PageResult),
    /// Resolves when the test sends on the paired channel.
    Gated(oneshot::Receiver<PageResult>),
}

#[derive(Default)]
pub struct FakeTransport {
    pages: RefCell<VecDeque<Scripted>>,
    list_calls: RefCell<Vec<(FilterPredicate, PageRequest)>>,
    mutation_error: RefCell<Option<TransportError>>,
    brands_error: RefCell<Option<TransportError>>,
    created: RefCell<Vec<ProductDraft>>,
    updated: RefCell<Vec<(ProductId, ProductDraft)>>,
    deleted: RefCell<Vec<ProductId>>,
}

impl FakeTransport {
    pub fn push_page(&self, page: PageResult) {
        self.pages.borrow_mut().push_back(Scripted::Ready(page));
    }

    pub fn push_gated(&self, rx: oneshot::Receiver<PageResult>) {
        self.pages.borrow_mut().push_back(Scripted::Gated(rx));
    }

    pub fn fail_mutations_with(&self, err: TransportError) {
        *self.mutation_error.borrow_mut() = Some(err);
    }

    pub fn fail_brands_with(&self, err: TransportError) {
        *self.brands_error.borrow_mut() = Some(err);
    }

    pub fn list_calls(&self) -> Vec<(FilterPredicate, PageRequest)> {
        self.list_calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.list_calls.borrow_mut().clear();
    }

    pub fn created(&self) -> Vec<ProductDraft> {
        self.created.borrow().clone()
    }

    pub fn updated(&self) -> Vec<(ProductId, ProductDraft)> {
        self.updated.borrow().clone()
    }

    pub fn deleted(&self) -> Vec<ProductId> {
        self.deleted.borrow().clone()
    }

    fn mutation_error(&self) -> Option<TransportError> {
        self.mutation_error.borrow().clone()
    }
}

pub fn product(id: i64) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {}", id),
        brand: BrandRef {
            id: None,
            name: "Dell".into(),
        },
        price: 10.0,
        quantity: 1,
        deleted: false,
    }
}

pub fn page_of(items: usize, total_pages: usize) -> ProductPage {
    ProductPage {
        items: (1..=items as i64).map(product).collect(),
        total_pages,
        total_elements: items as u64,
    }
}

pub fn brands() -> Vec<Brand> {
    vec![Brand::new(1, "Apple"), Brand::new(2, "Dell")]
}

fn from_draft(id: ProductId, draft: &ProductDraft) -> Product {
    Product {
        id,
        name: draft.name.clone(),
        brand: BrandRef {
            id: Some(draft.brand_id),
            name: String::new(),
        },
        price: draft.price,
        quantity: draft.quantity,
        deleted: false,
    }
}

#[async_trait(?Send)]
impl CatalogTransport for FakeTransport {
    async fn list_products(
        &self,
        filter: &FilterPredicate,
        page: &PageRequest,
    ) -> Result<ProductPage, TransportError> {
        self.list_calls.borrow_mut().push((filter.clone(), *page));
        let next = self.pages.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Gated(rx)) => rx.await.expect("gate sender dropped"),
            None => panic!("unexpected list_products call for page {}", page.page),
        }
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, TransportError> {
        if let Some(err) = self.brands_error.borrow().clone() {
            return Err(err);
        }
        Ok(brands())
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, TransportError> {
        if let Some(err) = self.mutation_error() {
            return Err(err);
        }
        self.created.borrow_mut().push(draft.clone());
        Ok(from_draft(ProductId(100), draft))
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, TransportError> {
        if let Some(err) = self.mutation_error() {
            return Err(err);
        }
        self.updated.borrow_mut().push((id, draft.clone()));
        Ok(from_draft(id, draft))
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError> {
        if let Some(err) = self.mutation_error() {
            return Err(err);
        }
        self.deleted.borrow_mut().push(id);
        Ok(())
    }
}
