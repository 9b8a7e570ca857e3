use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::brand::Brand;
use contracts::domain::product::{Product, ProductDraft, ProductId};
use contracts::shared::filter::FilterPredicate;
use contracts::shared::validation::ValidationError;

use super::filter_state::FilterState;
use super::pagination_state::{PageFit, PaginationState};
use super::result_cache::ResultCache;
use crate::api::{CatalogTransport, TransportError};

/// Read-only view of the catalog for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub is_loading: bool,
    pub page: usize,
    pub total_pages: usize,
    pub total_elements: u64,
    pub filter: FilterPredicate,
    pub brands: Vec<Brand>,
    /// Non-fatal error of the last list fetch; previous data stays visible.
    pub list_error: Option<String>,
    /// Brand reference data failed to load; only a later brand load clears it.
    pub brands_error: Option<String>,
}

#[derive(Debug, Default)]
struct CatalogState {
    filter: FilterState,
    pagination: PaginationState,
    cache: ResultCache,
    brands: Vec<Brand>,
    list_error: Option<String>,
    brands_error: Option<String>,
    // Sequence number of the newest list fetch issued.
    last_issued: u64,
}

impl CatalogState {
    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.cache.products().to_vec(),
            is_loading: self.cache.is_loading(),
            page: self.pagination.page(),
            total_pages: self.pagination.total_pages(),
            total_elements: self.cache.total_elements(),
            filter: self.filter.predicate().clone(),
            brands: self.brands.clone(),
            list_error: self.list_error.clone(),
            brands_error: self.brands_error.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchOutcome {
    Loaded,
    /// Loaded, but the page index had to be moved back into range.
    Clamped,
    Failed,
    /// A newer fetch was issued meanwhile; the response was dropped.
    Stale,
}

type Observer = Rc<dyn Fn(CatalogSnapshot)>;

/// Single authority turning (filter, page) into fetches and mutation results
/// into cache invalidation.
///
/// Cheap to clone: clones share the same state. State is never borrowed
/// across an `.await`.
pub struct CatalogController<T: ?Sized = dyn CatalogTransport> {
    transport: Rc<T>,
    state: Rc<RefCell<CatalogState>>,
    observer: Option<Observer>,
}

impl<T: ?Sized> Clone for CatalogController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            state: Rc::clone(&self.state),
            observer: self.observer.clone(),
        }
    }
}

impl<T: CatalogTransport + ?Sized> CatalogController<T> {
    pub fn new(transport: Rc<T>) -> Self {
        Self {
            transport,
            state: Rc::new(RefCell::new(CatalogState::default())),
            observer: None,
        }
    }

    /// Call `observer` with a fresh snapshot after every state change.
    pub fn with_observer(mut self, observer: impl Fn(CatalogSnapshot) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn brands(&self) -> Vec<Brand> {
        self.state.borrow().brands.clone()
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.snapshot();
            observer(snapshot);
        }
    }

    // ------------------------------------------------------------------------
    // Filter / pagination
    // ------------------------------------------------------------------------

    /// Apply a new filter and go back to the first page.
    ///
    /// A rejected predicate resets the filter to its default, and the list is
    /// reloaded with that default; the invalid predicate is never sent.
    pub async fn apply_filter(&self, candidate: FilterPredicate) -> Result<(), ValidationError> {
        let result = {
            let mut state = self.state.borrow_mut();
            let result = state.filter.apply(candidate);
            state.pagination.reset();
            result
        };
        if let Err(e) = &result {
            log::debug!("filter rejected: {}", e);
        }
        self.refresh().await;
        result
    }

    pub async fn reset_filter(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.filter.reset();
            state.pagination.reset();
        }
        self.refresh().await;
    }

    /// Navigate to page `n`; out-of-range requests are ignored silently.
    pub async fn go_to_page(&self, n: usize) {
        let moved = self.state.borrow_mut().pagination.go_to(n);
        if moved {
            self.refresh().await;
        } else {
            log::debug!("ignoring navigation to page {}", n);
        }
    }

    // ------------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------------

    /// Reload the current page. Failures end up in `list_error`, not in the
    /// caller.
    pub async fn refresh(&self) {
        if self.fetch_current().await == FetchOutcome::Clamped {
            // Один повторный запрос: страница исчезла (например, после удаления)
            if self.fetch_current().await == FetchOutcome::Clamped {
                log::warn!("page count shrank again while re-clamping; not refetching");
            }
        }
    }

    async fn fetch_current(&self) -> FetchOutcome {
        let (seq, filter, page) = {
            let mut state = self.state.borrow_mut();
            state.last_issued += 1;
            state.cache.begin_load();
            (
                state.last_issued,
                state.filter.predicate().clone(),
                state.pagination.request(),
            )
        };
        self.notify();
        log::debug!("fetch #{}: page {} filter {:?}", seq, page.page, filter);

        let result = self.transport.list_products(&filter, &page).await;

        let outcome = {
            let mut state = self.state.borrow_mut();
            if seq != state.last_issued {
                log::debug!(
                    "fetch #{} superseded by #{}, dropping response",
                    seq,
                    state.last_issued
                );
                return FetchOutcome::Stale;
            }
            match result {
                Ok(page) => {
                    let total_pages = page.total_pages;
                    state.cache.replace(page);
                    state.list_error = None;
                    match state.pagination.record_total(total_pages) {
                        PageFit::Clamped { from, to } => {
                            log::debug!("page {} no longer exists, moving to {}", from, to);
                            FetchOutcome::Clamped
                        }
                        PageFit::InRange | PageFit::Empty => FetchOutcome::Loaded,
                    }
                }
                Err(e) => {
                    log::warn!("failed to load products: {}", e);
                    state.cache.fail_load();
                    state.list_error = Some(format!("Failed to load products: {}", e.user_message()));
                    FetchOutcome::Failed
                }
            }
        };
        self.notify();
        outcome
    }

    /// Load brand reference data for the filter bar and product dialogs.
    pub async fn load_brands(&self) {
        match self.transport.list_brands().await {
            Ok(brands) => {
                let mut state = self.state.borrow_mut();
                state.brands = brands;
                state.brands_error = None;
            }
            Err(e) => {
                log::warn!("failed to load brands: {}", e);
                self.state.borrow_mut().brands_error =
                    Some(format!("Failed to load brands: {}", e.user_message()));
            }
        }
        self.notify();
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------
    //
    // Each one refreshes exactly once on success; on failure the cache stays
    // as it was and the error goes back to the dialog.

    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, TransportError> {
        let created = match self.transport.create_product(draft).await {
            Ok(product) => product,
            Err(e) => {
                log::warn!("create of '{}' failed: {}", draft.name, e);
                return Err(e);
            }
        };
        log::info!("product created: {} (id: {})", created.name, created.id);
        self.refresh().await;
        Ok(created)
    }

    pub async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, TransportError> {
        let updated = match self.transport.update_product(id, draft).await {
            Ok(product) => product,
            Err(e) => {
                log::warn!("update of product {} failed: {}", id, e);
                return Err(e);
            }
        };
        log::info!("product updated: {} (id: {})", updated.name, updated.id);
        self.refresh().await;
        Ok(updated)
    }

    pub async fn delete(&self, id: ProductId) -> Result<(), TransportError> {
        if let Err(e) = self.transport.delete_product(id).await {
            log::warn!("delete of product {} failed: {}", id, e);
            return Err(e);
        }
        log::info!("product {} deleted", id);
        self.refresh().await;
        Ok(())
    }
}
