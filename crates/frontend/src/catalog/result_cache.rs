use contracts::domain::product::{Product, ProductPage};

/// Most recently fetched page plus the loading flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCache {
    products: Vec<Product>,
    total_elements: u64,
    is_loading: bool,
}

impl ResultCache {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    /// Swap in a freshly fetched page. Never patched item by item.
    pub fn replace(&mut self, page: ProductPage) {
        self.products = page.items;
        self.total_elements = page.total_elements;
        self.is_loading = false;
    }

    /// Keep the previous page visible after a failed fetch.
    pub fn fail_load(&mut self) {
        self.is_loading = false;
    }
}
