//! Catalog view-state core.
//!
//! The controller is the only writer of filter, pagination and the result
//! cache; presentation reads [`CatalogSnapshot`]s and calls its entry points.

pub mod controller;
pub mod filter_state;
pub mod modal;
pub mod pagination_state;
pub mod result_cache;
pub mod statistics;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use controller::{CatalogController, CatalogSnapshot};
pub use modal::{ModalBridge, ModalSelection, ProductForm, SubmitError};
