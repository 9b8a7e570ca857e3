pub mod aggregate;

pub use aggregate::{BrandRef, Product, ProductDraft, ProductId, ProductPage};
