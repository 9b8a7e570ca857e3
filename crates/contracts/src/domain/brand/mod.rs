pub mod aggregate;

pub use aggregate::{Brand, BrandId, BrandListResponse};
