pub mod filter;
pub mod pagination;
pub mod validation;
