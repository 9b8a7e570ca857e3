pub mod brand_statistics;
