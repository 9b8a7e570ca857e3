pub mod dashboard;
pub mod filter_bar;
pub mod product_form;
pub mod product_modals;
pub mod product_table;
pub mod statistics_panel;

pub use dashboard::ProductDashboard;
