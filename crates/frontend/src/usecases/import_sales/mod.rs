pub mod api;
pub mod ui;

pub use ui::ImportSalesPage;
