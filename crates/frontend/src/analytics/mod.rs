pub mod pipeline;
pub mod scope;
pub mod store;
pub mod summary;
pub mod ui;
