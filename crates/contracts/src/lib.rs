pub mod analytics;
pub mod catalog;
pub mod enums;
pub mod sales;
pub mod system;
