pub mod api;
pub mod components;
pub mod export;
pub mod list_utils;
