pub mod catalog;
pub mod config;
pub mod debug_log;
pub mod display;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod models;
pub mod navigation;
pub mod pinned;
pub mod session;
