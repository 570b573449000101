pub mod client;
pub mod covers;
pub mod error;
pub mod types;

pub use client::MangaDexClient;
pub use error::MangaDexError;
