//! Manga catalog service clients.

pub mod http;
pub mod localized;
pub mod mangadex;
pub mod traits;

pub use localized::LocalizedText;
pub use traits::{CatalogQuery, CatalogService, ContentRating, SortOrder};
