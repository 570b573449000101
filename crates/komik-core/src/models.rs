pub mod record;

pub use record::{CatalogRecord, ManualOverride, PublicationStatus};
