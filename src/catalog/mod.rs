//! Zone discovery and downloads.
//!
//! - `zone` - [`ZoneLink`] and the identifier derivation rules
//! - `catalog` - [`ZoneCatalog`], listing and downloading through the engine

pub mod catalog;
pub mod zone;

pub use catalog::{ZoneCatalog, DEFAULT_DOWNLOAD_DIR, LINKS_PATH};
pub use zone::{ZoneLink, ZONE_SUFFIX};
