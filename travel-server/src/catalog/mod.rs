//! Destination catalog and search history.
//!
//! Loads destinations and past searches from JSON files in a data
//! directory, hands out shared snapshots to the engine and records new
//! searches.

mod error;
mod store;

pub use error::CatalogError;
pub use store::{Catalog, DESTINATIONS_FILE, HISTORY_FILE};
