//! Inventory domain module.
//!
//! Parts, products and the in-memory store that keeps the associations between
//! them consistent. Everything here is deterministic domain logic (no IO, no UI).

pub mod editor;
pub mod part;
pub mod product;
pub mod search;
pub mod seed;
pub mod store;

pub use editor::ProductEditor;
pub use part::{ItemFields, Part, PartSource, StockLevels};
pub use product::Product;
pub use search::{search, search_parts, search_products};
pub use seed::seed_sample_data;
pub use store::Inventory;
