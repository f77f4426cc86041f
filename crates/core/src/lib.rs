//! `ims-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory and
//! validation crates (no IO, no UI concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, Searchable};
pub use error::{DomainError, DomainResult};
pub use id::{PartId, ProductId};
