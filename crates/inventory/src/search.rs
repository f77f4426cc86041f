//! Free-text search over parts and products.
//!
//! A query matches an entity when it equals the entity's id written in decimal,
//! or when it occurs anywhere in the entity's name, ignoring case. An empty
//! query matches everything; screens that want "show all" on an empty box
//! should skip the search and list the store directly.

use ims_core::Searchable;

use crate::part::Part;
use crate::product::Product;
use crate::store::Inventory;

/// Filters `items` by `query`, keeping their order. Returns a fresh `Vec`.
pub fn search<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.id().to_string() == query || item.name().to_lowercase().contains(&needle))
        .collect()
}

pub fn search_parts<'a>(inventory: &'a Inventory, query: &str) -> Vec<&'a Part> {
    search(inventory.all_parts(), query)
}

pub fn search_products<'a>(inventory: &'a Inventory, query: &str) -> Vec<&'a Product> {
    search(inventory.all_products(), query)
}
