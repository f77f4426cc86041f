use serde::{Deserialize, Serialize};

use ims_core::{Entity, PartId, ProductId, Searchable};

use crate::part::{ItemFields, StockLevels};

/// Sellable product made up of zero or more parts.
///
/// Associations are held as [`PartId`] handles. The product never owns a part;
/// the [`Inventory`](crate::Inventory) resolves the handles to the current part
/// values, so replacing a part in the store is immediately visible through
/// every product that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    levels: StockLevels,
    associated_parts: Vec<PartId>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            associated_parts: Vec::new(),
        }
    }

    pub fn from_fields(id: ProductId, fields: ItemFields) -> Self {
        Self::new(id, fields.name, fields.price, fields.levels)
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn set_levels(&mut self, levels: StockLevels) {
        self.levels = levels;
    }

    pub fn stock(&self) -> u32 {
        self.levels.stock
    }

    pub fn min(&self) -> u32 {
        self.levels.min
    }

    pub fn max(&self) -> u32 {
        self.levels.max
    }

    /// Appends `part_id` as-is, with no duplicate or existence check.
    ///
    /// Use [`Inventory::associate_part`](crate::Inventory::associate_part) for a
    /// stored product, or [`ProductEditor::add_part`](crate::ProductEditor::add_part)
    /// during an edit; both reject duplicates and unknown parts.
    pub fn add_associated_part(&mut self, part_id: PartId) {
        self.associated_parts.push(part_id);
    }

    /// Removes the first association with `part_id`. Returns whether one was found.
    pub fn delete_associated_part(&mut self, part_id: PartId) -> bool {
        match self.associated_parts.iter().position(|id| *id == part_id) {
            Some(idx) => {
                self.associated_parts.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Snapshot of the associations; edits to the returned `Vec` do not touch the product.
    pub fn all_associated_parts(&self) -> Vec<PartId> {
        self.associated_parts.clone()
    }

    pub fn is_associated_with(&self, part_id: PartId) -> bool {
        self.associated_parts.contains(&part_id)
    }

    pub fn associated_part_count(&self) -> usize {
        self.associated_parts.len()
    }

    /// Re-points every association with `from` to `to`, keeping positions.
    pub(crate) fn relink_part(&mut self, from: PartId, to: PartId) {
        for id in self.associated_parts.iter_mut().filter(|id| **id == from) {
            *id = to;
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

impl Searchable for Product {
    fn name(&self) -> &str {
        &self.name
    }
}
