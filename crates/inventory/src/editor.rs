//! Product edit sessions.
//!
//! A product form works on a private copy of the product's associations. Parts
//! can be added and removed freely; nothing reaches the store until
//! [`ProductEditor::commit`]. Dropping the editor discards the edits.

use ims_core::{DomainError, DomainResult, PartId, ProductId};

use crate::part::ItemFields;
use crate::product::Product;
use crate::store::Inventory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Modify(ProductId),
}

#[derive(Debug, Clone)]
pub struct ProductEditor {
    mode: Mode,
    parts: Vec<PartId>,
}

impl ProductEditor {
    /// Starts editing a product that does not exist yet. Its id is minted on commit.
    pub fn create() -> Self {
        Self {
            mode: Mode::Create,
            parts: Vec::new(),
        }
    }

    /// Starts editing a snapshot of an existing product.
    pub fn modify(product: &Product) -> Self {
        Self {
            mode: Mode::Modify(product.id()),
            parts: product.all_associated_parts(),
        }
    }

    /// Id of the product being modified, `None` while creating.
    pub fn product_id(&self) -> Option<ProductId> {
        match self.mode {
            Mode::Create => None,
            Mode::Modify(id) => Some(id),
        }
    }

    pub fn associated_parts(&self) -> &[PartId] {
        &self.parts
    }

    pub fn add_part(&mut self, part_id: PartId) -> DomainResult<()> {
        if self.parts.contains(&part_id) {
            return Err(DomainError::conflict(format!(
                "part {part_id} is already associated with this product"
            )));
        }
        self.parts.push(part_id);
        Ok(())
    }

    pub fn remove_part(&mut self, part_id: PartId) -> bool {
        let before = self.parts.len();
        self.parts.retain(|id| *id != part_id);
        self.parts.len() != before
    }

    /// Writes the edited product into the store and returns its id.
    ///
    /// Fails with `NotFound` if a referenced part, or the product being
    /// modified, is no longer stored; the store is untouched in that case.
    pub fn commit(self, inventory: &mut Inventory, fields: ItemFields) -> DomainResult<ProductId> {
        if let Some(missing) = self.parts.iter().find(|id| inventory.lookup_part(**id).is_none()) {
            tracing::warn!(part_id = %missing, "product commit references a missing part");
            return Err(DomainError::not_found());
        }

        match self.mode {
            Mode::Create => {
                let id = inventory.generate_product_id()?;
                inventory.add_product(self.build(id, fields));
                Ok(id)
            }
            Mode::Modify(id) => {
                let index = inventory.product_index(id).ok_or(DomainError::NotFound)?;
                inventory.update_product(index, self.build(id, fields))?;
                Ok(id)
            }
        }
    }

    fn build(self, id: ProductId, fields: ItemFields) -> Product {
        let mut product = Product::from_fields(id, fields);
        for part_id in self.parts {
            product.add_associated_part(part_id);
        }
        product
    }
}
