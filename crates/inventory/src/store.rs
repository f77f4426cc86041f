//! The authoritative in-memory collection of parts and products.

use ims_core::{DomainError, DomainResult, PartId, ProductId};

use crate::part::Part;
use crate::product::Product;

/// In-memory inventory.
///
/// Insertion order is display order. Ids come from two independent counters
/// starting at 1 and are never handed out twice, even after deletion. A
/// counter that has handed out `u32::MAX` is spent and refuses further ids.
#[derive(Debug, Clone)]
pub struct Inventory {
    parts: Vec<Part>,
    products: Vec<Product>,
    next_part_id: Option<PartId>,
    next_product_id: Option<ProductId>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            products: Vec::new(),
            next_part_id: Some(PartId::new(1)),
            next_product_id: Some(ProductId::new(1)),
        }
    }

    /// Returns the next unused part id and advances the counter.
    pub fn generate_part_id(&mut self) -> DomainResult<PartId> {
        let id = self
            .next_part_id
            .ok_or_else(|| DomainError::conflict("part ids exhausted"))?;
        self.next_part_id = id.next();
        Ok(id)
    }

    /// Returns the next unused product id and advances the counter.
    pub fn generate_product_id(&mut self) -> DomainResult<ProductId> {
        let id = self
            .next_product_id
            .ok_or_else(|| DomainError::conflict("product ids exhausted"))?;
        self.next_product_id = id.next();
        Ok(id)
    }

    /// Appends a part. Uniqueness of the id is the caller's job (use [`Self::generate_part_id`]).
    pub fn add_part(&mut self, part: Part) {
        tracing::debug!(part_id = %part.id(), name = part.name(), "part added");
        self.parts.push(part);
    }

    /// Appends a product. Uniqueness of the id is the caller's job.
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id(), name = product.name(), "product added");
        self.products.push(product);
    }

    pub fn all_parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn lookup_part(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id() == id)
    }

    /// First part whose name is exactly `name`.
    pub fn lookup_part_by_name(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name() == name)
    }

    pub fn lookup_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// First product whose name is exactly `name`.
    pub fn lookup_product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Position of the part in display order, for use with [`Self::update_part`].
    pub fn part_index(&self, id: PartId) -> Option<usize> {
        self.parts.iter().position(|p| p.id() == id)
    }

    /// Position of the product in display order, for use with [`Self::update_product`].
    pub fn product_index(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    pub fn is_part_associated(&self, id: PartId) -> bool {
        self.products.iter().any(|p| p.is_associated_with(id))
    }

    /// Every product referencing the part, in store order, each listed once.
    pub fn part_associations(&self, id: PartId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_associated_with(id))
            .collect()
    }

    /// Resolves a product's associations to the parts currently in the store.
    ///
    /// Handles whose part is no longer stored are skipped.
    pub fn associated_parts(&self, product: &Product) -> Vec<&Part> {
        product
            .all_associated_parts()
            .into_iter()
            .filter_map(|id| self.lookup_part(id))
            .collect()
    }

    /// Links a stored part to a stored product.
    pub fn associate_part(&mut self, product_id: ProductId, part_id: PartId) -> DomainResult<()> {
        if self.lookup_part(part_id).is_none() {
            return Err(DomainError::not_found());
        }
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == product_id)
            .ok_or(DomainError::NotFound)?;
        if product.is_associated_with(part_id) {
            return Err(DomainError::conflict(format!(
                "part {part_id} is already associated with product {product_id}"
            )));
        }
        product.add_associated_part(part_id);
        Ok(())
    }

    /// Removes the part unless a product still references it.
    pub fn delete_part(&mut self, id: PartId) -> DomainResult<Part> {
        let idx = self.part_index(id).ok_or(DomainError::NotFound)?;

        let dependents: Vec<String> = self
            .part_associations(id)
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        if !dependents.is_empty() {
            tracing::warn!(part_id = %id, products = ?dependents, "part delete refused");
            return Err(DomainError::integrity(format!(
                "part {id} is associated with product(s) {}",
                dependents.join(", ")
            )));
        }

        let removed = self.parts.remove(idx);
        tracing::info!(part_id = %id, "part deleted");
        Ok(removed)
    }

    /// Removes the product if it has no associated parts.
    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<Product> {
        let idx = self.product_index(id).ok_or(DomainError::NotFound)?;

        let count = self.products[idx].associated_part_count();
        if count > 0 {
            tracing::warn!(product_id = %id, associated = count, "product delete refused");
            return Err(DomainError::integrity(format!(
                "product {id} has {count} associated part(s) which must be removed first"
            )));
        }

        let removed = self.products.remove(idx);
        tracing::info!(product_id = %id, "product deleted");
        Ok(removed)
    }

    /// Replaces the part at `index`.
    ///
    /// Products hold part ids, so they see the new part without further work.
    /// When the replacement carries a different id, every association with the
    /// old id is moved to the new one. Nothing changes if an error is returned.
    pub fn update_part(&mut self, index: usize, part: Part) -> DomainResult<()> {
        let len = self.parts.len();
        if index >= len {
            return Err(DomainError::out_of_range(index, len));
        }

        let old_id = self.parts[index].id();
        let new_id = part.id();
        if old_id != new_id {
            if self.part_index(new_id).is_some() {
                return Err(DomainError::conflict(format!(
                    "part id {new_id} already belongs to another part"
                )));
            }
            for product in self.products.iter_mut() {
                product.relink_part(old_id, new_id);
            }
        }

        tracing::debug!(part_id = %new_id, index, "part updated");
        self.parts[index] = part;
        Ok(())
    }

    /// Replaces the product at `index` wholesale.
    pub fn update_product(&mut self, index: usize, product: Product) -> DomainResult<()> {
        let len = self.products.len();
        let slot = self
            .products
            .get_mut(index)
            .ok_or(DomainError::out_of_range(index, len))?;

        tracing::debug!(product_id = %product.id(), index, "product updated");
        *slot = product;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::StockLevels;

    fn levels() -> StockLevels {
        StockLevels::new(5, 1, 10)
    }

    fn add_in_house(inv: &mut Inventory, name: &str) -> PartId {
        let id = inv.generate_part_id().unwrap();
        inv.add_part(Part::in_house(id, name, 1.5, levels(), 100));
        id
    }

    fn add_product(inv: &mut Inventory, name: &str, parts: &[PartId]) -> ProductId {
        let id = inv.generate_product_id().unwrap();
        let mut product = Product::new(id, name, 10.0, levels());
        for part in parts {
            product.add_associated_part(*part);
        }
        inv.add_product(product);
        id
    }

    #[test]
    fn ids_start_at_one_and_are_independent_per_kind() {
        let mut inv = Inventory::new();
        assert_eq!(inv.generate_part_id(), Ok(PartId::new(1)));
        assert_eq!(inv.generate_part_id(), Ok(PartId::new(2)));
        assert_eq!(inv.generate_product_id(), Ok(ProductId::new(1)));
    }

    #[test]
    fn spent_counter_refuses_instead_of_wrapping() {
        let mut inv = Inventory::new();
        inv.next_part_id = Some(PartId::new(u32::MAX - 1));
        inv.next_product_id = Some(ProductId::new(u32::MAX));

        assert_eq!(inv.generate_part_id(), Ok(PartId::new(u32::MAX - 1)));
        assert_eq!(inv.generate_part_id(), Ok(PartId::new(u32::MAX)));
        assert!(matches!(inv.generate_part_id(), Err(DomainError::Conflict(_))));
        assert!(matches!(inv.generate_part_id(), Err(DomainError::Conflict(_))));

        assert_eq!(inv.generate_product_id(), Ok(ProductId::new(u32::MAX)));
        assert!(matches!(inv.generate_product_id(), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut inv = Inventory::new();
        let first = add_in_house(&mut inv, "Bolt");
        inv.delete_part(first).unwrap();
        let second = add_in_house(&mut inv, "Nut");
        assert_ne!(first, second);
        assert_eq!(second, PartId::new(2));
    }

    #[test]
    fn lookup_by_id_and_exact_name() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let product = add_product(&mut inv, "Widget", &[]);

        assert_eq!(inv.lookup_part(bolt).unwrap().name(), "Bolt");
        assert_eq!(inv.lookup_part_by_name("Bolt").unwrap().id(), bolt);
        assert!(inv.lookup_part_by_name("bolt").is_none());
        assert!(inv.lookup_part(PartId::new(99)).is_none());
        assert_eq!(inv.lookup_product(product).unwrap().name(), "Widget");
        assert_eq!(inv.lookup_product_by_name("Widget").unwrap().id(), product);
        assert!(inv.lookup_product_by_name("Gadget").is_none());
    }

    #[test]
    fn lookup_by_name_returns_first_in_store_order() {
        let mut inv = Inventory::new();
        let first = add_in_house(&mut inv, "Gear");
        add_in_house(&mut inv, "Gear");
        assert_eq!(inv.lookup_part_by_name("Gear").unwrap().id(), first);
    }

    #[test]
    fn delete_unassociated_part_succeeds() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let nut = add_in_house(&mut inv, "Nut");

        let removed = inv.delete_part(bolt).unwrap();
        assert_eq!(removed.id(), bolt);
        assert!(inv.lookup_part(bolt).is_none());
        assert_eq!(inv.all_parts().len(), 1);
        assert_eq!(inv.all_parts()[0].id(), nut);
    }

    #[test]
    fn delete_associated_part_fails_and_leaves_store_unchanged() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let nut = add_in_house(&mut inv, "Nut");
        add_product(&mut inv, "Widget", &[bolt]);
        let before = inv.all_parts().to_vec();

        let err = inv.delete_part(bolt).unwrap_err();
        assert!(matches!(err, DomainError::IntegrityViolation(_)));
        assert_eq!(inv.all_parts(), before.as_slice());
        assert!(inv.lookup_part(nut).is_some());
    }

    #[test]
    fn delete_unknown_part_is_not_found() {
        let mut inv = Inventory::new();
        assert_eq!(inv.delete_part(PartId::new(5)), Err(DomainError::NotFound));
    }

    #[test]
    fn part_associations_lists_each_product_once_in_order() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let nut = add_in_house(&mut inv, "Nut");
        let a = add_product(&mut inv, "A", &[bolt, bolt]);
        add_product(&mut inv, "B", &[nut]);
        let c = add_product(&mut inv, "C", &[nut, bolt]);

        let ids: Vec<_> = inv.part_associations(bolt).iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(inv.is_part_associated(bolt));
        assert!(!inv.is_part_associated(PartId::new(42)));
    }

    #[test]
    fn delete_product_requires_no_associated_parts() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let busy = add_product(&mut inv, "Busy", &[bolt]);
        let idle = add_product(&mut inv, "Idle", &[]);

        let err = inv.delete_product(busy).unwrap_err();
        assert!(matches!(err, DomainError::IntegrityViolation(_)));
        assert_eq!(inv.product_count(), 2);

        inv.delete_product(idle).unwrap();
        assert!(inv.lookup_product(idle).is_none());
        assert_eq!(inv.product_count(), 1);
    }

    #[test]
    fn update_part_is_visible_through_associated_products() {
        let mut inv = Inventory::new();
        add_in_house(&mut inv, "Spacer");
        add_in_house(&mut inv, "Washer");
        let target = add_in_house(&mut inv, "Bolt");
        let product = add_product(&mut inv, "Widget", &[target]);

        let replacement = Part::outsourced(target, "Bolt M6", 2.0, levels(), "Fasteners Inc.");
        let idx = inv.part_index(target).unwrap();
        inv.update_part(idx, replacement.clone()).unwrap();

        let widget = inv.lookup_product(product).unwrap();
        let resolved = inv.associated_parts(widget);
        assert_eq!(resolved, vec![&replacement]);
        assert!(resolved.iter().all(|p| p.name() != "Bolt"));
        assert_eq!(inv.part_index(target), Some(idx));
    }

    #[test]
    fn update_part_with_new_id_relinks_associations() {
        let mut inv = Inventory::new();
        let old = add_in_house(&mut inv, "Bolt");
        let product = add_product(&mut inv, "Widget", &[old]);
        let new_id = inv.generate_part_id().unwrap();

        inv.update_part(0, Part::in_house(new_id, "Bolt v2", 1.0, levels(), 7))
            .unwrap();

        let widget = inv.lookup_product(product).unwrap();
        assert_eq!(widget.all_associated_parts(), vec![new_id]);
        assert!(!inv.is_part_associated(old));
    }

    #[test]
    fn update_part_rejects_id_owned_by_another_part() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let nut = add_in_house(&mut inv, "Nut");
        add_product(&mut inv, "Widget", &[bolt]);
        let before = inv.clone();

        let err = inv
            .update_part(0, Part::in_house(nut, "Clash", 1.0, levels(), 1))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(inv.all_parts(), before.all_parts());
        assert_eq!(inv.all_products(), before.all_products());
    }

    #[test]
    fn update_out_of_range_changes_nothing() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        add_product(&mut inv, "Widget", &[bolt]);

        let err = inv
            .update_part(3, Part::in_house(bolt, "Ghost", 1.0, levels(), 1))
            .unwrap_err();
        assert_eq!(err, DomainError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(inv.lookup_part(bolt).unwrap().name(), "Bolt");

        let err = inv
            .update_product(1, Product::new(ProductId::new(1), "Ghost", 1.0, levels()))
            .unwrap_err();
        assert!(err.is_contract_violation());
        assert_eq!(inv.all_products()[0].name(), "Widget");
    }

    #[test]
    fn update_product_replaces_wholesale() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let id = add_product(&mut inv, "Widget", &[bolt]);

        inv.update_product(0, Product::new(id, "Widget Pro", 99.0, levels()))
            .unwrap();

        let product = inv.lookup_product(id).unwrap();
        assert_eq!(product.name(), "Widget Pro");
        assert_eq!(product.associated_part_count(), 0);
        assert!(!inv.is_part_associated(bolt));
    }

    #[test]
    fn associated_parts_skips_handles_added_without_checks() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let mut product = Product::new(ProductId::new(1), "Loose", 1.0, levels());
        product.add_associated_part(bolt);
        product.add_associated_part(PartId::new(77));

        let resolved: Vec<_> = inv.associated_parts(&product).iter().map(|p| p.id()).collect();
        assert_eq!(resolved, vec![bolt]);
    }

    #[test]
    fn associate_part_checks_both_sides_and_duplicates() {
        let mut inv = Inventory::new();
        let bolt = add_in_house(&mut inv, "Bolt");
        let product = add_product(&mut inv, "Widget", &[]);

        inv.associate_part(product, bolt).unwrap();
        assert!(matches!(inv.associate_part(product, bolt), Err(DomainError::Conflict(_))));
        assert_eq!(inv.associate_part(product, PartId::new(9)), Err(DomainError::NotFound));
        assert_eq!(inv.associate_part(ProductId::new(9), bolt), Err(DomainError::NotFound));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: ids are strictly increasing and distinct.
            #[test]
            fn generated_part_ids_strictly_increase(n in 1usize..64) {
                let mut inv = Inventory::new();
                let ids: Vec<PartId> = (0..n).map(|_| inv.generate_part_id().unwrap()).collect();
                prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            }

            /// Property: a part deletes iff no product references it.
            #[test]
            fn delete_part_succeeds_iff_unreferenced(
                part_count in 1usize..12,
                links in proptest::collection::vec((0usize..12, 0usize..4), 0..20),
                target in 0usize..12,
            ) {
                let mut inv = Inventory::new();
                let parts: Vec<PartId> = (0..part_count)
                    .map(|i| add_in_house(&mut inv, &format!("part-{i}")))
                    .collect();
                let products: Vec<ProductId> = (0..4)
                    .map(|i| add_product(&mut inv, &format!("product-{i}"), &[]))
                    .collect();
                for (part, product) in links {
                    if part < part_count {
                        let _ = inv.associate_part(products[product], parts[part]);
                    }
                }

                let target = parts[target % part_count];
                let referenced = inv.is_part_associated(target);
                let before = inv.all_parts().to_vec();
                let result = inv.delete_part(target);

                if referenced {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(inv.all_parts(), before.as_slice());
                } else {
                    prop_assert!(result.is_ok());
                    prop_assert!(inv.lookup_part(target).is_none());
                    prop_assert_eq!(inv.part_count(), before.len() - 1);
                }
            }
        }
    }
}
