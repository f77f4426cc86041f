//! Demo data for manual testing of a fresh inventory.

use ims_core::DomainResult;

use crate::part::{Part, StockLevels};
use crate::product::Product;
use crate::store::Inventory;

enum Source {
    InHouse(u32),
    Outsourced(&'static str),
}

const PARTS: &[(&str, f64, [u32; 3], Source)] = &[
    ("Prefabulated amulite base plate", 1125.23, [5, 1, 5], Source::InHouse(100)),
    ("Maleable logarithmic casing", 500.15, [3, 1, 5], Source::InHouse(150)),
    ("Spurving bearings", 64.55, [20, 15, 50], Source::Outsourced("North Bearing Co.")),
    (
        "Stator with pandermic semi-boloid slots",
        747.11,
        [7, 5, 10],
        Source::Outsourced("Stator the Union LLC"),
    ),
    ("Differential girdle springs", 55.13, [34, 15, 75], Source::InHouse(205)),
    ("Grammeters", 357.45, [9, 5, 10], Source::InHouse(502)),
    ("Lotus-o-deltoid winding", 867.34, [3, 2, 6], Source::Outsourced("Wound Windings Winders Co.")),
    ("Non-reversible tremie pipe", 14.01, [15, 5, 15], Source::InHouse(125)),
];

/// Loads eight parts and two products, linking the products to some of the parts.
///
/// Ids are minted from the inventory's counters, so seeding a non-empty store
/// appends rather than clobbers.
pub fn seed_sample_data(inventory: &mut Inventory) -> DomainResult<()> {
    let mut part_ids = Vec::with_capacity(PARTS.len());
    for (name, price, [stock, min, max], source) in PARTS {
        let id = inventory.generate_part_id()?;
        let levels = StockLevels::new(*stock, *min, *max);
        let part = match source {
            Source::InHouse(machine_id) => Part::in_house(id, *name, *price, levels, *machine_id),
            Source::Outsourced(company) => Part::outsourced(id, *name, *price, levels, *company),
        };
        inventory.add_part(part);
        part_ids.push(id);
    }

    let turbo = inventory.generate_product_id()?;
    inventory.add_product(Product::new(turbo, "Turboencabulator", 5325.13, StockLevels::new(2, 1, 2)));
    let micro = inventory.generate_product_id()?;
    inventory.add_product(Product::new(micro, "Microencabulator", 2425.99, StockLevels::new(3, 1, 4)));

    for idx in [0, 1, 3, 4, 5] {
        inventory.associate_part(turbo, part_ids[idx])?;
    }
    for idx in [0, 1, 3] {
        inventory.associate_part(micro, part_ids[idx])?;
    }

    tracing::info!(
        parts = inventory.part_count(),
        products = inventory.product_count(),
        "sample data loaded"
    );
    Ok(())
}
