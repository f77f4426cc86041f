use serde::{Deserialize, Serialize};

use ims_core::{Entity, PartId, Searchable};

/// Stock bookkeeping shared by parts and products.
///
/// `min <= stock <= max` is checked by the form validators before an entity is
/// built; the entity itself accepts whatever it is given.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevels {
    pub stock: u32,
    pub min: u32,
    pub max: u32,
}

impl StockLevels {
    pub fn new(stock: u32, min: u32, max: u32) -> Self {
        Self { stock, min, max }
    }

    pub fn is_consistent(&self) -> bool {
        self.min <= self.max && self.min <= self.stock && self.stock <= self.max
    }
}

/// Scalar fields shared by parts and products, as entered on a form.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub price: f64,
    pub levels: StockLevels,
}

/// Where a part comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Built in-house on a given machine.
    InHouse { machine_id: u32 },
    /// Bought from a supplier.
    Outsourced { company_name: String },
}

/// Inventory part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: f64,
    levels: StockLevels,
    source: PartSource,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: f64,
        levels: StockLevels,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source,
        }
    }

    pub fn from_fields(id: PartId, fields: ItemFields, source: PartSource) -> Self {
        Self::new(id, fields.name, fields.price, fields.levels, source)
    }

    pub fn in_house(
        id: PartId,
        name: impl Into<String>,
        price: f64,
        levels: StockLevels,
        machine_id: u32,
    ) -> Self {
        Self::new(id, name, price, levels, PartSource::InHouse { machine_id })
    }

    pub fn outsourced(
        id: PartId,
        name: impl Into<String>,
        price: f64,
        levels: StockLevels,
        company_name: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            price,
            levels,
            PartSource::Outsourced {
                company_name: company_name.into(),
            },
        )
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn set_id(&mut self, id: PartId) {
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

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    pub fn set_source(&mut self, source: PartSource) {
        self.source = source;
    }

    pub fn machine_id(&self) -> Option<u32> {
        match self.source {
            PartSource::InHouse { machine_id } => Some(machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::InHouse { .. } => None,
            PartSource::Outsourced { company_name } => Some(company_name),
        }
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }
}

impl Searchable for Part {
    fn name(&self) -> &str {
        &self.name
    }
}
