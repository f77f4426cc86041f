//! Whole-form validation for the part and product screens.
//!
//! Fields are checked in screen order and the first failure wins, so the user
//! sees one alert at a time: name, price, inventory, max, min, the max/min and
//! inventory range checks, and finally the part's machine id or company name.

use thiserror::Error;

use ims_core::{DomainError, DomainResult, PartId};
use ims_inventory::{Inventory, ItemFields, Part, PartSource, StockLevels};

use crate::constraint::{check_field, check_fields, parse_int, parse_real, FieldConstraint, Outcome};

use FieldConstraint::{
    IsInt, IsNumber, NotNullOrEmpty, PositiveNum, XGreaterThanEqualY, XLessThanEqualY,
};

pub const NAME: &str = "Name";
pub const PRICE: &str = "Price";
pub const INV: &str = "Inv";
pub const MAX: &str = "Max";
pub const MIN: &str = "Min";
pub const MACHINE_ID: &str = "Machine ID";
pub const COMPANY_NAME: &str = "Company Name";

const BLANK: &str = "Value cannot be empty or blank.";
const NOT_POSITIVE_NUMBER: &str = "Invalid input.\nValue must be a positive number.";
const NOT_POSITIVE_WHOLE: &str = "Invalid input.\nValue must be a positive number without a decimal.";
const MAX_BELOW_MIN: &str = "Max must be greater than Min.";
const INV_BELOW_MIN: &str = "Inv must be greater than or equal to Min.";
const INV_ABOVE_MAX: &str = "Inv must be less than or equal to Max.";

const WHOLE: &[FieldConstraint] = &[IsNumber, PositiveNum, IsInt];

/// The field the user has to fix, and what to tell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{label}: {message}")]
pub struct FieldRejection {
    pub label: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field failed validation; show it to the user.
    #[error(transparent)]
    Rejected(#[from] FieldRejection),
    /// The validator was driven incorrectly; a bug, not user input.
    #[error(transparent)]
    Usage(#[from] DomainError),
}

/// Raw text of the product screen's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
}

/// Raw text of the part screen's variant field, tagged by the selected radio button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartSourceInput {
    InHouse { machine_id: String },
    Outsourced { company_name: String },
}

/// Raw text of the part screen's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    pub source: PartSourceInput,
}

/// A part form that passed every check, with its values parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPart {
    pub fields: ItemFields,
    pub source: PartSource,
}

impl ProductForm {
    pub fn validate(&self) -> Result<ItemFields, FormError> {
        validate_item(&self.name, &self.price, &self.stock, &self.min, &self.max)
    }
}

impl PartForm {
    pub fn validate(&self) -> Result<ValidatedPart, FormError> {
        let fields = validate_item(&self.name, &self.price, &self.stock, &self.min, &self.max)?;

        let source = match &self.source {
            PartSourceInput::InHouse { machine_id } => {
                require(machine_id, &[NotNullOrEmpty], MACHINE_ID, BLANK)?;
                require(machine_id, WHOLE, MACHINE_ID, NOT_POSITIVE_WHOLE)?;
                PartSource::InHouse {
                    machine_id: count(machine_id)?,
                }
            }
            PartSourceInput::Outsourced { company_name } => {
                require(company_name, &[NotNullOrEmpty], COMPANY_NAME, BLANK)?;
                PartSource::Outsourced {
                    company_name: company_name.clone(),
                }
            }
        };

        Ok(ValidatedPart { fields, source })
    }
}

impl ValidatedPart {
    pub fn into_part(self, id: PartId) -> Part {
        Part::from_fields(id, self.fields, self.source)
    }

    /// Adds the part under a freshly minted id.
    pub fn add_to(self, inventory: &mut Inventory) -> DomainResult<PartId> {
        let id = inventory.generate_part_id()?;
        inventory.add_part(self.into_part(id));
        Ok(id)
    }

    /// Replaces the stored part `id`, keeping its id and position.
    pub fn replace_in(self, inventory: &mut Inventory, id: PartId) -> DomainResult<()> {
        let index = inventory.part_index(id).ok_or(DomainError::NotFound)?;
        inventory.update_part(index, self.into_part(id))
    }
}

fn validate_item(
    name: &str,
    price: &str,
    stock: &str,
    min: &str,
    max: &str,
) -> Result<ItemFields, FormError> {
    require(name, &[NotNullOrEmpty], NAME, BLANK)?;

    require(price, &[NotNullOrEmpty], PRICE, BLANK)?;
    require(price, &[IsNumber, PositiveNum], PRICE, NOT_POSITIVE_NUMBER)?;

    require(stock, &[NotNullOrEmpty], INV, BLANK)?;
    require(stock, WHOLE, INV, NOT_POSITIVE_WHOLE)?;

    require(max, &[NotNullOrEmpty], MAX, BLANK)?;
    require(max, WHOLE, MAX, NOT_POSITIVE_WHOLE)?;

    require(min, &[NotNullOrEmpty], MIN, BLANK)?;
    require(min, WHOLE, MIN, NOT_POSITIVE_WHOLE)?;

    require_pair(max, min, XGreaterThanEqualY, MAX, MAX_BELOW_MIN)?;
    require_pair(stock, min, XGreaterThanEqualY, INV, INV_BELOW_MIN)?;
    require_pair(stock, max, XLessThanEqualY, INV, INV_ABOVE_MAX)?;

    let price = parse_real(price)
        .ok_or_else(|| DomainError::invalid_usage("price passed checks but did not parse"))?;

    Ok(ItemFields {
        name: name.to_string(),
        price,
        levels: StockLevels::new(count(stock)?, count(min)?, count(max)?),
    })
}

fn require(
    text: &str,
    constraints: &[FieldConstraint],
    label: &'static str,
    message: &'static str,
) -> Result<(), FormError> {
    reject_on_fail(check_field(text, constraints)?, label, message)
}

fn require_pair(
    x: &str,
    y: &str,
    constraint: FieldConstraint,
    label: &'static str,
    message: &'static str,
) -> Result<(), FormError> {
    reject_on_fail(check_fields(x, y, constraint)?, label, message)
}

fn reject_on_fail(
    outcome: Outcome,
    label: &'static str,
    message: &'static str,
) -> Result<(), FormError> {
    match outcome {
        Outcome::Pass => Ok(()),
        Outcome::Fail(violation) => {
            tracing::debug!(
                field = label,
                constraint = ?violation.constraint,
                kind = ?violation.kind,
                "field rejected"
            );
            Err(FieldRejection { label, message }.into())
        }
    }
}

/// Parses a field that already passed the whole-number checks.
fn count(text: &str) -> DomainResult<u32> {
    parse_int(text)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| DomainError::invalid_usage(format!("{text:?} passed checks but is not a count")))
}
