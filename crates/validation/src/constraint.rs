//! Constraint checks over a single field's text, or a pair of fields.

use ims_core::{DomainError, DomainResult};
use thiserror::Error;

/// Rules a field's text can be checked against.
///
/// `PositiveNum` accepts zero: the value must be `>= 0.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldConstraint {
    NotNullOrEmpty,
    IsNumber,
    IsInt,
    PositiveNum,
    XGreaterThanEqualY,
    XLessThanEqualY,
}

impl FieldConstraint {
    /// Comparisons need two fields and go through [`check_fields`].
    pub fn is_comparison(self) -> bool {
        matches!(self, Self::XGreaterThanEqualY | Self::XLessThanEqualY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("value cannot be empty or blank")]
    Blank,
    #[error("value must be a number")]
    NotNumeric,
    /// A real number that is not a 32-bit integer, e.g. `4.0`.
    #[error("value must be a whole number")]
    NotInteger,
    #[error("value must not be negative")]
    Negative,
    /// `XGreaterThanEqualY` with x below y.
    #[error("first value must be greater than or equal to the second")]
    Smaller,
    /// `XLessThanEqualY` with x above y.
    #[error("first value must be less than or equal to the second")]
    Larger,
}

/// A constraint the field text did not satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Violation {
    pub constraint: FieldConstraint,
    pub kind: ViolationKind,
}

impl Violation {
    fn new(constraint: FieldConstraint, kind: ViolationKind) -> Self {
        Self { constraint, kind }
    }
}

/// Result of a check that was used correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Pass,
    Fail(Violation),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn violation(&self) -> Option<Violation> {
        match self {
            Self::Pass => None,
            Self::Fail(v) => Some(*v),
        }
    }

    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            Self::Pass => Ok(()),
            Self::Fail(v) => Err(v),
        }
    }
}

/// Parses a real number the way the number constraints see it.
///
/// Surrounding whitespace is ignored; infinities and NaN are not numbers.
pub fn parse_real(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a base-10 32-bit integer, optionally signed, with no surrounding whitespace.
pub fn parse_int(text: &str) -> Option<i32> {
    text.parse::<i32>().ok()
}

/// Checks `text` against each constraint in order, stopping at the first violation.
///
/// Comparison constraints are rejected with `InvalidUsage`, as is a
/// `PositiveNum` check on text that is not a number at all (check `IsNumber`
/// first).
pub fn check_field(text: &str, constraints: &[FieldConstraint]) -> DomainResult<Outcome> {
    for &constraint in constraints {
        let failure = match constraint {
            FieldConstraint::XGreaterThanEqualY | FieldConstraint::XLessThanEqualY => {
                return Err(DomainError::invalid_usage(format!(
                    "{constraint:?} compares two fields; use check_fields"
                )));
            }
            FieldConstraint::NotNullOrEmpty => text.trim().is_empty().then_some(ViolationKind::Blank),
            FieldConstraint::IsNumber => parse_real(text).is_none().then_some(ViolationKind::NotNumeric),
            FieldConstraint::IsInt => match parse_int(text) {
                Some(_) => None,
                None if parse_real(text).is_some() => Some(ViolationKind::NotInteger),
                None => Some(ViolationKind::NotNumeric),
            },
            FieldConstraint::PositiveNum => {
                let value = parse_real(text).ok_or_else(|| {
                    DomainError::invalid_usage(format!("PositiveNum needs numeric input, got {text:?}"))
                })?;
                (value < 0.0).then_some(ViolationKind::Negative)
            }
        };

        if let Some(kind) = failure {
            return Ok(Outcome::Fail(Violation::new(constraint, kind)));
        }
    }

    Ok(Outcome::Pass)
}

/// Compares the numeric values of two fields.
///
/// Only `XGreaterThanEqualY` and `XLessThanEqualY` are accepted. Both fields
/// must already hold numbers; anything else is `InvalidUsage`.
pub fn check_fields(x: &str, y: &str, constraint: FieldConstraint) -> DomainResult<Outcome> {
    if !constraint.is_comparison() {
        return Err(DomainError::invalid_usage(format!(
            "{constraint:?} checks a single field; use check_field"
        )));
    }

    let x = comparable(x, "first")?;
    let y = comparable(y, "second")?;

    let failure = match constraint {
        FieldConstraint::XGreaterThanEqualY => (x < y).then_some(ViolationKind::Smaller),
        _ => (x > y).then_some(ViolationKind::Larger),
    };

    Ok(match failure {
        None => Outcome::Pass,
        Some(kind) => Outcome::Fail(Violation::new(constraint, kind)),
    })
}

fn comparable(text: &str, which: &str) -> DomainResult<f64> {
    let usable = check_field(
        text,
        &[FieldConstraint::NotNullOrEmpty, FieldConstraint::IsNumber],
    )?
    .is_pass();
    if !usable {
        return Err(DomainError::invalid_usage(format!(
            "{which} field is not a number: {text:?}"
        )));
    }
    parse_real(text).ok_or_else(|| DomainError::invalid_usage(format!("{which} field is not a number")))
}
