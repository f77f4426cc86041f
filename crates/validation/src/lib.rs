//! Field validation for the part and product forms.
//!
//! The UI hands over raw field text; this crate decides pass/fail, produces the
//! message to show, and turns fully validated forms into inventory entities.
//! Displaying the alert is left to an [`AlertSink`] the UI provides.

pub mod alert;
pub mod constraint;
pub mod form;

pub use alert::{AlertSink, TracingAlertSink};
pub use constraint::{check_field, check_fields, FieldConstraint, Outcome, Violation, ViolationKind};
pub use form::{FieldRejection, FormError, PartForm, PartSourceInput, ProductForm, ValidatedPart};
