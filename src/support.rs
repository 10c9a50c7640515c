//! Supporting utilities used by models.
//!
//! - [`comfort`]: ISO 7730 PMV/PPD evaluation, compliance classification,
//!   area assessment and batch reassessment.
//! - [`units`]: Unit helpers for comfort inputs built on [`uom`].

pub mod comfort;
pub mod units;
