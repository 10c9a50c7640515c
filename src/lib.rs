//! # Twine Comfort
//!
//! Thermal comfort models for [Twine](https://github.com/isentropic-dev/twine):
//! ISO 7730 PMV/PPD evaluation and an iterative controller that finds the air
//! and radiant temperatures bringing a workplace back into the comfort band.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Code used by a single model starts in that model's internal `core` module
//! and moves to [`support`] once it is useful on its own. The PMV/PPD
//! evaluator is the first such case: both the adjustment controller and the
//! area assessment depend on it.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (per-iteration `debug`, recovered
//! anomalies as `warn`, batch summaries as `info`) and never installs a
//! subscriber.

pub mod models;
pub mod support;
