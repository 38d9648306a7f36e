//! Shared contract substrate for the vessel container crates.
//!
//! This crate provides:
//! - The contract-violation taxonomy (`ContractViolation`, `ContractResult`)
//!   raised by the containers' checked boundary operations
//! - Type-label rendering (`fmt_type_label`, `type_label`) used by the
//!   containers' `Display` impls to disambiguate generic instantiations
//!
//! Every violation is synchronous and caller-recoverable: the caller passed
//! a contract-breaking argument and can correct it at the call site. Nothing
//! here performs I/O or keeps state.

mod label;
mod violation;

pub use label::{fmt_type_label, type_label};
pub use violation::{ContractResult, ContractViolation};
