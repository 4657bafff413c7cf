//! Item descriptor contract, applicability rules and creation helpers.
//!
//! # Responsibility
//! - Define what a pluggable item kind must expose to be offered to users.
//! - Keep applicability decisions as pure predicates; only
//!   `check_applicable_in` turns a veto into a hard failure.
//!
//! # See also
//! - `registry::descriptor_registry` for the pairwise filtering pass.

pub mod error;
pub mod icon;
pub mod item_descriptor;
pub mod name;
