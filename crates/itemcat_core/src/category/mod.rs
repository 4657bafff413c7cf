//! Category providers and the category merge.
//!
//! # Responsibility
//! - Define the pluggable category source contract.
//! - Supply the baseline category set and the configuration-backed provider.
//! - Merge provider output into one deterministically ordered sequence.

pub mod configured;
pub mod defaults;
pub mod provider;
