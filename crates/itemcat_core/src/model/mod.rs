//! Value model shared by descriptors, providers and the registry.
//!
//! # Responsibility
//! - Define the immutable `Category` value and its validation.
//! - Define the item, item-type and scope contracts descriptors operate on.
//!
//! # Invariants
//! - Nothing in this module holds query state.

pub mod category;
pub mod item;
