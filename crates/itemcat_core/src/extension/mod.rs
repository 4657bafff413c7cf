//! Extension registration contracts.
//!
//! This module defines the injected collections plugin-loading machinery
//! fills with descriptors and category providers. Discovery and dynamic
//! loading of extensions stay outside this crate.

pub mod list;

/// Identity shared by every registrable extension.
pub trait Extension: Send + Sync {
    /// Stable extension identifier, e.g. `builtin.freestyle`.
    fn id(&self) -> &str;
}
