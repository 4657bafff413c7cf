//! Ordered, shareable extension list.

use crate::extension::Extension;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordinal used by `ExtensionList::add`.
pub const DEFAULT_ORDINAL: i32 = 0;

/// One registration entry: the extension plus its ordinal.
///
/// Consumers decide what the ordinal means; descriptor enumeration ignores it,
/// category merging runs lower ordinals first.
pub struct Registered<T: ?Sized> {
    pub ordinal: i32,
    pub extension: Arc<T>,
}

impl<T: ?Sized> Clone for Registered<T> {
    fn clone(&self) -> Self {
        Self {
            ordinal: self.ordinal,
            extension: Arc::clone(&self.extension),
        }
    }
}

/// Append-mostly extension collection in registration order.
///
/// Shared as `Arc<ExtensionList<_>>` between the loading machinery (writer)
/// and registries (readers). Readers always work on a snapshot, so additions
/// and removals show up on the next query.
pub struct ExtensionList<T: ?Sized> {
    entries: RwLock<Vec<Registered<T>>>,
}

impl<T: ?Sized> Default for ExtensionList<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Extension + ?Sized> ExtensionList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one extension with the default ordinal.
    pub fn add(&self, extension: Arc<T>) -> Result<(), ExtensionListError> {
        self.add_with_ordinal(DEFAULT_ORDINAL, extension)
    }

    /// Appends one extension after id validation.
    ///
    /// # Errors
    /// - `InvalidExtensionId` when the id is not a dotted ASCII identifier.
    /// - `DuplicateExtensionId` when an entry with the same id is present.
    pub fn add_with_ordinal(
        &self,
        ordinal: i32,
        extension: Arc<T>,
    ) -> Result<(), ExtensionListError> {
        let id = extension.id().to_string();
        if !is_valid_extension_id(&id) {
            info!("event=extension_rejected module=extension reason=invalid_id id={id}");
            return Err(ExtensionListError::InvalidExtensionId(id));
        }

        let mut entries = self.write();
        if entries.iter().any(|entry| entry.extension.id() == id) {
            info!("event=extension_rejected module=extension reason=duplicate_id id={id}");
            return Err(ExtensionListError::DuplicateExtensionId(id));
        }
        entries.push(Registered { ordinal, extension });
        debug!(
            "event=extension_added module=extension id={id} ordinal={ordinal} total={}",
            entries.len()
        );
        Ok(())
    }

    /// Removes one extension by id. Returns the removed extension, if any.
    pub fn remove(&self, id: &str) -> Option<Arc<T>> {
        let mut entries = self.write();
        let index = entries.iter().position(|entry| entry.extension.id() == id)?;
        let removed = entries.remove(index);
        debug!("event=extension_removed module=extension id={id}");
        Some(removed.extension)
    }

    /// Returns one extension by id.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.read()
            .iter()
            .find(|entry| entry.extension.id() == id)
            .map(|entry| Arc::clone(&entry.extension))
    }

    /// Returns a point-in-time copy of all entries in registration order.
    pub fn snapshot(&self) -> Vec<Registered<T>> {
        self.read().clone()
    }

    /// Returns a point-in-time copy of all extensions in registration order.
    pub fn extensions(&self) -> Vec<Arc<T>> {
        self.read()
            .iter()
            .map(|entry| Arc::clone(&entry.extension))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Registered<T>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Registered<T>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn is_valid_extension_id(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }

    let mut prev_separator = false;
    for c in chars {
        if c.is_ascii_alphanumeric() {
            prev_separator = false;
        } else if matches!(c, '.' | '_' | '-') && !prev_separator {
            prev_separator = true;
        } else {
            return false;
        }
    }
    !prev_separator
}

/// Extension registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionListError {
    InvalidExtensionId(String),
    DuplicateExtensionId(String),
}

impl Display for ExtensionListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExtensionId(value) => write!(f, "extension id is invalid: {value}"),
            Self::DuplicateExtensionId(value) => {
                write!(f, "extension id already registered: {value}")
            }
        }
    }
}

impl Error for ExtensionListError {}
