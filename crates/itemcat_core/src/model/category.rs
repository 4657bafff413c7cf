//! Category value model.
//!
//! # Responsibility
//! - Describe one grouping bucket shown to a creation workflow.
//! - Validate occupancy bounds at construction time.
//!
//! # Invariants
//! - `0 <= min_items <= max_items` (unbounded `max_items` satisfies any minimum).
//! - `id`, `display_label` and `description` are opaque; only bounds are checked.
//! - Identity is the `id` alone: equality and hashing ignore every other field.
//! - Values are immutable once shared; `with_metadata` consumes the builder value.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Upper occupancy bound advertised by a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxItems {
    Bounded(u32),
    Unbounded,
}

impl MaxItems {
    /// Returns whether `count` items fit under this bound.
    pub fn admits(self, count: u32) -> bool {
        match self {
            Self::Bounded(max) => count <= max,
            Self::Unbounded => true,
        }
    }

    fn as_option(self) -> Option<u32> {
        match self {
            Self::Bounded(max) => Some(max),
            Self::Unbounded => None,
        }
    }
}

impl From<Option<u32>> for MaxItems {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Unbounded, Self::Bounded)
    }
}

impl Display for MaxItems {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bounded(max) => write!(f, "{max}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// One free-form metadata entry. Keys are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: Value,
}

/// Immutable grouping bucket for item descriptors.
///
/// Occupancy bounds are advertised only; enforcing them is up to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CategoryRecord", into = "CategoryRecord")]
pub struct Category {
    id: String,
    display_label: String,
    description: String,
    sort_weight: i32,
    min_items: u32,
    max_items: MaxItems,
    metadata: Vec<MetadataEntry>,
}

impl Category {
    /// Creates a category after validating its occupancy bounds.
    ///
    /// # Errors
    /// - `InvalidBounds` when `min_items > max_items`.
    pub fn new(
        id: impl Into<String>,
        display_label: impl Into<String>,
        description: impl Into<String>,
        sort_weight: i32,
        min_items: u32,
        max_items: MaxItems,
    ) -> Result<Self, ConfigurationError> {
        let id = id.into();
        if !max_items.admits(min_items) {
            return Err(ConfigurationError::InvalidBounds {
                id,
                min_items,
                max_items,
            });
        }

        Ok(Self {
            id,
            display_label: display_label.into(),
            description: description.into(),
            sort_weight,
            min_items,
            max_items,
            metadata: Vec::new(),
        })
    }

    /// Appends one metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.push(MetadataEntry {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sort_weight(&self) -> i32 {
        self.sort_weight
    }

    pub fn min_items(&self) -> u32 {
        self.min_items
    }

    pub fn max_items(&self) -> MaxItems {
        self.max_items
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_items == MaxItems::Unbounded
    }

    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }

    /// Returns every metadata value recorded under `key`, in insertion order.
    pub fn metadata_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.metadata
            .iter()
            .filter(move |entry| entry.key == key)
            .map(|entry| &entry.value)
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Wire shape for categories. `max_items: null` (or absent) means unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CategoryRecord {
    id: String,
    display_label: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    sort_weight: i32,
    #[serde(default)]
    min_items: u32,
    #[serde(default)]
    max_items: Option<u32>,
    #[serde(default)]
    metadata: Vec<MetadataEntry>,
}

impl TryFrom<CategoryRecord> for Category {
    type Error = ConfigurationError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let mut category = Category::new(
            record.id,
            record.display_label,
            record.description,
            record.sort_weight,
            record.min_items,
            MaxItems::from(record.max_items),
        )?;
        category.metadata = record.metadata;
        Ok(category)
    }
}

impl From<Category> for CategoryRecord {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            display_label: category.display_label,
            description: category.description,
            sort_weight: category.sort_weight,
            min_items: category.min_items,
            max_items: category.max_items.as_option(),
            metadata: category.metadata,
        }
    }
}

/// Category construction errors. Always fatal to the construction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    InvalidBounds {
        id: String,
        min_items: u32,
        max_items: MaxItems,
    },
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBounds {
                id,
                min_items,
                max_items,
            } => write!(
                f,
                "category `{id}` has min_items ({min_items}) greater than max_items ({max_items})"
            ),
        }
    }
}

impl Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::{Category, ConfigurationError, MaxItems};

    #[test]
    fn accepts_equal_bounds() {
        let category = Category::new("acme.category.one", "One", "", 1, 1, MaxItems::Bounded(1))
            .expect("equal bounds are valid");
        assert_eq!(category.min_items(), 1);
        assert_eq!(category.max_items(), MaxItems::Bounded(1));
        assert!(!category.is_unbounded());
    }

    #[test]
    fn rejects_min_above_max() {
        let err = Category::new("acme.category.bad", "Bad", "", 1, 1000, MaxItems::Bounded(0))
            .expect_err("min above max must fail");
        assert_eq!(
            err,
            ConfigurationError::InvalidBounds {
                id: "acme.category.bad".to_string(),
                min_items: 1000,
                max_items: MaxItems::Bounded(0),
            }
        );
        assert!(err.to_string().contains("greater than max_items"));
    }

    #[test]
    fn unbounded_admits_any_minimum() {
        let category = Category::new("acme.any", "Any", "", 0, u32::MAX, MaxItems::Unbounded)
            .expect("unbounded max admits any min");
        assert!(category.is_unbounded());
    }

    #[test]
    fn free_form_ids_and_labels_construct_with_valid_bounds() {
        let cases = [
            ("acme.x", "", MaxItems::Bounded(0)),
            ("acme.my bucket", "Bucket", MaxItems::Unbounded),
            ("", "   ", MaxItems::Bounded(2)),
            ("Hudson.Model..Odd.", "Übersicht", MaxItems::Unbounded),
        ];
        for (id, label, max_items) in cases {
            let category = Category::new(id, label, "", 0, 0, max_items)
                .unwrap_or_else(|err| panic!("id {id:?} should construct: {err}"));
            assert_eq!(category.id(), id);
            assert_eq!(category.display_label(), label);
        }
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = Category::new("acme.same", "First", "a", 1, 0, MaxItems::Unbounded).unwrap();
        let b = Category::new("acme.same", "Second", "b", 99, 2, MaxItems::Bounded(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn metadata_keeps_duplicate_keys_in_order() {
        let category = Category::new("acme.meta", "Meta", "", 0, 0, MaxItems::Unbounded)
            .unwrap()
            .with_metadata("tag", "first")
            .with_metadata("tag", "second")
            .with_metadata("order", 3);
        let tags: Vec<_> = category.metadata_values("tag").collect();
        assert_eq!(tags, vec!["first", "second"]);
        assert_eq!(category.metadata().len(), 3);
    }
}
