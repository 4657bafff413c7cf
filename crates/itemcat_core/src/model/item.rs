//! Item, item-type tag and containment-scope contracts.
//!
//! # Responsibility
//! - Give descriptors a type tag to match concrete item instances against.
//! - Abstract the containment scope applicability is evaluated in.
//!
//! # Invariants
//! - `ItemType` identity is the concrete Rust type; the name is diagnostic only.
//! - Default kind matching is exact type identity. Items that stand in for a
//!   broader kind declare it by overriding `Item::is_kind`.

use std::any::{Any, TypeId};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

/// Type tag for the kind of item a descriptor creates.
#[derive(Clone, Copy)]
pub struct ItemType {
    type_id: TypeId,
    name: &'static str,
}

impl ItemType {
    pub fn of<T: Item>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ItemType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ItemType {}

impl Hash for ItemType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl Debug for ItemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ItemType").field(&self.name).finish()
    }
}

/// A creatable top-level item.
pub trait Item: Any + Send + Sync {
    /// Item name, unique within its scope.
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    /// Returns whether this item counts as an instance of `item_type`.
    fn is_kind(&self, item_type: &ItemType) -> bool {
        Any::type_id(self.as_any()) == item_type.type_id()
    }
}

impl dyn Item {
    pub fn downcast_ref<T: Item>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Containment scope (folder-like container) items are created in.
pub trait ItemScope: Any + Send + Sync {
    /// Stable slash-separated full name. Empty for the root scope.
    fn full_name(&self) -> &str;

    /// Human-readable name used in access-denied messages.
    fn full_display_name(&self) -> String {
        self.full_name().to_string()
    }

    fn as_any(&self) -> &dyn Any;
}

impl dyn ItemScope {
    pub fn downcast_ref<T: ItemScope>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemType};
    use std::any::Any;

    struct Job {
        name: String,
    }

    impl Item for Job {
        fn name(&self) -> &str {
            &self.name
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct MatrixJob;

    impl Item for MatrixJob {
        fn name(&self) -> &str {
            "matrix"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn is_kind(&self, item_type: &ItemType) -> bool {
            *item_type == ItemType::of::<MatrixJob>() || *item_type == ItemType::of::<Job>()
        }
    }

    #[test]
    fn default_kind_match_is_exact_type() {
        let job: Box<dyn Item> = Box::new(Job {
            name: "build".to_string(),
        });
        assert!(job.is_kind(&ItemType::of::<Job>()));
        assert!(!job.is_kind(&ItemType::of::<MatrixJob>()));
        assert_eq!(job.downcast_ref::<Job>().map(|job| job.name()), Some("build"));
    }

    #[test]
    fn overridden_kind_match_claims_broader_type() {
        let matrix: Box<dyn Item> = Box::new(MatrixJob);
        assert!(matrix.is_kind(&ItemType::of::<Job>()));
        assert!(matrix.is_kind(&ItemType::of::<MatrixJob>()));
    }

    #[test]
    fn item_type_debug_uses_type_name() {
        let rendered = format!("{:?}", ItemType::of::<Job>());
        assert!(rendered.contains("Job"));
    }
}
