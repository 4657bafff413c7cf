//! Categorized descriptor view and its serializable summary.

use crate::descriptor::icon::IconSize;
use crate::descriptor::item_descriptor::{ItemDescriptor, ItemDescriptorExt};
use crate::model::category::{Category, MaxItems};
use serde::Serialize;
use std::sync::Arc;

/// One non-empty category with its descriptors in registration order.
pub struct CategoryGroup {
    pub category: Category,
    pub descriptors: Vec<Arc<dyn ItemDescriptor>>,
}

/// Applicable descriptors grouped by category for one scope.
pub struct CategorizedView {
    pub groups: Vec<CategoryGroup>,
    /// Descriptors whose category id matched no known category.
    pub orphaned: Vec<Arc<dyn ItemDescriptor>>,
}

impl CategorizedView {
    /// Number of descriptors across groups and orphans.
    pub fn descriptor_count(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.descriptors.len())
            .sum::<usize>()
            + self.orphaned.len()
    }

    /// Renders descriptions and icon paths into a plain serializable shape.
    pub fn summary(&self, icon_size: IconSize) -> CategorizedSummary {
        CategorizedSummary {
            categories: self
                .groups
                .iter()
                .map(|group| CategorySummary {
                    id: group.category.id().to_string(),
                    display_label: group.category.display_label().to_string(),
                    description: group.category.description().to_string(),
                    sort_weight: group.category.sort_weight(),
                    min_items: group.category.min_items(),
                    max_items: match group.category.max_items() {
                        MaxItems::Bounded(max) => Some(max),
                        MaxItems::Unbounded => None,
                    },
                    items: group
                        .descriptors
                        .iter()
                        .map(|descriptor| {
                            DescriptorSummary::from_descriptor(descriptor.as_ref(), icon_size)
                        })
                        .collect(),
                })
                .collect(),
            orphaned: self
                .orphaned
                .iter()
                .map(|descriptor| {
                    DescriptorSummary::from_descriptor(descriptor.as_ref(), icon_size)
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedSummary {
    pub categories: Vec<CategorySummary>,
    pub orphaned: Vec<DescriptorSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub display_label: String,
    pub description: String,
    pub sort_weight: i32,
    pub min_items: u32,
    /// `None` when unbounded.
    pub max_items: Option<u32>,
    pub items: Vec<DescriptorSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorSummary {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub icon_path: Option<String>,
}

impl DescriptorSummary {
    fn from_descriptor(descriptor: &dyn ItemDescriptor, icon_size: IconSize) -> Self {
        Self {
            id: descriptor.id().to_string(),
            display_name: descriptor.display_name().to_string(),
            description: descriptor.description(),
            icon_path: descriptor.icon_path(icon_size),
        }
    }
}
