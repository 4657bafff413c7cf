//! Baseline category set supplied by the system itself.

use crate::category::provider::CategoryProvider;
use crate::extension::Extension;
use crate::model::category::{Category, MaxItems};
use once_cell::sync::Lazy;

/// Provider id of the baseline category set.
pub const DEFAULT_CATEGORIES_ID: &str = "core.categories.default";
/// Priority the baseline provider runs at. Plugins pick smaller values to run first.
pub const DEFAULT_CATEGORIES_PRIORITY: i32 = 1000;

pub const STANDALONE_CATEGORY_ID: &str = "core.category.standaloneProjects";
pub const NESTED_CATEGORY_ID: &str = "core.category.nestedProjects";
/// Sentinel category for descriptors that declare no category.
pub const UNCATEGORIZED_CATEGORY_ID: &str = "core.category.uncategorized";

static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::new(
            STANDALONE_CATEGORY_ID,
            "Standalone Projects",
            "Standalone Projects Description",
            1,
            1,
            MaxItems::Bounded(1),
        )
        .expect("valid standalone category"),
        Category::new(
            NESTED_CATEGORY_ID,
            "Nested Projects",
            "Nested Projects Description",
            10,
            1,
            MaxItems::Bounded(1),
        )
        .expect("valid nested category"),
        Category::new(
            UNCATEGORIZED_CATEGORY_ID,
            "Uncategorized",
            "Uncategorized Description",
            1000,
            0,
            MaxItems::Unbounded,
        )
        .expect("valid uncategorized category"),
    ]
});

/// Standalone, nested and uncategorized buckets.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCategories;

impl Extension for DefaultCategories {
    fn id(&self) -> &str {
        DEFAULT_CATEGORIES_ID
    }
}

impl CategoryProvider for DefaultCategories {
    fn categories(&self) -> Option<Vec<Category>> {
        Some(DEFAULT_CATEGORIES.clone())
    }
}
