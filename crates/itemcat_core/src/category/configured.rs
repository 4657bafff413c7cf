//! Provider serving categories declared in deployment configuration.

use crate::category::provider::CategoryProvider;
use crate::extension::Extension;
use crate::model::category::Category;

pub const CONFIGURED_CATEGORIES_ID: &str = "core.categories.configured";

/// Categories loaded from `CatalogConfig::categories`.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredCategories {
    categories: Vec<Category>,
}

impl ConfiguredCategories {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl Extension for ConfiguredCategories {
    fn id(&self) -> &str {
        CONFIGURED_CATEGORIES_ID
    }
}

impl CategoryProvider for ConfiguredCategories {
    fn categories(&self) -> Option<Vec<Category>> {
        if self.categories.is_empty() {
            return None;
        }
        Some(self.categories.clone())
    }
}
