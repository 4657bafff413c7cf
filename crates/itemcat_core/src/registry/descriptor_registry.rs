//! Descriptor and category aggregation.
//!
//! # Responsibility
//! - Enumerate registered descriptors and providers from injected lists.
//! - Apply scope and pairwise applicability filtering per query.
//! - Produce the merged, ordered category view and the instance lookup.
//!
//! # Invariants
//! - No query state is kept between calls; every query reads a fresh
//!   snapshot of the injected lists.
//! - Descriptor order is registration order everywhere.
//! - The pairwise veto is evaluated against the scope-filtered set in one
//!   pass, so mutual vetoes remove both descriptors.
//! - An empty descriptor category id resolves to the uncategorized sentinel.

use crate::category::configured::ConfiguredCategories;
use crate::category::defaults::{DefaultCategories, UNCATEGORIZED_CATEGORY_ID};
use crate::category::provider::{dedupe_by_id, merge_categories, CategoryProvider};
use crate::config::CatalogConfig;
use crate::descriptor::error::CreateItemError;
use crate::descriptor::item_descriptor::{ItemDescriptor, ItemDescriptorExt};
use crate::descriptor::name::check_item_name;
use crate::extension::list::{ExtensionList, Registered};
use crate::model::category::Category;
use crate::model::item::{Item, ItemScope};
use crate::registry::view::{CategorizedView, CategoryGroup};
use log::{debug, info};
use std::sync::Arc;

/// Read-side aggregation over externally owned extension lists.
pub struct DescriptorRegistry {
    descriptors: Arc<ExtensionList<dyn ItemDescriptor>>,
    providers: Arc<ExtensionList<dyn CategoryProvider>>,
    builtin_providers: Vec<Registered<dyn CategoryProvider>>,
}

impl DescriptorRegistry {
    /// Creates a registry serving the baseline categories at the default priority.
    pub fn new(
        descriptors: Arc<ExtensionList<dyn ItemDescriptor>>,
        providers: Arc<ExtensionList<dyn CategoryProvider>>,
    ) -> Self {
        Self::with_config(descriptors, providers, &CatalogConfig::default())
    }

    /// Creates a registry with deployment-controlled built-in providers.
    pub fn with_config(
        descriptors: Arc<ExtensionList<dyn ItemDescriptor>>,
        providers: Arc<ExtensionList<dyn CategoryProvider>>,
        config: &CatalogConfig,
    ) -> Self {
        let mut builtin_providers: Vec<Registered<dyn CategoryProvider>> = Vec::new();
        if config.include_default_categories {
            builtin_providers.push(Registered {
                ordinal: config.default_provider_priority,
                extension: Arc::new(DefaultCategories),
            });
        }
        if !config.categories.is_empty() {
            builtin_providers.push(Registered {
                ordinal: config.configured_provider_priority,
                extension: Arc::new(ConfiguredCategories::new(config.categories.clone())),
            });
        }

        Self {
            descriptors,
            providers,
            builtin_providers,
        }
    }

    /// All registered descriptors in registration order.
    pub fn all_descriptors(&self) -> Vec<Arc<dyn ItemDescriptor>> {
        self.descriptors.extensions()
    }

    /// Descriptors applicable in `scope`, after the pairwise veto pass.
    pub fn descriptors_applicable_in(&self, scope: &dyn ItemScope) -> Vec<Arc<dyn ItemDescriptor>> {
        let all = self.all_descriptors();
        let total = all.len();
        let in_scope: Vec<Arc<dyn ItemDescriptor>> = all
            .into_iter()
            .filter(|descriptor| descriptor.is_applicable_in(scope))
            .collect();

        let applicable: Vec<Arc<dyn ItemDescriptor>> = in_scope
            .iter()
            .enumerate()
            .filter(|&(index, candidate)| {
                in_scope
                    .iter()
                    .enumerate()
                    .all(|(other, owner)| other == index || owner.is_applicable(&**candidate))
            })
            .map(|(_, descriptor)| Arc::clone(descriptor))
            .collect();

        debug!(
            "event=descriptors_filtered module=registry scope={} total={total} in_scope={} applicable={}",
            scope.full_name(),
            in_scope.len(),
            applicable.len()
        );
        applicable
    }

    /// First descriptor in registration order whose `test_instance` claims `instance`.
    pub fn find_descriptor(&self, instance: &dyn Item) -> Option<Arc<dyn ItemDescriptor>> {
        self.all_descriptors()
            .into_iter()
            .find(|descriptor| descriptor.test_instance(instance))
    }

    pub fn descriptor_by_id(&self, id: &str) -> Option<Arc<dyn ItemDescriptor>> {
        self.descriptors.get(id)
    }

    /// Raw merged category sequence, duplicates included.
    pub fn categories(&self) -> Vec<Category> {
        let mut providers = self.providers.snapshot();
        providers.extend(self.builtin_providers.iter().cloned());
        merge_categories(&providers)
    }

    /// Merged categories keeping the first occurrence of each id.
    pub fn unique_categories(&self) -> Vec<Category> {
        dedupe_by_id(self.categories())
    }

    /// Groups the descriptors applicable in `scope` by category.
    ///
    /// Groups follow category order and omit empty categories. Descriptors
    /// naming an unknown category are returned in `orphaned`.
    pub fn categorize(&self, scope: &dyn ItemScope) -> CategorizedView {
        let mut groups: Vec<CategoryGroup> = self
            .unique_categories()
            .into_iter()
            .map(|category| CategoryGroup {
                category,
                descriptors: Vec::new(),
            })
            .collect();
        let mut orphaned = Vec::new();

        for descriptor in self.descriptors_applicable_in(scope) {
            let category_id = resolve_category_id(descriptor.as_ref());
            match groups
                .iter_mut()
                .find(|group| group.category.id() == category_id)
            {
                Some(group) => group.descriptors.push(descriptor),
                None => orphaned.push(descriptor),
            }
        }
        groups.retain(|group| !group.descriptors.is_empty());

        if !orphaned.is_empty() {
            debug!(
                "event=descriptors_orphaned module=registry scope={} count={}",
                scope.full_name(),
                orphaned.len()
            );
        }
        CategorizedView { groups, orphaned }
    }

    /// Creates one item through the descriptor registered as `descriptor_id`.
    ///
    /// # Errors
    /// - `DescriptorNotFound` for an unknown descriptor id.
    /// - `InvalidName` when `name` fails item name validation.
    /// - `AccessDenied` when the descriptor is not applicable in `scope`.
    /// - Whatever the descriptor factory returns.
    pub fn create_item(
        &self,
        descriptor_id: &str,
        scope: &dyn ItemScope,
        name: &str,
    ) -> Result<Box<dyn Item>, CreateItemError> {
        let descriptor = self
            .descriptor_by_id(descriptor_id)
            .ok_or_else(|| CreateItemError::DescriptorNotFound(descriptor_id.to_string()))?;
        check_item_name(name)?;
        descriptor.check_applicable_in(scope)?;

        let item = descriptor.new_instance(scope, name)?;
        info!(
            "event=item_created module=registry descriptor_id={descriptor_id} scope={}",
            scope.full_name()
        );
        Ok(item)
    }
}

/// Category id a descriptor is grouped under.
pub fn resolve_category_id(descriptor: &dyn ItemDescriptor) -> &str {
    match descriptor.category_id().trim() {
        "" => UNCATEGORIZED_CATEGORY_ID,
        id => id,
    }
}
