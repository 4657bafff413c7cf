//! Core item-classification logic.
//! This crate owns the descriptor contract, category model and registry queries.

pub mod category;
pub mod config;
pub mod descriptor;
pub mod extension;
pub mod logging;
pub mod model;
pub mod registry;

pub use category::configured::ConfiguredCategories;
pub use category::defaults::{
    DefaultCategories, DEFAULT_CATEGORIES_PRIORITY, NESTED_CATEGORY_ID, STANDALONE_CATEGORY_ID,
    UNCATEGORIZED_CATEGORY_ID,
};
pub use category::provider::{dedupe_by_id, merge_categories, CategoryProvider};
pub use config::{load_config, CatalogConfig, ConfigError, LoggingConfig};
pub use descriptor::error::{AccessDenied, CreateItemError, RenderError};
pub use descriptor::icon::{resolve_icon_path, IconSize};
pub use descriptor::item_descriptor::{DescriptionRenderer, ItemDescriptor, ItemDescriptorExt};
pub use descriptor::name::check_item_name;
pub use extension::list::{ExtensionList, ExtensionListError, Registered};
pub use extension::Extension;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::category::{Category, ConfigurationError, MaxItems, MetadataEntry};
pub use model::item::{Item, ItemScope, ItemType};
pub use registry::descriptor_registry::{resolve_category_id, DescriptorRegistry};
pub use registry::view::{
    CategorizedSummary, CategorizedView, CategoryGroup, CategorySummary, DescriptorSummary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
