//! Item descriptor contract.
//!
//! # Responsibility
//! - Define the factory/metadata contract every creatable item kind exposes.
//! - Provide the three independently overridable applicability axes:
//!   cross-descriptor veto, scope veto and instance ownership.
//!
//! # Invariants
//! - Predicates are side-effect free; the registry may call `is_applicable`
//!   once per ordered descriptor pair on every query.
//! - `check_applicable_in` and `description` live on `ItemDescriptorExt` and
//!   cannot be overridden per descriptor.
//! - `description` never fails; render errors and renderer panics degrade to
//!   an empty string.

use crate::descriptor::error::{AccessDenied, CreateItemError, RenderError};
use crate::descriptor::icon::{resolve_icon_path, IconSize};
use crate::extension::Extension;
use crate::model::item::{Item, ItemScope, ItemType};
use log::{info, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Factory and metadata for one creatable item kind.
pub trait ItemDescriptor: Extension {
    /// Kind of item this descriptor creates.
    fn item_type(&self) -> ItemType;

    /// Caption shown when choosing what kind of item to create.
    fn display_name(&self) -> &str;

    /// Returns `false` to hide `candidate` wherever this descriptor is offered.
    fn is_applicable(&self, _candidate: &dyn ItemDescriptor) -> bool {
        true
    }

    /// Returns `false` when this descriptor may not create items in `scope`.
    fn is_applicable_in(&self, _scope: &dyn ItemScope) -> bool {
        true
    }

    /// Returns whether `instance` belongs to this descriptor.
    ///
    /// Descriptors whose factory produces several concrete kinds override
    /// this to claim all of them.
    fn test_instance(&self, instance: &dyn Item) -> bool {
        instance.is_kind(&self.item_type())
    }

    /// Renders the long description. May be slow or fail.
    fn render_description(&self) -> Result<String, RenderError> {
        Ok(String::new())
    }

    /// Icon path pattern, optionally containing `:size`. Empty means no icon.
    fn icon_file_path_pattern(&self) -> &str {
        ""
    }

    /// Category this descriptor belongs to. Empty means uncategorized.
    fn category_id(&self) -> &str {
        ""
    }

    /// Creates a new item named `name` inside `scope`.
    fn new_instance(
        &self,
        scope: &dyn ItemScope,
        name: &str,
    ) -> Result<Box<dyn Item>, CreateItemError>;
}

/// External description renderer (templates, scripts) descriptors may delegate to.
pub trait DescriptionRenderer: Send + Sync {
    fn render(&self, descriptor: &dyn ItemDescriptor) -> Result<String, RenderError>;
}

/// Operations derived from the descriptor contract.
pub trait ItemDescriptorExt {
    /// Fails with `AccessDenied` when `is_applicable_in(scope)` is false.
    fn check_applicable_in(&self, scope: &dyn ItemScope) -> Result<(), AccessDenied>;

    /// Rendered description, or `""` when rendering fails or panics.
    fn description(&self) -> String;

    /// Icon path for `size`, or `None` when the descriptor has no icon.
    fn icon_path(&self, size: IconSize) -> Option<String>;
}

impl<D: ItemDescriptor + ?Sized> ItemDescriptorExt for D {
    fn check_applicable_in(&self, scope: &dyn ItemScope) -> Result<(), AccessDenied> {
        if self.is_applicable_in(scope) {
            return Ok(());
        }
        let denied = AccessDenied {
            descriptor: self.display_name().to_string(),
            scope: scope.full_display_name(),
        };
        info!(
            "event=access_denied module=descriptor descriptor_id={} scope={}",
            self.id(),
            scope.full_name()
        );
        Err(denied)
    }

    fn description(&self) -> String {
        let error = match catch_unwind(AssertUnwindSafe(|| self.render_description())) {
            Ok(Ok(text)) => return text,
            Ok(Err(err)) => err.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        warn!(
            "event=description_render_failed module=descriptor descriptor_id={} error={}",
            self.id(),
            error
        );
        String::new()
    }

    fn icon_path(&self, size: IconSize) -> Option<String> {
        resolve_icon_path(self.icon_file_path_pattern(), size)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("renderer panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("renderer panicked: {message}")
    } else {
        "renderer panicked".to_string()
    }
}
