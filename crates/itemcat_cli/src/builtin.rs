//! Built-in demo item kinds wired into the smoke registry.

use itemcat_core::{
    CreateItemError, DescriptionRenderer, Extension, ExtensionList, ExtensionListError, Item,
    ItemDescriptor, ItemScope, ItemType, RenderError, NESTED_CATEGORY_ID,
    STANDALONE_CATEGORY_ID,
};
use std::any::Any;
use std::sync::Arc;

/// Top-level scope items are created in.
pub struct Dashboard;

impl ItemScope for Dashboard {
    fn full_name(&self) -> &str {
        ""
    }

    fn full_display_name(&self) -> String {
        "Dashboard".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct Project {
    name: String,
}

impl Item for Project {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct Folder {
    name: String,
}

impl Item for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Looks descriptions up in a fixed table keyed by descriptor id.
struct StaticDescriptions;

impl DescriptionRenderer for StaticDescriptions {
    fn render(&self, descriptor: &dyn ItemDescriptor) -> Result<String, RenderError> {
        match descriptor.id() {
            "builtin.freestyle" => Ok("Classic single-job project.".to_string()),
            "builtin.folder" => Ok("Container that groups other items.".to_string()),
            other => Err(RenderError::new(format!("no description for {other}"))),
        }
    }
}

struct BuiltinDescriptor {
    id: &'static str,
    display_name: &'static str,
    category_id: &'static str,
    icon: &'static str,
    item_type: ItemType,
    renderer: Arc<dyn DescriptionRenderer>,
}

impl Extension for BuiltinDescriptor {
    fn id(&self) -> &str {
        self.id
    }
}

impl ItemDescriptor for BuiltinDescriptor {
    fn item_type(&self) -> ItemType {
        self.item_type
    }

    fn display_name(&self) -> &str {
        self.display_name
    }

    fn render_description(&self) -> Result<String, RenderError> {
        self.renderer.render(self)
    }

    fn icon_file_path_pattern(&self) -> &str {
        self.icon
    }

    fn category_id(&self) -> &str {
        self.category_id
    }

    fn new_instance(
        &self,
        _scope: &dyn ItemScope,
        name: &str,
    ) -> Result<Box<dyn Item>, CreateItemError> {
        let name = name.to_string();
        if self.item_type == ItemType::of::<Folder>() {
            Ok(Box::new(Folder { name }))
        } else {
            Ok(Box::new(Project { name }))
        }
    }
}

/// Registers the demo descriptors in display order.
pub fn register_builtins(
    list: &ExtensionList<dyn ItemDescriptor>,
) -> Result<(), ExtensionListError> {
    let renderer: Arc<dyn DescriptionRenderer> = Arc::new(StaticDescriptions);
    let builtins = [
        BuiltinDescriptor {
            id: "builtin.freestyle",
            display_name: "Freestyle project",
            category_id: STANDALONE_CATEGORY_ID,
            icon: "images/:size/freestyleproject.png",
            item_type: ItemType::of::<Project>(),
            renderer: Arc::clone(&renderer),
        },
        BuiltinDescriptor {
            id: "builtin.folder",
            display_name: "Folder",
            category_id: NESTED_CATEGORY_ID,
            icon: "images/:size/folder.png",
            item_type: ItemType::of::<Folder>(),
            renderer: Arc::clone(&renderer),
        },
        BuiltinDescriptor {
            id: "builtin.external",
            display_name: "External job",
            category_id: "",
            icon: "",
            item_type: ItemType::of::<Project>(),
            renderer,
        },
    ];
    for descriptor in builtins {
        list.add(Arc::new(descriptor))?;
    }
    Ok(())
}
