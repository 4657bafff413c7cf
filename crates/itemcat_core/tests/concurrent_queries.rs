use itemcat_core::{
    CategoryProvider, CreateItemError, DescriptorRegistry, Extension, ExtensionList, Item,
    ItemDescriptor, ItemScope, ItemType,
};
use std::any::Any;
use std::sync::Arc;
use std::thread;

struct Widget;

impl Item for Widget {
    fn name(&self) -> &str {
        "widget"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct Root;

impl ItemScope for Root {
    fn full_name(&self) -> &str {
        ""
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct Numbered {
    id: String,
}

impl Extension for Numbered {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ItemDescriptor for Numbered {
    fn item_type(&self) -> ItemType {
        ItemType::of::<Widget>()
    }

    fn display_name(&self) -> &str {
        &self.id
    }

    fn new_instance(
        &self,
        _scope: &dyn ItemScope,
        _name: &str,
    ) -> Result<Box<dyn Item>, CreateItemError> {
        Ok(Box::new(Widget))
    }
}

#[test]
fn queries_run_concurrently_with_registration() {
    let descriptors: Arc<ExtensionList<dyn ItemDescriptor>> = Arc::new(ExtensionList::new());
    let providers: Arc<ExtensionList<dyn CategoryProvider>> = Arc::new(ExtensionList::new());
    let registry = Arc::new(DescriptorRegistry::new(
        Arc::clone(&descriptors),
        providers,
    ));

    let writer = {
        let descriptors = Arc::clone(&descriptors);
        thread::spawn(move || {
            for index in 0..50 {
                descriptors
                    .add(Arc::new(Numbered {
                        id: format!("widget-{index}"),
                    }))
                    .expect("unique id");
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..50 {
                    let all = registry.all_descriptors().len();
                    let applicable = registry.descriptors_applicable_in(&Root).len();
                    assert!(applicable <= registry.all_descriptors().len());
                    assert!(all <= 50);
                    assert_eq!(registry.unique_categories().len(), 3);
                }
            })
        })
        .collect();

    writer.join().expect("writer thread");
    for reader in readers {
        reader.join().expect("reader thread");
    }

    assert_eq!(registry.all_descriptors().len(), 50);
    let owner = registry.find_descriptor(&Widget).expect("some widget owner");
    assert_eq!(owner.id(), "widget-0");
}
