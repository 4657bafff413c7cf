use itemcat_core::{
    CreateItemError, DescriptorRegistry, Extension, ExtensionList, Item, ItemDescriptor,
    ItemDescriptorExt, ItemScope, ItemType, RenderError,
};
use std::any::Any;
use std::sync::Arc;

struct Job;

impl Item for Job {
    fn name(&self) -> &str {
        "job"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct Folder {
    full_name: String,
    display_name: String,
    restricted: bool,
}

impl Folder {
    fn new(full_name: &str, restricted: bool) -> Self {
        Self {
            full_name: full_name.to_string(),
            display_name: full_name.replace('/', " » "),
            restricted,
        }
    }
}

impl ItemScope for Folder {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn full_display_name(&self) -> String {
        self.display_name.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Configurable descriptor used to drive each applicability axis.
struct TestDescriptor {
    id: &'static str,
    display_name: &'static str,
    hides: Vec<&'static str>,
    allowed_in_restricted: bool,
    render_fails: bool,
}

impl TestDescriptor {
    fn new(id: &'static str) -> Self {
        Self {
            id,
            display_name: id,
            hides: Vec::new(),
            allowed_in_restricted: true,
            render_fails: false,
        }
    }
}

impl Extension for TestDescriptor {
    fn id(&self) -> &str {
        self.id
    }
}

impl ItemDescriptor for TestDescriptor {
    fn item_type(&self) -> ItemType {
        ItemType::of::<Job>()
    }

    fn display_name(&self) -> &str {
        self.display_name
    }

    fn is_applicable(&self, candidate: &dyn ItemDescriptor) -> bool {
        !self.hides.iter().any(|id| *id == candidate.id())
    }

    fn is_applicable_in(&self, scope: &dyn ItemScope) -> bool {
        let restricted = scope
            .downcast_ref::<Folder>()
            .is_some_and(|folder| folder.restricted);
        !restricted || self.allowed_in_restricted
    }

    fn render_description(&self) -> Result<String, RenderError> {
        if self.render_fails {
            return Err(RenderError::new("newInstanceDetail template threw"));
        }
        Ok(format!("Creates a {}.", self.display_name))
    }

    fn new_instance(
        &self,
        _scope: &dyn ItemScope,
        _name: &str,
    ) -> Result<Box<dyn Item>, CreateItemError> {
        Ok(Box::new(Job))
    }
}

fn registry(descriptors: Vec<TestDescriptor>) -> DescriptorRegistry {
    let list: Arc<ExtensionList<dyn ItemDescriptor>> = Arc::new(ExtensionList::new());
    for descriptor in descriptors {
        list.add(Arc::new(descriptor)).expect("descriptor registration");
    }
    DescriptorRegistry::new(list, Arc::new(ExtensionList::new()))
}

fn ids(descriptors: &[Arc<dyn ItemDescriptor>]) -> Vec<String> {
    descriptors
        .iter()
        .map(|descriptor| descriptor.id().to_string())
        .collect()
}

#[test]
fn all_descriptors_keeps_registration_order() {
    let registry = registry(vec![
        TestDescriptor::new("zeta"),
        TestDescriptor::new("alpha"),
        TestDescriptor::new("mid"),
    ]);
    assert_eq!(ids(&registry.all_descriptors()), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn applicable_set_is_subset_passing_scope_predicate() {
    let mut scoped_out = TestDescriptor::new("scoped.out");
    scoped_out.allowed_in_restricted = false;
    let registry = registry(vec![
        TestDescriptor::new("first"),
        scoped_out,
        TestDescriptor::new("last"),
    ]);

    for scope in [Folder::new("open", false), Folder::new("locked", true)] {
        let all = ids(&registry.all_descriptors());
        let applicable = registry.descriptors_applicable_in(&scope);
        for descriptor in &applicable {
            assert!(all.contains(&descriptor.id().to_string()));
            assert!(descriptor.is_applicable_in(&scope));
        }
    }

    let locked = registry.descriptors_applicable_in(&Folder::new("locked", true));
    assert_eq!(ids(&locked), vec!["first", "last"]);
    let open = registry.descriptors_applicable_in(&Folder::new("open", false));
    assert_eq!(ids(&open), vec!["first", "scoped.out", "last"]);
}

#[test]
fn veto_hides_candidate_whenever_vetoing_descriptor_is_present() {
    let mut specialized = TestDescriptor::new("specialized");
    specialized.hides = vec!["generic.decorator"];
    let registry = registry(vec![
        TestDescriptor::new("generic.decorator"),
        specialized,
        TestDescriptor::new("bystander"),
    ]);

    let applicable = registry.descriptors_applicable_in(&Folder::new("team", false));
    assert_eq!(ids(&applicable), vec!["specialized", "bystander"]);
}

#[test]
fn veto_does_not_apply_when_vetoing_descriptor_is_scoped_out() {
    let mut specialized = TestDescriptor::new("specialized");
    specialized.hides = vec!["generic.decorator"];
    specialized.allowed_in_restricted = false;
    let registry = registry(vec![TestDescriptor::new("generic.decorator"), specialized]);

    let applicable = registry.descriptors_applicable_in(&Folder::new("locked", true));
    assert_eq!(ids(&applicable), vec!["generic.decorator"]);
}

#[test]
fn check_applicable_in_raises_access_denied_with_both_names() {
    let mut descriptor = TestDescriptor::new("pipeline");
    descriptor.display_name = "Pipeline";
    descriptor.allowed_in_restricted = false;

    let scope = Folder::new("team/locked", true);
    let err = descriptor
        .check_applicable_in(&scope)
        .expect_err("restricted scope must deny");
    let message = err.to_string();
    assert!(message.contains("Pipeline"), "unexpected message: {message}");
    assert!(
        message.contains("team » locked"),
        "unexpected message: {message}"
    );

    assert!(descriptor
        .check_applicable_in(&Folder::new("team/open", false))
        .is_ok());
}

#[test]
fn description_degrades_to_empty_string_on_render_failure() {
    let mut failing = TestDescriptor::new("failing");
    failing.render_fails = true;
    assert_eq!(failing.description(), "");
    assert_eq!(TestDescriptor::new("fine").description(), "Creates a fine.");
}
