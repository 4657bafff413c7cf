//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load an optional JSON config (first argument) and build a registry from
//!   the built-in demo descriptors.
//! - Print the categorized view for the root scope as JSON.

mod builtin;

use itemcat_core::{
    core_version, init_logging_from_config, load_config, CatalogConfig, CategoryProvider,
    DescriptorRegistry, ExtensionList, IconSize, ItemDescriptor,
};
use log::warn;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("itemcat: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path)).map_err(|err| err.to_string())?,
        None => CatalogConfig::default(),
    };
    if let Some(logging) = &config.logging {
        if let Err(err) = init_logging_from_config(logging) {
            eprintln!("itemcat: logging disabled: {err}");
        }
    }

    let descriptors: Arc<ExtensionList<dyn ItemDescriptor>> = Arc::new(ExtensionList::new());
    builtin::register_builtins(&descriptors).map_err(|err| err.to_string())?;
    let providers: Arc<ExtensionList<dyn CategoryProvider>> = Arc::new(ExtensionList::new());
    let registry = DescriptorRegistry::with_config(descriptors, providers, &config);

    let view = registry.categorize(&builtin::Dashboard);
    if !view.orphaned.is_empty() {
        warn!(
            "event=orphaned_descriptors module=cli count={}",
            view.orphaned.len()
        );
    }
    let rendered = serde_json::to_string_pretty(&view.summary(IconSize::Medium))
        .map_err(|err| err.to_string())?;
    println!("itemcat_core version={}", core_version());
    println!("{rendered}");
    Ok(())
}
