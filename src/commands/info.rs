//! Info Command
//!
//! Inspects one component: manifest data, install state, and the orders the
//! planners would execute for it.

use crate::core::types::ComponentId;
use crate::error::Result;
use crate::store;
use crate::ui as output;
use crate::ui::UiSink;
use std::path::PathBuf;

#[derive(Debug)]
pub struct InfoOptions {
    pub root: PathBuf,
    pub component: ComponentId,
}

pub fn run(options: InfoOptions) -> Result<()> {
    let mut orch = store::build_orchestrator(&options.root, Box::new(UiSink))?;
    let component = &options.component;

    output::header(&format!("Component '{}'", component));
    output::keyval("Installable", yes_no(orch.is_installable(component)));
    output::keyval("Installed", yes_no(orch.is_installed(component)));

    let manifest_path = options.root.join(component.as_str());
    if manifest_path.join(store::manifest::MANIFEST_FILE).is_file() {
        let manifest = store::manifest::load(&manifest_path)?;
        if let Some(version) = &manifest.version {
            output::keyval("Version", version);
        }
        if let Some(description) = &manifest.description {
            output::keyval("Description", description);
        }
        if !manifest.dependencies.is_empty() {
            output::keyval("Depends on", &render(&manifest.dependencies));
        }
    }

    let install_order = orch.install_plan(component)?;
    output::keyval("Install order", &render(&install_order));

    let uninstall_order = orch.uninstall_plan(component)?;
    output::keyval("Uninstall order", &render(&uninstall_order));

    Ok(())
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

fn render(ids: &[ComponentId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
