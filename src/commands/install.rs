//! Install Command
//!
//! Installs one or more components (or everything), dependencies first.

use crate::core::types::ComponentId;
use crate::error::{PlugctlError, Result};
use crate::store;
use crate::ui as output;
use crate::ui::UiSink;
use std::path::PathBuf;

#[derive(Debug)]
pub struct InstallOptions {
    /// Plugin root directory
    pub root: PathBuf,
    /// Component(s) to install
    pub components: Vec<ComponentId>,
    /// Install every discovered component
    pub all: bool,
    /// Reinstall even when already installed
    pub force: bool,
    /// Preview the order without executing
    pub dry_run: bool,
}

pub fn run(options: InstallOptions) -> Result<()> {
    if !options.all && options.components.is_empty() {
        return Err(PlugctlError::Other(
            "No components given. Name components or pass --all.".into(),
        ));
    }

    output::header("Installing Components");
    let mut orch = store::build_orchestrator(&options.root, Box::new(UiSink))?;

    let targets = if options.all {
        orch.components()?
    } else {
        options.components.clone()
    };

    if options.dry_run {
        for target in &targets {
            let plan = orch.install_plan(target)?;
            output::info(&format!("Install order for '{}':", target));
            for (step, component) in plan.iter().enumerate() {
                output::indent(&format!("{}. {}", step + 1, component), 1);
            }
        }
        return Ok(());
    }

    if options.all {
        orch.install_all(options.force)?;
    } else {
        for target in &targets {
            if output::is_interrupted() {
                return Err(PlugctlError::Interrupted);
            }
            orch.install(target, options.force)?;
        }
    }

    output::success(&format!(
        "Installed {} target(s)",
        if options.all {
            targets.len()
        } else {
            options.components.len()
        }
    ));
    Ok(())
}
