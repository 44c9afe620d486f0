//! Uninstall Command
//!
//! Removes components together with everything that depends on them,
//! dependents first.

use crate::core::types::ComponentId;
use crate::error::{PlugctlError, Result};
use crate::store;
use crate::ui as output;
use crate::ui::UiSink;
use std::path::PathBuf;

#[derive(Debug)]
pub struct UninstallOptions {
    /// Plugin root directory
    pub root: PathBuf,
    /// Component(s) to uninstall
    pub components: Vec<ComponentId>,
    /// Uninstall every discovered component
    pub all: bool,
    /// Preview the order without executing
    pub dry_run: bool,
}

pub fn run(options: UninstallOptions) -> Result<()> {
    if !options.all && options.components.is_empty() {
        return Err(PlugctlError::Other(
            "No components given. Name components or pass --all.".into(),
        ));
    }

    output::header("Uninstalling Components");
    let mut orch = store::build_orchestrator(&options.root, Box::new(UiSink))?;

    let targets = if options.all {
        orch.components()?
    } else {
        options.components.clone()
    };

    if options.dry_run {
        for target in &targets {
            let plan = orch.uninstall_plan(target)?;
            output::info(&format!("Uninstall order for '{}':", target));
            for (step, component) in plan.iter().enumerate() {
                output::indent(&format!("{}. {}", step + 1, component), 1);
            }
        }
        return Ok(());
    }

    if options.all {
        orch.uninstall_all()?;
    } else {
        for target in &targets {
            if output::is_interrupted() {
                return Err(PlugctlError::Interrupted);
            }
            orch.uninstall(target)?;
        }
    }

    output::success(&format!("Uninstalled {} target(s)", targets.len()));
    Ok(())
}
