//! List Command
//!
//! Shows every discovered component and whether it is currently installed.

use crate::error::Result;
use crate::store;
use crate::ui as output;
use crate::ui::UiSink;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug)]
pub struct ListOptions {
    pub root: PathBuf,
    /// Only show installed components
    pub installed_only: bool,
}

pub fn run(options: ListOptions) -> Result<()> {
    let mut orch = store::build_orchestrator(&options.root, Box::new(UiSink))?;
    let components = orch.components()?;

    if components.is_empty() {
        output::info(&format!(
            "No components found under {}",
            options.root.display()
        ));
        return Ok(());
    }

    output::header("Components");
    let mut shown = 0;
    for component in &components {
        let installed = orch.is_installed(component);
        if options.installed_only && !installed {
            continue;
        }
        shown += 1;

        let marker = if installed {
            "✓".green().bold()
        } else {
            "·".bright_black()
        };
        let manifest = store::manifest::load(&options.root.join(component.as_str()))?;
        let version = manifest
            .version
            .map(|v| format!(" {}", v.bright_black()))
            .unwrap_or_default();
        println!("{} {}{}", marker, component, version);
    }

    output::separator();
    output::info(&format!("{} of {} shown", shown, components.len()));
    Ok(())
}
