use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::core::types::ComponentId;
use crate::error::Result;
use std::path::PathBuf;

pub fn dispatch(args: &Cli) -> Result<()> {
    let root = resolve_root(args);

    match &args.command {
        Command::Install {
            components,
            all,
            force,
            dry_run,
        } => commands::install::run(commands::install::InstallOptions {
            root,
            components: parse_ids(components)?,
            all: *all,
            force: *force,
            dry_run: *dry_run,
        }),
        Command::Uninstall {
            components,
            all,
            dry_run,
        } => commands::uninstall::run(commands::uninstall::UninstallOptions {
            root,
            components: parse_ids(components)?,
            all: *all,
            dry_run: *dry_run,
        }),
        Command::List { installed } => commands::list::run(commands::list::ListOptions {
            root,
            installed_only: *installed,
        }),
        Command::Info { component } => commands::info::run(commands::info::InfoOptions {
            root,
            component: component.parse()?,
        }),
        Command::Completions { shell } => commands::completions::run(*shell),
    }
}

fn resolve_root(args: &Cli) -> PathBuf {
    args.root
        .clone()
        .or_else(|| std::env::var_os("PLUGCTL_ROOT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("plugins"))
}

fn parse_ids(raw: &[String]) -> Result<Vec<ComponentId>> {
    raw.iter().map(|s| s.parse()).collect()
}
