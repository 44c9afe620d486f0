use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "plugctl",
    about = "Dependency-ordered plugin install/uninstall coordinator",
    long_about = "Coordinates installation and removal of plugin components, \
                  ordering dependencies before dependents and rejecting cyclic chains",
    version,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    /// Plugin root directory (falls back to $PLUGCTL_ROOT, then ./plugins)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install components, dependencies first
    Install {
        /// Component(s) to install (e.g. "billing.invoices")
        components: Vec<String>,

        /// Install every discovered component
        #[arg(long)]
        all: bool,

        /// Reinstall even when already installed
        #[arg(short = 'f', long)]
        force: bool,

        /// Print the computed order without executing
        #[arg(long)]
        dry_run: bool,
    },

    /// Uninstall components and everything depending on them
    Uninstall {
        /// Component(s) to uninstall
        components: Vec<String>,

        /// Uninstall every discovered component
        #[arg(long)]
        all: bool,

        /// Print the computed order without executing
        #[arg(long)]
        dry_run: bool,
    },

    /// List discovered components and their install state
    List {
        /// Only show installed components
        #[arg(long)]
        installed: bool,
    },

    /// Show one component's manifest, state and planned orders
    Info {
        /// Component to inspect
        component: String,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}
