use crate::core::types::ComponentId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlugctlError {
    #[error("Cyclic dependency detected at '{component}': {}", format_chain(.chain))]
    CyclicDependency {
        component: ComponentId,
        chain: Vec<ComponentId>,
    },

    #[error("Installer for '{component}' failed: {reason}")]
    InstallerFailed {
        component: ComponentId,
        reason: String,
    },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("Invalid manifest in '{file}': {message}")]
    ManifestError { file: String, message: String },

    #[error("Invalid component id: '{0}'")]
    InvalidComponentId(String),

    #[error("Plugin root not found at: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// Lock acquisition failed (e.g., state file held by another process)
    #[error("Lock acquisition failed: {0}")]
    LockError(String),

    #[error("{0}")]
    Other(String),
}

fn format_chain(chain: &[ComponentId]) -> String {
    chain
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub type Result<T> = std::result::Result<T, PlugctlError>;
