use crate::core::types::ComponentId;
use crate::error::Result;

/// Install-time capability implemented per component.
///
/// Receivers are `&self`: implementations keep whatever mutable state they
/// need (state files, connections) behind interior handles, the same way a
/// package-manager backend wraps its system tools.
pub trait Installer {
    fn install(&self) -> Result<()>;
    fn uninstall(&self) -> Result<()>;
    fn is_installed(&self) -> bool;

    /// Direct dependencies, in declared order. Duplicates are allowed;
    /// planning deduplicates later.
    fn dependencies(&self) -> Vec<ComponentId>;
}
