//! Concrete collaborators behind the engine's seams: filesystem component
//! discovery, `plugin.json` manifests, and a JSON state file that backs the
//! manifest-driven installer.

pub mod manifest;
pub mod scan;
pub mod state;

pub use manifest::Manifest;
pub use scan::FsEnumerator;
pub use state::StateStore;

use crate::core::orchestrator::Orchestrator;
use crate::core::traits::{ComponentEnumerator, MessageSink};
use crate::core::types::ComponentId;
use crate::error::Result;
use crate::installer::{Installer, InstallerRegistry};
use std::path::Path;
use std::rc::Rc;

/// Installer whose whole job is keeping the shared state file honest:
/// install records the component, uninstall removes it.
pub struct ManifestInstaller {
    id: ComponentId,
    manifest: Manifest,
    store: Rc<StateStore>,
}

impl Installer for ManifestInstaller {
    fn install(&self) -> Result<()> {
        self.store
            .mark_installed(&self.id, self.manifest.version.clone())
    }

    fn uninstall(&self) -> Result<()> {
        self.store.mark_uninstalled(&self.id)
    }

    fn is_installed(&self) -> bool {
        self.store.is_installed(&self.id)
    }

    fn dependencies(&self) -> Vec<ComponentId> {
        self.manifest.dependencies.clone()
    }
}

/// Wire up an orchestrator over one plugin root: scan the root, parse every
/// manifest, and populate the registry with one factory per component. The
/// factories capture the shared state-store handle, which is how the shared
/// context reaches installers.
pub fn build_orchestrator(root: &Path, sink: Box<dyn MessageSink>) -> Result<Orchestrator> {
    let store = Rc::new(StateStore::new(root));
    let enumerator = FsEnumerator::new(root.to_path_buf());

    let mut registry = InstallerRegistry::new();
    for id in enumerator.list_all()? {
        let manifest = manifest::load(&root.join(id.as_str()))?;
        let store = Rc::clone(&store);
        let component = id.clone();
        registry.register(
            id,
            Box::new(move || {
                Box::new(ManifestInstaller {
                    id: component.clone(),
                    manifest: manifest.clone(),
                    store: Rc::clone(&store),
                })
            }),
        );
    }

    Ok(Orchestrator::new(registry, Box::new(enumerator), sink))
}
