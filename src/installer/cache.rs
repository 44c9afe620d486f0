use crate::core::types::ComponentId;
use crate::installer::InstallerRegistry;
use std::collections::HashMap;

/// Lazily built map of component id -> direct dependency list.
///
/// Populated one entry per component ever queried, by asking the registry
/// for the component's installer. A component without an installer gets an
/// empty list. Entries are never invalidated within a run; the cache lives
/// exactly as long as its orchestrator.
#[derive(Default)]
pub struct DependencyCache {
    deps: HashMap<ComponentId, Vec<ComponentId>>,
}

impl DependencyCache {
    pub fn new() -> Self {
        Self {
            deps: HashMap::new(),
        }
    }

    /// Direct dependencies of `id`, declared order preserved, duplicates
    /// kept verbatim. The installer is queried at most once per id.
    pub fn dependencies_of(
        &mut self,
        registry: &mut InstallerRegistry,
        id: &ComponentId,
    ) -> &[ComponentId] {
        self.deps.entry(id.clone()).or_insert_with(|| {
            registry
                .resolve(id)
                .map(|installer| installer.dependencies())
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::installer::Installer;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DeclaringInstaller {
        deps: Vec<ComponentId>,
        queried: Rc<Cell<usize>>,
    }

    impl Installer for DeclaringInstaller {
        fn install(&self) -> Result<()> {
            Ok(())
        }
        fn uninstall(&self) -> Result<()> {
            Ok(())
        }
        fn is_installed(&self) -> bool {
            false
        }
        fn dependencies(&self) -> Vec<ComponentId> {
            self.queried.set(self.queried.get() + 1);
            self.deps.clone()
        }
    }

    fn id(s: &str) -> ComponentId {
        s.parse().unwrap()
    }

    #[test]
    fn test_absent_installer_yields_empty_list() {
        let mut registry = InstallerRegistry::new();
        let mut cache = DependencyCache::new();
        assert!(cache.dependencies_of(&mut registry, &id("ghost")).is_empty());
    }

    #[test]
    fn test_list_stored_verbatim_with_duplicates() {
        let queried = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&queried);

        let mut registry = InstallerRegistry::new();
        registry.register(
            id("app.main"),
            Box::new(move || {
                Box::new(DeclaringInstaller {
                    deps: vec![id("lib.x"), id("lib.y"), id("lib.x")],
                    queried: Rc::clone(&counter),
                })
            }),
        );

        let mut cache = DependencyCache::new();
        let first = cache
            .dependencies_of(&mut registry, &id("app.main"))
            .to_vec();
        assert_eq!(first, vec![id("lib.x"), id("lib.y"), id("lib.x")]);

        // Second call must hit the cache, not the installer.
        let second = cache
            .dependencies_of(&mut registry, &id("app.main"))
            .to_vec();
        assert_eq!(first, second);
        assert_eq!(queried.get(), 1);
    }
}
