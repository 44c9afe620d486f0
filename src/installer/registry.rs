//! # Installer Registry
//!
//! Maps component ids to installer instances through an explicit
//! registration table populated at startup. A component without a factory is
//! a legitimate state ("no install-time logic"), not an error, and that
//! negative answer is memoized like any other resolution.

use crate::core::types::ComponentId;
use crate::installer::Installer;
use std::collections::HashMap;

/// Factory function for creating installer instances.
///
/// Context injection is the registrar's concern: factories are closures that
/// capture whatever shared handles (state store, paths) the installer needs.
pub type InstallerFactory = Box<dyn Fn() -> Box<dyn Installer>>;

#[derive(Default)]
pub struct InstallerRegistry {
    factories: HashMap<ComponentId, InstallerFactory>,
    resolved: HashMap<ComponentId, Option<Box<dyn Installer>>>,
}

impl InstallerRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            resolved: HashMap::new(),
        }
    }

    /// Register a factory for one component id. Later registrations replace
    /// earlier ones, but only until the id is first resolved.
    pub fn register(&mut self, id: ComponentId, factory: InstallerFactory) {
        self.factories.insert(id, factory);
    }

    pub fn has_factory(&self, id: &ComponentId) -> bool {
        self.factories.contains_key(id)
    }

    /// Resolve a component to its installer, instantiating on first lookup.
    /// The result (including `None`) is cached for the registry's lifetime,
    /// so repeated resolution is a map hit.
    pub fn resolve(&mut self, id: &ComponentId) -> Option<&dyn Installer> {
        if !self.resolved.contains_key(id) {
            let instance = self.factories.get(id).map(|factory| factory());
            self.resolved.insert(id.clone(), instance);
        }
        self.resolved.get(id).and_then(|slot| slot.as_deref())
    }
}
