//! Drives install/uninstall actions over planned component orders.
//!
//! All mutable engine state (registry memoization, dependency cache, cycle
//! guard, reverse index) is owned here and lives exactly as long as the
//! orchestrator. Single-threaded by design; callers wanting concurrency
//! must serialize access themselves.

use crate::core::graph::EdgeGuard;
use crate::core::planner::{self, DependencyIndex};
use crate::core::traits::{ComponentEnumerator, MessageSink};
use crate::core::types::ComponentId;
use crate::error::Result;
use crate::installer::{DependencyCache, InstallerRegistry};

pub struct Orchestrator {
    registry: InstallerRegistry,
    cache: DependencyCache,
    guard: EdgeGuard,
    // Reverse view of the whole component set, built on first uninstall.
    index: Option<DependencyIndex>,
    enumerator: Box<dyn ComponentEnumerator>,
    sink: Box<dyn MessageSink>,
}

impl Orchestrator {
    pub fn new(
        registry: InstallerRegistry,
        enumerator: Box<dyn ComponentEnumerator>,
        sink: Box<dyn MessageSink>,
    ) -> Self {
        Self {
            registry,
            cache: DependencyCache::new(),
            guard: EdgeGuard::new(),
            index: None,
            enumerator,
            sink,
        }
    }

    /// All component ids the enumerator knows about.
    pub fn components(&self) -> Result<Vec<ComponentId>> {
        self.enumerator.list_all()
    }

    /// Dependency-first install order for `target`, without executing it.
    pub fn install_plan(&mut self, target: &ComponentId) -> Result<Vec<ComponentId>> {
        self.guard.reset();
        planner::plan_install(target, &mut self.cache, &mut self.registry, &mut self.guard)
    }

    /// Dependent-first uninstall order for `target`, without executing it.
    pub fn uninstall_plan(&mut self, target: &ComponentId) -> Result<Vec<ComponentId>> {
        self.ensure_index()?;
        match &self.index {
            Some(index) => planner::plan_uninstall(target, index),
            None => Ok(Vec::new()),
        }
    }

    /// Install `target` and everything it depends on, dependencies first.
    /// Already-installed components are skipped unless `force` is set.
    pub fn install(&mut self, target: &ComponentId, force: bool) -> Result<()> {
        let plan = self.install_plan(target)?;
        self.sink
            .debug(&format!("Install order for '{target}': {}", render(&plan)));

        for component in &plan {
            match self.registry.resolve(component) {
                None => {
                    self.sink
                        .debug(&format!("'{component}' has no installer, skipping"));
                }
                Some(installer) => {
                    if force || !installer.is_installed() {
                        self.sink.info(&format!("Installing '{component}'"));
                        installer.install()?;
                    } else {
                        self.sink
                            .debug(&format!("'{component}' already installed, skipping"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Uninstall `target` and everything depending on it, dependents first.
    /// No installed-state guard here: resolvable installers are always
    /// invoked, asymmetric with install on purpose.
    pub fn uninstall(&mut self, target: &ComponentId) -> Result<()> {
        let plan = self.uninstall_plan(target)?;
        self.sink
            .debug(&format!("Uninstall order for '{target}': {}", render(&plan)));

        for component in &plan {
            match self.registry.resolve(component) {
                None => {
                    self.sink
                        .debug(&format!("'{component}' has no installer, skipping"));
                }
                Some(installer) => {
                    self.sink.info(&format!("Uninstalling '{component}'"));
                    installer.uninstall()?;
                }
            }
        }
        Ok(())
    }

    /// Install every enumerated component. Each target re-derives its own
    /// subgraph rather than sharing one global plan.
    pub fn install_all(&mut self, force: bool) -> Result<()> {
        for component in self.enumerator.list_all()? {
            if !self.is_installable(&component) {
                self.sink
                    .debug(&format!("'{component}' has no installer, skipping"));
                continue;
            }
            if force || !self.is_installed(&component) {
                self.install(&component, force)?;
            }
        }
        Ok(())
    }

    /// Uninstall every enumerated component, unconditionally.
    pub fn uninstall_all(&mut self) -> Result<()> {
        for component in self.enumerator.list_all()? {
            self.uninstall(&component)?;
        }
        Ok(())
    }

    /// True iff an installer resolves for `id`.
    pub fn is_installable(&mut self, id: &ComponentId) -> bool {
        self.registry.resolve(id).is_some()
    }

    /// Installed state of `id`. A component with no installer is vacuously
    /// considered installed.
    pub fn is_installed(&mut self, id: &ComponentId) -> bool {
        self.registry
            .resolve(id)
            .map(|installer| installer.is_installed())
            .unwrap_or(true)
    }

    /// Build the global reverse dependency view once, by resolving the
    /// direct dependencies of every enumerated component.
    fn ensure_index(&mut self) -> Result<()> {
        if self.index.is_some() {
            return Ok(());
        }
        let ids = self.enumerator.list_all()?;
        self.sink.debug(&format!(
            "Building reverse dependency index over {} components",
            ids.len()
        ));

        let mut index = DependencyIndex::new();
        for component in ids {
            let deps = self
                .cache
                .dependencies_of(&mut self.registry, &component)
                .to_vec();
            index.push((component, deps));
        }
        self.index = Some(index);
        Ok(())
    }
}

fn render(plan: &[ComponentId]) -> String {
    plan.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::NullSink;
    use crate::error::PlugctlError;
    use crate::installer::Installer;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    type CallLog = Rc<RefCell<Vec<String>>>;

    struct ScriptedInstaller {
        id: ComponentId,
        deps: Vec<ComponentId>,
        installed: std::cell::Cell<bool>,
        fail_install: bool,
        log: CallLog,
    }

    impl Installer for ScriptedInstaller {
        fn install(&self) -> Result<()> {
            if self.fail_install {
                return Err(PlugctlError::InstallerFailed {
                    component: self.id.clone(),
                    reason: "scripted failure".into(),
                });
            }
            self.log.borrow_mut().push(format!("install {}", self.id));
            self.installed.set(true);
            Ok(())
        }

        fn uninstall(&self) -> Result<()> {
            self.log.borrow_mut().push(format!("uninstall {}", self.id));
            self.installed.set(false);
            Ok(())
        }

        fn is_installed(&self) -> bool {
            self.installed.get()
        }

        fn dependencies(&self) -> Vec<ComponentId> {
            self.deps.clone()
        }
    }

    struct FixedEnumerator(Vec<ComponentId>);

    impl ComponentEnumerator for FixedEnumerator {
        fn list_all(&self) -> Result<Vec<ComponentId>> {
            Ok(self.0.clone())
        }
    }

    fn id(s: &str) -> ComponentId {
        s.parse().unwrap()
    }

    /// Orchestrator over a scripted graph. `installed` marks components whose
    /// installers report themselves already installed; `failing` marks
    /// installers whose install() errors out.
    fn orchestrator(
        graph: &[(&str, &[&str])],
        installed: &[&str],
        failing: &[&str],
        log: &CallLog,
    ) -> Orchestrator {
        let installed: HashSet<String> = installed.iter().map(|s| s.to_string()).collect();
        let failing: HashSet<String> = failing.iter().map(|s| s.to_string()).collect();

        let mut registry = InstallerRegistry::new();
        let mut all = Vec::new();
        for (component, deps) in graph {
            let cid = id(component);
            all.push(cid.clone());
            let deps: Vec<ComponentId> = deps.iter().map(|d| id(d)).collect();
            let log = Rc::clone(log);
            let installed = installed.contains(*component);
            let fail_install = failing.contains(*component);
            registry.register(
                cid.clone(),
                Box::new(move || {
                    Box::new(ScriptedInstaller {
                        id: cid.clone(),
                        deps: deps.clone(),
                        installed: std::cell::Cell::new(installed),
                        fail_install,
                        log: Rc::clone(&log),
                    })
                }),
            );
        }
        Orchestrator::new(registry, Box::new(FixedEnumerator(all)), Box::new(NullSink))
    }

    #[test]
    fn test_install_runs_dependencies_first() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["b"][..]), ("b", &["c"][..]), ("c", &[][..])];
        let mut orch = orchestrator(&graph, &[], &[], &log);

        orch.install(&id("a"), false).unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["install c", "install b", "install a"]
        );
    }

    #[test]
    fn test_install_skips_already_installed() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["b"][..]), ("b", &[][..])];
        let mut orch = orchestrator(&graph, &["b"], &[], &log);

        orch.install(&id("a"), false).unwrap();
        assert_eq!(*log.borrow(), vec!["install a"]);
    }

    #[test]
    fn test_force_reinstalls_everything() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["b"][..]), ("b", &[][..])];
        let mut orch = orchestrator(&graph, &["a", "b"], &[], &log);

        orch.install(&id("a"), true).unwrap();
        assert_eq!(*log.borrow(), vec!["install b", "install a"]);
    }

    #[test]
    fn test_install_without_installer_is_a_silent_noop() {
        let log: CallLog = Rc::default();
        let mut orch = orchestrator(&[], &[], &[], &log);

        orch.install(&id("ghost.component"), false).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_cycle_fails_before_any_installer_runs() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["b"][..]), ("b", &["a"][..])];
        let mut orch = orchestrator(&graph, &[], &[], &log);

        let err = orch.install(&id("a"), false).unwrap_err();
        assert!(matches!(err, PlugctlError::CyclicDependency { .. }));
        // Planning precedes execution, so nothing may have been installed.
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_installer_error_aborts_remaining_sequence() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["b"][..]), ("b", &["c"][..]), ("c", &[][..])];
        let mut orch = orchestrator(&graph, &[], &["b"], &log);

        let err = orch.install(&id("a"), false).unwrap_err();
        assert!(matches!(err, PlugctlError::InstallerFailed { .. }));
        // c was processed before the failure and stays processed; a never ran.
        assert_eq!(*log.borrow(), vec!["install c"]);
    }

    #[test]
    fn test_uninstall_runs_dependents_first_and_target_last() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["b"][..]), ("b", &["c"][..]), ("c", &[][..])];
        let mut orch = orchestrator(&graph, &["a", "b", "c"], &[], &log);

        orch.uninstall(&id("c")).unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["uninstall a", "uninstall b", "uninstall c"]
        );
    }

    #[test]
    fn test_uninstall_of_cyclic_graph_fails_without_running_installers() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["b"][..]), ("b", &["a"][..])];
        let mut orch = orchestrator(&graph, &[], &[], &log);

        let err = orch.uninstall(&id("a")).unwrap_err();
        assert!(matches!(err, PlugctlError::CyclicDependency { .. }));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_uninstall_ignores_installed_state() {
        let log: CallLog = Rc::default();
        let graph = [("a", &[][..])];
        // Not installed, still gets uninstall() called.
        let mut orch = orchestrator(&graph, &[], &[], &log);

        orch.uninstall(&id("a")).unwrap();
        assert_eq!(*log.borrow(), vec!["uninstall a"]);
    }

    #[test]
    fn test_install_all_covers_every_component() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["c"][..]), ("b", &[][..]), ("c", &[][..])];
        let mut orch = orchestrator(&graph, &[], &[], &log);

        orch.install_all(false).unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["install c", "install a", "install b"]
        );
    }

    #[test]
    fn test_install_all_skips_installed_targets_without_force() {
        let log: CallLog = Rc::default();
        let graph = [("a", &[][..]), ("b", &[][..])];
        let mut orch = orchestrator(&graph, &["a"], &[], &log);

        orch.install_all(false).unwrap();
        assert_eq!(*log.borrow(), vec!["install b"]);
    }

    #[test]
    fn test_uninstall_all_is_unconditional() {
        let log: CallLog = Rc::default();
        let graph = [("a", &["b"][..]), ("b", &[][..])];
        let mut orch = orchestrator(&graph, &[], &[], &log);

        orch.uninstall_all().unwrap();
        // a first (nothing depends on it), then b drags a in again but the
        // plan dedups; per-target plans run back to back.
        assert_eq!(
            *log.borrow(),
            vec!["uninstall a", "uninstall a", "uninstall b"]
        );
    }

    #[test]
    fn test_component_without_installer_is_vacuously_installed() {
        let log: CallLog = Rc::default();
        let mut orch = orchestrator(&[], &[], &[], &log);

        assert!(!orch.is_installable(&id("ghost.component")));
        assert!(orch.is_installed(&id("ghost.component")));
    }

    #[test]
    fn test_installable_component_reports_real_state() {
        let log: CallLog = Rc::default();
        let graph = [("a", &[][..]), ("b", &[][..])];
        let mut orch = orchestrator(&graph, &["a"], &[], &log);

        assert!(orch.is_installable(&id("a")));
        assert!(orch.is_installed(&id("a")));
        assert!(!orch.is_installed(&id("b")));
    }
}
