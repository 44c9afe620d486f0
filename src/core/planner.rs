//! Install/uninstall order planning.
//!
//! Install plans are dependency-first: a post-order depth-first walk from
//! the target, validated edge by edge against the cycle guard. Uninstall
//! plans are dependent-first: a walk over a prebuilt reverse view of the
//! whole component set, ending in the target. Both deduplicate by first
//! occurrence, which in a pure post-order walk already preserves the
//! topological property.

use crate::core::graph::EdgeGuard;
use crate::core::types::ComponentId;
use crate::error::{PlugctlError, Result};
use crate::installer::{DependencyCache, InstallerRegistry};
use std::collections::HashSet;

/// Global component -> direct dependencies view, in enumeration order.
/// Built once per orchestrator lifetime for uninstall planning.
pub type DependencyIndex = Vec<(ComponentId, Vec<ComponentId>)>;

/// Dependency-first install order for one target.
///
/// Fails with `CyclicDependency` before recursing into any edge that would
/// close a cycle; on failure the whole plan is abandoned.
pub fn plan_install(
    target: &ComponentId,
    cache: &mut DependencyCache,
    registry: &mut InstallerRegistry,
    guard: &mut EdgeGuard,
) -> Result<Vec<ComponentId>> {
    let mut sequence = Vec::new();
    expand(target, cache, registry, guard, &mut sequence)?;
    Ok(dedup_first(sequence))
}

fn expand(
    node: &ComponentId,
    cache: &mut DependencyCache,
    registry: &mut InstallerRegistry,
    guard: &mut EdgeGuard,
    out: &mut Vec<ComponentId>,
) -> Result<()> {
    // No visited set here: shared subtrees are re-expanded and the final
    // first-occurrence dedup defines the canonical order.
    let deps = cache.dependencies_of(registry, node).to_vec();
    for dep in &deps {
        guard.add_edge(node, dep)?;
        expand(dep, cache, registry, guard, out)?;
    }
    out.push(node.clone());
    Ok(())
}

/// Dependent-first uninstall order for one target; the target is last.
///
/// Uninstall is reachable without any prior install-side validation, so a
/// cyclic index (hand-edited manifests) must be rejected here too, before
/// the walk can recurse into it.
pub fn plan_uninstall(target: &ComponentId, index: &DependencyIndex) -> Result<Vec<ComponentId>> {
    let mut sequence = Vec::new();
    let mut path = Vec::new();
    collect_dependents(target, index, &mut path, &mut sequence)?;
    Ok(dedup_first(sequence))
}

fn collect_dependents(
    node: &ComponentId,
    index: &DependencyIndex,
    path: &mut Vec<ComponentId>,
    out: &mut Vec<ComponentId>,
) -> Result<()> {
    // On-path check only, not a visited set: acyclic inputs keep the exact
    // re-expansion behavior and output order of the plain walk.
    if let Some(pos) = path.iter().position(|p| p == node) {
        let mut chain: Vec<ComponentId> = path[pos..].to_vec();
        chain.push(node.clone());
        return Err(PlugctlError::CyclicDependency {
            component: node.clone(),
            chain,
        });
    }

    path.push(node.clone());
    for (candidate, deps) in index {
        if deps.contains(node) {
            collect_dependents(candidate, index, path, out)?;
        }
    }
    path.pop();
    out.push(node.clone());
    Ok(())
}

/// Drop duplicates, keeping each id's first occurrence.
fn dedup_first(sequence: Vec<ComponentId>) -> Vec<ComponentId> {
    let mut seen: HashSet<ComponentId> = HashSet::new();
    sequence
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
