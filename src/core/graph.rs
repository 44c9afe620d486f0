//! Incremental cycle detection over lazily revealed dependency edges.
//!
//! The dependency graph is only discovered while walking installer
//! declarations, so every edge is validated before the planner recurses
//! into it. Edges live for a single top-level install call.

use crate::core::types::ComponentId;
use crate::error::{PlugctlError, Result};
use std::collections::{HashMap, HashSet};

/// Directed "from depends on to" edges accumulated during one traversal.
#[derive(Debug, Default)]
pub struct EdgeGuard {
    edges: Vec<(ComponentId, ComponentId)>,
}

impl EdgeGuard {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Clear all recorded edges. Called at the start of every top-level
    /// install call.
    pub fn reset(&mut self) {
        self.edges.clear();
    }

    /// Record the edge `from -> to`. If `to` already reaches `from` through
    /// recorded edges, the edge would close a cycle: nothing is recorded and
    /// the error carries the full chain `from -> to -> ... -> from`.
    pub fn add_edge(&mut self, from: &ComponentId, to: &ComponentId) -> Result<()> {
        if let Some(path) = self.find_path(to, from) {
            let mut chain = Vec::with_capacity(path.len() + 1);
            chain.push(from.clone());
            chain.extend(path);
            return Err(PlugctlError::CyclicDependency {
                component: from.clone(),
                chain,
            });
        }
        self.edges.push((from.clone(), to.clone()));
        Ok(())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterative DFS from `start` to `goal`, returning the node path
    /// (both endpoints included) when one exists.
    fn find_path(&self, start: &ComponentId, goal: &ComponentId) -> Option<Vec<ComponentId>> {
        if start == goal {
            return Some(vec![start.clone()]);
        }

        let mut stack = vec![start.clone()];
        let mut visited: HashSet<ComponentId> = HashSet::new();
        let mut parent: HashMap<ComponentId, ComponentId> = HashMap::new();
        visited.insert(start.clone());

        while let Some(node) = stack.pop() {
            for (edge_from, edge_to) in &self.edges {
                if edge_from != &node || visited.contains(edge_to) {
                    continue;
                }
                parent.insert(edge_to.clone(), node.clone());

                if edge_to == goal {
                    let mut path = vec![goal.clone()];
                    let mut cursor = goal;
                    while let Some(prev) = parent.get(cursor) {
                        path.push(prev.clone());
                        cursor = prev;
                    }
                    path.reverse();
                    return Some(path);
                }

                visited.insert(edge_to.clone());
                stack.push(edge_to.clone());
            }
        }

        None
    }
}
