//!
//! The module dependency graph.
//!

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::module::Module;
use crate::rewriter::import::ImportParser;

///
/// The module dependency graph.
///
/// An edge `A -> B` means that `A` imports `B`.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// The outgoing edges of every node.
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    ///
    /// Builds the graph from the imports of the raw module sources.
    ///
    pub fn from_modules(modules: &[Module], parser: &ImportParser) -> Self {
        let mut graph = Self::default();
        for module in modules.iter() {
            graph.add_node(module.shortcut.as_str());
            for (_line, import) in parser.imports(module.source.as_str()) {
                graph.add_edge(module.shortcut.as_str(), import.shortcut);
            }
        }
        graph
    }

    ///
    /// Adds a node without edges.
    ///
    pub fn add_node(&mut self, node: &str) {
        self.edges.entry(node.to_owned()).or_default();
    }

    ///
    /// Adds the `from -> to` edge.
    ///
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges
            .entry(from.to_owned())
            .or_default()
            .insert(to.to_owned());
        self.add_node(to);
    }

    ///
    /// Returns `changed` and every node depending on it, directly or transitively.
    ///
    /// Any node with an edge into the set is added until the set stops growing.
    ///
    pub fn dependents_of(&self, changed: &str) -> BTreeSet<String> {
        let mut dependents = BTreeSet::from([changed.to_owned()]);
        loop {
            let mut is_grown = false;
            for (node, targets) in self.edges.iter() {
                if dependents.contains(node) {
                    continue;
                }
                if targets.iter().any(|target| dependents.contains(target)) {
                    dependents.insert(node.to_owned());
                    is_grown = true;
                }
            }
            if !is_grown {
                break;
            }
        }
        dependents
    }
}
