//!
//! The dependency graph tests.
//!

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::module::Module;
use crate::rewriter::import::ImportParser;

use super::DependencyGraph;

fn set(nodes: &[&str]) -> BTreeSet<String> {
    nodes.iter().map(|node| node.to_string()).collect()
}

#[test]
fn changed_dependency_includes_dependent() {
    let mut graph = DependencyGraph::default();
    graph.add_edge("C2", "C1");

    assert_eq!(graph.dependents_of("C1"), set(&["C1", "C2"]));
}

#[test]
fn leaf_includes_itself_only() {
    let mut graph = DependencyGraph::default();
    graph.add_edge("C2", "C1");

    assert_eq!(graph.dependents_of("C2"), set(&["C2"]));
}

#[test]
fn transitive_dependents() {
    let mut graph = DependencyGraph::default();
    graph.add_edge("exchange", "token");
    graph.add_edge("market", "exchange");
    graph.add_edge("oracle", "feed");
    graph.add_node("standalone");

    assert_eq!(
        graph.dependents_of("token"),
        set(&["token", "exchange", "market"])
    );
    assert_eq!(graph.dependents_of("feed"), set(&["feed", "oracle"]));
    assert_eq!(graph.dependents_of("standalone"), set(&["standalone"]));
}

#[test]
fn dependents_reached_against_key_order() {
    let mut graph = DependencyGraph::default();
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");
    graph.add_edge("c", "d");

    assert_eq!(graph.dependents_of("d"), set(&["a", "b", "c", "d"]));
}

#[test]
fn cycles_terminate() {
    let mut graph = DependencyGraph::default();
    graph.add_edge("a", "b");
    graph.add_edge("b", "a");
    graph.add_edge("c", "a");

    assert_eq!(graph.dependents_of("a"), set(&["a", "b", "c"]));
}

#[test]
fn from_modules() {
    let token = Module::new(PathBuf::from("src/token.se"), "def balance():\n    return(0)\n".to_owned())
        .expect("Always valid");
    let exchange = Module::new(
        PathBuf::from("src/exchange.se"),
        "import token as tok\nimport oracle as feed\ndef trade():\n    return(tok)\n".to_owned(),
    )
    .expect("Always valid");
    let graph = DependencyGraph::from_modules(&[token, exchange], &ImportParser::default());

    assert_eq!(graph.dependents_of("oracle"), set(&["oracle", "exchange"]));
    assert_eq!(graph.dependents_of("token"), set(&["token", "exchange"]));
}
