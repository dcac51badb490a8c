//! One-hop preview graph emission
//!
//! Builds the node-link diagram around a pivot entry and emits Graphviz DOT
//! text; layout and image rendering belong to the external renderer.

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use lingraph_kg::EntryCatalog;

/// DOT source for the one-hop neighborhood around `pivot`
///
/// The pivot renders as a double circle, neighbors as circles; spaces in
/// names break into newlines so labels stay inside the fixed-size nodes.
pub fn preview_dot(catalog: &EntryCatalog, pivot: &str) -> String {
    let mut graph: DiGraph<String, String> = DiGraph::new();
    let mut indexes: HashMap<String, NodeIndex> = HashMap::new();

    let pivot_index = graph.add_node(pivot.to_string());
    indexes.insert(pivot.to_string(), pivot_index);

    for edge in catalog.outgoing(pivot) {
        let to = node_index(&mut graph, &mut indexes, &edge.to);
        graph.add_edge(pivot_index, to, edge.relation.as_str().to_string());
    }
    for edge in catalog.incoming(pivot) {
        let from = node_index(&mut graph, &mut indexes, &edge.from);
        graph.add_edge(from, pivot_index, edge.relation.as_str().to_string());
    }

    format!(
        "{}",
        Dot::with_attr_getters(
            &graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &|_, edge| format!("label = \"{}\"", escape(edge.weight())),
            &|_, (index, name)| {
                let shape = if index == pivot_index {
                    "doublecircle"
                } else {
                    "circle"
                };
                format!(
                    "label = \"{}\" shape = {} fixedsize = true width = 2",
                    wrap_label(name),
                    shape
                )
            },
        )
    )
}

fn node_index(
    graph: &mut DiGraph<String, String>,
    indexes: &mut HashMap<String, NodeIndex>,
    name: &str,
) -> NodeIndex {
    *indexes
        .entry(name.to_string())
        .or_insert_with(|| graph.add_node(name.to_string()))
}

fn wrap_label(name: &str) -> String {
    escape(name).split(' ').collect::<Vec<_>>().join("\\n")
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
