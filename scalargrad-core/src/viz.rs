//! Read-only rendering of a computation graph as Graphviz DOT text.
//!
//! The traversal walks `inputs()` edges and node tags only; it never
//! mutates `data` or `grad`, so it is safe between forward and backward
//! passes.

use crate::autograd::NodeId;
use crate::value::Value;
use std::collections::HashSet;

/// Collects all nodes and edges reachable from `root`.
///
/// Nodes are deduplicated by identity; each edge is an (operand, consumer)
/// pair. The same operand used twice by one operation yields one edge, as
/// the graph records distinct vertices, not uses.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut edge_seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    build(root, &mut seen, &mut edge_seen, &mut nodes, &mut edges);
    (nodes, edges)
}

fn build(
    node: &Value,
    seen: &mut HashSet<NodeId>,
    edge_seen: &mut HashSet<(NodeId, NodeId)>,
    nodes: &mut Vec<Value>,
    edges: &mut Vec<(Value, Value)>,
) {
    if !seen.insert(node.id_ptr()) {
        return;
    }
    nodes.push(node.clone());
    if let Some(grad_fn) = node.grad_fn() {
        for input in grad_fn.inputs() {
            if edge_seen.insert((input.id_ptr(), node.id_ptr())) {
                edges.push((input.clone(), node.clone()));
            }
            build(&input, seen, edge_seen, nodes, edges);
        }
    }
}

/// Renders the graph rooted at `root` as a Graphviz DOT document.
///
/// Each value becomes a record-shaped node showing its label, value and
/// gradient; each derived value additionally gets a small operation node
/// feeding it, so the arithmetic structure reads left to right.
pub fn to_dot(root: &Value) -> String {
    let (nodes, edges) = trace(root);

    let mut dot = String::from("digraph {\n  rankdir=LR;\n");
    for node in &nodes {
        let id = node.id_ptr() as usize;
        let label = node.label().unwrap_or_default();
        dot.push_str(&format!(
            "  \"{}\" [label=\"{{{} | data {:.4} | grad {:.4}}}\", shape=record];\n",
            id,
            label,
            node.data(),
            node.grad()
        ));
        if let Some(op) = node.op() {
            dot.push_str(&format!("  \"{}{}\" [label=\"{}\"];\n", id, op, op));
            dot.push_str(&format!("  \"{}{}\" -> \"{}\";\n", id, op, id));
        }
    }
    for (from, to) in &edges {
        let op = to.op().expect("edge target is a derived node");
        dot.push_str(&format!(
            "  \"{}\" -> \"{}{}\";\n",
            from.id_ptr() as usize,
            to.id_ptr() as usize,
            op
        ));
    }
    dot.push_str("}\n");
    dot
}
