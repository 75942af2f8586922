use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identifier of a graph vertex: the address of its shared storage.
///
/// Using the pointer gives identity semantics (two distinct leaves holding
/// equal numbers are distinct vertices) and a cheap `HashSet`/`HashMap` key.
/// The pointers stay valid for the duration of a traversal because the
/// `Value` handles collected alongside them keep the nodes alive.
pub type NodeId = *const RefCell<ValueData>;

/// Returns all ancestors of `root` (including `root` itself) in topological
/// order: every node appears after all of its operands.
///
/// Depth-first post-order with a visited set keyed by node identity, so a
/// node reachable through several paths (shared sub-expressions, diamond
/// reconvergence) is emitted exactly once. The backward pass walks the
/// result in reverse, which guarantees a node's gradient is complete before
/// its own rule fires.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    build_topo(root, &mut visited, &mut sorted);
    sorted
}

/// Recursively builds the post-order. Construction only ever references
/// previously constructed nodes, so the relation is acyclic and the
/// recursion terminates.
fn build_topo(node: &Value, visited: &mut HashSet<NodeId>, sorted: &mut Vec<Value>) {
    if !visited.insert(node.id_ptr()) {
        return;
    }
    log::trace!("build_topo: visiting node {:?}", node.id_ptr());
    let grad_fn = node.borrow_value_data().grad_fn.clone();
    if let Some(grad_fn) = grad_fn {
        for input in grad_fn.inputs() {
            build_topo(&input, visited, sorted);
        }
    }
    sorted.push(node.clone());
}

/// Resets the gradient of every node reachable from `root` to 0.0.
///
/// Uses the same topological machinery as the backward pass rather than any
/// global registry of nodes; call it before a fresh `backward()` on a held
/// graph, typically once per training step.
pub fn zero_gradients(root: &Value) {
    for node in topological_sort(root) {
        node.zero_grad();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{add_op, mul_op};

    #[test]
    fn test_topological_order_respects_dependencies() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = add_op(&a, &b);
        let d = mul_op(&c, &a);

        let order = topological_sort(&d);
        assert_eq!(order.len(), 4);
        // Root last, and every operand before its consumer.
        assert!(order[3].ptr_eq(&d));
        let pos = |v: &Value| order.iter().position(|n| n.ptr_eq(v)).unwrap();
        assert!(pos(&a) < pos(&c));
        assert!(pos(&b) < pos(&c));
        assert!(pos(&c) < pos(&d));
    }

    #[test]
    fn test_shared_subexpression_visited_once() {
        let a = Value::new(1.5);
        let d = add_op(&a, &a);
        let order = topological_sort(&d);
        // `a` appears once even though it feeds the addition twice.
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_leaf_topological_order() {
        let a = Value::new(0.0);
        let order = topological_sort(&a);
        assert_eq!(order.len(), 1);
        assert!(order[0].ptr_eq(&a));
    }

    #[test]
    fn test_zero_gradients_resets_whole_graph() {
        let a = Value::new(2.0);
        let b = Value::new(-1.0);
        let c = mul_op(&a, &b);
        c.backward();
        assert_ne!(a.grad(), 0.0);

        zero_gradients(&c);
        assert_eq!(a.grad(), 0.0);
        assert_eq!(b.grad(), 0.0);
        assert_eq!(c.grad(), 0.0);
    }
}
