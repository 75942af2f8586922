// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- ExpBackward Definition ---

/// Backward pass structure for the exponential \( z = e^a \).
///
/// The derivative of the exponential is the exponential itself, so the rule
/// needs the forward *result*. It is cached here as a plain number: holding
/// a handle to the output node would make the node own itself through its
/// own `grad_fn`.
#[derive(Debug)]
struct ExpBackward {
    input: Value,
    result: f64,
}

// --- BackwardOp Implementation for ExpBackward ---

impl BackwardOp for ExpBackward {
    /// Computes \( dL/da = e^a \cdot dL/dz = z \cdot dL/dz \).
    fn backward(&self, upstream_grad: f64) -> Vec<f64> {
        vec![self.result * upstream_grad]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- exp_op Implementation (Public API + Autograd Setup) ---

/// Computes the natural exponential \( e^a \) of a node.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    let grad_fn = ExpBackward {
        input: a.clone(),
        result: data,
    };
    Value::from_op(data, Op::Exp, Rc::new(grad_fn))
}

// --- Value Method ---

impl Value {
    /// Natural exponential of this node. See [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests; // Link to the test file
