// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Adds two nodes, eagerly computing the forward value and attaching the
/// addition backward rule to the result.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    let grad_fn = AddBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(data, Op::Add, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward pass structure for addition \( z = a + b \).
///
/// Addition routes the upstream gradient through unchanged:
/// \( dL/da = dL/dz \) and \( dL/db = dL/dz \). When both handles designate
/// the same node (`a + a`), the engine accumulates the contribution once
/// per use, yielding the doubled gradient.
#[derive(Debug)]
struct AddBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, upstream_grad: f64) -> Vec<f64> {
        vec![upstream_grad, upstream_grad]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Tests ---
