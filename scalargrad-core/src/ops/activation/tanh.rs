// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Applies the hyperbolic tangent activation to a node.
pub fn tanh_op(a: &Value) -> Value {
    let data = a.data().tanh();
    let grad_fn = TanhBackward {
        input: a.clone(),
        result: data,
    };
    Value::from_op(data, Op::Tanh, Rc::new(grad_fn))
}

impl Value {
    /// Hyperbolic tangent of this node. See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

// --- Backward Operation ---

/// Backward pass structure for \( z = \tanh(a) \).
///
/// Uses the identity \( d\tanh(a)/da = 1 - \tanh^2(a) = 1 - z^2 \); the
/// forward result is cached as a plain number (see `ExpBackward` for why
/// the output node itself is not stored).
#[derive(Debug)]
struct TanhBackward {
    input: Value,
    result: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, upstream_grad: f64) -> Vec<f64> {
        vec![(1.0 - self.result * self.result) * upstream_grad]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---
