// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Multiplies two nodes, eagerly computing the forward value and attaching
/// the multiplication backward rule to the result.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    let grad_fn = MulBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(data, Op::Mul, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward pass structure for multiplication \( z = a \cdot b \).
///
/// Each operand's contribution is the *other* operand's value scaled by the
/// upstream gradient: \( dL/da = b \cdot dL/dz \), \( dL/db = a \cdot dL/dz \).
/// The operand values are read at dispatch time through the stored handles.
#[derive(Debug)]
struct MulBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, upstream_grad: f64) -> Vec<f64> {
        vec![
            self.rhs.data() * upstream_grad,
            self.lhs.data() * upstream_grad,
        ]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Tests ---
