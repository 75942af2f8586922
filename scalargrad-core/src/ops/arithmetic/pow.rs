// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Raises a node to a constant real exponent. The exponent is a plain
/// number, not a node, and gradients never flow into it.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    let grad_fn = PowBackward {
        base: base.clone(),
        exponent,
    };
    Value::from_op(data, Op::Pow(exponent), Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward pass structure for the power operation \( z = a^k \) with a
/// constant \( k \).
///
/// The power rule gives \( dL/da = k \cdot a^{k-1} \cdot dL/dz \); the base
/// value is read at dispatch time through the stored handle.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, upstream_grad: f64) -> Vec<f64> {
        let local = self.exponent * self.base.data().powf(self.exponent - 1.0);
        vec![local * upstream_grad]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Value Method ---

impl Value {
    /// Raises this node to a constant real exponent. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pow_forward() {
        let a = Value::new(3.0);
        let b = pow_op(&a, 2.0);
        assert_eq!(b.data(), 9.0);
        assert_eq!(b.op(), Some(Op::Pow(2.0)));
    }

    #[test]
    fn test_pow_backward_square() {
        let a = Value::new(3.0);
        let b = a.pow(2.0);
        b.backward();
        // d(a^2)/da = 2a = 6
        assert_eq!(a.grad(), 6.0);
    }

    #[test]
    fn test_pow_backward_reciprocal() {
        let a = Value::new(4.0);
        let b = a.pow(-1.0);
        assert_eq!(b.data(), 0.25);
        b.backward();
        // d(a^-1)/da = -a^-2 = -1/16
        assert_relative_eq!(a.grad(), -0.0625, epsilon = 1e-12);
    }

    #[test]
    fn test_pow_backward_fractional() {
        let a = Value::new(9.0);
        let b = a.pow(0.5);
        assert_relative_eq!(b.data(), 3.0, epsilon = 1e-12);
        b.backward();
        // d(sqrt(a))/da = 1 / (2 sqrt(a)) = 1/6
        assert_relative_eq!(a.grad(), 1.0 / 6.0, epsilon = 1e-12);
    }
}
