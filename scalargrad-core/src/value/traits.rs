// src/value/traits.rs

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

// --- Identity semantics ---

impl Clone for Value {
    /// Clones the handle, not the node: the result points at the same graph
    /// vertex and shares its value and gradient.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl PartialEq for Value {
    /// Two `Value`s are equal iff they are the same graph vertex. Two
    /// distinct leaves holding equal numbers are *not* equal.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// Hashes the node's identity (storage address), consistent with
    /// `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id_ptr().hash(state);
    }
}

// --- Operator sugar ---
//
// The primary implementations take `&Value` on both sides and delegate to
// the `*_op` functions; every other combination (owned operands, bare f64
// literals on either side) funnels into those. Literals are coerced into
// fresh leaf nodes, so `2.0 * x` and `x * 2.0` both extend the graph.

impl<'a, 'b> Add<&'b Value> for &'a Value {
    type Output = Value;

    fn add(self, rhs: &'b Value) -> Value {
        add_op(self, rhs)
    }
}

impl Add<Value> for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        &self + &rhs
    }
}

impl<'b> Add<&'b Value> for Value {
    type Output = Value;

    fn add(self, rhs: &'b Value) -> Value {
        &self + rhs
    }
}

impl<'a> Add<Value> for &'a Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        self + &rhs
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        self + &Value::new(rhs)
    }
}

impl Add<f64> for Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        &self + rhs
    }
}

impl Add<&Value> for f64 {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        &Value::new(self) + rhs
    }
}

impl Add<Value> for f64 {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        self + &rhs
    }
}

impl<'a, 'b> Sub<&'b Value> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: &'b Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub<Value> for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        &self - &rhs
    }
}

impl<'b> Sub<&'b Value> for Value {
    type Output = Value;

    fn sub(self, rhs: &'b Value) -> Value {
        &self - rhs
    }
}

impl<'a> Sub<Value> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        self - &rhs
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        self - &Value::new(rhs)
    }
}

impl Sub<f64> for Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        &self - rhs
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        &Value::new(self) - rhs
    }
}

impl Sub<Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        self - &rhs
    }
}

impl<'a, 'b> Mul<&'b Value> for &'a Value {
    type Output = Value;

    fn mul(self, rhs: &'b Value) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul<Value> for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        &self * &rhs
    }
}

impl<'b> Mul<&'b Value> for Value {
    type Output = Value;

    fn mul(self, rhs: &'b Value) -> Value {
        &self * rhs
    }
}

impl<'a> Mul<Value> for &'a Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        self * &rhs
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        self * &Value::new(rhs)
    }
}

impl Mul<f64> for Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        &self * rhs
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        &Value::new(self) * rhs
    }
}

impl Mul<Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        self * &rhs
    }
}

impl<'a, 'b> Div<&'b Value> for &'a Value {
    type Output = Value;

    /// Division operator sugar over [`div_op`].
    ///
    /// # Panics
    /// Panics when the divisor's value is exactly 0.0; use `div_op` for the
    /// fallible surface.
    fn div(self, rhs: &'b Value) -> Value {
        div_op(self, rhs).unwrap_or_else(|e| panic!("Value division failed: {}", e))
    }
}

impl Div<Value> for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        &self / &rhs
    }
}

impl<'b> Div<&'b Value> for Value {
    type Output = Value;

    fn div(self, rhs: &'b Value) -> Value {
        &self / rhs
    }
}

impl<'a> Div<Value> for &'a Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        self / &rhs
    }
}

impl Div<f64> for &Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        self / &Value::new(rhs)
    }
}

impl Div<f64> for Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        &self / rhs
    }
}

impl Div<&Value> for f64 {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        &Value::new(self) / rhs
    }
}

impl Div<Value> for f64 {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        self / &rhs
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        -&self
    }
}

impl Sum for Value {
    /// Sums an iterator of nodes into one node, starting from a fresh zero
    /// leaf (so an empty sum is a plain zero).
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| &acc + &v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_combinations_forward() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);

        assert_eq!((&a + &b).data(), 5.0);
        assert_eq!((a.clone() + b.clone()).data(), 5.0);
        assert_eq!((&a + 1.0).data(), 3.0);
        assert_eq!((1.0 + &a).data(), 3.0);

        assert_eq!((&a - &b).data(), -1.0);
        assert_eq!((5.0 - &a).data(), 3.0);

        assert_eq!((&a * &b).data(), 6.0);
        assert_eq!((&a * -1.5).data(), -3.0);
        assert_eq!((2.0 * b.clone()).data(), 6.0);

        assert_eq!((&a / &b).data(), 2.0 / 3.0);
        assert_eq!((1.0 / &a).data(), 0.5);

        assert_eq!((-&a).data(), -2.0);
    }

    #[test]
    fn test_literal_operands_become_leaves() {
        let a = Value::new(2.0);
        let out = &a + 3.0;
        out.backward();
        assert_eq!(a.grad(), 1.0);
    }

    #[test]
    fn test_subtraction_gradients() {
        let a = Value::new(7.0);
        let b = Value::new(4.0);
        let c = &a - &b;
        c.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    #[should_panic(expected = "Value division failed")]
    fn test_division_operator_panics_on_zero() {
        let a = Value::new(1.0);
        let b = Value::new(0.0);
        let _ = &a / &b;
    }

    #[test]
    fn test_sum_over_values() {
        let values = vec![Value::new(1.0), Value::new(2.0), Value::new(3.0)];
        let leaves: Vec<Value> = values.to_vec();
        let total: Value = values.into_iter().sum();
        assert_eq!(total.data(), 6.0);
        total.backward();
        for leaf in &leaves {
            assert_eq!(leaf.grad(), 1.0);
        }
    }

    #[test]
    fn test_empty_sum_is_zero_leaf() {
        let total: Value = Vec::<Value>::new().into_iter().sum();
        assert_eq!(total.data(), 0.0);
        assert!(total.grad_fn().is_none());
    }

    #[test]
    fn test_value_as_hash_key() {
        use std::collections::HashSet;
        let a = Value::new(1.0);
        let b = Value::new(1.0);
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 2);
    }
}
