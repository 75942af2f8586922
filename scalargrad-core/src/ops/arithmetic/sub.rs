// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts `b` from `a`. Expressed as `a + (-b)`; no independent backward
/// rule is needed.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_forward() {
        let a = Value::new(10.0);
        let b = Value::new(4.0);
        let c = sub_op(&a, &b);
        assert_eq!(c.data(), 6.0);
    }

    #[test]
    fn test_sub_backward() {
        let a = Value::new(10.0);
        let b = Value::new(4.0);
        let c = sub_op(&a, &b);
        c.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    fn test_sub_from_itself() {
        let a = Value::new(3.0);
        let c = sub_op(&a, &a);
        assert_eq!(c.data(), 0.0);
        c.backward();
        // +1 through the left use, -1 through the negated right use.
        assert_eq!(a.grad(), 0.0);
    }
}
