// src/value/debug.rs
use crate::value::Value;
use std::fmt;

// Manual implementation: deriving Debug would try to print the whole
// ancestor graph through grad_fn and recurse.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.borrow_value_data();
        write!(f, "Value(data={}, grad={}", guard.data, guard.grad)?;
        if let Some(op) = guard.op {
            write!(f, ", op={}", op)?;
        }
        if let Some(label) = &guard.label {
            write!(f, ", label={:?}", label)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::add_op;

    #[test]
    fn test_debug_leaf() {
        let a = Value::with_label(2.0, "a");
        assert_eq!(format!("{:?}", a), "Value(data=2, grad=0, label=\"a\")");
    }

    #[test]
    fn test_debug_derived_shows_op() {
        let a = Value::new(1.0);
        let b = Value::new(2.0);
        let c = add_op(&a, &b);
        assert_eq!(format!("{:?}", c), "Value(data=3, grad=0, op=+)");
    }
}
