// scalargrad-core/src/ops/math_elem/exp_test.rs

use crate::ops::math_elem::exp_op;
use crate::types::Op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward_basic() {
    let a = Value::new(1.0);
    let b = exp_op(&a);
    assert_relative_eq!(b.data(), std::f64::consts::E, epsilon = 1e-12);
    assert_eq!(b.op(), Some(Op::Exp));

    let zero = Value::new(0.0);
    assert_eq!(exp_op(&zero).data(), 1.0);
}

#[test]
fn test_exp_backward() {
    let a = Value::new(0.5);
    let b = a.exp();
    b.backward();
    // d(e^a)/da = e^a = the forward result itself.
    assert_relative_eq!(a.grad(), b.data(), epsilon = 1e-12);
}

#[test]
fn test_exp_backward_scales_upstream() {
    // 3 * exp(a): upstream gradient into exp is 3.
    let a = Value::new(2.0);
    let b = a.exp();
    let c = &b * 3.0;
    c.backward();
    assert_relative_eq!(a.grad(), 3.0 * 2.0f64.exp(), epsilon = 1e-12);
}

#[test]
fn test_exp_of_negative() {
    let a = Value::new(-1.0);
    let b = a.exp();
    assert_relative_eq!(b.data(), (-1.0f64).exp(), epsilon = 1e-12);
    b.backward();
    assert!(a.grad() > 0.0, "exp is strictly increasing everywhere");
}
