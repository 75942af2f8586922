use crate::value::Value;
use approx::relative_eq;

/// Checks that a node's value and gradient match expectations within
/// tolerance. Panics with a descriptive message otherwise.
pub fn check_value_near(actual: &Value, expected_data: f64, expected_grad: f64, tolerance: f64) {
    let data = actual.data();
    let grad = actual.grad();
    if !relative_eq!(data, expected_data, epsilon = tolerance) {
        panic!(
            "Value data mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            data, expected_data, tolerance
        );
    }
    if !relative_eq!(grad, expected_grad, epsilon = tolerance) {
        panic!(
            "Value grad mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            grad, expected_grad, tolerance
        );
    }
}

/// Helper to create a batch of leaf nodes from raw numbers.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}
