// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b`. Expressed as `a * b^-1`, so the multiplication and
/// power rules compose into the quotient rule with no rule of their own.
///
/// # Errors
/// Returns `ScalarGradError::DivisionByZero` when `b`'s value is exactly
/// 0.0. The check happens before any node is constructed: a failed division
/// leaves the graph untouched.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    if b.data() == 0.0 {
        return Err(ScalarGradError::DivisionByZero {
            numerator: a.data(),
        });
    }
    Ok(mul_op(a, &pow_op(b, -1.0)))
}

// --- Tests ---
