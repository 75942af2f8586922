// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, sub_op};
use crate::value::Value;

/// Specifies the reduction to apply over the per-element squared errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// Computes the squared-error loss between predictions and targets,
/// reduced to a single scalar node suitable as a backward root.
#[derive(Debug, Clone)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    /// Creates a new `MseLoss` with the given reduction.
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Computes the loss node over paired predictions and targets.
    ///
    /// Targets are plain numbers (they carry no gradient); predictions are
    /// graph nodes, so the returned loss is differentiable with respect to
    /// everything the predictions were computed from.
    ///
    /// # Errors
    /// `InputSizeMismatch` when the slices differ in length, `EmptyInput`
    /// when both are empty (the mean of nothing is undefined).
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[f64],
    ) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss::calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyInput {
                operation: "MseLoss::calculate".to_string(),
            });
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(pred, &target)| {
                let diff = sub_op(pred, &Value::new(target));
                mul_op(&diff, &diff)
            })
            .sum();

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => Ok(&total * (1.0 / predictions.len() as f64)),
        }
    }
}
