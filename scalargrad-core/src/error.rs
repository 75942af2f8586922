use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Division by zero: cannot divide {numerator} by a node whose value is exactly 0.0")]
    DivisionByZero { numerator: f64 },

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Empty input for operation {operation}")]
    EmptyInput { operation: String },
}
