use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all network building blocks (neurons, layers,
/// containers).
///
/// Composition adds no graph semantics of its own: a module is just a
/// bundle of parameter nodes plus a way of wiring inputs through the
/// primitive operations.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `input`: the input nodes for the module.
    ///
    /// # Returns
    /// The output nodes of the module, or a `ScalarGradError` if the input
    /// does not match the module's expected width.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns every learnable parameter node of the module, including
    /// those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to 0.
    ///
    /// Typically called before each training step, since `backward()`
    /// accumulates across calls.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
