/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter nodes based on their
/// accumulated gradients. They write through the external update surface
/// (`Value::set_data`), which the engine deliberately does not guard: a
/// gradient reset must follow before the next backward pass.
pub trait Optimizer {
    /// Performs a single optimization step over the managed parameters,
    /// using their currently accumulated gradients.
    fn step(&mut self);

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Typically called before the backward pass of a new training
    /// iteration, to prevent gradients accumulating across iterations.
    fn zero_grad(&mut self);
}
