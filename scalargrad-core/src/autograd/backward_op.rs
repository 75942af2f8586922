use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar
/// operation.
///
/// Any operation that creates a derived `Value` attaches an implementation
/// of this trait to the output node's `grad_fn` field. During `backward()`
/// the engine dispatches each rule explicitly: it reads the output node's
/// fully accumulated gradient, asks the rule for the per-input
/// contributions, and adds each contribution into the matching input's
/// `grad` slot. The rules themselves never mutate graph state, which keeps
/// them trivially testable in isolation.
pub trait BackwardOp: Debug {
    /// Computes the chain-rule contribution for each input of the
    /// operation, given the gradient flowing into the operation's output
    /// (`upstream_grad` = dL/dOutput).
    ///
    /// The returned vector **must** match the order of `inputs()`: entry
    /// `i` is added into the gradient of input `i`. When the same node is
    /// used for several inputs (e.g. `a + a`), it receives one contribution
    /// per use, which is exactly the doubled gradient the chain rule
    /// demands.
    fn backward(&self, upstream_grad: f64) -> Vec<f64>;

    /// Returns handles to the input nodes that participated in the forward
    /// operation, in the same order as the gradients from `backward()`.
    ///
    /// The handles are strong: a backward rule keeps its operands alive, so
    /// the whole ancestor graph of a live root can always be traversed.
    fn inputs(&self) -> Vec<Value>;
}
