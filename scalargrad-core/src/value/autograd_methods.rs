// src/value/autograd_methods.rs

use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the currently accumulated gradient of this node.
    pub fn grad(&self) -> f64 {
        self.borrow_value_data().grad
    }

    /// Overwrites this node's gradient. Used for seeding the root and by
    /// the reset utilities; the backward pass itself only accumulates.
    pub(crate) fn set_grad(&self, grad: f64) {
        self.borrow_value_data_mut().grad = grad;
    }

    /// Adds a contribution into this node's gradient accumulator. A node
    /// consumed by several downstream operations receives one call per
    /// consumer, so the contributions must sum rather than overwrite.
    pub(crate) fn acc_grad(&self, grad_to_add: f64) {
        self.borrow_value_data_mut().grad += grad_to_add;
    }

    /// Returns a clone of the `Rc` pointing to this node's backward rule,
    /// or `None` for a leaf.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.borrow_value_data().grad_fn.clone()
    }

    /// Computes the gradient of this node with respect to every ancestor.
    ///
    /// Seeds `self.grad = 1.0` (d(self)/d(self)), then walks the ancestors
    /// in reverse topological order, dispatching each node's backward rule.
    /// The ordering guarantees a node's gradient is fully accumulated
    /// before its own rule fires, for arbitrary DAGs including reconvergent
    /// paths.
    ///
    /// Gradients accumulate across calls: invoking `backward()` again
    /// without resetting (`zero_gradients` or the nn/optim `zero_grad`
    /// surfaces) adds on top of the previous pass. That is the documented
    /// contract, not an error.
    pub fn backward(&self) {
        if self.grad_fn().is_none() {
            log::debug!("backward() called on a leaf node; seeding grad only.");
        }
        let order = topological_sort(self);

        self.set_grad(1.0);
        for node in order.iter().rev() {
            let grad_fn = node.borrow_value_data().grad_fn.clone();
            if let Some(grad_fn) = grad_fn {
                let upstream_grad = node.grad();
                let input_grads = grad_fn.backward(upstream_grad);
                let inputs = grad_fn.inputs();
                debug_assert_eq!(
                    input_grads.len(),
                    inputs.len(),
                    "backward rule returned {} gradients for {} inputs",
                    input_grads.len(),
                    inputs.len()
                );
                for (input, grad_to_add) in inputs.iter().zip(input_grads) {
                    input.acc_grad(grad_to_add);
                }
            }
        }
    }

    /// Resets this node's gradient to 0.0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}
