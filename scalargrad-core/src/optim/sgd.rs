use crate::autograd::NodeId;
use crate::optim::optimizer::Optimizer;
use crate::value::Value;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports classical momentum. Velocity buffers are keyed by parameter
/// identity, so the same node handed in twice shares one buffer.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    velocity_buffers: HashMap<NodeId, f64>,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer over the given parameter nodes.
    ///
    /// # Arguments
    /// * `params`: the parameter nodes to update (e.g. `Module::parameters`).
    /// * `lr`: the learning rate.
    /// * `momentum`: momentum factor; 0.0 gives plain gradient descent.
    pub fn new(params: Vec<Value>, lr: f64, momentum: f64) -> Self {
        Sgd {
            params,
            lr,
            momentum,
            velocity_buffers: HashMap::new(),
        }
    }

    /// The current learning rate.
    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Adjusts the learning rate in place (manual scheduling).
    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) {
        for param in &self.params {
            let grad = param.grad();
            let update = if self.momentum == 0.0 {
                grad
            } else {
                let velocity = self
                    .velocity_buffers
                    .entry(param.id_ptr())
                    .or_insert(0.0);
                *velocity = self.momentum * *velocity + grad;
                *velocity
            };
            param.set_data(param.data() - self.lr * update);
        }
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}
