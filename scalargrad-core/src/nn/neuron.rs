use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::ops::activation::tanh_op;
use crate::value::Value;
use rand::Rng;

/// A single neuron: `nin` weights, a bias, and a tanh activation over the
/// weighted sum of its inputs.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `nin` input connections, weights and bias drawn
    /// uniformly from [-1, 1).
    pub fn new<R: Rng + ?Sized>(nin: usize, rng: &mut R) -> Self {
        let weights = (0..nin).map(|_| init::uniform(rng, -1.0, 1.0)).collect();
        let bias = init::uniform(rng, -1.0, 1.0);
        Neuron { weights, bias }
    }

    /// Number of input connections.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Forward pass producing the single activation node:
    /// `tanh(sum(w_i * x_i) + b)`.
    ///
    /// # Errors
    /// Returns `InputSizeMismatch` when `input` does not have exactly
    /// `in_features` nodes.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        Ok(tanh_op(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}
