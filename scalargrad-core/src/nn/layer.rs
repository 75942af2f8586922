use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `nout` neurons, each reading the same `nin`
/// inputs and producing one output.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `nout` neurons with `nin` inputs each.
    pub fn new<R: Rng + ?Sized>(nin: usize, nout: usize, rng: &mut R) -> Self {
        let neurons = (0..nout).map(|_| Neuron::new(nin, rng)).collect();
        Layer { neurons }
    }

    /// Number of inputs each neuron expects.
    pub fn in_features(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::in_features)
    }

    /// Number of neurons (outputs).
    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(input))
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(Neuron::parameters)
            .collect()
    }
}
