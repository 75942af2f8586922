use crate::error::ScalarGradError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: layers chained in sequence, the output of one
/// becoming the input of the next.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP with `nin` input features and one layer per entry of
    /// `nouts` (e.g. `Mlp::new(2, &[4, 4, 1], rng)` builds 2 → 4 → 4 → 1).
    ///
    /// # Errors
    /// Returns `EmptyInput` when `nouts` is empty.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::EmptyInput {
                operation: "Mlp::new".to_string(),
            });
        }
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(pair[0], pair[1], rng))
            .collect();
        Ok(Mlp { layers })
    }

    /// Number of input features.
    pub fn in_features(&self) -> usize {
        self.layers.first().map_or(0, Layer::in_features)
    }

    /// Number of output nodes produced by the final layer.
    pub fn out_features(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_features)
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }
}
