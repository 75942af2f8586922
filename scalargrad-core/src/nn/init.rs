use crate::value::Value;
use rand::Rng;
use rand_distr::StandardNormal;

/// Draws a leaf node uniformly from `[low, high)`.
///
/// This is the default initialization for neuron weights and biases
/// (`low = -1.0`, `high = 1.0`).
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Value {
    Value::new(rng.gen_range(low..high))
}

/// Draws a leaf node from a normal distribution with the given mean and
/// standard deviation.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> Value {
    let sample: f64 = rng.sample(StandardNormal);
    Value::new(mean + std_dev * sample)
}
