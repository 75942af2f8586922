//! # MLP XOR training
//!
//! Trains a small multi-layer perceptron to solve the XOR problem, which
//! requires a non-linear decision boundary: forward pass, squared-error
//! loss, gradient reset, backward pass and an SGD parameter update, every
//! epoch.
//!
//! Run with: `cargo run --example train_xor`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::losses::{MseLoss, Reduction};
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::Value;
use scalargrad_data::{Dataset, Sampler, ShuffleSampler, XorDataset};

const EPOCHS: usize = 500;
const LEARNING_RATE: f64 = 0.05;

fn main() {
    let dataset = XorDataset::new();
    println!("XOR dataset (targets normalized to [-1, 1]):");
    for i in 0..dataset.len() {
        let (inputs, target) = dataset.get(i);
        println!("  {:?} -> {}", inputs, target);
    }

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(2, &[4, 4, 1], &mut rng).expect("network architecture is non-empty");
    println!(
        "\nCreated MLP 2 -> 4 -> 4 -> 1 with {} parameters",
        mlp.parameters().len()
    );

    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(mlp.parameters(), LEARNING_RATE, 0.0);
    let mut sampler = ShuffleSampler::new(StdRng::seed_from_u64(7));

    println!(
        "Training for {} epochs with learning rate {}\n",
        EPOCHS, LEARNING_RATE
    );

    for epoch in 0..EPOCHS {
        let mut predictions = Vec::with_capacity(dataset.len());
        let mut targets = Vec::with_capacity(dataset.len());
        for index in sampler.indices(dataset.len()) {
            let (inputs, target) = dataset.get(index);
            let x: Vec<Value> = inputs.iter().map(|&v| Value::new(v)).collect();
            let out = mlp.forward(&x).expect("input width matches the network");
            predictions.push(out[0].clone());
            targets.push(target);
        }
        let loss = loss_fn
            .calculate(&predictions, &targets)
            .expect("predictions and targets are paired");

        optimizer.zero_grad();
        loss.backward();
        optimizer.step();

        if epoch % 50 == 0 || epoch == EPOCHS - 1 {
            println!("Epoch {:3}: loss = {:.6}", epoch, loss.data());
        }
    }

    println!("\nFinal predictions:");
    let mut correct = 0;
    for i in 0..dataset.len() {
        let (inputs, target) = dataset.get(i);
        let x: Vec<Value> = inputs.iter().map(|&v| Value::new(v)).collect();
        let prediction = mlp.forward(&x).expect("input width matches the network")[0].data();
        let hit = (prediction > 0.0) == (target > 0.0);
        if hit {
            correct += 1;
        }
        println!(
            "  {:?} -> {:6.3} (target {:4.1}) {}",
            inputs,
            prediction,
            target,
            if hit { "ok" } else { "miss" }
        );
    }
    println!("Accuracy: {}/{}", correct, dataset.len());
}
