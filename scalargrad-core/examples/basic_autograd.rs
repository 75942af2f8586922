//! # Basic automatic differentiation walkthrough
//!
//! Builds a small expression from scalar nodes, runs the backward pass and
//! prints the partial derivative of the result with respect to every input.
//!
//! Run with: `cargo run --example basic_autograd`

use scalargrad_core::autograd::zero_gradients;
use scalargrad_core::Value;

fn main() {
    // L = (a * b + c) * f
    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");

    let d = &a * &b;
    d.set_label("d");
    let e = &d + &c;
    e.set_label("e");

    let f = Value::with_label(-2.0, "f");
    let loss = &e * &f;
    loss.set_label("L");

    println!("Forward pass result: L = {}", loss.data());

    loss.backward();

    println!("dL/da = {}", a.grad()); // 6.0
    println!("dL/db = {}", b.grad()); // -4.0
    println!("dL/dc = {}", c.grad()); // -2.0
    println!("dL/df = {}", f.grad()); // 4.0

    // Activation functions and their derivatives.
    let x = Value::with_label(0.5, "x");
    let y = x.tanh();
    y.backward();
    println!("tanh({}) = {:.4}, d/dx = {:.4}", x.data(), y.data(), x.grad());

    zero_gradients(&y);
    let z = x.exp();
    z.backward();
    println!("exp({}) = {:.4}, d/dx = {:.4}", x.data(), z.data(), x.grad());

    // Polynomial: f(x) = 3x^2 - 4x + 5, so f'(3) = 14.
    let x = Value::with_label(3.0, "x");
    let poly = &(&(3.0 * &x.pow(2.0)) + &(-4.0 * &x)) + 5.0;
    poly.backward();
    println!("f(3) = {}, f'(3) = {}", poly.data(), x.grad());
}
