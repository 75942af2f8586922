//! # Computation graph rendering
//!
//! Builds the walkthrough expression, runs backward so the rendered nodes
//! show their gradients, and prints the Graphviz DOT document to stdout.
//!
//! Run with: `cargo run --example draw_graph | dot -Tsvg -o graph.svg`

use scalargrad_core::viz::to_dot;
use scalargrad_core::Value;

fn main() {
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

    loss.backward();

    print!("{}", to_dot(&loss));
}
