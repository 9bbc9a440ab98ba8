//! Builds a single two-input tanh neuron, backpropagates through it and
//! prints the graph in the DOT language.
//!
//! `cargo run -p scalargrad-core --example neuron_dot | dot -Tsvg > neuron.svg`

use scalargrad_core::viz::to_dot;
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.881_373_587_019_543, "b");

    let x1w1 = x1.mul(&w1)?;
    x1w1.set_label("x1*w1");
    let x2w2 = x2.mul(&w2)?;
    x2w2.set_label("x2*w2");
    let n = x1w1.add(&x2w2)?.add(&b)?;
    n.set_label("n");
    let o = n.tanh();
    o.set_label("o");

    o.backward()?;
    log::info!("o = {:.4}, dx1 = {:.4}, dw1 = {:.4}", o.value(), x1.grad(), w1.grad());

    println!("{}", to_dot(&o)?);
    Ok(())
}
