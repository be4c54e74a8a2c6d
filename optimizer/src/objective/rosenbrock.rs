//! Rosenbrock valley over adjacent coordinate pairs:
//! f(x) = sum 100 (x_{i+1} - x_i^2)^2 + (1 - x_i)^2.
//!
//! Callers guarantee at least two coordinates.

use descent_common::numeric::floor5;

pub fn value(x: &[f64]) -> f64 {
    let mut sum = 0.0;
    for pair in x.windows(2) {
        let x1 = floor5(pair[0]);
        let x2 = floor5(pair[1]);
        sum += 100.0 * (x2 - x1 * x1).powi(2) + (1.0 - x1).powi(2);
    }
    sum
}

pub fn gradient_into(x: &[f64], grad: &mut [f64]) {
    let d = x.len();
    for i in 0..d {
        grad[i] = if i == 0 {
            let x1 = floor5(x[0]);
            let x2 = floor5(x[1]);
            -400.0 * x1 * (x2 - x1 * x1) - 2.0 * (1.0 - x1)
        } else if i == d - 1 {
            let x1 = floor5(x[i - 1]);
            let x2 = floor5(x[i]);
            200.0 * (x2 - x1 * x1)
        } else {
            let x1 = floor5(x[i - 1]);
            let x2 = floor5(x[i]);
            let x3 = floor5(x[i + 1]);
            200.0 * (x2 - x1 * x1) - 400.0 * x2 * (x3 - x2 * x2) - 2.0 * (1.0 - x2)
        };
    }
}
