//! Root Classification Examples
//!
//! Walks through every branch of quadratic root classification, including
//! the degenerate linear and zero-polynomial forms.
//!
//! Run with: cargo run --example roots

use quadex::prelude::*;

// Helper to create expressions
fn q(a: f64, b: f64, c: f64) -> QuadraticExpression {
    QuadraticExpression::new(a, b, c)
}

fn describe(e: &QuadraticExpression) {
    println!("  expression: {e}");
    println!("  discriminant: {:?}", e.discriminant());
    println!("  number of roots: {}", e.number_of_roots());

    match e.roots() {
        Ok(Roots::Two { smaller, larger }) => println!("  roots: {smaller:?}, {larger:?}"),
        Ok(Roots::One(x)) => println!("  root: {x:?}"),
        Ok(Roots::Unbounded) => println!(
            "  every real is a root (legacy bounds {:?} .. {:?})",
            UNBOUNDED_LOWER, UNBOUNDED_UPPER
        ),
        Err(err) => println!("  {err}"),
    }
    println!();
}

fn main() {
    println!("=== Quadex: root classification ===\n");

    println!("Two distinct roots:");
    describe(&q(1.0, -3.0, 2.0));

    println!("Double root:");
    describe(&q(1.0, -2.0, 1.0));

    println!("Complex conjugate roots:");
    describe(&q(1.0, 0.0, 1.0));

    println!("Linear expression (single root divides by 2a = 0):");
    describe(&q(0.0, 2.0, 4.0));

    println!("Nonzero constant:");
    describe(&q(0.0, 0.0, 5.0));

    println!("Zero polynomial:");
    describe(&QuadraticExpression::default());

    println!("=== Arithmetic ===\n");
    let p = q(1.0, 0.0, -4.0);
    let r = q(0.0, 1.0, 1.0);
    let s = QuadraticExpression::sum(&p, &r);
    let scaled = QuadraticExpression::scale(2.0, &p);
    println!("  ({p}) + ({r}) = {s}");
    println!("  2 * ({p}) = {scaled}");

    let mut acc = p;
    acc.add(&r);
    println!("  accumulated in place: {acc}");
    println!("  value at x = 3: {:?}", acc.evaluate(3.0));
}
