//! Classifies a few candidate functions from real numbers to words.

use finset::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prints the classification of a candidate function, or why it isn't one.
fn show(name: &str, function: Function<f64, &str>) {
    print!("{name}: ");
    match Mapping::try_from(function) {
        Ok(map) => {
            println!("{}, image {}", map.classify(), map.image());
        }
        Err(err) => println!("not a function: {err}"),
    }
}

/// A graph from a list of tuples.
fn graph(pairs: &[(f64, &'static str)]) -> Set<OrderedPair<f64, &'static str>> {
    pairs.iter().copied().map(OrderedPair::from).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let domain = Set::from([1.0, 2.0, 2.5]);
    let codomain = Set::from(["bird", "cat", "fish", "dog"]);
    let f = Function::new(
        domain.clone(),
        codomain.clone(),
        graph(&[(1.0, "bird"), (2.0, "fish"), (2.5, "fish")]),
    );
    show("f", f);

    let g = Function::new(
        domain.clone(),
        codomain.clone(),
        graph(&[(1.0, "bird"), (2.0, "cat"), (2.5, "dog")]),
    );
    show("g", g);

    let mut h = Function::new(
        domain.clone(),
        Set::from(["bird", "cat"]),
        graph(&[(1.0, "bird"), (2.0, "cat"), (2.5, "cat")]),
    );
    println!("h: {}", h.classify());
    h.set_codomain(Set::from(["bird", "cat", "dog"]));
    println!("h with a larger codomain: {}", h.classify());

    let k = Function::new(
        domain,
        codomain,
        graph(&[(1.0, "bird"), (1.0, "cat"), (2.5, "dog")]),
    );
    show("k", k);
}
