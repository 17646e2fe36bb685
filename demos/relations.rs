//! Classifies a few relations, printing their properties and quotient sets.

use finset::prelude::*;
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

/// A relation on `base` from a list of tuples.
fn relation<T: PartialEq>(base: Set<T>, pairs: Vec<(T, T)>) -> Relation<T> {
    Relation::new(base, pairs.into_iter().map(OrderedPair::from).collect())
}

/// Prints which properties the relation has, and its equivalence classes if any.
fn show<T: Clone + Display + PartialEq>(name: &str, rel: &Relation<T>) {
    println!("{name} = {rel}");
    println!("    properties: {}", rel.properties());

    if rel.is_equivalence() {
        let classes: Vec<_> = rel
            .equivalence_classes()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("    classes: {}", classes.join(" "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = Set::from([1, 2, 3, 4, 5]);

    let identity = relation(base.clone(), (1..=5).map(|x| (x, x)).collect());
    show("R1", &identity);

    let parity = relation(
        base.clone(),
        (1..=5)
            .flat_map(|x| (1..=5).map(move |y| (x, y)))
            .filter(|(x, y)| (x - y) % 2 == 0)
            .collect(),
    );
    show("R2", &parity);

    let less = relation(
        base,
        (1..=5)
            .flat_map(|x| (1..=5).map(move |y| (x, y)))
            .filter(|(x, y)| x < y)
            .collect(),
    );
    show("R3", &less);

    // Same gcd with 6.
    let divisors = relation(
        (1..=5u32).collect(),
        (1..=5u32)
            .flat_map(|x| (1..=5u32).map(move |y| (x, y)))
            .filter(|&(x, y)| gcd::binary_u32(x, 6) == gcd::binary_u32(y, 6))
            .collect(),
    );
    show("R4", &divisors);

    let reals = relation(
        Set::from([0.5, 1.5]),
        vec![(0.5, 0.5), (1.5, 1.5), (0.5, 1.5)],
    );
    show("R5", &reals);
}
