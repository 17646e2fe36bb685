//! Set algebra and the combinatorial constructions on a few small sets.
//!
//! Run with `RUST_LOG=debug` to see the sizes of the enumerations.

use finset::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a = Set::<i32>::empty();
    let b = Set::from([10, 111, 55, 4, 6, 6, 6, 12, 88, 999]);
    let c = Set::from([55, 10, 88, 77, 44]);
    let x = Set::from([a.clone(), c.clone(), b.clone()]);
    let s = Set::from(["cat", "dog", "bird"]);
    let f = Set::from([2.25, 0.5, 12.6]);

    println!("A: {a}\nB: {b}\nX: {x}\nS: {s}\nF: {f}\n");

    println!("B − C: {}", &b - &c);
    println!("B ∪ C: {}", &b | &c);
    println!("B ∩ C: {}\n", &b & &c);

    println!("2-subsets of C: {}", c.n_subsets(2));
    println!("P(C): {}", c.power_set());
    println!("P(S): {}\n", s.power_set());

    println!("Permutations of C:");
    for perm in c.permutations() {
        let line: Vec<_> = perm.iter().map(ToString::to_string).collect();
        println!("{}", line.join(","));
    }
}
