//! # Finite sets, relations and functions
//!
//! - [`Set`] is a deduplicated collection over any type with equality, with the usual set algebra
//!   and the combinatorial derivations: [power set](Set::power_set),
//!   [n-element subsets](Set::n_subsets) and [permutations](Set::permutations).
//! - [`Relation`] classifies a set of [ordered pairs](OrderedPair) over a base set as reflexive,
//!   symmetric or transitive, and computes the quotient of an equivalence relation.
//! - [`Function`] classifies a graph between a domain and a codomain as a function, and as
//!   injective, surjective or bijective. A graph that passes validation can be frozen into a
//!   [`Mapping`].
//!
//! ```
//! use finset::prelude::*;
//!
//! let set = Set::from([1, 2, 2, 3]);
//! assert_eq!(set.to_string(), "{1,2,3}");
//! assert_eq!(set.power_set().card(), 8);
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod function;
pub mod pair;
pub mod prelude;
pub mod relation;
pub mod set;
pub mod utils;

mod tests;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// [`smallvec::smallvec`] coerced into [`SmallVec`].
#[macro_export]
macro_rules! smallvec {
    ($elem: expr; $n: expr) => (
        SmallVec::from_elem($elem, $n)
    );
    ($($x: expr), *$(,)*) => ({
        let vec: SmallVec<_> = smallvec::smallvec![$($x,)*];
        vec
    });
}
