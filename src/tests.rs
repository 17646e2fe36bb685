//! General library tests.

#![cfg(test)]

use crate::{prelude::*, utils};
use concat_idents::concat_idents;
use proptest::prelude::*;

/// String slices, named so that the test macro can refer to them.
type Str = &'static str;

/// Creates analogous tests for every element type.
macro_rules! test {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = int, $name {
                #[test]
                fn fn_name() {
                    <i32 as Suite>::$name();
                }
            });

            concat_idents!(fn_name = char, $name {
                #[test]
                fn fn_name() {
                    <char as Suite>::$name();
                }
            });

            concat_idents!(fn_name = str, $name {
                #[test]
                fn fn_name() {
                    <Str as Suite>::$name();
                }
            });
        )*
    };
}

/// n!
fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// Checks shared by every element type, run on a family of sets built from sample elements.
trait Suite: Clone + Debug + Display + PartialEq + 'static {
    /// Distinct sample elements.
    const ELEMENTS: &'static [Self];

    /// The set of the first `k` sample elements.
    fn prefix(k: usize) -> Set<Self> {
        Self::ELEMENTS[..k].iter().cloned().collect()
    }

    /// A multitude of sets for general-purpose testing: every prefix of the sample elements, and a
    /// couple of sets in a different order.
    fn suite() -> Vec<Set<Self>> {
        let mut sets: Vec<_> = (0..=Self::ELEMENTS.len()).map(Self::prefix).collect();
        sets.push(Self::ELEMENTS.iter().rev().step_by(2).cloned().collect());
        sets.push(Self::ELEMENTS.iter().skip(1).cloned().collect());
        sets
    }

    /// Test that our sample elements are distinct.
    fn _elements() {
        let set = Self::prefix(Self::ELEMENTS.len());
        assert_eq!(set.card(), Self::ELEMENTS.len(), "sample elements must be distinct");
    }

    /// Test that construction deduplicates.
    fn _dedup() {
        let set: Set<Self> = Self::ELEMENTS
            .iter()
            .chain(Self::ELEMENTS.iter().rev())
            .cloned()
            .collect();

        assert_eq!(set.card(), Self::ELEMENTS.len());
        assert_eq!(set.as_slice(), Self::ELEMENTS);
    }

    /// Test [`Set::eq`].
    fn _eq() {
        for (i, set_1) in Self::suite().iter().enumerate() {
            let rev: Set<Self> = set_1.iter().rev().cloned().collect();
            assert_eq!(set_1, &rev, "set equality fail at {i}: {set_1} | {rev}");

            // The sets in the suite are all distinct.
            for (j, set_2) in Self::suite().iter().enumerate() {
                assert_eq!(
                    i == j,
                    set_1 == set_2,
                    "set equality fail at {i}, {j}: {set_1} | {set_2}"
                );
            }
        }
    }

    /// Test [`Set::union`].
    fn _union() {
        for (i, set_1) in Self::suite().iter().enumerate() {
            assert_eq!(&(set_1 | &Set::empty()), set_1);

            for (j, set_2) in Self::suite().iter().enumerate() {
                let union = set_1 | set_2;
                for set in [set_1, set_2] {
                    assert!(
                        set.subset(&union),
                        "union fail at {i}, {j}: {set} not a subset of {union}"
                    );
                }

                let inter = set_1 & set_2;
                assert_eq!(union.card() + inter.card(), set_1.card() + set_2.card());
            }
        }
    }

    /// Test [`Set::intersection`].
    fn _inter() {
        for (i, set_1) in Self::suite().iter().enumerate() {
            assert_eq!(&(set_1 & set_1), set_1);

            for (j, set_2) in Self::suite().iter().enumerate() {
                let inter = set_1 & set_2;
                for set in [set_1, set_2] {
                    assert!(
                        inter.subset(set),
                        "intersection fail at {i}, {j}: {inter} not a subset of {set}"
                    );
                }
            }
        }
    }

    /// Test [`Set::difference`].
    fn _difference() {
        for set_1 in Self::suite() {
            assert!((&set_1 - &set_1).is_empty());

            for set_2 in Self::suite() {
                let diff = &set_1 - &set_2;
                assert!((&diff & &set_2).is_empty());
                assert_eq!(&diff | &(&set_1 & &set_2), set_1);
            }
        }
    }

    /// Test [`Set::power_set`].
    fn _power_set() {
        for set in Self::suite() {
            let power_set = set.power_set();
            assert_eq!(power_set.card(), 1usize << set.card(), "power set of {set}");
            assert!(power_set.contains(&Set::empty()));
            assert!(power_set.contains(&set));
            assert!(power_set.iter().all(|subset| subset.subset(&set)));
        }
    }

    /// Test [`Set::n_subsets`].
    fn _n_subsets() {
        for set in Self::suite() {
            let card = set.card();
            let mut total = 0;
            for n in 0..=card {
                let subsets = set.n_subsets(n);
                assert_eq!(subsets.card(), utils::binomial(card, n), "{n}-subsets of {set}");
                assert!(subsets.iter().all(|subset| subset.card() == n));
                total += subsets.card();
            }

            assert_eq!(total, 1usize << card);
            assert!(set.n_subsets(card + 1).is_empty());
            assert!(set.n_subsets(-1).is_empty());
        }
    }

    /// Test [`Set::permutations`].
    fn _permutations() {
        for set in Self::suite() {
            let perms = set.permutations();
            assert_eq!(perms.len(), factorial(set.card()), "permutations of {set}");

            for perm in &perms {
                assert_eq!(perm.len(), set.card());
                assert_eq!(perm.iter().cloned().collect::<Set<_>>(), set);
            }

            let distinct: Set<_> = perms.into_iter().collect();
            assert_eq!(distinct.card(), factorial(set.card()));
        }
    }

    /// The identity relation is an equivalence with singleton classes, the full relation is an
    /// equivalence with a single class.
    fn _relation() {
        for set in Self::suite() {
            let identity: Set<_> = set.iter().cloned().map(OrderedPair::diagonal).collect();
            let rel = Relation::new(set.clone(), identity);
            assert!(rel.is_equivalence(), "identity on {set}");
            assert_eq!(rel.equivalence_classes().card(), set.card());

            let mut full = Relation::new(set.clone(), Set::empty());
            for x in &set {
                for y in &set {
                    full.insert(OrderedPair::new(x.clone(), y.clone()));
                }
            }
            assert!(full.is_equivalence(), "full relation on {set}");
            assert_eq!(
                full.equivalence_classes().card(),
                usize::from(!set.is_empty())
            );
        }
    }

    /// The identity function is a bijection, a constant function is a surjection onto a point.
    fn _function() {
        for set in Self::suite() {
            let identity: Set<_> = set.iter().cloned().map(OrderedPair::diagonal).collect();
            let f = Function::new(set.clone(), set.clone(), identity);
            assert!(f.is_bijective(), "identity on {set}");

            let point = Self::ELEMENTS[0].clone();
            let graph = set
                .iter()
                .map(|x| OrderedPair::new(x.clone(), point.clone()))
                .collect();
            let f = Function::new(set.clone(), Set::from([point]), graph);
            assert!(f.is_function());
            assert_eq!(f.is_surjective(), !set.is_empty());
            assert_eq!(f.is_injective(), set.card() <= 1);
        }
    }
}

impl Suite for i32 {
    const ELEMENTS: &'static [Self] = &[10, 111, 55, -4, 6];
}

impl Suite for char {
    const ELEMENTS: &'static [Self] = &['a', 'z', 'é', '0'];
}

impl Suite for Str {
    const ELEMENTS: &'static [Self] = &["cat", "dog", "bird", "fish", ""];
}

test!(
    _elements,
    _dedup,
    _eq,
    _union,
    _inter,
    _difference,
    _power_set,
    _n_subsets,
    _permutations,
    _relation,
    _function
);

/// Equivalence modulo an arithmetic invariant: x ~ y when gcd(x, 12) = gcd(y, 12).
#[test]
fn gcd_classes() {
    let base: Set<u32> = (1..=12).collect();
    let mut rel = Relation::new(base.clone(), Set::empty());
    for &x in &base {
        for &y in &base {
            if gcd::binary_u32(x, 12) == gcd::binary_u32(y, 12) {
                rel.insert(OrderedPair::new(x, y));
            }
        }
    }

    assert!(rel.is_equivalence());
    let classes = rel.equivalence_classes();

    // One class per divisor of 12.
    assert_eq!(classes.card(), 6);
    assert!(classes.contains(&Set::from([1, 5, 7, 11])));
    assert!(classes.contains(&Set::from([12])));
}

/// Property tests for the laws of set algebra and the counting identities.
mod properties {
    use super::*;

    /// Small sets of small numbers, so that collisions are common.
    fn small_set(max_len: usize) -> impl Strategy<Value = Set<u8>> {
        prop::collection::vec(0u8..12, 0..=max_len).prop_map(Set::from)
    }

    /// A base set `0..n` and a relation on it.
    fn relation() -> impl Strategy<Value = Relation<u8>> {
        (1u8..5).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n), 0..20).prop_map(move |pairs| {
                Relation::new(
                    (0..n).collect(),
                    pairs.into_iter().map(OrderedPair::from).collect(),
                )
            })
        })
    }

    proptest! {
        #[test]
        fn union_contains_both(a in small_set(8), b in small_set(8)) {
            let union = &a | &b;
            prop_assert!(a.subset(&union));
            prop_assert!(b.subset(&union));
            prop_assert_eq!(&union, &(&b | &a));
        }

        #[test]
        fn self_operations(a in small_set(8)) {
            prop_assert!((&a - &a).is_empty());
            prop_assert_eq!(&(&a & &a), &a);
            prop_assert_eq!(&(&a | &Set::empty()), &a);
        }

        #[test]
        fn power_set_card(a in small_set(7)) {
            prop_assert_eq!(a.power_set().card(), 1usize << a.card());
        }

        #[test]
        fn n_subsets_card(a in small_set(7), n in -2i32..10) {
            let expected = usize::try_from(n).map_or(0, |n| utils::binomial(a.card(), n));
            prop_assert_eq!(a.n_subsets(n).card(), expected);
        }

        #[test]
        fn permutations_card(a in small_set(5)) {
            let perms = a.permutations();
            prop_assert_eq!(perms.len(), factorial(a.card()));
            for perm in perms {
                prop_assert_eq!(perm.into_iter().collect::<Set<_>>(), a.clone());
            }
        }

        #[test]
        fn transitivity(rel in relation()) {
            let base = rel.base();
            let mut expected = true;
            for x in base {
                for y in base {
                    for z in base {
                        if rel.relates(x, y) && rel.relates(y, z) && !rel.relates(x, z) {
                            expected = false;
                        }
                    }
                }
            }
            prop_assert_eq!(rel.is_transitive(), expected);

            // Reversing the pairs can't change the answer.
            let reversed: Set<_> = rel.pairs().iter().rev().cloned().collect();
            let rev = Relation::new(base.clone(), reversed);
            prop_assert_eq!(rev.is_transitive(), expected);
        }

        #[test]
        fn classes_partition(rel in relation()) {
            let classes = rel.equivalence_classes();
            if rel.is_equivalence() {
                // Every element lies in exactly one class.
                for x in rel.base() {
                    prop_assert_eq!(classes.iter().filter(|class| class.contains(x)).count(), 1);
                }
            } else {
                prop_assert!(classes.is_empty());
            }
        }
    }
}
