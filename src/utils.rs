//! Utility algorithms for enumerating subsets and permutations.
//!
//! Everything here works on element *indices* rather than on elements, so that callers only clone
//! the elements that actually end up in an output.

use crate::prelude::*;

/// Panics if `width` elements can't be enumerated with a bit pattern fitting in a `usize`.
pub(crate) fn assert_width(width: usize) {
    assert!(
        width < usize::BITS as usize,
        "cannot enumerate the subsets of a set with {width} elements"
    );
}

/// The number of bit patterns of a given width, i.e. 2^`width`.
///
/// ## Panics
///
/// Panics if `width` is at least `usize::BITS`.
#[must_use]
pub fn patterns(width: usize) -> usize {
    assert_width(width);
    1 << width
}

/// The selection mask for the `index`-th subset of a set with `width` elements.
///
/// Bit `j` of the returned mask says whether element `j` belongs to the subset. The first element
/// corresponds to the most significant bit of `index`, so for a set `{a, b, c}` the indices `0, 1,
/// 2, …` give the subsets `{}, {c}, {b}, {b, c}, {a}, …`.
///
/// ## Panics
///
/// Panics if `width` is at least `usize::BITS`.
#[must_use]
pub fn mask(index: usize, width: usize) -> BitVec {
    assert_width(width);
    let mut mask = index.view_bits::<Lsb0>()[..width].to_bitvec();
    mask.reverse();
    mask
}

/// The binomial coefficient C(n, k), or zero when `k > n`.
///
/// Saturates on overflow.
#[must_use]
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // C(n, k) = C(n, n - k), take the shorter product.
    let k = k.min(n - k);
    let mut res: usize = 1;
    for i in 0..k {
        // Exact at every step: res * (n - i) is divisible by i + 1.
        res = match res.checked_mul(n - i) {
            Some(prod) => prod / (i + 1),
            None => return usize::MAX,
        };
    }
    res
}

/// All orderings of the indices `0..len`, found by depth-first backtracking.
///
/// At each step the smallest unused index is tried first, so the output is in lexicographic order.
/// There is exactly one permutation of zero indices: the empty one.
#[must_use]
pub fn index_permutations(len: usize) -> Vec<SmallVec<usize>> {
    /// Extends `path` in every possible way, pushing each completed path into `out`.
    fn backtrack(
        used: &mut BitSlice,
        path: &mut SmallVec<usize>,
        out: &mut Vec<SmallVec<usize>>,
    ) {
        if path.len() == used.len() {
            out.push(path.clone());
            return;
        }

        for i in 0..used.len() {
            if used[i] {
                continue;
            }

            used.set(i, true);
            path.push(i);
            backtrack(used, path, out);
            path.pop();
            used.set(i, false);
        }
    }

    let mut used = bitvec![0; len];
    let mut path = smallvec![];
    let mut out = Vec::new();
    backtrack(&mut used, &mut path, &mut out);
    out
}
