//! Finite sets [`Set`].

use crate::{prelude::*, utils};
use std::ops::{BitAnd, BitOr, Sub};

/// A finite set over any type with equality.
///
/// Elements are stored in insertion order, which is also the order used for iteration and
/// display. Only [`PartialEq`] is required of the elements: membership is a linear scan, so
/// neither hashing nor ordering is needed, and sets of sets compare by value at any depth.
///
/// ## Invariants
///
/// No two elements of a [`Set`] compare equal. Every way of building or growing a set goes
/// through a membership check, except for crate-internal code that already knows its elements
/// are distinct.
///
/// ```
/// use finset::prelude::*;
///
/// let a = Set::from([3, 1, 2]);
/// let b = Set::from([1, 2, 3, 3]);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "{3,1,2}");
/// ```
#[derive(Clone)]
pub struct Set<T>(Vec<T>);

// -------------------- Basic traits -------------------- //

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> AsRef<[T]> for Set<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Set<T>> for Vec<T> {
    fn from(set: Set<T>) -> Self {
        set.0
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for el in iter {
            self.append(el);
        }
    }
}

impl<T: PartialEq> From<Vec<T>> for Set<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Set<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

/// Writes a set as a set literal of its elements.
impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Displays a set in roster notation `{a,b,c}`, in insertion order.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for el in iter {
                write!(f, ",{el}")?;
            }
        }
        f.write_char('}')
    }
}

// -------------------- Equality and inclusion -------------------- //

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        // Elements are distinct, so one inclusion between sets of equal size is enough.
        self.card() == other.card() && self.subset(other)
    }
}

impl<T: Eq> Eq for Set<T> {}

/// Sets are partially ordered by inclusion.
impl<T: PartialEq> PartialOrd for Set<T> {
    fn le(&self, other: &Self) -> bool {
        self.subset(other)
    }

    fn ge(&self, other: &Self) -> bool {
        other.subset(self)
    }

    fn lt(&self, other: &Self) -> bool {
        self.ssubset(other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.ssubset(self)
    }

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let cmp = self.card().cmp(&other.card());
        let test = match cmp {
            Ordering::Equal => self.eq(other),
            Ordering::Less => self.le(other),
            Ordering::Greater => self.ge(other),
        };

        if test {
            Some(cmp)
        } else {
            None
        }
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Set<T> {
    /// The empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// An empty set with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// The set as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Set cardinality.
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements of the set, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.0.iter()
    }

    /// Adds an element without checking whether it's already in the set.
    ///
    /// The caller must guarantee that `el` is not in the set. Doing otherwise breaks the type
    /// invariant for [`Set`].
    pub(crate) fn push_distinct(&mut self, el: T)
    where
        T: PartialEq,
    {
        debug_assert!(!self.contains(&el), "element already in set");
        self.0.push(el);
    }
}

impl<T: PartialEq> Set<T> {
    /// Membership ∈.
    pub fn contains(&self, el: &T) -> bool {
        self.0.contains(el)
    }

    /// In-place set insertion x ∪ {y}.
    ///
    /// Returns whether the element was added. Inserting an element that's already present does
    /// nothing.
    pub fn append(&mut self, el: T) -> bool {
        if self.contains(&el) {
            false
        } else {
            self.0.push(el);
            true
        }
    }

    /// Set insertion x ∪ {y}.
    #[must_use]
    pub fn insert(mut self, el: T) -> Self {
        self.append(el);
        self
    }

    /// Subset relation ⊆.
    pub fn subset(&self, other: &Self) -> bool {
        self.card() <= other.card() && self.iter().all(|el| other.contains(el))
    }

    /// Strict subset relation ⊂.
    pub fn ssubset(&self, other: &Self) -> bool {
        self.card() < other.card() && self.subset(other)
    }
}

// -------------------- Constructions -------------------- //

impl<T: Clone + PartialEq> Set<T> {
    /// The subset picked out by a selection mask, where bit `j` stands for element `j`.
    fn select(&self, mask: &BitSlice) -> Self {
        let mut subset = Self::with_capacity(mask.count_ones());
        for j in mask.iter_ones() {
            subset.push_distinct(self.0[j].clone());
        }
        subset
    }

    /// Set difference x − y.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut set = Self::empty();
        for el in self.iter().filter(|el| !other.contains(el)) {
            set.push_distinct(el.clone());
        }
        set
    }

    /// Set union x ∪ y.
    ///
    /// The elements of `self` come first, followed by the new elements of `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut set = self.clone();
        set.extend(other.iter().cloned());
        set
    }

    /// Set intersection x ∩ y.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut set = Self::empty();
        for el in self.iter().filter(|el| other.contains(el)) {
            set.push_distinct(el.clone());
        }
        set
    }

    /// Powerset P(x).
    ///
    /// Subsets are listed by counting through the bit patterns `0 .. 2^n`, the first element being
    /// the most significant bit. The first subset is Ø and the last is the set itself.
    ///
    /// ```
    /// use finset::prelude::*;
    ///
    /// let set = Set::from(['a', 'b']);
    /// assert_eq!(set.power_set().to_string(), "{{},{b},{a},{a,b}}");
    /// ```
    ///
    /// ## Panics
    ///
    /// Panics if the set has `usize::BITS` or more elements.
    #[must_use]
    pub fn power_set(&self) -> Set<Self> {
        let card = self.card();
        let count = utils::patterns(card);
        debug!(card, subsets = count, "enumerating power set");

        let mut power_set = Set::with_capacity(count);
        // Distinct patterns select distinct subsets.
        for i in 0..count {
            power_set.push_distinct(self.select(&utils::mask(i, card)));
        }
        power_set
    }

    /// The subsets with exactly `n` elements, in the order they appear in the
    /// [power set](Self::power_set).
    ///
    /// A negative `n`, or one larger than the cardinality, gives the empty set.
    ///
    /// ```
    /// use finset::prelude::*;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// assert_eq!(set.n_subsets(2).to_string(), "{{2,3},{1,3},{1,2}}");
    /// assert!(set.n_subsets(-1).is_empty());
    /// assert!(set.n_subsets(4).is_empty());
    /// ```
    ///
    /// ## Panics
    ///
    /// Panics if the set has `usize::BITS` or more elements and `n` is in range.
    #[must_use]
    pub fn n_subsets<N: TryInto<usize>>(&self, n: N) -> Set<Self> {
        let card = self.card();
        let Some(n) = n.try_into().ok().filter(|&n| n <= card) else {
            trace!(card, "subset size out of range");
            return Set::empty();
        };

        let expected = utils::binomial(card, n);
        debug!(card, n, subsets = expected, "enumerating n-element subsets");

        let mut subsets = Set::with_capacity(expected);
        for i in 0..utils::patterns(card) {
            let mask = utils::mask(i, card);
            if mask.count_ones() == n {
                subsets.push_distinct(self.select(&mask));
            }
        }
        subsets
    }

    /// All orderings of the elements of the set.
    ///
    /// Permutations are found by depth-first backtracking, always trying the earliest unused
    /// element first. The empty set has a single, empty permutation.
    ///
    /// ```
    /// use finset::prelude::*;
    ///
    /// let set = Set::from(['x', 'y', 'z']);
    /// let perms = set.permutations();
    /// assert_eq!(perms.len(), 6);
    /// assert_eq!(perms[1], ['x', 'z', 'y']);
    /// ```
    #[must_use]
    pub fn permutations(&self) -> Vec<Vec<T>> {
        let perms: Vec<Vec<T>> = utils::index_permutations(self.card())
            .into_iter()
            .map(|path| path.into_iter().map(|i| self.0[i].clone()).collect())
            .collect();

        debug!(
            card = self.card(),
            permutations = perms.len(),
            "enumerated permutations"
        );
        perms
    }
}

// -------------------- Operators -------------------- //

/// Set union x ∪ y.
impl<T: Clone + PartialEq> BitOr for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: Self) -> Set<T> {
        self.union(rhs)
    }
}

/// Set intersection x ∩ y.
impl<T: Clone + PartialEq> BitAnd for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: Self) -> Set<T> {
        self.intersection(rhs)
    }
}

/// Set difference x − y.
impl<T: Clone + PartialEq> Sub for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: Self) -> Set<T> {
        self.difference(rhs)
    }
}
