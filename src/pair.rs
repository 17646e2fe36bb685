//! Ordered pairs [`OrderedPair`].

use derive_more::{Display, From, Into};

/// An ordered pair ⟨x, y⟩.
///
/// Two pairs are equal exactly when their first components are equal and their second components
/// are equal. Pairs are the atoms of a [`Relation`](crate::relation::Relation) and of the graph of
/// a [`Function`](crate::function::Function).
///
/// Pairs convert to and from tuples:
///
/// ```
/// use finset::prelude::*;
///
/// let pair = OrderedPair::from((1, "a"));
/// assert_eq!(pair.to_string(), "<1,a>");
/// assert_eq!(<(i32, &str)>::from(pair), (1, "a"));
/// ```
#[derive(Clone, Copy, Debug, Default, Display, From, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "<{},{}>", first, second)]
pub struct OrderedPair<A, B> {
    /// First component.
    first: A,
    /// Second component.
    second: B,
}

impl<A, B> OrderedPair<A, B> {
    /// Builds the pair ⟨x, y⟩.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The first component.
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// The second component.
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Whether this pair is ⟨x, y⟩.
    pub fn is(&self, x: &A, y: &B) -> bool
    where
        A: PartialEq,
        B: PartialEq,
    {
        &self.first == x && &self.second == y
    }

    /// The pair ⟨y, x⟩.
    #[must_use]
    pub fn swap(self) -> OrderedPair<B, A> {
        OrderedPair::new(self.second, self.first)
    }
}

impl<T> OrderedPair<T, T> {
    /// The pair ⟨x, x⟩.
    pub fn diagonal(x: T) -> Self
    where
        T: Clone,
    {
        Self::new(x.clone(), x)
    }

    /// Whether both components are equal.
    pub fn is_diagonal(&self) -> bool
    where
        T: PartialEq,
    {
        self.first == self.second
    }
}

/// Tests for [`OrderedPair`].
#[cfg(test)]
mod pair {
    use super::*;

    /// Component order matters for equality.
    #[test]
    fn order() {
        let a = OrderedPair::new(1, 2);
        assert_ne!(a, OrderedPair::new(2, 1));
        assert_eq!(a.swap(), OrderedPair::new(2, 1));
        assert!(a.is(&1, &2));
        assert!(!a.is(&2, &1));
    }

    /// Test [`OrderedPair::diagonal`].
    #[test]
    fn diagonal() {
        assert!(OrderedPair::diagonal('x').is_diagonal());
        assert!(!OrderedPair::new('x', 'y').is_diagonal());
    }

    /// Pairs render in angle brackets, as relations are written.
    #[test]
    fn display() {
        assert_eq!(OrderedPair::new(3, "cat").to_string(), "<3,cat>");
        assert_eq!(OrderedPair::new(1.5, -2).to_string(), "<1.5,-2>");
    }

    /// Test the tuple conversions.
    #[test]
    fn tuples() {
        let pair: OrderedPair<_, _> = ('a', 2).into();
        assert_eq!(pair.first(), &'a');
        assert_eq!(pair.second(), &2);
        let (x, y): (char, i32) = pair.into();
        assert_eq!((x, y), ('a', 2));
    }
}
