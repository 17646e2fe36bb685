//! Binary relations [`Relation`] over a finite set.

use crate::prelude::*;

/// A binary relation on a base set: a set of ordered pairs ⟨x, y⟩, read as "x is related to y".
///
/// The pairs aren't required to stay within the base set. Properties that quantify over elements,
/// like [reflexivity](Self::is_reflexive), quantify over the base set, while properties that
/// quantify over pairs look at every stored pair. Nothing is cached, so every query reflects the
/// current base set and pairs.
///
/// ```
/// use finset::prelude::*;
///
/// let mut rel = Relation::new(
///     Set::from([1, 2, 3]),
///     Set::from([(1, 1), (1, 3), (3, 1), (3, 3), (2, 2)].map(OrderedPair::from)),
/// );
/// assert!(rel.is_equivalence());
/// assert_eq!(rel.equivalence_classes().to_string(), "{{1,3},{2}}");
///
/// rel.insert(OrderedPair::new(1, 2));
/// assert!(!rel.is_symmetric());
/// ```
#[derive(Clone, Debug)]
pub struct Relation<T> {
    /// The set the relation is declared on.
    base: Set<T>,
    /// The pairs in the relation.
    pairs: Set<OrderedPair<T, T>>,
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self {
            base: Set::empty(),
            pairs: Set::empty(),
        }
    }
}

/// Displays the pairs of a relation, e.g. `{<1,1>,<1,2>}`.
impl<T: Display> Display for Relation<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.pairs)
    }
}

impl<T> Relation<T> {
    /// A relation with the given pairs on a base set.
    pub fn new(base: Set<T>, pairs: Set<OrderedPair<T, T>>) -> Self {
        Self { base, pairs }
    }

    /// The base set.
    pub fn base(&self) -> &Set<T> {
        &self.base
    }

    /// The pairs in the relation.
    pub fn pairs(&self) -> &Set<OrderedPair<T, T>> {
        &self.pairs
    }

    /// Replaces the base set.
    pub fn set_base(&mut self, base: Set<T>) {
        self.base = base;
    }

    /// Replaces the pairs.
    pub fn set_pairs(&mut self, pairs: Set<OrderedPair<T, T>>) {
        self.pairs = pairs;
    }
}

impl<T: PartialEq> Relation<T> {
    /// Adds a pair to the relation. Returns whether it was new.
    pub fn insert(&mut self, pair: OrderedPair<T, T>) -> bool {
        self.pairs.append(pair)
    }

    /// Whether the pair belongs to the relation.
    pub fn contains_pair(&self, pair: &OrderedPair<T, T>) -> bool {
        self.pairs.contains(pair)
    }

    /// Whether x is related to y.
    pub fn relates(&self, x: &T, y: &T) -> bool {
        self.pairs.iter().any(|pair| pair.is(x, y))
    }

    /// Whether ⟨x, x⟩ is in the relation for every x in the base set.
    pub fn is_reflexive(&self) -> bool {
        let res = self.base.iter().all(|x| self.relates(x, x));
        if !res {
            trace!(card = self.base.card(), "relation is not reflexive");
        }
        res
    }

    /// Whether ⟨y, x⟩ is in the relation for every ⟨x, y⟩ in it.
    pub fn is_symmetric(&self) -> bool {
        let res = self
            .pairs
            .iter()
            .all(|pair| self.relates(pair.second(), pair.first()));
        if !res {
            trace!(pairs = self.pairs.card(), "relation is not symmetric");
        }
        res
    }

    /// Whether ⟨x, z⟩ is in the relation whenever ⟨x, y⟩ and ⟨y, z⟩ are.
    ///
    /// Every ordered combination of two pairs is checked, including a pair combined with itself.
    /// The relation on an empty base set is transitive.
    pub fn is_transitive(&self) -> bool {
        if self.base.is_empty() {
            return true;
        }

        for fst in &self.pairs {
            for snd in self.pairs.iter().filter(|snd| snd.first() == fst.second()) {
                if !self.relates(fst.first(), snd.second()) {
                    trace!(pairs = self.pairs.card(), "relation is not transitive");
                    return false;
                }
            }
        }

        true
    }

    /// Whether the relation is reflexive, symmetric and transitive.
    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    /// All three properties at once.
    pub fn properties(&self) -> Properties {
        Properties {
            reflexive: self.is_reflexive(),
            symmetric: self.is_symmetric(),
            transitive: self.is_transitive(),
        }
    }
}

impl<T: Clone + PartialEq> Relation<T> {
    /// The elements x is related to.
    pub fn class_of(&self, x: &T) -> Set<T> {
        self.pairs
            .iter()
            .filter(|pair| pair.first() == x)
            .map(|pair| pair.second().clone())
            .collect()
    }

    /// The quotient set: the equivalence class of every element of the base set.
    ///
    /// Classes are listed in the order their first element appears in the base set. If the
    /// relation is not an [equivalence](Self::is_equivalence), the result is empty.
    pub fn equivalence_classes(&self) -> Set<Set<T>> {
        if !self.is_equivalence() {
            return Set::empty();
        }

        let classes: Set<Set<T>> = self.base.iter().map(|x| self.class_of(x)).collect();
        debug!(
            card = self.base.card(),
            classes = classes.card(),
            "computed equivalence classes"
        );
        classes
    }
}

/// Which of the properties of an equivalence a [`Relation`] has.
///
/// Displays as the space-separated names of the properties that hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Properties {
    /// See [`Relation::is_reflexive`].
    pub reflexive: bool,
    /// See [`Relation::is_symmetric`].
    pub symmetric: bool,
    /// See [`Relation::is_transitive`].
    pub transitive: bool,
}

impl Properties {
    /// Whether all three properties hold.
    pub const fn is_equivalence(self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }
}

impl Display for Properties {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let names = [
            (self.reflexive, "reflexive"),
            (self.symmetric, "symmetric"),
            (self.transitive, "transitive"),
        ];

        let mut fst = true;
        for (_, name) in names.into_iter().filter(|(holds, _)| *holds) {
            if !fst {
                f.write_char(' ')?;
            }
            fst = false;
            f.write_str(name)?;
        }
        Ok(())
    }
}
