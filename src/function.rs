//! Functions [`Function`] between finite sets, and validated [`Mapping`]s.
//!
//! A [`Function`] is a candidate: a domain, a codomain and a graph of pairs between them, any of
//! which can be replaced at any time. Every query is recomputed from the current triple. Once a
//! candidate is known to be a function, it can be frozen into a [`Mapping`], whose queries no
//! longer need to check validity first.

use crate::prelude::*;
use derive_more::Display;
use thiserror::Error;

// -------------------- Graph queries -------------------- //

/// The number of pairs ⟨x, y⟩ in the graph for a given x.
fn images<K: PartialEq, V>(graph: &Set<OrderedPair<K, V>>, x: &K) -> usize {
    graph.iter().filter(|pair| pair.first() == x).count()
}

/// The number of pairs ⟨x, y⟩ in the graph for a given y.
fn preimages<K, V: PartialEq>(graph: &Set<OrderedPair<K, V>>, y: &V) -> usize {
    graph.iter().filter(|pair| pair.second() == y).count()
}

/// Whether no element of the codomain is hit twice.
fn injective<K, V: PartialEq>(codomain: &Set<V>, graph: &Set<OrderedPair<K, V>>) -> bool {
    let res = codomain.iter().all(|y| preimages(graph, y) <= 1);
    if !res {
        trace!(card = codomain.card(), "function is not injective");
    }
    res
}

/// Whether every element of the codomain is hit.
fn surjective<K, V: PartialEq>(codomain: &Set<V>, graph: &Set<OrderedPair<K, V>>) -> bool {
    let res = codomain.iter().all(|y| preimages(graph, y) != 0);
    if !res {
        trace!(card = codomain.card(), "function is not surjective");
    }
    res
}

// -------------------- Errors and reports -------------------- //

/// The reason a [`Function`] fails to be a function, naming the first offending domain element.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FunctionError<K> {
    /// No pair in the graph starts with this element.
    #[error("{0} has no image")]
    MissingImage(K),

    /// More than one pair in the graph starts with this element.
    #[error("{element} has {images} images")]
    MultiValued {
        /// The domain element.
        element: K,
        /// How many pairs start with it.
        images: usize,
    },
}

/// The strongest description of a [`Function`].
///
/// Injectivity and surjectivity are independent, so when both hold the function is reported as
/// [`Bijective`](Self::Bijective), and otherwise as whichever of the two holds.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Injective and surjective.
    #[display(fmt = "bijective")]
    Bijective,
    /// Injective but not surjective.
    #[display(fmt = "injective")]
    Injective,
    /// Surjective but not injective.
    #[display(fmt = "surjective")]
    Surjective,
    /// A function which is neither injective nor surjective.
    #[display(fmt = "function")]
    Neither,
    /// Not a function at all.
    #[display(fmt = "not a function")]
    NotAFunction,
}

impl Classification {
    /// Classifies a valid function from whether it's injective and surjective.
    pub const fn new(injective: bool, surjective: bool) -> Self {
        match (injective, surjective) {
            (true, true) => Self::Bijective,
            (true, false) => Self::Injective,
            (false, true) => Self::Surjective,
            (false, false) => Self::Neither,
        }
    }

    /// Whether this describes a function.
    pub const fn is_function(self) -> bool {
        !matches!(self, Self::NotAFunction)
    }
}

// -------------------- Function -------------------- //

/// A candidate function: a domain, a codomain and a graph of pairs ⟨x, y⟩.
///
/// It's a function when every element of the domain is the first component of exactly one pair.
/// Pairs starting outside the domain are ignored. The codomain only needs to contain the image; it
/// matters for injectivity and surjectivity.
///
/// ```
/// use finset::prelude::*;
///
/// let f = Function::new(
///     Set::from([1, 2]),
///     Set::from(["a", "b", "c"]),
///     Set::from([(1, "a"), (2, "b")].map(OrderedPair::from)),
/// );
/// assert!(f.is_function());
/// assert!(f.is_injective());
/// assert!(!f.is_surjective());
/// assert_eq!(f.classify(), Classification::Injective);
/// ```
#[derive(Clone, Debug)]
pub struct Function<K, V> {
    /// The domain.
    domain: Set<K>,
    /// A superset of the image.
    codomain: Set<V>,
    /// The pairs ⟨x, f(x)⟩.
    graph: Set<OrderedPair<K, V>>,
}

impl<K, V> Default for Function<K, V> {
    fn default() -> Self {
        Self {
            domain: Set::empty(),
            codomain: Set::empty(),
            graph: Set::empty(),
        }
    }
}

impl<K, V> Function<K, V> {
    /// A candidate function from its parts.
    pub fn new(domain: Set<K>, codomain: Set<V>, graph: Set<OrderedPair<K, V>>) -> Self {
        Self {
            domain,
            codomain,
            graph,
        }
    }

    /// The domain.
    pub fn domain(&self) -> &Set<K> {
        &self.domain
    }

    /// The codomain.
    pub fn codomain(&self) -> &Set<V> {
        &self.codomain
    }

    /// The graph.
    pub fn graph(&self) -> &Set<OrderedPair<K, V>> {
        &self.graph
    }

    /// Replaces the domain.
    pub fn set_domain(&mut self, domain: Set<K>) {
        self.domain = domain;
    }

    /// Replaces the codomain.
    pub fn set_codomain(&mut self, codomain: Set<V>) {
        self.codomain = codomain;
    }

    /// Replaces the graph.
    pub fn set_graph(&mut self, graph: Set<OrderedPair<K, V>>) {
        self.graph = graph;
    }
}

impl<K: PartialEq, V: PartialEq> Function<K, V> {
    /// The first domain element without exactly one image, with its number of images.
    fn violation(&self) -> Option<(&K, usize)> {
        let res = self
            .domain
            .iter()
            .map(|x| (x, images(&self.graph, x)))
            .find(|&(_, n)| n != 1);

        if let Some((_, images)) = res {
            trace!(images, "domain element is not mapped exactly once");
        }
        res
    }

    /// Whether every element of the domain has exactly one image.
    pub fn is_function(&self) -> bool {
        self.violation().is_none()
    }

    /// Whether this is a function and no element of the codomain is hit twice.
    pub fn is_injective(&self) -> bool {
        self.is_function() && injective(&self.codomain, &self.graph)
    }

    /// Whether this is a function and every element of the codomain is hit.
    pub fn is_surjective(&self) -> bool {
        self.is_function() && surjective(&self.codomain, &self.graph)
    }

    /// Whether this is an injective and surjective function.
    pub fn is_bijective(&self) -> bool {
        self.is_function()
            && injective(&self.codomain, &self.graph)
            && surjective(&self.codomain, &self.graph)
    }

    /// The strongest description that applies.
    pub fn classify(&self) -> Classification {
        if self.is_function() {
            Classification::new(
                injective(&self.codomain, &self.graph),
                surjective(&self.codomain, &self.graph),
            )
        } else {
            Classification::NotAFunction
        }
    }

    /// Checks that this is a function, naming the first domain element that fails.
    ///
    /// ## Errors
    ///
    /// Returns [`FunctionError::MissingImage`] or [`FunctionError::MultiValued`] for the first
    /// domain element without exactly one image.
    pub fn check(&self) -> Result<(), FunctionError<K>>
    where
        K: Clone,
    {
        match self.violation() {
            None => Ok(()),
            Some((x, 0)) => Err(FunctionError::MissingImage(x.clone())),
            Some((x, images)) => Err(FunctionError::MultiValued {
                element: x.clone(),
                images,
            }),
        }
    }
}

// -------------------- Mapping -------------------- //

/// A [`Function`] that has been checked to be a function, and can no longer be modified.
///
/// ```
/// use finset::prelude::*;
///
/// let f = Function::new(
///     Set::from([1, 2]),
///     Set::from(["a"]),
///     Set::from([(1, "a"), (2, "a")].map(OrderedPair::from)),
/// );
/// let map = Mapping::try_from(f).unwrap();
/// assert_eq!(map.apply(&2), Some(&"a"));
/// assert!(map.is_surjective());
/// assert!(!map.is_injective());
/// ```
#[derive(Clone, Debug)]
pub struct Mapping<K, V>(Function<K, V>);

impl<K: Clone + PartialEq, V: PartialEq> TryFrom<Function<K, V>> for Mapping<K, V> {
    type Error = FunctionError<K>;

    fn try_from(function: Function<K, V>) -> Result<Self, Self::Error> {
        function.check()?;
        debug!(
            domain = function.domain.card(),
            codomain = function.codomain.card(),
            "validated function"
        );
        Ok(Self(function))
    }
}

impl<K, V> Mapping<K, V> {
    /// The domain.
    pub fn domain(&self) -> &Set<K> {
        self.0.domain()
    }

    /// The codomain.
    pub fn codomain(&self) -> &Set<V> {
        self.0.codomain()
    }

    /// The graph.
    pub fn graph(&self) -> &Set<OrderedPair<K, V>> {
        self.0.graph()
    }

    /// Returns the underlying [`Function`], which can be modified again.
    pub fn into_function(self) -> Function<K, V> {
        self.0
    }
}

impl<K: PartialEq, V: PartialEq> Mapping<K, V> {
    /// The image f(x), or `None` if x is not in the domain.
    pub fn apply(&self, x: &K) -> Option<&V> {
        if !self.domain().contains(x) {
            return None;
        }

        self.graph()
            .iter()
            .find(|pair| pair.first() == x)
            .map(OrderedPair::second)
    }

    /// Whether no element of the codomain is hit twice.
    pub fn is_injective(&self) -> bool {
        injective(self.codomain(), self.graph())
    }

    /// Whether every element of the codomain is hit.
    pub fn is_surjective(&self) -> bool {
        surjective(self.codomain(), self.graph())
    }

    /// Whether the function is injective and surjective.
    pub fn is_bijective(&self) -> bool {
        self.is_injective() && self.is_surjective()
    }

    /// The strongest description that applies.
    pub fn classify(&self) -> Classification {
        Classification::new(self.is_injective(), self.is_surjective())
    }

    /// The image f(X) of the whole domain.
    ///
    /// Only domain elements are mapped here, while [`is_surjective`](Self::is_surjective) counts
    /// every pair of the graph. A pair starting outside the domain can make the mapping
    /// surjective without its second component showing up in the image.
    pub fn image(&self) -> Set<V>
    where
        V: Clone,
    {
        self.domain()
            .iter()
            .filter_map(|x| self.apply(x))
            .cloned()
            .collect()
    }
}
