//! Crate prelude.

// The actual prelude.
pub use crate::{
    function::{Classification, Function, FunctionError, Mapping},
    pair::OrderedPair,
    relation::{Properties, Relation},
    set::Set,
};

// Convenient imports within the crate.
pub(crate) use crate::{smallvec, SmallVec};
pub(crate) use bitvec::prelude::*;
pub(crate) use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
};
pub(crate) use tracing::{debug, trace};
