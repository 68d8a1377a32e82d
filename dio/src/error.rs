//! Errors raised while deconstructing a wrapped value

use crate::runtime::{Keyword, RuntimeError};
use itertools::Itertools;
use thiserror::Error;

pub type DioResult<T> = Result<T, DioError>;

fn join_names(keys: &[Keyword]) -> String {
    keys.iter().map(Keyword::as_str).join(", ")
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DioError {
    /// The value exposes none of the recognised sequence capabilities.
    #[error("Object provided no method of deconstruction (to_a, to_ary, map, Enumerable)")]
    NoDeconstructionMethod,

    /// Requested names outside an attribute forwarder's field set.
    #[error("Unknown attribute arguments provided to method: {}", join_names(.0))]
    UnknownAttributesProvided(Vec<Keyword>),

    #[error("Dive depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },

    /// A failure from the wrapped value's own operations, passed through as is.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
