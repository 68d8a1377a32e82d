//! Forwarders: wrappers that make arbitrary values matchable.
//!
//! A forwarder holds exactly one [`Value`] and answers the two requests a
//! host pattern matcher makes:
//!
//! - [`Forwarder::deconstruct`] for positional (array-style) patterns
//! - [`Forwarder::deconstruct_keys`] for keyed (record-style) patterns
//!
//! Every extracted sub-value comes back wrapped in a new forwarder of the
//! same strategy, so matching can keep diving at any depth. Everything else
//! is forwarded to the wrapped value through `Deref`, `Display`, `Debug`
//! and `PartialEq<Value>`.

pub mod attribute;
pub mod base;
pub mod string_hash;

pub use attribute::AttributeForwarder;
pub use base::DynamicForwarder;
pub use string_hash::StringHashForwarder;

use crate::config::DiveConfig;
use crate::error::{DioError, DioResult};
use crate::runtime::{Keyword, Value};
use indexmap::IndexMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Deref;
use std::sync::Arc;

/// State shared by every strategy: the wrapped value plus its position in
/// the wrapper tree.
#[derive(Debug, Clone)]
pub struct Dive {
    value: Value,
    depth: usize,
    config: Arc<DiveConfig>,
}

impl Dive {
    pub fn root(value: Value, config: Arc<DiveConfig>) -> Self {
        Dive {
            value,
            depth: 0,
            config,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> &Arc<DiveConfig> {
        &self.config
    }

    /// A child one level deeper, sharing this dive's config.
    pub fn nest(&self, value: Value) -> DioResult<Dive> {
        let depth = self.depth + 1;
        if !self.config.allows(depth) {
            let limit = self.config.max_depth.map_or(self.depth, NonZeroUsize::get);
            log::debug!(
                "[dive] refusing to wrap {} at depth {} (limit {})",
                value.type_name(),
                depth,
                limit
            );
            return Err(DioError::DepthLimitExceeded { limit });
        }
        Ok(Dive {
            value,
            depth,
            config: Arc::clone(&self.config),
        })
    }
}

/// The deconstruction protocol shared by all strategies.
pub trait Forwarder: Sized + Deref<Target = Value> + fmt::Display + fmt::Debug {
    /// Strategy name used in log lines.
    const STRATEGY: &'static str;

    fn from_dive(dive: Dive) -> Self;

    fn dive(&self) -> &Dive;

    fn into_dive(self) -> Dive;

    fn new(value: impl Into<Value>) -> Self {
        Self::with_config(value, Arc::new(DiveConfig::default()))
    }

    fn with_config(value: impl Into<Value>, config: Arc<DiveConfig>) -> Self {
        Self::from_dive(Dive::root(value.into(), config))
    }

    /// The originally wrapped value.
    fn value(&self) -> &Value {
        self.dive().value()
    }

    fn into_value(self) -> Value {
        self.into_dive().into_value()
    }

    fn depth(&self) -> usize {
        self.dive().depth()
    }

    /// Wraps a sub-value in a new forwarder of this strategy.
    fn nest(&self, value: Value) -> DioResult<Self> {
        self.dive().nest(value).map(Self::from_dive)
    }

    /// Positional deconstruction.
    fn deconstruct(&self) -> DioResult<Vec<Self>>;

    /// Keyed deconstruction for the requested names.
    fn deconstruct_keys(&self, keys: &[Keyword]) -> DioResult<IndexMap<Keyword, Self>>;
}

/// Implements the transparent-delegation surface for a forwarder type.
macro_rules! forward_to_value {
    ($forwarder:ty) => {
        impl std::ops::Deref for $forwarder {
            type Target = $crate::runtime::Value;

            fn deref(&self) -> &Self::Target {
                self.dive.value()
            }
        }

        impl std::fmt::Display for $forwarder {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self.dive.value(), f)
            }
        }

        impl std::fmt::Debug for $forwarder {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(self.dive.value(), f)
            }
        }

        impl PartialEq<$crate::runtime::Value> for $forwarder {
            fn eq(&self, other: &$crate::runtime::Value) -> bool {
                self.dive.value() == other
            }
        }

        impl PartialEq<$forwarder> for $crate::runtime::Value {
            fn eq(&self, other: &$forwarder) -> bool {
                self == other.dive.value()
            }
        }
    };
}

pub(crate) use forward_to_value;
