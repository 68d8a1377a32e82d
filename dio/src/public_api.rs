//! Constructors for the forwarders.
//!
//! `dive` is the generic entry point and uses the dynamic strategy; the
//! other functions pick a strategy explicitly.

use crate::config::DiveConfig;
use crate::forwarders::{AttributeForwarder, DynamicForwarder, Forwarder, StringHashForwarder};
use crate::runtime::Value;
use std::sync::Arc;

/// Wraps `value` with the dynamic (base) strategy.
pub fn dive(value: impl Into<Value>) -> DynamicForwarder {
    DynamicForwarder::new(value)
}

/// Dynamic forwarder: keyed requests become named operations.
pub fn dynamic(value: impl Into<Value>) -> DynamicForwarder {
    DynamicForwarder::new(value)
}

/// Attribute forwarder: keyed requests are limited to accessor-backed state.
pub fn attribute(value: impl Into<Value>) -> AttributeForwarder {
    AttributeForwarder::new(value)
}

/// String hash forwarder: symbolic keys over a text-keyed map.
pub fn string_hash(value: impl Into<Value>) -> StringHashForwarder {
    StringHashForwarder::new(value)
}

pub fn dynamic_with_config(value: impl Into<Value>, config: Arc<DiveConfig>) -> DynamicForwarder {
    DynamicForwarder::with_config(value, config)
}

pub fn attribute_with_config(
    value: impl Into<Value>,
    config: Arc<DiveConfig>,
) -> AttributeForwarder {
    AttributeForwarder::with_config(value, config)
}

pub fn string_hash_with_config(
    value: impl Into<Value>,
    config: Arc<DiveConfig>,
) -> StringHashForwarder {
    StringHashForwarder::with_config(value, config)
}
