//! Dio - Dive Into Objects
//!
//! Lets a structural pattern matcher test positional and keyed patterns
//! against values that were never designed for it. A value is wrapped in a
//! forwarder, which decides per request how to expose it as a sequence or a
//! mapping of sub-values and wraps each sub-value again so matching can
//! continue at any depth.
//!
//! Three strategies are provided:
//!
//! - [`DynamicForwarder`]: probes `deconstruct`, `to_a`, `to_ary`, `map`
//!   for sequences and falls back to named operations for keys
//! - [`AttributeForwarder`]: keys are restricted to state slots that have
//!   an accessor, unknown keys are an error
//! - [`StringHashForwarder`]: symbolic keys over text-keyed maps, unknown
//!   keys are silently left out

pub mod capabilities;
pub mod config;
pub mod error;
pub mod forwarders;
pub mod public_api;
pub mod runtime;

pub use capabilities::{probe_keyed, probe_sequence, KeyedCapability, SequenceCapability};
pub use config::{ConfigError, DiveConfig};
pub use error::{DioError, DioResult};
pub use forwarders::{AttributeForwarder, Dive, DynamicForwarder, Forwarder, StringHashForwarder};
pub use public_api::{
    attribute, attribute_with_config, dive, dynamic, dynamic_with_config, string_hash,
    string_hash_with_config,
};
pub use runtime::{HostObject, Instance, Keyword, MapKey, RuntimeError, RuntimeResult, Symbol, Value};
