//! Dio runtime value model
//!
//! The values a forwarder can wrap: built-in data, and host objects that
//! expose their capabilities through [`HostObject`].

pub mod builtins;
pub mod error;
pub mod object;
pub mod values;

pub use error::{RuntimeError, RuntimeResult};
pub use object::{HostObject, Instance, MethodFn};
pub use values::{Keyword, MapKey, Symbol, Value};
