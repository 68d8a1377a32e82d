//! Dynamic forwarder: the base deconstruction strategy.
//!
//! Positional requests probe the wrapped value for `deconstruct`, `to_a`,
//! `to_ary` and `map`, in that order. Keyed requests use the value's own
//! keyed deconstruction when it has one and otherwise treat each requested
//! name as a zero-argument operation, which is what lets a match dive
//! through plain method calls:
//!
//! ```
//! use dio::{Forwarder, DynamicForwarder, Keyword, Value};
//!
//! let one = DynamicForwarder::new(1);
//! let succ = Keyword::new("succ");
//! let two = one.deconstruct_keys(&[succ.clone()]).unwrap().swap_remove(&succ).unwrap();
//! let three = two.deconstruct_keys(&[succ.clone()]).unwrap().swap_remove(&succ).unwrap();
//! assert_eq!(three, Value::Integer(3));
//! ```

use super::{forward_to_value, Dive, Forwarder};
use crate::capabilities::{extract_keyed, extract_sequence};
use crate::error::DioResult;
use crate::runtime::Keyword;
use indexmap::IndexMap;

#[derive(Clone)]
pub struct DynamicForwarder {
    dive: Dive,
}

forward_to_value!(DynamicForwarder);

impl Forwarder for DynamicForwarder {
    const STRATEGY: &'static str = "dynamic_forwarder";

    fn from_dive(dive: Dive) -> Self {
        DynamicForwarder { dive }
    }

    fn dive(&self) -> &Dive {
        &self.dive
    }

    fn into_dive(self) -> Dive {
        self.dive
    }

    fn deconstruct(&self) -> DioResult<Vec<Self>> {
        let result = extract_sequence(self.value(), |element| self.nest(element));
        match &result {
            Ok((capability, items)) => log::trace!(
                "[{}] deconstructed {} via {} into {} elements",
                Self::STRATEGY,
                self.value().type_name(),
                capability.name(),
                items.len()
            ),
            Err(e) => log::debug!(
                "[{}] cannot deconstruct {}: {}",
                Self::STRATEGY,
                self.value().type_name(),
                e
            ),
        }
        result.map(|(_, items)| items)
    }

    fn deconstruct_keys(&self, keys: &[Keyword]) -> DioResult<IndexMap<Keyword, Self>> {
        let (capability, fields) = extract_keyed(self.value(), keys, |field| self.nest(field))
            .map_err(|e| {
                log::debug!(
                    "[{}] cannot deconstruct keys of {}: {}",
                    Self::STRATEGY,
                    self.value().type_name(),
                    e
                );
                e
            })?;
        log::trace!(
            "[{}] deconstructed {} keys of {} via {}",
            Self::STRATEGY,
            fields.len(),
            self.value().type_name(),
            capability.name()
        );
        Ok(fields)
    }
}
