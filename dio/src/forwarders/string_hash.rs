//! String hash forwarder: matches text-keyed maps with symbolic keys.
//!
//! Requested keywords are looked up by their text form and handed back
//! under the keyword again. Keys the map does not hold are simply left
//! out of the result. Positional deconstruction only works on vectors and
//! lists.

use super::{forward_to_value, Dive, Forwarder};
use crate::error::{DioError, DioResult};
use crate::runtime::{Keyword, Value};
use indexmap::IndexMap;

#[derive(Clone)]
pub struct StringHashForwarder {
    dive: Dive,
}

forward_to_value!(StringHashForwarder);

impl Forwarder for StringHashForwarder {
    const STRATEGY: &'static str = "string_hash_forwarder";

    fn from_dive(dive: Dive) -> Self {
        StringHashForwarder { dive }
    }

    fn dive(&self) -> &Dive {
        &self.dive
    }

    fn into_dive(self) -> Dive {
        self.dive
    }

    fn deconstruct(&self) -> DioResult<Vec<Self>> {
        match self.value() {
            Value::Vector(items) | Value::List(items) => {
                items.iter().cloned().map(|item| self.nest(item)).collect()
            }
            other => {
                log::debug!(
                    "[{}] cannot deconstruct {}: not a sequence",
                    Self::STRATEGY,
                    other.type_name()
                );
                Err(DioError::NoDeconstructionMethod)
            }
        }
    }

    fn deconstruct_keys(&self, keys: &[Keyword]) -> DioResult<IndexMap<Keyword, Self>> {
        let text_keys: Vec<String> = keys.iter().map(|k| k.as_str().to_string()).collect();
        let sliced = self.value().slice(&text_keys).map_err(|e| {
            log::debug!(
                "[{}] cannot slice {}: {}",
                Self::STRATEGY,
                self.value().type_name(),
                e
            );
            DioError::from(e)
        })?;
        log::trace!(
            "[{}] found {} of {} requested keys",
            Self::STRATEGY,
            sliced.len(),
            text_keys.len()
        );
        sliced
            .into_iter()
            .map(|(key, field)| -> DioResult<(Keyword, Self)> {
                Ok((Keyword(key), self.nest(field)?))
            })
            .collect()
    }
}
