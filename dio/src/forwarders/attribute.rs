//! Attribute forwarder: dives only into accessor-backed state.
//!
//! At wrap time the forwarder intersects the value's state slots with the
//! operations it exposes. Only names in that intersection (its *fields*)
//! may be requested by keyed deconstruction; anything else is rejected as a
//! whole instead of being sent to the value. This keeps a match from
//! accidentally hitting computed methods that just happen to be callable.
//!
//! The field set is computed once per wrapper and reflects the instance as
//! observed at that moment, not the declared shape of its type.

use super::{forward_to_value, Dive, Forwarder};
use crate::capabilities::extract_sequence;
use crate::error::{DioError, DioResult};
use crate::runtime::{Keyword, Value};
use indexmap::{IndexMap, IndexSet};

#[derive(Clone)]
pub struct AttributeForwarder {
    dive: Dive,
    attributes: IndexSet<Keyword>,
}

forward_to_value!(AttributeForwarder);

/// State slots that also have an operation of the same name, in slot order.
fn infer_attributes(value: &Value) -> IndexSet<Keyword> {
    let methods: IndexSet<Keyword> = value.methods().into_iter().collect();
    value
        .instance_variables()
        .into_iter()
        .filter(|slot| methods.contains(slot))
        .collect()
}

impl AttributeForwarder {
    /// The names keyed deconstruction will accept.
    pub fn attributes(&self) -> &IndexSet<Keyword> {
        &self.attributes
    }
}

impl Forwarder for AttributeForwarder {
    const STRATEGY: &'static str = "attribute_forwarder";

    fn from_dive(dive: Dive) -> Self {
        let attributes = infer_attributes(dive.value());
        AttributeForwarder { dive, attributes }
    }

    fn dive(&self) -> &Dive {
        &self.dive
    }

    fn into_dive(self) -> Dive {
        self.dive
    }

    fn deconstruct(&self) -> DioResult<Vec<Self>> {
        let (capability, items) = extract_sequence(self.value(), |element| self.nest(element))
            .map_err(|e| {
                log::debug!(
                    "[{}] cannot deconstruct {}: {}",
                    Self::STRATEGY,
                    self.value().type_name(),
                    e
                );
                e
            })?;
        log::trace!(
            "[{}] deconstructed {} via {} into {} elements",
            Self::STRATEGY,
            self.value().type_name(),
            capability.name(),
            items.len()
        );
        Ok(items)
    }

    fn deconstruct_keys(&self, keys: &[Keyword]) -> DioResult<IndexMap<Keyword, Self>> {
        let requested: IndexSet<Keyword> = keys.iter().cloned().collect();
        let unknown: Vec<Keyword> = requested.difference(&self.attributes).cloned().collect();
        if !unknown.is_empty() {
            log::debug!(
                "[{}] rejecting unknown attributes {:?} for {}",
                Self::STRATEGY,
                unknown,
                self.value().type_name()
            );
            return Err(DioError::UnknownAttributesProvided(unknown));
        }

        self.attributes
            .intersection(&requested)
            .map(|name| -> DioResult<(Keyword, Self)> {
                let field = self.value().send(name.as_str())?;
                Ok((name.clone(), self.nest(field)?))
            })
            .collect()
    }
}
