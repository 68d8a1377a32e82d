//! Capability probing.
//!
//! A wrapped value is never asked what it *is*, only what it can *do*.
//! Sequence capabilities are tried in [`SequenceCapability::PRIORITY`] order
//! and the first one the value supports wins; there is no combining or
//! falling back once a capability has been selected, even if it fails.

use crate::error::{DioError, DioResult};
use crate::runtime::{Keyword, Value};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceCapability {
    /// Native deconstruction into a sequence
    Deconstruct,
    /// Primary conversion to a sequence
    ToA,
    /// Secondary conversion to a sequence
    ToAry,
    /// Element transformation, which also performs the wrapping
    Map,
}

impl SequenceCapability {
    pub const PRIORITY: [SequenceCapability; 4] = [
        SequenceCapability::Deconstruct,
        SequenceCapability::ToA,
        SequenceCapability::ToAry,
        SequenceCapability::Map,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SequenceCapability::Deconstruct => "deconstruct",
            SequenceCapability::ToA => "to_a",
            SequenceCapability::ToAry => "to_ary",
            SequenceCapability::Map => "map",
        }
    }

    /// Whether `value` supports this capability. Conversions are run and
    /// their output discarded, so probing is not free.
    fn supported_by(self, value: &Value) -> bool {
        match self {
            SequenceCapability::Deconstruct => value.try_deconstruct().is_some(),
            SequenceCapability::ToA => value.try_to_a().is_some(),
            SequenceCapability::ToAry => value.try_to_ary().is_some(),
            SequenceCapability::Map => value.try_map_elements(&mut |_| {}).is_some(),
        }
    }

    /// Runs this capability against `value`, or `None` if unsupported.
    fn run<F, W>(self, value: &Value, wrap: &mut W) -> Option<DioResult<Vec<F>>>
    where
        W: FnMut(Value) -> DioResult<F>,
    {
        let converted = match self {
            SequenceCapability::Deconstruct => value.try_deconstruct(),
            SequenceCapability::ToA => value.try_to_a(),
            SequenceCapability::ToAry => value.try_to_ary(),
            SequenceCapability::Map => {
                let mut wrapped = Vec::new();
                let outcome = value.try_map_elements(&mut |element| wrapped.push(wrap(element)))?;
                return Some(
                    outcome
                        .map_err(DioError::from)
                        .and_then(|()| wrapped.into_iter().collect()),
                );
            }
        }?;

        Some(
            converted
                .map_err(DioError::from)
                .and_then(|items| items.into_iter().map(|item| wrap(item)).collect()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyedCapability {
    /// Native deconstruction into a mapping
    DeconstructKeys,
    /// One zero-argument operation per requested name
    NamedAccess,
}

impl KeyedCapability {
    pub fn name(self) -> &'static str {
        match self {
            KeyedCapability::DeconstructKeys => "deconstruct_keys",
            KeyedCapability::NamedAccess => "send",
        }
    }
}

/// The sequence capability `extract_sequence` would select for `value`.
pub fn probe_sequence(value: &Value) -> Option<SequenceCapability> {
    SequenceCapability::PRIORITY
        .into_iter()
        .find(|capability| capability.supported_by(value))
}

/// The keyed capability `extract_keyed` would select for `value`.
pub fn probe_keyed(value: &Value) -> KeyedCapability {
    if value.try_deconstruct_keys(&[]).is_some() {
        KeyedCapability::DeconstructKeys
    } else {
        KeyedCapability::NamedAccess
    }
}

/// Produces the wrapped elements of `value` through the first sequence
/// capability it supports.
pub fn extract_sequence<F, W>(value: &Value, mut wrap: W) -> DioResult<(SequenceCapability, Vec<F>)>
where
    W: FnMut(Value) -> DioResult<F>,
{
    for capability in SequenceCapability::PRIORITY {
        if let Some(result) = capability.run(value, &mut wrap) {
            return result.map(|items| (capability, items));
        }
    }
    Err(DioError::NoDeconstructionMethod)
}

/// Produces wrapped fields of `value` for `keys`: native keyed
/// deconstruction when available, otherwise one named operation per key.
/// Any failing lookup fails the whole extraction.
pub fn extract_keyed<F, W>(
    value: &Value,
    keys: &[Keyword],
    mut wrap: W,
) -> DioResult<(KeyedCapability, IndexMap<Keyword, F>)>
where
    W: FnMut(Value) -> DioResult<F>,
{
    if let Some(result) = value.try_deconstruct_keys(keys) {
        let fields = result?
            .into_iter()
            .map(|(key, field)| -> DioResult<(Keyword, F)> { Ok((key, wrap(field)?)) })
            .collect::<DioResult<IndexMap<_, _>>>()?;
        return Ok((KeyedCapability::DeconstructKeys, fields));
    }

    let fields = keys
        .iter()
        .map(|key| -> DioResult<(Keyword, F)> {
            let field = value.send(key.as_str())?;
            Ok((key.clone(), wrap(field)?))
        })
        .collect::<DioResult<IndexMap<_, _>>>()?;
    Ok((KeyedCapability::NamedAccess, fields))
}
