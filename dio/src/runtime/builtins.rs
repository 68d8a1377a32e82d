//! Built-in behaviour of runtime values.
//!
//! Each built-in type answers a small table of zero-argument operations
//! (`succ`, `length`, `keys`, ...) and a fixed set of structural
//! capabilities. `Value::Object` defers everything to its
//! [`HostObject`](crate::runtime::object::HostObject).

use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::values::{Keyword, MapKey, Value};
use indexmap::IndexMap;

const INTEGER_METHODS: &[&str] = &["succ", "pred", "abs", "zero?", "even?", "odd?", "to_s"];
const FLOAT_METHODS: &[&str] = &["abs", "floor", "ceil", "round", "to_s"];
const STRING_METHODS: &[&str] = &["length", "size", "upcase", "downcase", "reverse", "empty?"];
const NAME_METHODS: &[&str] = &["to_s", "length"];
const BOOLEAN_METHODS: &[&str] = &["to_s"];
const SEQUENCE_METHODS: &[&str] = &["length", "size", "first", "last", "empty?"];
const MAP_METHODS: &[&str] = &["length", "size", "keys", "values", "empty?"];
const NIL_METHODS: &[&str] = &["to_a", "to_s"];
const UNIVERSAL_METHODS: &[&str] = &["nil?"];

fn builtin_table(value: &Value) -> &'static [&'static str] {
    match value {
        Value::Nil => NIL_METHODS,
        Value::Boolean(_) => BOOLEAN_METHODS,
        Value::Integer(_) => INTEGER_METHODS,
        Value::Float(_) => FLOAT_METHODS,
        Value::String(_) => STRING_METHODS,
        Value::Symbol(_) | Value::Keyword(_) => NAME_METHODS,
        Value::Vector(_) | Value::List(_) => SEQUENCE_METHODS,
        Value::Map(_) => MAP_METHODS,
        Value::Object(_) => &[],
    }
}

fn checked(result: Option<i64>, operation: &str) -> RuntimeResult<Value> {
    result
        .map(Value::Integer)
        .ok_or_else(|| RuntimeError::Overflow {
            operation: operation.to_string(),
        })
}

fn length(len: usize) -> Value {
    Value::Integer(len as i64)
}

impl Value {
    /// Names of the internal state slots. Built-in values have none.
    pub fn instance_variables(&self) -> Vec<Keyword> {
        match self {
            Value::Object(obj) => obj.state_slots(),
            _ => Vec::new(),
        }
    }

    /// Every zero-argument operation this value responds to.
    pub fn methods(&self) -> Vec<Keyword> {
        let mut names: Vec<Keyword> = match self {
            Value::Object(obj) => obj.methods(),
            other => builtin_table(other).iter().map(|m| Keyword::new(m)).collect(),
        };
        for universal in UNIVERSAL_METHODS {
            let key = Keyword::new(universal);
            if !names.contains(&key) {
                names.push(key);
            }
        }
        names
    }

    /// Invoke a zero-argument operation by name.
    pub fn send(&self, name: &str) -> RuntimeResult<Value> {
        if let Value::Object(obj) = self {
            if name == "nil?" && !obj.methods().iter().any(|m| m.0 == name) {
                return Ok(Value::Boolean(false));
            }
            return obj.send(name);
        }

        match (self, name) {
            (_, "nil?") => Ok(Value::Boolean(matches!(self, Value::Nil))),
            (Value::Nil, "to_a") => Ok(Value::Vector(Vec::new())),
            (Value::Nil, "to_s") => Ok(Value::String(String::new())),

            (Value::Boolean(b), "to_s") => Ok(Value::String(b.to_string())),

            (Value::Integer(i), "succ") => checked(i.checked_add(1), "succ"),
            (Value::Integer(i), "pred") => checked(i.checked_sub(1), "pred"),
            (Value::Integer(i), "abs") => checked(i.checked_abs(), "abs"),
            (Value::Integer(i), "zero?") => Ok(Value::Boolean(*i == 0)),
            (Value::Integer(i), "even?") => Ok(Value::Boolean(i % 2 == 0)),
            (Value::Integer(i), "odd?") => Ok(Value::Boolean(i % 2 != 0)),
            (Value::Integer(i), "to_s") => Ok(Value::String(i.to_string())),

            (Value::Float(f), "abs") => Ok(Value::Float(f.abs())),
            (Value::Float(f), "floor") => Ok(Value::Float(f.floor())),
            (Value::Float(f), "ceil") => Ok(Value::Float(f.ceil())),
            (Value::Float(f), "round") => Ok(Value::Float(f.round())),
            (Value::Float(f), "to_s") => Ok(Value::String(f.to_string())),

            (Value::String(s), "length" | "size") => Ok(length(s.chars().count())),
            (Value::String(s), "upcase") => Ok(Value::String(s.to_uppercase())),
            (Value::String(s), "downcase") => Ok(Value::String(s.to_lowercase())),
            (Value::String(s), "reverse") => Ok(Value::String(s.chars().rev().collect())),
            (Value::String(s), "empty?") => Ok(Value::Boolean(s.is_empty())),

            (Value::Symbol(s), "to_s") => Ok(Value::String(s.0.clone())),
            (Value::Symbol(s), "length") => Ok(length(s.0.chars().count())),
            (Value::Keyword(k), "to_s") => Ok(Value::String(k.0.clone())),
            (Value::Keyword(k), "length") => Ok(length(k.0.chars().count())),

            (Value::Vector(items) | Value::List(items), "length" | "size") => Ok(length(items.len())),
            (Value::Vector(items) | Value::List(items), "first") => {
                Ok(items.first().cloned().unwrap_or(Value::Nil))
            }
            (Value::Vector(items) | Value::List(items), "last") => {
                Ok(items.last().cloned().unwrap_or(Value::Nil))
            }
            (Value::Vector(items) | Value::List(items), "empty?") => Ok(Value::Boolean(items.is_empty())),

            (Value::Map(map), "length" | "size") => Ok(length(map.len())),
            (Value::Map(map), "keys") => Ok(Value::Vector(map.keys().cloned().map(Value::from).collect())),
            (Value::Map(map), "values") => Ok(Value::Vector(map.values().cloned().collect())),
            (Value::Map(map), "empty?") => Ok(Value::Boolean(map.is_empty())),

            (other, name) => Err(RuntimeError::no_method(name, other.type_name())),
        }
    }

    /// Native deconstruction into a sequence: vectors and lists.
    pub fn try_deconstruct(&self) -> Option<RuntimeResult<Vec<Value>>> {
        match self {
            Value::Vector(items) | Value::List(items) => Some(Ok(items.clone())),
            Value::Object(obj) => obj.deconstruct(),
            _ => None,
        }
    }

    /// Primary conversion to a sequence: `nil` becomes empty, maps become
    /// `[key value]` pairs.
    pub fn try_to_a(&self) -> Option<RuntimeResult<Vec<Value>>> {
        match self {
            Value::Nil => Some(Ok(Vec::new())),
            Value::Map(map) => Some(Ok(map
                .iter()
                .map(|(k, v)| Value::Vector(vec![Value::from(k.clone()), v.clone()]))
                .collect())),
            Value::Object(obj) => obj.to_a(),
            _ => None,
        }
    }

    /// Secondary conversion to a sequence. Only host objects provide it.
    pub fn try_to_ary(&self) -> Option<RuntimeResult<Vec<Value>>> {
        match self {
            Value::Object(obj) => obj.to_ary(),
            _ => None,
        }
    }

    /// Element transformation. Only host objects provide it; built-in
    /// collections are reached through `try_deconstruct` or `try_to_a` first.
    pub fn try_map_elements(&self, f: &mut dyn FnMut(Value)) -> Option<RuntimeResult<()>> {
        match self {
            Value::Object(obj) => obj.map_elements(f),
            _ => None,
        }
    }

    /// Native keyed deconstruction: the keyword entries of a map that were
    /// requested, in request order.
    pub fn try_deconstruct_keys(&self, keys: &[Keyword]) -> Option<RuntimeResult<IndexMap<Keyword, Value>>> {
        match self {
            Value::Map(map) => Some(Ok(keys
                .iter()
                .filter_map(|k| {
                    map.get(&MapKey::Keyword(k.clone()))
                        .map(|v| (k.clone(), v.clone()))
                })
                .collect())),
            Value::Object(obj) => obj.deconstruct_keys(keys),
            _ => None,
        }
    }

    /// Text-keyed slice: the string entries of a map that were requested,
    /// in request order. Missing keys are left out.
    pub fn slice(&self, keys: &[String]) -> RuntimeResult<IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Ok(keys
                .iter()
                .filter_map(|k| {
                    map.get(&MapKey::String(k.clone()))
                        .map(|v| (k.clone(), v.clone()))
                })
                .collect()),
            Value::Object(obj) => obj
                .slice(keys)
                .unwrap_or_else(|| Err(RuntimeError::no_method("slice", obj.type_name()))),
            other => Err(RuntimeError::no_method("slice", other.type_name())),
        }
    }
}
