//! Host objects: domain values that were never designed for pattern matching.
//!
//! A host object advertises what it can do through [`HostObject`]. Every
//! structural capability defaults to "not supported" (`None`), so an
//! implementor only opts into the ones it really has. Forwarders probe these
//! capabilities instead of relying on the concrete type.

use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::values::{Keyword, Value};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::Arc;

pub trait HostObject: fmt::Debug + Send + Sync {
    /// Runtime type name, used in error messages and `Display`.
    fn type_name(&self) -> &str;

    fn inspect(&self) -> String {
        format!("#<{}>", self.type_name())
    }

    /// Names of the internal state slots observed on this instance.
    fn state_slots(&self) -> Vec<Keyword> {
        Vec::new()
    }

    /// Externally invokable zero-argument operations.
    fn methods(&self) -> Vec<Keyword> {
        Vec::new()
    }

    /// Invoke a zero-argument operation by name.
    fn send(&self, name: &str) -> RuntimeResult<Value>;

    /// Native deconstruction into a sequence.
    fn deconstruct(&self) -> Option<RuntimeResult<Vec<Value>>> {
        None
    }

    /// Primary conversion to a sequence.
    fn to_a(&self) -> Option<RuntimeResult<Vec<Value>>> {
        None
    }

    /// Secondary (implicit) conversion to a sequence.
    fn to_ary(&self) -> Option<RuntimeResult<Vec<Value>>> {
        None
    }

    /// Element transformation: calls `f` once per element, in order.
    fn map_elements(&self, _f: &mut dyn FnMut(Value)) -> Option<RuntimeResult<()>> {
        None
    }

    /// Native deconstruction into a mapping for the requested keys.
    fn deconstruct_keys(&self, _keys: &[Keyword]) -> Option<RuntimeResult<IndexMap<Keyword, Value>>> {
        None
    }

    /// Text-keyed storage restricted to `keys`; absent keys are left out.
    fn slice(&self, _keys: &[String]) -> Option<RuntimeResult<IndexMap<String, Value>>> {
        None
    }
}

pub type MethodFn = Arc<dyn Fn(&Instance) -> RuntimeResult<Value> + Send + Sync>;

/// A record-like object built at runtime: ordered state slots, reader
/// accessors over some of them, and computed zero-argument methods.
#[derive(Clone)]
pub struct Instance {
    class_name: String,
    slots: IndexMap<Keyword, Value>,
    readers: IndexSet<Keyword>,
    methods: IndexMap<Keyword, MethodFn>,
}

impl Instance {
    pub fn new(class_name: &str) -> Self {
        Instance {
            class_name: class_name.to_string(),
            slots: IndexMap::new(),
            readers: IndexSet::new(),
            methods: IndexMap::new(),
        }
    }

    /// Adds private state with no accessor.
    pub fn with_slot(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.slots.insert(Keyword::new(name), value.into());
        self
    }

    /// Adds state together with a reader of the same name.
    pub fn with_reader(mut self, name: &str, value: impl Into<Value>) -> Self {
        let key = Keyword::new(name);
        self.slots.insert(key.clone(), value.into());
        self.readers.insert(key);
        self
    }

    /// Adds a computed method. A method named like a slot does not
    /// shadow its reader.
    pub fn with_method<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&Instance) -> RuntimeResult<Value> + Send + Sync + 'static,
    {
        self.methods.insert(Keyword::new(name), Arc::new(f));
        self
    }

    /// Reads a state slot directly, bypassing the accessor surface.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots.get(&Keyword::new(name))
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class_name", &self.class_name)
            .field("slots", &self.slots)
            .field("readers", &self.readers)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl HostObject for Instance {
    fn type_name(&self) -> &str {
        &self.class_name
    }

    fn inspect(&self) -> String {
        let slots: Vec<String> = self
            .slots
            .iter()
            .map(|(k, v)| format!("{}={}", k.0, v))
            .collect();
        if slots.is_empty() {
            format!("#<{}>", self.class_name)
        } else {
            format!("#<{} {}>", self.class_name, slots.join(" "))
        }
    }

    fn state_slots(&self) -> Vec<Keyword> {
        self.slots.keys().cloned().collect()
    }

    fn methods(&self) -> Vec<Keyword> {
        self.readers
            .iter()
            .chain(self.methods.keys().filter(|k| !self.readers.contains(*k)))
            .cloned()
            .collect()
    }

    fn send(&self, name: &str) -> RuntimeResult<Value> {
        let key = Keyword::new(name);
        if self.readers.contains(&key) {
            return self
                .slots
                .get(&key)
                .cloned()
                .ok_or_else(|| RuntimeError::Generic(format!("reader '{}' has no slot", name)));
        }
        match self.methods.get(&key) {
            Some(method) => method(self),
            None => Err(RuntimeError::no_method(name, &self.class_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Instance {
        Instance::new("Person")
            .with_reader("name", "Alice")
            .with_reader("age", 40)
            .with_slot("secret", "hidden")
            .with_method("adult?", |this| {
                Ok(Value::Boolean(matches!(this.get("age"), Some(Value::Integer(n)) if *n >= 18)))
            })
    }

    #[test]
    fn readers_and_methods_are_invokable() {
        let p = person();
        assert_eq!(p.send("name").unwrap(), Value::from("Alice"));
        assert_eq!(p.send("adult?").unwrap(), Value::Boolean(true));
    }

    #[test]
    fn private_slots_are_not_invokable() {
        let err = person().send("secret").unwrap_err();
        assert_eq!(err, RuntimeError::no_method("secret", "Person"));
    }

    #[test]
    fn surfaces_keep_declaration_order() {
        let p = person();
        assert_eq!(
            p.state_slots(),
            vec![Keyword::new("name"), Keyword::new("age"), Keyword::new("secret")]
        );
        assert_eq!(
            p.methods(),
            vec![Keyword::new("name"), Keyword::new("age"), Keyword::new("adult?")]
        );
    }

    #[test]
    fn inspect_lists_slots() {
        assert_eq!(
            Instance::new("Point").with_reader("x", 1).inspect(),
            "#<Point x=1>"
        );
        assert_eq!(Instance::new("Empty").inspect(), "#<Empty>");
    }
}
