// Shared fixtures and a minimal host matcher for the integration tests.
// The matcher only drives the deconstruction protocol; it is not part of dio.
#![allow(dead_code)]

use dio::{DioResult, Forwarder, HostObject, Instance, Keyword, RuntimeError, RuntimeResult, Value};
use regex::Regex;

pub enum Pattern {
    /// `_`
    Any,
    Eq(Value),
    /// Inclusive integer range, either side may be open
    Range(Option<i64>, Option<i64>),
    Regex(Regex),
    /// `[p1, p2, ...]`, exact length
    Array(Vec<Pattern>),
    /// `[*, p, *]`
    Find(Box<Pattern>),
    /// `{ k1: p1, k2: p2 }`
    Hash(Vec<(Keyword, Pattern)>),
}

pub fn eq(value: impl Into<Value>) -> Pattern {
    Pattern::Eq(value.into())
}

pub fn range(lo: Option<i64>, hi: Option<i64>) -> Pattern {
    Pattern::Range(lo, hi)
}

pub fn re(source: &str) -> Pattern {
    Pattern::Regex(Regex::new(source).expect("valid regex"))
}

pub fn array(items: Vec<Pattern>) -> Pattern {
    Pattern::Array(items)
}

pub fn find(item: Pattern) -> Pattern {
    Pattern::Find(Box::new(item))
}

pub fn hash(entries: Vec<(&str, Pattern)>) -> Pattern {
    Pattern::Hash(
        entries
            .into_iter()
            .map(|(k, p)| (Keyword::new(k), p))
            .collect(),
    )
}

pub fn kw(name: &str) -> Keyword {
    Keyword::new(name)
}

pub fn kws(names: &[&str]) -> Vec<Keyword> {
    names.iter().map(|n| Keyword::new(n)).collect()
}

/// Tests `subject` against `pattern`, asking the forwarder for elements or
/// fields as the pattern requires. Deconstruction errors propagate.
pub fn matches<F: Forwarder>(subject: &F, pattern: &Pattern) -> DioResult<bool> {
    match pattern {
        Pattern::Any => Ok(true),
        Pattern::Eq(expected) => Ok(subject.value() == expected),
        Pattern::Range(lo, hi) => Ok(match subject.value() {
            Value::Integer(i) => lo.map_or(true, |l| *i >= l) && hi.map_or(true, |h| *i <= h),
            _ => false,
        }),
        Pattern::Regex(regex) => Ok(match subject.value() {
            Value::String(s) => regex.is_match(s),
            _ => false,
        }),
        Pattern::Array(patterns) => {
            let items = subject.deconstruct()?;
            if items.len() != patterns.len() {
                return Ok(false);
            }
            for (item, pattern) in items.iter().zip(patterns) {
                if !matches(item, pattern)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Pattern::Find(pattern) => {
            for item in subject.deconstruct()?.iter() {
                if matches(item, pattern)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Pattern::Hash(entries) => {
            let keys: Vec<Keyword> = entries.iter().map(|(k, _)| k.clone()).collect();
            let fields = subject.deconstruct_keys(&keys)?;
            for (key, pattern) in entries {
                let Some(field) = fields.get(key) else {
                    return Ok(false);
                };
                if !matches(field, pattern)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}

/// A tree node whose only positional capability is `to_a`.
#[derive(Debug)]
pub struct Node {
    pub value: i64,
    pub children: Vec<Value>,
}

impl HostObject for Node {
    fn type_name(&self) -> &str {
        "Node"
    }

    fn inspect(&self) -> String {
        if self.children.is_empty() {
            return format!("({})", self.value);
        }
        let children: Vec<String> = self.children.iter().map(|c| c.to_string()).collect();
        format!("({}, {})", self.value, children.join(", "))
    }

    fn state_slots(&self) -> Vec<Keyword> {
        kws(&["value", "children"])
    }

    fn methods(&self) -> Vec<Keyword> {
        kws(&["value", "children", "to_a", "to_s"])
    }

    fn send(&self, name: &str) -> RuntimeResult<Value> {
        match name {
            "value" => Ok(Value::Integer(self.value)),
            "children" => Ok(Value::Vector(self.children.clone())),
            "to_a" => Ok(Value::Vector(self.pair())),
            "to_s" => Ok(Value::String(self.inspect())),
            other => Err(RuntimeError::no_method(other, "Node")),
        }
    }

    fn to_a(&self) -> Option<RuntimeResult<Vec<Value>>> {
        Some(Ok(self.pair()))
    }
}

impl Node {
    fn pair(&self) -> Vec<Value> {
        vec![Value::Integer(self.value), Value::Vector(self.children.clone())]
    }
}

pub fn node(value: i64, children: Vec<Value>) -> Value {
    Value::object(Node { value, children })
}

/// (1, (2, (3, (4))), (5), (6, (7), (8)))
pub fn tree() -> Value {
    node(
        1,
        vec![
            node(2, vec![node(3, vec![node(4, vec![])])]),
            node(5, vec![]),
            node(6, vec![node(7, vec![]), node(8, vec![])]),
        ],
    )
}

pub fn person(name: &str, age: i64, children: Vec<Value>) -> Value {
    Value::object(
        Instance::new("Person")
            .with_reader("name", name)
            .with_reader("age", age)
            .with_reader("children", Value::Vector(children))
            .with_method("adult?", |this| {
                Ok(Value::Boolean(
                    matches!(this.get("age"), Some(Value::Integer(age)) if *age >= 18),
                ))
            }),
    )
}

pub fn alice() -> Value {
    person(
        "Alice",
        40,
        vec![person("Jim", 10, vec![]), person("Jill", 10, vec![])],
    )
}
