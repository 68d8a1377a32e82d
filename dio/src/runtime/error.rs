// Error handling for values invoked through the named-operation surface

use std::fmt;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors raised by a value's own operations.
///
/// Forwarders never translate these: a failing named operation surfaces
/// to the caller exactly as the value reported it.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// The value does not respond to the named operation
    NoMethod { method: String, type_name: String },

    /// Type errors (wrong type for operation)
    TypeError {
        expected: String,
        actual: String,
        operation: String,
    },

    /// Integer arithmetic left the representable range
    Overflow { operation: String },

    Generic(String),
}

impl RuntimeError {
    pub fn new(message: &str) -> RuntimeError {
        RuntimeError::Generic(message.to_string())
    }

    pub fn no_method(method: &str, type_name: &str) -> RuntimeError {
        RuntimeError::NoMethod {
            method: method.to_string(),
            type_name: type_name.to_string(),
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::NoMethod { method, type_name } => {
                write!(f, "Undefined method '{}' for {}", method, type_name)
            }
            RuntimeError::TypeError {
                expected,
                actual,
                operation,
            } => {
                write!(
                    f,
                    "Type error in {}: expected {}, got {}",
                    operation, expected, actual
                )
            }
            RuntimeError::Overflow { operation } => {
                write!(f, "Integer overflow in {}", operation)
            }
            RuntimeError::Generic(message) => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for RuntimeError {}
