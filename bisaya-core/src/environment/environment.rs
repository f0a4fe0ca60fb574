use std::collections::HashMap;

use super::prelude::{Value, ValueType};

/// Global variable store. Blocks do not open scopes, every statement sees
/// the writes of the statements executed before it.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    values: HashMap<String, Value>,
    types: HashMap<String, ValueType>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            types: HashMap::new()
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<ValueType> {
        self.types.get(name).copied()
    }

    pub fn lookup(&self, name: &str) -> Option<(ValueType, &Value)> {
        match (self.types.get(name), self.values.get(name)) {
            (Some(value_type), Some(value)) => Some((*value_type, value)),
            _ => None
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Declares `name`, replacing both type and value of an earlier
    /// declaration. Returns the type it had before, if any.
    pub fn declare(&mut self, name: String, value_type: ValueType, value: Value) -> Option<ValueType> {
        self.values.insert(name.clone(), value);
        self.types.insert(name, value_type)
    }

    /// Overwrites the value of a declared variable. Returns `false` and
    /// leaves the store untouched when `name` was never declared.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.values.get_mut(name) {
            Some(var) => {
                *var = value;
                true
            },
            None => false
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
