use std::collections::HashMap;

/// Variables of one session, name to last assigned value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    variables: HashMap<String, f64>,
}

impl VariableStore {
    pub fn new() -> Self {
        VariableStore {
            variables: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns the previous value, if any.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.variables.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Entries sorted by name.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut vars: Vec<_> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        vars.sort_by_key(|(name, _)| *name);
        vars
    }
}
