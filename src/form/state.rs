use std::collections::HashMap;

/// Current field values of one form. Absent fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: HashMap<String, String>,
}

impl FormState {
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Exchanges the values of two fields.
    pub fn swap(&mut self, a: &str, b: &str) {
        let first = self.values.remove(a);
        let second = self.values.remove(b);
        if let Some(value) = second {
            self.values.insert(a.to_string(), value);
        }
        if let Some(value) = first {
            self.values.insert(b.to_string(), value);
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
