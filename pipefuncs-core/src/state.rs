//! Pipeline state threaded through a chain of pipe functions

use serde_json::Value;

/// Current value of a pipeline plus whether it was found upstream
///
/// `present` is distinct from the value being JSON `null`: a document
/// containing `"a": null` yields a present null, a missing `a` yields an
/// absent one.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeState {
    /// Value under evaluation (`Value::Null` when absent)
    pub value: Value,
    /// Whether the value existed in the source document
    pub present: bool,
}

impl PipeState {
    /// Create a state from its parts
    pub fn new(value: Value, present: bool) -> Self {
        Self { value, present }
    }

    /// State holding a value that was found
    pub fn present(value: Value) -> Self {
        Self::new(value, true)
    }

    /// State for a path that matched nothing
    pub fn absent() -> Self {
        Self::new(Value::Null, false)
    }

    /// String form of the value
    ///
    /// Strings yield their contents without quotes, null (including the
    /// absent sentinel) yields `""`, everything else yields compact JSON
    /// text. Presence is not consulted.
    pub fn text(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Raw JSON text of the value, `""` when absent
    pub fn raw(&self) -> String {
        if self.present {
            self.value.to_string()
        } else {
            String::new()
        }
    }
}

impl Default for PipeState {
    fn default() -> Self {
        Self::absent()
    }
}

impl From<Option<Value>> for PipeState {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(v) => Self::present(v),
            None => Self::absent(),
        }
    }
}
