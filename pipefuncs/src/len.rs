//! `len()` - length of arrays, objects and strings

use pipefuncs_core::{PipeContext, PipeFunc, PipeFuncMetadata, PipeState, Result};
use serde_json::Value;
use tracing::trace;

/// Replaces the value with its length
///
/// Arrays count elements and objects count keys; anything else counts the
/// characters of its string form (see [`PipeState::text`]). Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenPipeFunc;

impl LenPipeFunc {
    /// Pipeline-syntax name
    pub const NAME: &'static str = "len()";
}

/// Length of the state's value, checked in array, object, text order
pub fn length_of(state: &PipeState) -> usize {
    match &state.value {
        Value::Array(items) => items.len(),
        // {} counts as an object with zero keys, never as a missing value
        Value::Object(map) => map.len(),
        _ => state.text().chars().count(),
    }
}

impl PipeFunc for LenPipeFunc {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn metadata(&self) -> PipeFuncMetadata {
        PipeFuncMetadata {
            name: Self::NAME.to_string(),
            description: "number of array elements, object keys or string characters".to_string(),
        }
    }

    fn handle(&self, _ctx: &PipeContext, state: &mut PipeState) -> Result<()> {
        let n = length_of(state);
        trace!(func = Self::NAME, present = state.present, len = n);
        state.value = Value::from(n);
        state.present = true;
        Ok(())
    }
}
