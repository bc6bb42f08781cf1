//! `json()` - parse an embedded JSON string

use pipefuncs_core::{PipeContext, PipeError, PipeFunc, PipeFuncMetadata, PipeState, Result};
use serde_json::Value;
use tracing::trace;

/// Replaces a string value with the JSON document it contains
///
/// The parsed document is re-encoded and parsed again, so the new value
/// always has canonical formatting and key order. Objects and arrays are
/// accepted too: their text form is already JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPipeFunc;

impl JsonPipeFunc {
    /// Pipeline-syntax name
    pub const NAME: &'static str = "json()";
}

/// Parse `text`, re-encode it, and parse the encoded bytes
fn normalize(text: &str) -> serde_json::Result<Value> {
    let inner: Value = serde_json::from_str(text)?;
    let bytes = serde_json::to_vec(&inner)?;
    serde_json::from_slice(&bytes)
}

impl PipeFunc for JsonPipeFunc {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn metadata(&self) -> PipeFuncMetadata {
        PipeFuncMetadata {
            name: Self::NAME.to_string(),
            description: "parse the string value as a JSON document".to_string(),
        }
    }

    fn handle(&self, _ctx: &PipeContext, state: &mut PipeState) -> Result<()> {
        trace!(func = Self::NAME, present = state.present);
        let value = normalize(&state.text()).map_err(|source| PipeError::Parse {
            func: Self::NAME,
            source,
        })?;

        state.value = value;
        // A parsed document always exists as a node, even a literal null
        state.present = true;
        Ok(())
    }
}
