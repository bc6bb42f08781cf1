//! `exists()` - presence check

use pipefuncs_core::{PipeContext, PipeFunc, PipeFuncMetadata, PipeState, Result};
use serde_json::Value;
use tracing::trace;

/// Replaces the value with whether it was present
///
/// Never fails. The boolean answer is itself present, so `present` is
/// always `true` afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistsPipeFunc;

impl ExistsPipeFunc {
    /// Pipeline-syntax name
    pub const NAME: &'static str = "exists()";
}

impl PipeFunc for ExistsPipeFunc {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn metadata(&self) -> PipeFuncMetadata {
        PipeFuncMetadata {
            name: Self::NAME.to_string(),
            description: "true if the value exists, false otherwise".to_string(),
        }
    }

    fn handle(&self, _ctx: &PipeContext, state: &mut PipeState) -> Result<()> {
        trace!(func = Self::NAME, present = state.present);
        state.value = Value::Bool(state.present);
        state.present = true;
        Ok(())
    }
}
