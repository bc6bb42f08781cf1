//! The pipe function trait

use crate::{PipeContext, PipeState, Result};

/// Metadata for a pipe function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeFuncMetadata {
    /// Pipeline-syntax name, e.g. `len()`
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// A named, stateless transformation over the pipeline state
///
/// Implementations mutate the state in place and must accept any state,
/// including an absent one.
pub trait PipeFunc: Send + Sync {
    /// Name used to invoke this function in a pipeline, e.g. `exists()`
    fn name(&self) -> &'static str;

    /// Returns metadata about this function
    fn metadata(&self) -> PipeFuncMetadata {
        PipeFuncMetadata {
            name: self.name().to_string(),
            description: "Custom pipe function".to_string(),
        }
    }

    /// Transform `state` in place
    ///
    /// # Errors
    ///
    /// Returns an error when the current value has a shape this function
    /// cannot accept. The state is unspecified after an error.
    fn handle(&self, ctx: &PipeContext, state: &mut PipeState) -> Result<()>;

    /// Consume `state` and return the transformed copy
    fn apply(&self, ctx: &PipeContext, mut state: PipeState) -> Result<PipeState> {
        self.handle(ctx, &mut state)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Negate;

    impl PipeFunc for Negate {
        fn name(&self) -> &'static str {
            "not()"
        }

        fn handle(&self, _ctx: &PipeContext, state: &mut PipeState) -> Result<()> {
            state.value = json!(!state.value.as_bool().unwrap_or(false));
            state.present = true;
            Ok(())
        }
    }

    #[test]
    fn default_metadata_uses_name() {
        let meta = Negate.metadata();
        assert_eq!(meta.name, "not()");
        assert_eq!(meta.description, "Custom pipe function");
    }

    #[test]
    fn apply_returns_new_state() {
        let input = PipeState::present(json!(true));
        let output = Negate.apply(&PipeContext::new(), input.clone()).unwrap();
        assert_eq!(output, PipeState::present(json!(false)));
        assert_eq!(input.value, json!(true));
    }
}
