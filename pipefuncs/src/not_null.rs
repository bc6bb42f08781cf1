//! `notNull()` - presence and non-null check

use pipefuncs_core::{PipeContext, PipeFunc, PipeFuncMetadata, PipeState, Result};
use serde_json::Value;
use tracing::trace;

/// Replaces the value with whether it is present and not JSON `null`
///
/// Never fails; `present` is always `true` afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNullPipeFunc;

impl NotNullPipeFunc {
    /// Pipeline-syntax name
    pub const NAME: &'static str = "notNull()";
}

impl PipeFunc for NotNullPipeFunc {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn metadata(&self) -> PipeFuncMetadata {
        PipeFuncMetadata {
            name: Self::NAME.to_string(),
            description: "true if the value exists and is not null".to_string(),
        }
    }

    fn handle(&self, _ctx: &PipeContext, state: &mut PipeState) -> Result<()> {
        trace!(func = Self::NAME, present = state.present);
        // An empty raw form means nothing was found upstream
        let raw = state.raw();
        let raw = raw.trim();
        let not_null = state.present && !raw.is_empty() && raw != "null";

        state.value = Value::Bool(not_null);
        state.present = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(state: PipeState) -> PipeState {
        NotNullPipeFunc.apply(&PipeContext::new(), state).unwrap()
    }

    #[test]
    fn absent_value_is_null() {
        assert_eq!(run(PipeState::absent()), PipeState::present(json!(false)));
    }

    #[test]
    fn present_null_is_null() {
        assert_eq!(
            run(PipeState::present(Value::Null)),
            PipeState::present(json!(false))
        );
    }

    #[test]
    fn null_string_is_not_null() {
        assert_eq!(
            run(PipeState::present(json!("null"))),
            PipeState::present(json!(true))
        );
    }

    #[test]
    fn falsy_values_are_not_null() {
        for value in [json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert_eq!(run(PipeState::present(value)), PipeState::present(json!(true)));
        }
    }

    #[test]
    fn reapplying_yields_true() {
        let once = run(PipeState::present(Value::Null));
        assert_eq!(run(once), PipeState::present(json!(true)));
    }
}
