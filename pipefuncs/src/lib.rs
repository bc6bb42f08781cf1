//! pipefuncs - built-in pipe functions for JSON assertion pipelines
//!
//! Four leaf transformations a host evaluator can chain:
//!
//! - `exists()` - whether the value was found
//! - `json()` - parse a string value as JSON
//! - `len()` - array, object or string length
//! - `notNull()` - whether the value was found and is not `null`
//!
//! Nothing registers itself. The host calls [`register_builtins`] once at
//! startup with the registry it owns.
//!
//! ```rust
//! use pipefuncs::{register_builtins, PipeContext, PipeFuncRegistry, PipeState};
//! use serde_json::json;
//!
//! let mut registry = PipeFuncRegistry::new();
//! register_builtins(&mut registry)?;
//!
//! let ctx = PipeContext::new();
//! let mut state = PipeState::present(json!(r#"[1, 2, 3]"#));
//! registry.invoke("json()", &ctx, &mut state)?;
//! registry.invoke("len()", &ctx, &mut state)?;
//! assert_eq!(state.value, json!(3));
//! # Ok::<(), pipefuncs::PipeError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod exists;
pub mod json;
pub mod len;
pub mod not_null;

// Re-export commonly used types
pub use exists::ExistsPipeFunc;
pub use json::JsonPipeFunc;
pub use len::LenPipeFunc;
pub use not_null::NotNullPipeFunc;
pub use pipefuncs_core::{
    PipeContext, PipeError, PipeFunc, PipeFuncMetadata, PipeFuncRegistry, PipeState,
    RegistryOptions, Result,
};

use std::sync::Arc;
use tracing::debug;

/// One instance of every built-in pipe function
pub fn builtins() -> Vec<Arc<dyn PipeFunc>> {
    vec![
        Arc::new(ExistsPipeFunc),
        Arc::new(JsonPipeFunc),
        Arc::new(LenPipeFunc),
        Arc::new(NotNullPipeFunc),
    ]
}

/// Register every built-in pipe function with `registry`
///
/// # Errors
///
/// Returns [`PipeError::AlreadyRegistered`] on the first name the registry
/// already holds (unless it allows replacement). Builtins before that name
/// stay registered.
pub fn register_builtins(registry: &mut PipeFuncRegistry) -> Result<()> {
    for func in builtins() {
        registry.register(func)?;
    }
    debug!(count = registry.len(), "registered built-in pipe functions");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_have_distinct_names() {
        let names: Vec<_> = builtins().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["exists()", "json()", "len()", "notNull()"]);
    }

    #[test]
    fn register_builtins_fills_registry() {
        let mut registry = PipeFuncRegistry::new();
        register_builtins(&mut registry).unwrap();
        assert_eq!(
            registry.names(),
            vec!["exists()", "json()", "len()", "notNull()"]
        );
    }

    #[test]
    fn register_builtins_twice_fails() {
        let mut registry = PipeFuncRegistry::new();
        register_builtins(&mut registry).unwrap();

        let err = register_builtins(&mut registry).unwrap_err();
        assert!(matches!(err, PipeError::AlreadyRegistered { ref name } if name == "exists()"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn register_builtins_twice_with_replace() {
        let mut registry = PipeFuncRegistry::with_options(RegistryOptions {
            allow_replace: true,
        });
        register_builtins(&mut registry).unwrap();
        register_builtins(&mut registry).unwrap();
        assert_eq!(registry.len(), 4);
    }
}
