//! Host-owned registry of pipe functions
//!
//! The registry is an ordinary value: the host creates one at startup,
//! fills it with an explicit registration call, then looks functions up by
//! name for the rest of the run.
//!
//! ```rust
//! use pipefuncs_core::{PipeContext, PipeFunc, PipeFuncRegistry, PipeState, Result};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! struct Always;
//!
//! impl PipeFunc for Always {
//!     fn name(&self) -> &'static str {
//!         "always()"
//!     }
//!
//!     fn handle(&self, _ctx: &PipeContext, state: &mut PipeState) -> Result<()> {
//!         *state = PipeState::present(json!(true));
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = PipeFuncRegistry::new();
//! registry.register(Arc::new(Always))?;
//!
//! let mut state = PipeState::absent();
//! registry.invoke("always()", &PipeContext::new(), &mut state)?;
//! assert_eq!(state.value, json!(true));
//! # Ok::<(), pipefuncs_core::PipeError>(())
//! ```

use crate::{PipeContext, PipeError, PipeFunc, PipeFuncMetadata, PipeState, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Registry configuration
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Replace an existing entry on duplicate registration instead of failing
    pub allow_replace: bool,
}

/// Mapping from pipeline-syntax name to pipe function
#[derive(Default)]
pub struct PipeFuncRegistry {
    funcs: HashMap<&'static str, Arc<dyn PipeFunc>>,
    options: RegistryOptions,
}

impl PipeFuncRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given options
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            funcs: HashMap::new(),
            options,
        }
    }

    /// Options this registry was created with
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Register a pipe function
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::AlreadyRegistered`] if the name is taken and
    /// replacement is not allowed
    pub fn register(&mut self, func: Arc<dyn PipeFunc>) -> Result<()> {
        let name = func.name();
        if self.funcs.contains_key(name) {
            if !self.options.allow_replace {
                return Err(PipeError::AlreadyRegistered {
                    name: name.to_string(),
                });
            }
            warn!(func = name, "replacing registered pipe function");
        }

        debug!(func = name, "registered pipe function");
        self.funcs.insert(name, func);
        Ok(())
    }

    /// Unregister a pipe function by name
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn PipeFunc>> {
        self.funcs.remove(name)
    }

    /// Get a pipe function by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn PipeFunc>> {
        self.funcs.get(name).cloned()
    }

    /// Whether a function is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Look up `name` and run it against `state`
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::NotFound`] for unknown names, otherwise whatever
    /// the function itself returns
    pub fn invoke(&self, name: &str, ctx: &PipeContext, state: &mut PipeState) -> Result<()> {
        let func = self.funcs.get(name).ok_or_else(|| PipeError::NotFound {
            name: name.to_string(),
        })?;
        trace!(func = name, present = state.present, "invoking pipe function");
        func.handle(ctx, state)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.funcs.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Metadata of all registered functions, sorted by name
    pub fn list(&self) -> Vec<PipeFuncMetadata> {
        self.names()
            .into_iter()
            .filter_map(|name| self.funcs.get(name))
            .map(|f| f.metadata())
            .collect()
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Whether no functions are registered
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl std::fmt::Debug for PipeFuncRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipeFuncRegistry")
            .field("funcs", &self.names())
            .field("options", &self.options)
            .finish()
    }
}
