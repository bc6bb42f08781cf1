//! pipefuncs core - contract between pipe functions and their host
//!
//! This crate defines what a JSON-assertion host and its pipe functions
//! agree on, without implementing any function itself:
//!
//! - Pipeline state (current value plus presence flag)
//! - Execution context
//! - The `PipeFunc` trait
//! - An explicit, host-owned registry
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod func;
pub mod registry;
pub mod state;

// Re-export commonly used types
pub use context::PipeContext;
pub use error::{PipeError, Result};
pub use func::{PipeFunc, PipeFuncMetadata};
pub use registry::{PipeFuncRegistry, RegistryOptions};
pub use state::PipeState;
