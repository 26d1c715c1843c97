// Public modules
pub mod answers;
pub mod assets;
pub mod console;
pub mod context;
pub mod defaults;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod install;
pub mod local_files;
pub mod manifest;
pub mod paths;
pub mod plan;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
