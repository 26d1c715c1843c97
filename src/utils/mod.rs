//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Command execution with error handling
//! - `path` - Relative path fragment normalization
//! - `slugify` - String slug generation
//! - `template` - String template rendering

pub mod command;
pub mod path;
pub mod slugify;
pub mod template;
