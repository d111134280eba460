//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod interactive;
pub mod mask;
pub mod mask_json;
pub mod strategies;
pub mod validate;
