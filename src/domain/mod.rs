//! Domain types for datamask.
//!
//! The domain layer provides:
//! - **Error types** ([`MaskError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, MaskError>`]:
//!
//! ```rust
//! use datamask::domain::Result;
//! use datamask::masking::{MaskingConfig, MaskingRegistry};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let registry = MaskingRegistry::new(&MaskingConfig::default())?;
//!     assert_eq!(registry.mask_char(), '○');
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::MaskError;
pub use result::Result;
