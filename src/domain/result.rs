//! Result type alias for datamask

use super::errors::MaskError;

/// Result type alias for datamask operations
///
/// # Examples
///
/// ```
/// use datamask::domain::result::Result;
/// use datamask::domain::errors::MaskError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MaskError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MaskError>;
