//! Result type alias for Tillsyn
//!
//! This module provides a convenient Result type alias that uses TillsynError
//! as the error type.

use super::errors::TillsynError;

/// Result type alias for Tillsyn operations
///
/// This is a convenience type alias that uses `TillsynError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use tillsyn::domain::result::Result;
/// use tillsyn::domain::errors::TillsynError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(TillsynError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TillsynError>;
