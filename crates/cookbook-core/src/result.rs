//! Result type aliases for the Cookbook service.

use crate::CookbookError;

/// A specialized `Result` type for Cookbook operations.
pub type CookbookResult<T> = Result<T, CookbookError>;
