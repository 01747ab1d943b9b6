//! Stable codes carried in the `code` field of error replies.

/// Input validation failed
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Resource not found
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Missing, expired or invalid session
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";

/// Add-side duplicate, e.g. an already assigned user
pub const CONFLICT: &str = "CONFLICT";

/// A stored reference points at a record that no longer exists
pub const INCONSISTENT_STATE: &str = "INCONSISTENT_STATE";

/// Internal server error
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Unknown event or malformed frame
pub const INVALID_MESSAGE: &str = "INVALID_MESSAGE";

/// Rate limit exceeded
pub const RATE_LIMITED: &str = "RATE_LIMITED";
