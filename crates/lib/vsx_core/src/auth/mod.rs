//! Authentication-related lookups.
//!
//! Store errors are returned as-is; nothing here retries or wraps them.

pub mod tokens;
