//! Named defaults backing the config structs.

/// Request timeout for backend calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport attempts per logical generation request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Backoff unit for linearly increasing retry delay (attempt index × unit).
pub const DEFAULT_BACKOFF_UNIT_MS: u64 = 200;

/// Concurrent generations per escalation attempt. 1 reproduces the
/// sequential single-generation policy.
pub const DEFAULT_BATCH_SIZE: usize = 3;
