//! Exit code constants for the btdiff CLI.
//!
//! - 0: Success (or no changes when `--exit-code` is given)
//! - 1: User error (bad args, missing tree, invalid config)
//! - 2: Parse failure (unreadable or malformed XML)
//! - 3: Precondition violation (a tree with duplicate node paths)
//! - 4: Changes detected (only with `--exit-code`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown tree, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the XML document could not be read or parsed.
pub const PARSE_FAILURE: i32 = 2;

/// Precondition violation: an input tree is not path-unique.
pub const PRECONDITION_FAILURE: i32 = 3;

/// The compared trees differ and `--exit-code` was requested.
pub const CHANGES_DETECTED: i32 = 4;
