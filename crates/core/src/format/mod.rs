//! The two textual dialects of the defaults file.
//!
//! Legacy: header line `SDF`, whitespace-separated `NAME VALUE` lines,
//! `#` comments, terminator `END`. Modern: `NAME = VALUE` assignments
//! with `#` comments and no header. The reader accepts both; the
//! writer always emits legacy.

pub mod reader;
pub mod writer;

/// Magic prefix identifying the legacy dialect.
pub const LEGACY_HEADER: &str = "SDF";

/// Sentinel terminating a legacy-dialect file.
pub const LEGACY_TERMINATOR: &str = "END";

/// Legacy option name accepted as an alias for `FAR_UNIVERSE_RADIUS`.
pub const UNIVERSE_RADIUS_ALIAS: &str = "UNIVERSE_RADIUS";

pub use reader::{parse_defaults, read_defaults_file};
pub use writer::{render_defaults, write_defaults_file};
