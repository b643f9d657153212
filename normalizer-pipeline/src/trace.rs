pub mod subscriber;

// line record fields:
pub const EVENT_FIELD: &str = "event";
pub const PATH_FIELD: &str = "path";
pub const LINE_FIELD: &str = "line";
pub const TEXT_FIELD: &str = "text";
pub const OUTPUT_FIELD: &str = "output";
pub const ERROR_FIELD: &str = "error";

// log event types:
/// An input file was read.
pub const READ: &str = "@read";

/// A line was normalized.
pub const NORMALIZE: &str = "@normalize";

/// A line failed to normalize and is left out of the output.
pub const SKIP: &str = "@skip";

/// An output file was written.
pub const WRITE: &str = "@write";

/// A file could not be read or written.
pub const FAIL: &str = "@fail";
