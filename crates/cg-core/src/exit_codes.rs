//! Exit codes for the commentgraph CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing. These are stable.

use cg_common::Error;

/// Exit codes for commentgraph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Document built (and published, for `build`)
    Success = 0,

    /// Input shape error: missing column, unequal columns, bad matrix dims
    InputShape = 11,

    /// A typed cell failed integer/float parsing
    ParseError = 12,

    /// File unreadable, malformed CSV framing, or publish move failed
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Success)
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::MissingColumn { .. }
            | Error::ColumnLength { .. }
            | Error::MatrixHeight { .. }
            | Error::MatrixWidth { .. } => ExitCode::InputShape,
            Error::Format { .. } => ExitCode::ParseError,
            Error::Io { .. } | Error::Csv { .. } | Error::Json(_) => ExitCode::IoError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
