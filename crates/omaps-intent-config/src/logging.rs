//! Diagnostic output format selection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Shape of the diagnostic events written to standard error.
///
/// Standard output stays reserved for resolved commands and transcripts, so
/// the format only affects what a log collector or a person reading the
/// terminal sees. Parsing ignores ASCII case, so `--log-format Compact` works.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Newline-delimited JSON with event fields at the top level.
    #[default]
    Json,
    /// Terse single-line text for interactive use.
    Compact,
}

impl LogFormat {
    /// Returns `true` for formats intended for machine consumption.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}
