//! Built-in configuration defaults.

use std::env;

use camino::Utf8PathBuf;

use crate::logging::LogFormat;

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Directory under the system temporary directory holding import scratch
/// files.
pub const IMPORT_DIR_COMPONENTS: [&str; 2] = ["omaps-intent", "import"];

/// Default log filter expression.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default scratch directory for bookmark imports.
///
/// Falls back to `/tmp` when the system temporary directory is not valid
/// UTF-8.
#[must_use]
pub fn default_import_dir() -> Utf8PathBuf {
    let mut base = Utf8PathBuf::from_path_buf(env::temp_dir())
        .unwrap_or_else(|_| Utf8PathBuf::from("/tmp"));
    base.extend(IMPORT_DIR_COMPONENTS);
    base
}
