use std::path::Path;

use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
};

use crate::Result;

/// Colored logs on stderr. `RUST_LOG` overrides `default_level`.
pub fn setup_console_logging(default_level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_level)?
        .format(colored_default_format)
        .start()?;
    Ok(handle)
}

/// Rotating log files in `directory`, with info and above echoed to stderr.
///
/// The returned handle must be kept alive for as long as logs should be written.
pub fn setup_logging(directory: &Path, default_level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_level)?
        .log_to_file(FileSpec::default().directory(directory).basename("twenty48"))
        .duplicate_to_stderr(Duplicate::Info)
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // 10 MB per file
            Naming::Numbers,
            Cleanup::KeepLogFiles(7),
        )
        .start()?;
    Ok(handle)
}
