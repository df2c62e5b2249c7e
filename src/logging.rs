use flexi_logger::{
    opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use std::path::Path;

/// Starts the global logger. `RUST_LOG` wins over `default_level`.
///
/// With a directory, logs go to size-rotated files there; otherwise to stderr.
/// Keep the returned handle alive for the lifetime of the program.
pub fn setup_logging(
    default_level: &str,
    log_dir: Option<&Path>,
) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(default_level)?.format(opt_format);

    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("aztec2048"))
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // 10 MB per file
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            ),
        None => logger.log_to_stderr(),
    };

    logger.start()
}
