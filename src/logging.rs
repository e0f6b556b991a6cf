use std::error::Error as StdError;
use std::io::Write;

use env_logger::{Builder, Target, fmt::Formatter};
use log::{Level, LevelFilter};

use crate::Result;
use crate::error::Error;

/// Sends log records to stderr as `LEVEL message` lines.
///
/// The level comes from the caller; the environment is not consulted.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    Builder::new()
        .filter_level(level)
        .write_style(env_logger::WriteStyle::Never)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .target(Target::Stderr)
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

/// Logs an error followed by each of its causes.
pub fn log_error_chain(e: &Error) {
    log::error!("{e}");
    let mut source = StdError::source(e);
    while let Some(cause) = source {
        log::error!("  caused by: {cause}");
        source = cause.source();
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        // the first call may already have happened in another test
        let _ = init_logger(LevelFilter::Off);
        assert!(matches!(init_logger(LevelFilter::Off), Err(Error::Logger(_))));
    }
}
