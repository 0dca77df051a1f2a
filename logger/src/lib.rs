use slog::{o, Drain, FnValue, Level, LevelFilter, Logger, Record};
use std::io;

/// Build a synchronous plain-text logger writing to `writer`.
///
/// Records below `level` are filtered out, `None` keeps everything from
/// `Info` up. When `with_location` is set every record carries a
/// `location` key with the emitting `file:line`.
pub fn set_logger_level<W>(writer: W, with_location: bool, level: Option<Level>) -> Logger
where
    W: io::Write + Send + 'static,
{
    let decorator = slog_term::PlainSyncDecorator::new(writer);
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = LevelFilter::new(drain, level.unwrap_or(Level::Info)).fuse();
    if with_location {
        Logger::root(
            drain,
            o!("location" => FnValue(|r: &Record| format!("{}:{}", r.file(), r.line()))),
        )
    } else {
        Logger::root(drain, o!())
    }
}

/// A logger that drops every record.
pub fn discard() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Logger writing to stderr, used by examples and ad-hoc debugging.
pub fn stderr_logger(level: Level) -> Logger {
    set_logger_level(io::stderr(), false, Some(level))
}
