use crate::config::gmu_version_str;
use slog::{Drain, Level, Logger};
use std::fs::File;
use std::path::PathBuf;

/// Where `--log` sends gmu's messages.
pub enum LoggingMode {
    /// Terminal only. Registry updates and checkout progress read as plain lines.
    Stderr,

    /// Terminal plus a full-format copy in the given file, e.g. to keep a record of switches.
    Tee(PathBuf),

    /// The given file only; the terminal stays quiet apart from command output.
    File(PathBuf),
}

/// Renders a record as one line: `WARN: ...` or `ERRO: ...` for problems, the bare message otherwise.
pub struct GmuFormat<D>
where
    D: slog_term::Decorator,
{
    decorator: D,
}

impl<D: slog_term::Decorator> GmuFormat<D> {
    pub fn new(decorator: D) -> GmuFormat<D> {
        GmuFormat { decorator }
    }
}

impl<D: slog_term::Decorator> slog::Drain for GmuFormat<D> {
    type Ok = ();
    type Err = std::io::Error;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        let level = record.level();
        self.decorator.with_record(record, values, |line| {
            if level.is_at_least(Level::Warning) {
                line.start_level()?;
                write!(line, "{}: ", level.as_str())?;
                line.start_whitespace()?;
            }
            line.start_msg()?;
            writeln!(line, "{}", record.msg())?;
            line.flush()
        })
    }
}

// An unusable log file is reported once and gmu keeps logging to the terminal.
fn create_drain(mode: LoggingMode) -> Logger {
    match mode {
        LoggingMode::Stderr => {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            let drain = GmuFormat::new(decorator).fuse();
            Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
        }
        LoggingMode::File(out) => match File::create(&out) {
            Ok(file) => {
                let decorator = slog_term::PlainDecorator::new(file);
                let drain = slog_term::FullFormat::new(decorator).build().fuse();
                Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
            }
            Err(err) => {
                eprintln!("Cannot open log file {}: {}", out.display(), err);
                create_drain(LoggingMode::Stderr)
            }
        },
        LoggingMode::Tee(out) => Logger::root(
            slog::Duplicate::new(
                create_drain(LoggingMode::Stderr),
                create_drain(LoggingMode::File(out)),
            )
            .fuse(),
            slog::o!(),
        ),
    }
}

/// Maps `--verbose` minus `--quiet` to a log level. Below -3 everything is discarded.
pub fn log_level(verbose_level: i64) -> Option<Level> {
    match verbose_level {
        -3 => Some(Level::Critical),
        -2 => Some(Level::Error),
        -1 => Some(Level::Warning),
        0 => Some(Level::Info),
        1 => Some(Level::Debug),
        x if x > 1 => Some(Level::Trace),
        _ => None,
    }
}

/// The logger handed to the identity manager, filtered to the level picked on the command line.
pub fn create_root_logger(verbose_level: i64, mode: LoggingMode) -> Logger {
    let Some(level) = log_level(verbose_level) else {
        return Logger::root(slog::Discard, slog::o!());
    };

    let drain = slog::LevelFilter::new(create_drain(mode), level).fuse();
    Logger::root(drain, slog::o!("version" => gmu_version_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn problems_carry_their_level_and_progress_is_bare() {
        let captured = Captured::default();
        let decorator = slog_term::PlainSyncDecorator::new(captured.clone());
        let logger = Logger::root(GmuFormat::new(decorator).fuse(), slog::o!());

        slog::info!(logger, r#"Registered new identity "alice"."#);
        slog::warn!(logger, "Not registering the current identity");

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            text,
            "Registered new identity \"alice\".\nWARN: Not registering the current identity\n"
        );
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), Some(Level::Info));
        assert_eq!(log_level(1), Some(Level::Debug));
        assert_eq!(log_level(5), Some(Level::Trace));
        assert_eq!(log_level(-2), Some(Level::Error));
        assert_eq!(log_level(-4), None);
    }
}
