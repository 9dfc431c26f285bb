//! calc-app: emits an endless stream of run status lines with a simulated
//! division-by-zero failure on roughly one run in four and an exponential
//! sleep between runs.

pub mod backend;
pub mod backoff;
pub mod calc;
pub mod config;
pub mod emitter;
pub mod error;
pub mod logging;

use std::io::Write;

use rand::Rng;

use crate::backend::{RunBackend, SystemRunBackend};
use crate::config::EmitterConfig;
use crate::emitter::Emitter;
use crate::logging::{init_logger, LogLevel, Logger, LoggingConfig, VersionInfo};

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "calc-app"
}

/// Entry point for the binary. Command-line arguments are ignored.
pub fn run_from_env() -> i32 {
    let logger = init_logger(&LoggingConfig::default());
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    run_with_backend(
        &mut out,
        &mut err,
        &SystemRunBackend,
        rand::thread_rng(),
        &logger,
    )
}

/// Runs the emitter until writing to `stdout` fails, then returns the
/// process exit code. Setup and shutdown records go to `stderr`.
pub fn run_with_backend<R: Rng>(
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    backend: &dyn RunBackend,
    rng: R,
    logger: &Logger,
) -> i32 {
    let version = VersionInfo::default();
    logger.write_record(
        stderr,
        LogLevel::Debug,
        "calc-app starting",
        &[
            ("version", &version.version),
            ("commit", &version.commit),
            ("built", &version.date),
        ],
    );

    let mut emitter = match Emitter::new(EmitterConfig::default(), rng) {
        Ok(emitter) => emitter.with_logger(logger.clone()),
        Err(err) => {
            logger.write_record(
                stderr,
                LogLevel::Error,
                "emitter setup failed",
                &[("error", &err.to_string())],
            );
            return 1;
        }
    };

    match emitter.run(stdout, backend) {
        Ok(never) => match never {},
        Err(err) => {
            logger.write_record(
                stderr,
                LogLevel::Error,
                "status stream closed",
                &[
                    ("error", &err.to_string()),
                    ("runs", &emitter.run_count().to_string()),
                ],
            );
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{crate_label, run_with_backend};
    use crate::backend::RecordingRunBackend;
    use crate::logging::{init_logger, LoggingConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::{self, Write};

    struct ClosesAfter {
        written: Vec<u8>,
        ok_flushes: usize,
    }

    impl Write for ClosesAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.ok_flushes == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            self.ok_flushes -= 1;
            Ok(())
        }
    }

    #[test]
    fn crate_label_is_stable() {
        assert_eq!(crate_label(), "calc-app");
    }

    #[test]
    fn closed_stdout_exits_with_one() {
        let backend = RecordingRunBackend::default();
        let logger = init_logger(&LoggingConfig::default());
        let mut out = ClosesAfter {
            written: Vec::new(),
            ok_flushes: 3,
        };
        let mut err: Vec<u8> = Vec::new();
        let code = run_with_backend(
            &mut out,
            &mut err,
            &backend,
            StdRng::seed_from_u64(9),
            &logger,
        );
        assert_eq!(code, 1);

        let diagnostics = String::from_utf8_lossy(&err).to_string();
        let records: Vec<&str> = diagnostics.lines().collect();
        assert_eq!(records.len(), 1, "{diagnostics}");
        assert!(records[0].contains("ERROR component=calc-app"), "{diagnostics}");
        assert!(records[0].contains("error=write status line: "), "{diagnostics}");
        assert!(records[0].contains("runs=3"), "{diagnostics}");
        assert!(records[0].ends_with("status stream closed"), "{diagnostics}");

        let text = String::from_utf8_lossy(&out.written).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Starting calc-app...");
        // the fourth line was written but its flush failed
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("Run 3 "));
        assert_eq!(backend.sleeps.borrow().len(), 2);
    }
}
