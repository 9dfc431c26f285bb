//! The run loop: roll, report, flush, back off, repeat.

use std::convert::Infallible;
use std::fmt;
use std::io::Write;
use std::time::Duration;

use rand::Rng;

use crate::backend::RunBackend;
use crate::backoff::backoff_delay;
use crate::calc::{simulate_failure, CalcError};
use crate::config::EmitterConfig;
use crate::error::EmitError;
use crate::logging::{LogLevel, Logger, LoggingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded,
    Failed { error: CalcError },
}

impl RunOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => f.write_str("succeeded"),
            Self::Failed { error } => write!(f, "failed with error: {error}"),
        }
    }
}

/// What one iteration produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub run: u64,
    pub outcome: RunOutcome,
    /// Sleep taken after the line was flushed.
    pub delay: Duration,
}

impl RunReport {
    pub fn status_line(&self) -> String {
        status_line(self.run, &self.outcome)
    }
}

pub fn status_line(run: u64, outcome: &RunOutcome) -> String {
    format!("Run {run} {outcome}")
}

pub struct Emitter<R> {
    config: EmitterConfig,
    rng: R,
    runs: u64,
    logger: Logger,
}

impl<R: Rng> Emitter<R> {
    pub fn new(config: EmitterConfig, rng: R) -> Result<Self, EmitError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            runs: 0,
            logger: Logger::new(&LoggingConfig::default()),
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Runs completed so far; 0 before the first step.
    pub fn run_count(&self) -> u64 {
        self.runs
    }

    pub fn start(&mut self, out: &mut dyn Write) -> Result<(), EmitError> {
        writeln!(out, "{}", self.config.startup_line)?;
        out.flush()?;
        Ok(())
    }

    /// Perform exactly one run: roll, print, flush, sleep.
    pub fn step(
        &mut self,
        out: &mut dyn Write,
        backend: &dyn RunBackend,
    ) -> Result<RunReport, EmitError> {
        self.runs += 1;
        let run = self.runs;

        let roll = self.rng.gen_range(1..=self.config.die_sides);
        let outcome = if roll == self.config.failing_face {
            RunOutcome::Failed {
                error: simulate_failure(),
            }
        } else {
            RunOutcome::Succeeded
        };

        writeln!(out, "{}", status_line(run, &outcome))?;
        out.flush()?;

        let delay = backoff_delay(run, self.config.backoff_base, self.config.backoff_divisor);
        if self.logger.enabled(LogLevel::Debug) {
            self.logger.debug_with(
                "run reported",
                &[
                    ("run", &run.to_string()),
                    ("outcome", outcome.label()),
                    ("delay_ms", &delay.as_millis().to_string()),
                ],
            );
        }
        backend.sleep(delay);

        Ok(RunReport {
            run,
            outcome,
            delay,
        })
    }

    /// Print the startup line, then step until the output breaks.
    ///
    /// There is no internal exit condition; the `Ok` side is uninhabited.
    pub fn run(
        &mut self,
        out: &mut dyn Write,
        backend: &dyn RunBackend,
    ) -> Result<Infallible, EmitError> {
        self.start(out)?;
        loop {
            self.step(out, backend)?;
        }
    }
}
