//! Emitter tunables.
//!
//! The binary has no flags, environment variables, or config file; it
//! always runs with [`EmitterConfig::default`]. The struct keeps the
//! constants of the emitted stream in one validated place.

/// Line written once before the first run.
pub const STARTUP_LINE: &str = "Starting calc-app...";

pub const DEFAULT_DIE_SIDES: u32 = 4;
pub const DEFAULT_FAILING_FACE: u32 = 4;
pub const DEFAULT_BACKOFF_BASE: f64 = 1.2;
pub const DEFAULT_BACKOFF_DIVISOR: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("startup line must not be empty")]
    EmptyStartupLine,
    #[error("die_sides must be at least 1")]
    NoDieSides,
    #[error("failing_face {face} must be within 1..={sides}")]
    FailingFaceOutOfRange { face: u32, sides: u32 },
    #[error("backoff_base must be a finite number greater than zero (got {0})")]
    InvalidBackoffBase(f64),
    #[error("backoff_divisor must be a finite number greater than zero (got {0})")]
    InvalidBackoffDivisor(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    pub startup_line: String,
    /// Faces of the die rolled each run.
    pub die_sides: u32,
    /// The roll that turns a run into a simulated failure.
    pub failing_face: u32,
    pub backoff_base: f64,
    pub backoff_divisor: f64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            startup_line: STARTUP_LINE.to_string(),
            die_sides: DEFAULT_DIE_SIDES,
            failing_face: DEFAULT_FAILING_FACE,
            backoff_base: DEFAULT_BACKOFF_BASE,
            backoff_divisor: DEFAULT_BACKOFF_DIVISOR,
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.startup_line.trim().is_empty() {
            return Err(ConfigError::EmptyStartupLine);
        }
        if self.die_sides == 0 {
            return Err(ConfigError::NoDieSides);
        }
        if self.failing_face == 0 || self.failing_face > self.die_sides {
            return Err(ConfigError::FailingFaceOutOfRange {
                face: self.failing_face,
                sides: self.die_sides,
            });
        }
        if !self.backoff_base.is_finite() || self.backoff_base <= 0.0 {
            return Err(ConfigError::InvalidBackoffBase(self.backoff_base));
        }
        if !self.backoff_divisor.is_finite() || self.backoff_divisor <= 0.0 {
            return Err(ConfigError::InvalidBackoffDivisor(self.backoff_divisor));
        }
        Ok(())
    }
}
