use std::time::Duration;

/// Sleep before the run after `run`: `base^run / divisor` seconds.
///
/// Results that do not fit in a [`Duration`] (overflow to infinity, NaN,
/// negative) saturate to `Duration::MAX`.
pub fn backoff_delay(run: u64, base: f64, divisor: f64) -> Duration {
    let secs = base.powf(run as f64) / divisor;
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}
