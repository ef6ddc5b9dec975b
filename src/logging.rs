use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log level (error, warn, info, debug, trace, off)
pub const LOG_ENV: &str = "STARGATE_LOG";

/// Pick the log level: --verbose wins, then STARGATE_LOG, otherwise logging is off
pub fn resolve_level(verbose: bool, env_level: Option<&str>) -> LevelFilter {
    if verbose {
        return LevelFilter::TRACE;
    }

    env_level
        .and_then(|level| LevelFilter::from_str(level.trim()).ok())
        .unwrap_or(LevelFilter::OFF)
}

/// Initialize logging to stderr.
///
/// Returns the writer guard; keep it alive until exit so buffered records are flushed.
/// Returns `None` when logging is off.
pub fn init(verbose: bool, json: bool) -> Option<WorkerGuard> {
    let env_level = std::env::var(LOG_ENV).ok();
    let level = resolve_level(verbose, env_level.as_deref());

    if level == LevelFilter::OFF {
        return None;
    }

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let plain = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking.clone())
            .with_ansi(false)
            .with_target(false)
    });
    let structured = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_ansi(false)
    });

    let result = tracing_subscriber::registry()
        .with(level)
        .with(plain)
        .with(structured)
        .try_init();

    if result.is_err() {
        return None;
    }

    tracing::debug!("Logging initialized at {}", level);
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_verbose_is_trace() {
        assert_eq!(resolve_level(true, None), LevelFilter::TRACE);
        assert_eq!(resolve_level(true, Some("error")), LevelFilter::TRACE);
    }

    #[test]
    fn test_env_level_parsed() {
        assert_eq!(resolve_level(false, Some("debug")), LevelFilter::DEBUG);
        assert_eq!(resolve_level(false, Some(" WARN ")), LevelFilter::WARN);
        assert_eq!(resolve_level(false, Some("off")), LevelFilter::OFF);
    }

    #[test]
    fn test_default_is_off() {
        assert_eq!(resolve_level(false, None), LevelFilter::OFF);
        assert_eq!(resolve_level(false, Some("loud")), LevelFilter::OFF);
    }
}
