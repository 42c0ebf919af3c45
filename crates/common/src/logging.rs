//! Logging utilities.

use serde::{Deserialize, Serialize};
pub use tracing_subscriber::util::TryInitError;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Check a configured log filter.
///
/// Accepts anything `EnvFilter` parses, except bare words that are not a
/// level (`bogus` would otherwise enable tracing for a target named bogus).
pub fn validate_filter(filter: &str) -> Result<(), String> {
    if filter.trim().is_empty() {
        return Err("log filter is empty".to_string());
    }

    EnvFilter::try_new(filter).map_err(|e| e.to_string())?;

    for directive in filter.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let targeted = directive.contains('=') || directive.contains('[');
        if !targeted && directive.parse::<LevelFilter>().is_err() {
            return Err(format!("unknown log level: {}", directive));
        }
    }

    Ok(())
}

/// Initialize tracing from configured settings.
///
/// RUST_LOG takes precedence over `level`. Fails if a global subscriber is
/// already installed.
pub fn try_init(level: &str, format: LogFormat) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        assert!(try_init("debug", LogFormat::Text).is_ok());
        assert!(try_init("info", LogFormat::Json).is_err());
    }

    #[test]
    fn test_validate_filter() {
        assert!(validate_filter("info").is_ok());
        assert!(validate_filter("warn,keepalived_state=debug").is_ok());
        assert!(validate_filter("keepalived_state[cycle]=trace").is_ok());

        assert!(validate_filter("").is_err());
        assert!(validate_filter("bogus").is_err());
        assert!(validate_filter("info,verbose").is_err());
        assert!(validate_filter("keepalived_state=loud").is_err());
    }

    #[test]
    fn test_format_parsing() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
