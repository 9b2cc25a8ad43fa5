use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the configured
/// level so operators can raise verbosity without a config change.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn parse_filter(configured_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(configured_level).map_err(|source| TelemetryError::EnvFilter {
        value: configured_level.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_filter_reports_the_offending_value() {
        let error = parse_filter("casepath=debug=extra").expect_err("directive is malformed");

        match &error {
            TelemetryError::EnvFilter { value, .. } => {
                assert_eq!(value, "casepath=debug=extra");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
        assert!(error.to_string().contains("casepath=debug=extra"));
    }
}
