use std::fs::File;
use std::io::BufReader;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use casepath::config::CatalogConfig;
use casepath::error::AppError;
use casepath::triage::{RuleCatalog, TriageError};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the pathway rule catalog selected by configuration. Without a
/// configured path the builtin reference catalog is used.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<RuleCatalog, AppError> {
    match &config.path {
        Some(path) => {
            let file = File::open(path)?;
            let catalog =
                RuleCatalog::from_json_reader(BufReader::new(file)).map_err(TriageError::from)?;
            Ok(catalog)
        }
        None => Ok(RuleCatalog::builtin()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
