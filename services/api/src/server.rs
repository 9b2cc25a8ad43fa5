use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use casepath::config::AppConfig;
use casepath::error::AppError;
use casepath::telemetry;
use casepath::triage::TriageService;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_triage_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(load_catalog(&config.catalog)?);
    info!(
        catalog_version = catalog.version(),
        rules = catalog.len(),
        "pathway catalog loaded"
    );
    let triage_service = Arc::new(TriageService::new(catalog));

    let app = with_triage_routes(triage_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "case triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
