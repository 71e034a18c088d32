use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_planner_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use budget_allocator::accounts::AccountClient;
use budget_allocator::config::AppConfig;
use budget_allocator::error::AppError;
use budget_allocator::planner::BudgetPlanner;
use budget_allocator::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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
        planner: Arc::new(BudgetPlanner::new(config.planner)),
    };

    let accounts = Arc::new(AccountClient::from_config(&config.accounts));

    let app = with_planner_routes(accounts)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        advice_mode = ?config.planner.advice_mode,
        career_catalog = ?config.planner.career_catalog,
        "budget planner ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
