use crate::infra::{split_list, AppState};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use budget_allocator::accounts::{account_router, AccountBackend};
use budget_allocator::error::AppError;
use budget_allocator::planner::reference::{city_groups, currencies};
use budget_allocator::planner::{
    course_fields, get_relevant_courses, AdviceSelection, BudgetPlan, BudgetRequest, CityGroup,
    Course, Currency,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlanQuery {
    /// Fixes the tip selection so repeated calls return the same advice.
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CoursesQuery {
    /// Comma-separated career fields.
    #[serde(default)]
    pub(crate) fields: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CoursesResponse {
    pub(crate) fields: Vec<String>,
    pub(crate) courses: Vec<Course>,
}

pub(crate) fn with_planner_routes<B>(accounts: Arc<B>) -> axum::Router
where
    B: AccountBackend + 'static,
{
    account_router(accounts)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/plan", post(plan_endpoint))
        .route("/api/v1/cities", get(cities_endpoint))
        .route("/api/v1/currencies", get(currencies_endpoint))
        .route("/api/v1/courses", get(courses_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn plan_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<PlanQuery>,
    Json(request): Json<BudgetRequest>,
) -> Result<Json<BudgetPlan>, AppError> {
    let plan = match query.seed {
        Some(seed) => {
            let validated = request.validate()?;
            state
                .planner
                .plan_validated(&validated, AdviceSelection::Seeded(seed))
        }
        None => state.planner.plan(&request)?,
    };

    Ok(Json(plan))
}

pub(crate) async fn cities_endpoint() -> Json<&'static [CityGroup]> {
    Json(city_groups())
}

pub(crate) async fn currencies_endpoint() -> Json<&'static [Currency]> {
    Json(currencies())
}

pub(crate) async fn courses_endpoint(Query(query): Query<CoursesQuery>) -> Json<CoursesResponse> {
    let fields = match query.fields.as_deref().map(split_list) {
        Some(fields) if !fields.is_empty() => fields,
        _ => course_fields().iter().map(|field| field.to_string()).collect(),
    };
    let courses = get_relevant_courses(&fields).into_iter().cloned().collect();

    Json(CoursesResponse { fields, courses })
}
