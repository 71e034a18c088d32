use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::backend::{AccountBackend, AccountError};
use super::domain::{
    CourseProgress, Credentials, Enrollment, LessonProgress, ProfileDefaults, Session,
    SignUpRequest, UserProfile,
};

#[derive(Debug, Deserialize)]
pub(crate) struct EnrollmentRequest {
    pub(crate) course_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LessonProgressRequest {
    pub(crate) course_id: String,
    pub(crate) module_id: String,
    pub(crate) lesson_id: String,
    /// Lesson count of the whole course, used to roll progress up.
    pub(crate) total_lessons: u32,
}

/// Router exposing sign-in, profile and course-progress endpoints.
pub fn account_router<B>(backend: Arc<B>) -> Router
where
    B: AccountBackend + 'static,
{
    Router::new()
        .route("/api/v1/auth/sign-in", post(sign_in_handler::<B>))
        .route("/api/v1/auth/sign-up", post(sign_up_handler::<B>))
        .route("/api/v1/auth/sign-out", post(sign_out_handler::<B>))
        .route(
            "/api/v1/profile",
            get(profile_handler::<B>).put(save_profile_handler::<B>),
        )
        .route("/api/v1/enrollments", post(enrollment_handler::<B>))
        .route("/api/v1/lesson-progress", post(lesson_progress_handler::<B>))
        .with_state(backend)
}

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

async fn authenticate<B>(backend: &B, headers: &HeaderMap) -> Result<Session, AccountError>
where
    B: AccountBackend,
{
    let token = bearer_token(headers).ok_or(AccountError::Unauthorized)?;
    backend
        .session(token)
        .await?
        .ok_or(AccountError::Unauthorized)
}

fn error_response(error: AccountError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (error.status_code(), axum::Json(payload)).into_response()
}

pub(crate) async fn sign_in_handler<B>(
    State(backend): State<Arc<B>>,
    axum::Json(credentials): axum::Json<Credentials>,
) -> Response
where
    B: AccountBackend + 'static,
{
    match backend.sign_in(&credentials).await {
        Ok(session) => (StatusCode::OK, axum::Json(session)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn sign_up_handler<B>(
    State(backend): State<Arc<B>>,
    axum::Json(request): axum::Json<SignUpRequest>,
) -> Response
where
    B: AccountBackend + 'static,
{
    match backend.sign_up(&request).await {
        Ok(session) => {
            let payload = json!({
                "session": session,
                "confirmation_required": session.is_none(),
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn sign_out_handler<B>(State(backend): State<Arc<B>>, headers: HeaderMap) -> Response
where
    B: AccountBackend + 'static,
{
    let Some(token) = bearer_token(&headers) else {
        return StatusCode::NO_CONTENT.into_response();
    };
    let session = match backend.session(token).await {
        Ok(Some(session)) => session,
        Ok(None) => return StatusCode::NO_CONTENT.into_response(),
        Err(error) => return error_response(error),
    };

    match backend.sign_out(&session).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<B>(State(backend): State<Arc<B>>, headers: HeaderMap) -> Response
where
    B: AccountBackend + 'static,
{
    let session = match authenticate(backend.as_ref(), &headers).await {
        Ok(session) => session,
        Err(error) => return error_response(error),
    };

    match backend.fetch_profile(&session).await {
        Ok(Some(profile)) => {
            let defaults = ProfileDefaults::from_profile(&profile);
            let payload = json!({
                "profile": profile,
                "defaults": defaults,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(None) => error_response(AccountError::NotFound),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_profile_handler<B>(
    State(backend): State<Arc<B>>,
    headers: HeaderMap,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response
where
    B: AccountBackend + 'static,
{
    let session = match authenticate(backend.as_ref(), &headers).await {
        Ok(session) => session,
        Err(error) => return error_response(error),
    };

    match backend.save_profile(&session, &profile).await {
        Ok(saved) => (StatusCode::OK, axum::Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn enrollment_handler<B>(
    State(backend): State<Arc<B>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<EnrollmentRequest>,
) -> Response
where
    B: AccountBackend + 'static,
{
    let session = match authenticate(backend.as_ref(), &headers).await {
        Ok(session) => session,
        Err(error) => return error_response(error),
    };

    let enrollment = Enrollment::started(&session.user_id, &request.course_id, Utc::now());
    match backend.enroll(&session, &enrollment).await {
        Ok(saved) => (StatusCode::OK, axum::Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn lesson_progress_handler<B>(
    State(backend): State<Arc<B>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<LessonProgressRequest>,
) -> Response
where
    B: AccountBackend + 'static,
{
    let session = match authenticate(backend.as_ref(), &headers).await {
        Ok(session) => session,
        Err(error) => return error_response(error),
    };

    if request.total_lessons == 0 {
        return error_response(AccountError::Invalid(
            "total_lessons must be at least 1".to_string(),
        ));
    }

    match record_lesson(backend.as_ref(), &session, &request).await {
        Ok((lesson, enrollment)) => {
            let payload = json!({
                "lesson": lesson,
                "enrollment": enrollment,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Marks the lesson complete, then recounts the course's completed lessons
/// and writes the percentage onto the enrollment.
async fn record_lesson<B>(
    backend: &B,
    session: &Session,
    request: &LessonProgressRequest,
) -> Result<(LessonProgress, Option<Enrollment>), AccountError>
where
    B: AccountBackend,
{
    let now = Utc::now();
    let progress = LessonProgress::completed(
        &session.user_id,
        &request.course_id,
        &request.module_id,
        &request.lesson_id,
        now,
    );
    let lesson = backend.upsert_lesson_progress(session, &progress).await?;

    let completed = backend
        .completed_lessons(session, &request.course_id)
        .await?;
    let course = CourseProgress::from_counts(completed, request.total_lessons, now);
    let enrollment = backend
        .record_course_progress(session, &request.course_id, &course)
        .await?;

    Ok((lesson, enrollment))
}
