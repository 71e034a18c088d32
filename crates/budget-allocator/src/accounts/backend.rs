use std::future::Future;

use axum::http::StatusCode;

use super::domain::{
    Credentials, CourseProgress, Enrollment, LessonProgress, Session, SignUpRequest, UserProfile,
};

/// Auth and persistence seam for the hosted account service.
pub trait AccountBackend: Send + Sync {
    /// Resolves an access token; `None` when the token is unknown or expired.
    fn session(
        &self,
        access_token: &str,
    ) -> impl Future<Output = Result<Option<Session>, AccountError>> + Send;

    fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Session, AccountError>> + Send;

    /// Creates the auth user and its profile row. No session is returned while
    /// the account awaits email confirmation.
    fn sign_up(
        &self,
        request: &SignUpRequest,
    ) -> impl Future<Output = Result<Option<Session>, AccountError>> + Send;

    fn sign_out(&self, session: &Session) -> impl Future<Output = Result<(), AccountError>> + Send;

    fn fetch_profile(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Option<UserProfile>, AccountError>> + Send;

    fn save_profile(
        &self,
        session: &Session,
        profile: &UserProfile,
    ) -> impl Future<Output = Result<UserProfile, AccountError>> + Send;

    /// Inserts the enrollment unless one exists for the same user and course,
    /// and returns the stored row. Existing progress is never reset.
    fn enroll(
        &self,
        session: &Session,
        enrollment: &Enrollment,
    ) -> impl Future<Output = Result<Enrollment, AccountError>> + Send;

    fn upsert_lesson_progress(
        &self,
        session: &Session,
        progress: &LessonProgress,
    ) -> impl Future<Output = Result<LessonProgress, AccountError>> + Send;

    /// Number of lessons the session's user has completed in a course.
    fn completed_lessons(
        &self,
        session: &Session,
        course_id: &str,
    ) -> impl Future<Output = Result<u32, AccountError>> + Send;

    /// Writes course progress onto the enrollment; `None` when the user is not
    /// enrolled in the course.
    fn record_course_progress(
        &self,
        session: &Session,
        course_id: &str,
        progress: &CourseProgress,
    ) -> impl Future<Output = Result<Option<Enrollment>, AccountError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account service is not configured")]
    NotConfigured,
    #[error("missing or invalid credentials")]
    Unauthorized,
    #[error("record not found")]
    NotFound,
    #[error("invalid request: {0}")]
    Invalid(String),
    #[error("account service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("account service unavailable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AccountError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AccountError::Unauthorized => StatusCode::UNAUTHORIZED,
            AccountError::NotFound => StatusCode::NOT_FOUND,
            AccountError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AccountError::Rejected { .. } => StatusCode::BAD_REQUEST,
            AccountError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
