use super::backend::{AccountBackend, AccountError};
use super::domain::{
    Credentials, CourseProgress, Enrollment, LessonProgress, Session, SignUpRequest, UserProfile,
};

/// Stand-in used when no account service is configured. Nobody is ever
/// signed in; anything that needs the service fails with `NotConfigured`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAccounts;

impl AccountBackend for DisabledAccounts {
    async fn session(&self, _access_token: &str) -> Result<Option<Session>, AccountError> {
        Ok(None)
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<Session, AccountError> {
        Err(AccountError::NotConfigured)
    }

    async fn sign_up(&self, _request: &SignUpRequest) -> Result<Option<Session>, AccountError> {
        Err(AccountError::NotConfigured)
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), AccountError> {
        Ok(())
    }

    async fn fetch_profile(&self, _session: &Session) -> Result<Option<UserProfile>, AccountError> {
        Err(AccountError::NotConfigured)
    }

    async fn save_profile(
        &self,
        _session: &Session,
        _profile: &UserProfile,
    ) -> Result<UserProfile, AccountError> {
        Err(AccountError::NotConfigured)
    }

    async fn enroll(
        &self,
        _session: &Session,
        _enrollment: &Enrollment,
    ) -> Result<Enrollment, AccountError> {
        Err(AccountError::NotConfigured)
    }

    async fn upsert_lesson_progress(
        &self,
        _session: &Session,
        _progress: &LessonProgress,
    ) -> Result<LessonProgress, AccountError> {
        Err(AccountError::NotConfigured)
    }

    async fn completed_lessons(
        &self,
        _session: &Session,
        _course_id: &str,
    ) -> Result<u32, AccountError> {
        Err(AccountError::NotConfigured)
    }

    async fn record_course_progress(
        &self,
        _session: &Session,
        _course_id: &str,
        _progress: &CourseProgress,
    ) -> Result<Option<Enrollment>, AccountError> {
        Err(AccountError::NotConfigured)
    }
}
