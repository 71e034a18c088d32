//! Sign-in, profile and course-progress plumbing backed by a hosted
//! auth/database service. The planner never depends on anything here; a
//! stored profile only seeds the budget form through [`ProfileDefaults`].

pub mod backend;
pub mod disabled;
pub mod domain;
pub mod router;
pub mod supabase;

#[cfg(test)]
mod tests;

pub use backend::{AccountBackend, AccountError};
pub use disabled::DisabledAccounts;
pub use domain::{
    Credentials, CourseProgress, Enrollment, LessonProgress, ProfileDefaults, RelationshipStatus, Session,
    SignUpRequest, UserProfile,
};
pub use router::account_router;
pub use supabase::SupabaseAccounts;

use crate::config::AccountsConfig;
use tracing::{info, warn};

/// Account backend chosen once at startup.
#[derive(Debug, Clone)]
pub enum AccountClient {
    Supabase(SupabaseAccounts),
    Disabled(DisabledAccounts),
}

impl AccountClient {
    /// Falls back to [`DisabledAccounts`] when credentials are missing.
    pub fn from_config(config: &AccountsConfig) -> Self {
        match config.credentials() {
            Some((url, anon_key)) => {
                info!(service_url = %url, "account service configured");
                Self::Supabase(SupabaseAccounts::new(url, anon_key))
            }
            None => {
                warn!("SUPABASE_URL/SUPABASE_ANON_KEY not set; account features disabled");
                Self::Disabled(DisabledAccounts)
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, AccountClient::Supabase(_))
    }
}

impl AccountBackend for AccountClient {
    async fn session(&self, access_token: &str) -> Result<Option<Session>, AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.session(access_token).await,
            AccountClient::Disabled(inner) => inner.session(access_token).await,
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.sign_in(credentials).await,
            AccountClient::Disabled(inner) => inner.sign_in(credentials).await,
        }
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<Session>, AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.sign_up(request).await,
            AccountClient::Disabled(inner) => inner.sign_up(request).await,
        }
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.sign_out(session).await,
            AccountClient::Disabled(inner) => inner.sign_out(session).await,
        }
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Option<UserProfile>, AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.fetch_profile(session).await,
            AccountClient::Disabled(inner) => inner.fetch_profile(session).await,
        }
    }

    async fn save_profile(
        &self,
        session: &Session,
        profile: &UserProfile,
    ) -> Result<UserProfile, AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.save_profile(session, profile).await,
            AccountClient::Disabled(inner) => inner.save_profile(session, profile).await,
        }
    }

    async fn enroll(
        &self,
        session: &Session,
        enrollment: &Enrollment,
    ) -> Result<Enrollment, AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.enroll(session, enrollment).await,
            AccountClient::Disabled(inner) => inner.enroll(session, enrollment).await,
        }
    }

    async fn upsert_lesson_progress(
        &self,
        session: &Session,
        progress: &LessonProgress,
    ) -> Result<LessonProgress, AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.upsert_lesson_progress(session, progress).await,
            AccountClient::Disabled(inner) => inner.upsert_lesson_progress(session, progress).await,
        }
    }

    async fn completed_lessons(&self, session: &Session, course_id: &str) -> Result<u32, AccountError> {
        match self {
            AccountClient::Supabase(inner) => inner.completed_lessons(session, course_id).await,
            AccountClient::Disabled(inner) => inner.completed_lessons(session, course_id).await,
        }
    }

    async fn record_course_progress(
        &self,
        session: &Session,
        course_id: &str,
        progress: &CourseProgress,
    ) -> Result<Option<Enrollment>, AccountError> {
        match self {
            AccountClient::Supabase(inner) => {
                inner.record_course_progress(session, course_id, progress).await
            }
            AccountClient::Disabled(inner) => {
                inner.record_course_progress(session, course_id, progress).await
            }
        }
    }
}
