use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use axum::response::Response;
use serde_json::Value;

use crate::accounts::backend::{AccountBackend, AccountError};
use crate::accounts::domain::{
    CourseProgress, Credentials, Enrollment, LessonProgress, RelationshipStatus, Session, SignUpRequest,
    UserProfile,
};

pub(super) const TOKEN: &str = "token-ada";

pub(super) fn profile() -> UserProfile {
    UserProfile {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        age: 29,
        salary: 72_000.0,
        zip_code: "10001".to_string(),
        relationship_status: RelationshipStatus::Married,
        occupation: "Analyst".to_string(),
        phone_number: "555-0100".to_string(),
        email: "ada@example.com".to_string(),
    }
}

pub(super) fn session() -> Session {
    Session {
        access_token: TOKEN.to_string(),
        user_id: "user-ada".to_string(),
        email: "ada@example.com".to_string(),
        expires_at: None,
    }
}

#[derive(Default)]
struct Store {
    passwords: HashMap<String, String>,
    sessions: HashMap<String, Session>,
    profiles: HashMap<String, UserProfile>,
    enrollments: HashMap<(String, String), Enrollment>,
    progress: HashMap<(String, String), LessonProgress>,
}

#[derive(Default, Clone)]
pub(super) struct MemoryAccounts {
    store: Arc<Mutex<Store>>,
}

impl MemoryAccounts {
    /// One registered user with an active session and a stored profile.
    pub(super) fn seeded() -> Self {
        let accounts = Self::default();
        {
            let mut store = accounts.store.lock().expect("store mutex poisoned");
            let session = session();
            store
                .passwords
                .insert(session.email.clone(), "correct horse".to_string());
            store.profiles.insert(session.user_id.clone(), profile());
            store.sessions.insert(session.access_token.clone(), session);
        }
        accounts
    }

    pub(super) fn drop_profile(&self, user_id: &str) {
        self.store
            .lock()
            .expect("store mutex poisoned")
            .profiles
            .remove(user_id);
    }

    pub(super) fn active_sessions(&self) -> usize {
        self.store.lock().expect("store mutex poisoned").sessions.len()
    }

    pub(super) fn enrollment_count(&self) -> usize {
        self.store
            .lock()
            .expect("store mutex poisoned")
            .enrollments
            .len()
    }

    pub(super) fn enrollment(&self, user_id: &str, course_id: &str) -> Option<Enrollment> {
        self.store
            .lock()
            .expect("store mutex poisoned")
            .enrollments
            .get(&(user_id.to_string(), course_id.to_string()))
            .cloned()
    }

    pub(super) fn progress_count(&self) -> usize {
        self.store.lock().expect("store mutex poisoned").progress.len()
    }
}

impl AccountBackend for MemoryAccounts {
    async fn session(&self, access_token: &str) -> Result<Option<Session>, AccountError> {
        let store = self.store.lock().expect("store mutex poisoned");
        Ok(store.sessions.get(access_token).cloned())
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AccountError> {
        let mut store = self.store.lock().expect("store mutex poisoned");
        match store.passwords.get(&credentials.email) {
            Some(password) if *password == credentials.password => {}
            _ => return Err(AccountError::Unauthorized),
        }
        let session = Session {
            access_token: format!("token-{}", store.sessions.len() + 1),
            user_id: format!("user-{}", credentials.email),
            email: credentials.email.clone(),
            expires_at: None,
        };
        store
            .sessions
            .insert(session.access_token.clone(), session.clone());
        Ok(session)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<Session>, AccountError> {
        let mut store = self.store.lock().expect("store mutex poisoned");
        if store.passwords.contains_key(&request.email) {
            return Err(AccountError::Rejected {
                status: 422,
                message: "User already registered".to_string(),
            });
        }
        store
            .passwords
            .insert(request.email.clone(), request.password.clone());
        store
            .profiles
            .insert(format!("user-{}", request.email), request.profile.clone());
        Ok(None)
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AccountError> {
        let mut store = self.store.lock().expect("store mutex poisoned");
        store.sessions.remove(&session.access_token);
        Ok(())
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Option<UserProfile>, AccountError> {
        let store = self.store.lock().expect("store mutex poisoned");
        Ok(store.profiles.get(&session.user_id).cloned())
    }

    async fn save_profile(
        &self,
        session: &Session,
        profile: &UserProfile,
    ) -> Result<UserProfile, AccountError> {
        let mut store = self.store.lock().expect("store mutex poisoned");
        if !store.profiles.contains_key(&session.user_id) {
            return Err(AccountError::NotFound);
        }
        store
            .profiles
            .insert(session.user_id.clone(), profile.clone());
        Ok(profile.clone())
    }

    async fn enroll(
        &self,
        _session: &Session,
        enrollment: &Enrollment,
    ) -> Result<Enrollment, AccountError> {
        let mut store = self.store.lock().expect("store mutex poisoned");
        let key = (enrollment.user_id.clone(), enrollment.course_id.clone());
        Ok(store
            .enrollments
            .entry(key)
            .or_insert_with(|| enrollment.clone())
            .clone())
    }

    async fn upsert_lesson_progress(
        &self,
        _session: &Session,
        progress: &LessonProgress,
    ) -> Result<LessonProgress, AccountError> {
        let mut store = self.store.lock().expect("store mutex poisoned");
        let key = (progress.user_id.clone(), progress.lesson_id.clone());
        store.progress.insert(key, progress.clone());
        Ok(progress.clone())
    }

    async fn completed_lessons(&self, session: &Session, course_id: &str) -> Result<u32, AccountError> {
        let store = self.store.lock().expect("store mutex poisoned");
        let completed = store
            .progress
            .values()
            .filter(|row| row.user_id == session.user_id && row.course_id == course_id && row.completed)
            .count();
        Ok(completed as u32)
    }

    async fn record_course_progress(
        &self,
        session: &Session,
        course_id: &str,
        progress: &CourseProgress,
    ) -> Result<Option<Enrollment>, AccountError> {
        let mut store = self.store.lock().expect("store mutex poisoned");
        let key = (session.user_id.clone(), course_id.to_string());
        Ok(store.enrollments.get_mut(&key).map(|enrollment| {
            enrollment.apply(progress);
            enrollment.clone()
        }))
    }
}

pub(super) fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).expect("body serializes")))
        .expect("request builds")
}

pub(super) fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request builds")
}

pub(super) async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
