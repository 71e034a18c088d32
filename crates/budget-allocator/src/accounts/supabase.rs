use chrono::{Duration, Utc};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::backend::{AccountBackend, AccountError};
use super::domain::{
    CourseProgress, Credentials, Enrollment, LessonProgress, RelationshipStatus, Session,
    SignUpRequest, UserProfile,
};

const PROFILES_TABLE: &str = "user_profiles";
const ENROLLMENTS_TABLE: &str = "course_enrollments";
const LESSON_PROGRESS_TABLE: &str = "lesson_progress";
const UPSERT_PREFERENCE: &str = "resolution=merge-duplicates,return=representation";
const INSERT_IF_ABSENT_PREFERENCE: &str = "resolution=ignore-duplicates,return=representation";

/// Client for a hosted Supabase project (GoTrue auth + PostgREST tables).
#[derive(Debug, Clone)]
pub struct SupabaseAccounts {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAccounts {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self::with_client(Client::new(), base_url, anon_key)
    }

    pub fn with_client(client: Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn request(&self, method: Method, url: String, bearer: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    /// Posts one row with an `on_conflict` resolution. Ignored duplicates
    /// come back as an empty list.
    async fn insert<T>(
        &self,
        session: &Session,
        table: &str,
        conflict_columns: &str,
        preference: &str,
        row: &T,
    ) -> Result<Option<T>, AccountError>
    where
        T: Serialize + for<'de> Deserialize<'de> + Sync,
    {
        let response = self
            .request(Method::POST, self.table_url(table), &session.access_token)
            .query(&[("on_conflict", conflict_columns)])
            .header("Prefer", preference)
            .json(&[row])
            .send()
            .await?;
        let rows: Vec<T> = checked(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    fn course_filter(session: &Session, course_id: &str) -> [(&'static str, String); 2] {
        [
            ("user_id", format!("eq.{}", session.user_id)),
            ("course_id", format!("eq.{course_id}")),
        ]
    }

    async fn fetch_enrollment(
        &self,
        session: &Session,
        course_id: &str,
    ) -> Result<Option<Enrollment>, AccountError> {
        let response = self
            .request(
                Method::GET,
                self.table_url(ENROLLMENTS_TABLE),
                &session.access_token,
            )
            .query(&Self::course_filter(session, course_id))
            .query(&[("select", "*")])
            .send()
            .await?;
        let rows: Vec<Enrollment> = checked(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }
}

impl AccountBackend for SupabaseAccounts {
    async fn session(&self, access_token: &str) -> Result<Option<Session>, AccountError> {
        let response = self
            .request(Method::GET, self.auth_url("user"), access_token)
            .send()
            .await?;

        let user: AuthUser = match checked(response).await {
            Ok(response) => response.json().await?,
            Err(AccountError::Unauthorized) => return Ok(None),
            Err(err) => return Err(err),
        };

        Ok(Some(Session {
            access_token: access_token.to_string(),
            user_id: user.id,
            email: user.email.unwrap_or_default(),
            expires_at: None,
        }))
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AccountError> {
        let response = self
            .request(Method::POST, self.auth_url("token"), &self.anon_key)
            .query(&[("grant_type", "password")])
            .json(credentials)
            .send()
            .await?;

        let token: TokenResponse = match checked(response).await {
            Ok(response) => response.json().await?,
            Err(AccountError::Rejected { status, .. }) if status == 400 => {
                return Err(AccountError::Unauthorized)
            }
            Err(err) => return Err(err),
        };

        debug!(user_id = %token.user.id, "signed in");
        Ok(token.into_session())
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<Session>, AccountError> {
        let response = self
            .request(Method::POST, self.auth_url("signup"), &self.anon_key)
            .json(&request.credentials())
            .send()
            .await?;
        let created: SignUpResponse = checked(response).await?.json().await?;

        let user_id = created.user_id().ok_or_else(|| AccountError::Rejected {
            status: StatusCode::BAD_GATEWAY.as_u16(),
            message: "sign-up response did not include a user id".to_string(),
        })?;
        let bearer = created
            .access_token
            .clone()
            .unwrap_or_else(|| self.anon_key.clone());

        let row = ProfileRow::from_profile(Some(&user_id), &request.profile);
        let response = self
            .request(Method::POST, self.table_url(PROFILES_TABLE), &bearer)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;
        checked(response).await?;

        debug!(%user_id, "account created");
        Ok(created.into_session(user_id, &request.email))
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AccountError> {
        let response = self
            .request(Method::POST, self.auth_url("logout"), &session.access_token)
            .send()
            .await?;

        match checked(response).await {
            Ok(_) | Err(AccountError::Unauthorized) => Ok(()),
            Err(err) => Err(err),
        }
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Option<UserProfile>, AccountError> {
        let response = self
            .request(
                Method::GET,
                self.table_url(PROFILES_TABLE),
                &session.access_token,
            )
            .query(&[("id", format!("eq.{}", session.user_id))])
            .query(&[("select", "*")])
            .send()
            .await?;

        let rows: Vec<ProfileRow> = checked(response).await?.json().await?;
        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.into_profile(&session.email)))
    }

    async fn save_profile(
        &self,
        session: &Session,
        profile: &UserProfile,
    ) -> Result<UserProfile, AccountError> {
        let response = self
            .request(
                Method::PATCH,
                self.table_url(PROFILES_TABLE),
                &session.access_token,
            )
            .query(&[("id", format!("eq.{}", session.user_id))])
            .header("Prefer", "return=representation")
            .json(&ProfileRow::from_profile(None, profile))
            .send()
            .await?;

        let rows: Vec<ProfileRow> = checked(response).await?.json().await?;
        rows.into_iter()
            .next()
            .map(|row| row.into_profile(&session.email))
            .ok_or(AccountError::NotFound)
    }

    async fn enroll(
        &self,
        session: &Session,
        enrollment: &Enrollment,
    ) -> Result<Enrollment, AccountError> {
        let inserted = self
            .insert(
                session,
                ENROLLMENTS_TABLE,
                "user_id,course_id",
                INSERT_IF_ABSENT_PREFERENCE,
                enrollment,
            )
            .await?;
        match inserted {
            Some(row) => Ok(row),
            None => self
                .fetch_enrollment(session, &enrollment.course_id)
                .await?
                .ok_or(AccountError::NotFound),
        }
    }

    async fn upsert_lesson_progress(
        &self,
        session: &Session,
        progress: &LessonProgress,
    ) -> Result<LessonProgress, AccountError> {
        self.insert(
            session,
            LESSON_PROGRESS_TABLE,
            "user_id,lesson_id",
            UPSERT_PREFERENCE,
            progress,
        )
        .await?
        .ok_or(AccountError::NotFound)
    }

    async fn completed_lessons(&self, session: &Session, course_id: &str) -> Result<u32, AccountError> {
        let response = self
            .request(
                Method::GET,
                self.table_url(LESSON_PROGRESS_TABLE),
                &session.access_token,
            )
            .query(&Self::course_filter(session, course_id))
            .query(&[("completed", "is.true"), ("select", "lesson_id")])
            .send()
            .await?;
        let rows: Vec<serde_json::Value> = checked(response).await?.json().await?;
        Ok(u32::try_from(rows.len()).unwrap_or(u32::MAX))
    }

    async fn record_course_progress(
        &self,
        session: &Session,
        course_id: &str,
        progress: &CourseProgress,
    ) -> Result<Option<Enrollment>, AccountError> {
        let response = self
            .request(
                Method::PATCH,
                self.table_url(ENROLLMENTS_TABLE),
                &session.access_token,
            )
            .query(&Self::course_filter(session, course_id))
            .header("Prefer", "return=representation")
            .json(progress)
            .send()
            .await?;

        let rows: Vec<Enrollment> = checked(response).await?.json().await?;
        let updated = rows.into_iter().next();
        if let Some(enrollment) = &updated {
            debug!(
                course_id,
                progress = enrollment.progress_percentage,
                "course progress recorded"
            );
        }
        Ok(updated)
    }
}

async fn checked(response: Response) -> Result<Response, AccountError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(AccountError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AccountError::Rejected {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pulls the human-readable message out of an auth or REST error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|field| field.as_str()))
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            user_id: self.user.id,
            email: self.user.email.unwrap_or_default(),
            expires_at: self.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)),
        }
    }
}

/// Sign-up answers with a full session, or with the bare user while email
/// confirmation is pending.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<AuthUser>,
    #[serde(default)]
    id: Option<String>,
}

impl SignUpResponse {
    fn user_id(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|user| user.id.clone())
            .or_else(|| self.id.clone())
    }

    fn into_session(self, user_id: String, email: &str) -> Option<Session> {
        let access_token = self.access_token?;
        Some(Session {
            access_token,
            user_id,
            email: email.to_string(),
            expires_at: self.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ProfileRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    first_name: String,
    last_name: String,
    age: u32,
    salary: f64,
    zip_code: String,
    relationship_status: RelationshipStatus,
    occupation: String,
    phone_number: String,
}

impl ProfileRow {
    fn from_profile(id: Option<&str>, profile: &UserProfile) -> Self {
        Self {
            id: id.map(str::to_string),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            age: profile.age,
            salary: profile.salary,
            zip_code: profile.zip_code.clone(),
            relationship_status: profile.relationship_status,
            occupation: profile.occupation.clone(),
            phone_number: profile.phone_number.clone(),
        }
    }

    fn into_profile(self, email: &str) -> UserProfile {
        UserProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            salary: self.salary,
            zip_code: self.zip_code,
            relationship_status: self.relationship_status,
            occupation: self.occupation,
            phone_number: self.phone_number,
            email: email.to_string(),
        }
    }
}
