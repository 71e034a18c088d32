use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::planner::{AgeGroup, LivingSituation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    InRelationship,
}

impl RelationshipStatus {
    /// Only statuses with an obvious household shape pre-fill the form.
    pub fn living_situation(&self) -> Option<LivingSituation> {
        match self {
            RelationshipStatus::Married => Some(LivingSituation::Couple),
            RelationshipStatus::Single => Some(LivingSituation::Single),
            RelationshipStatus::Divorced
            | RelationshipStatus::Widowed
            | RelationshipStatus::InRelationship => None,
        }
    }
}

/// Profile stored by the hosted account service. `salary` is annual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub salary: f64,
    pub zip_code: String,
    pub relationship_status: RelationshipStatus,
    pub occupation: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub profile: UserProfile,
}

impl SignUpRequest {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Authenticated user handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub user_id: String,
    pub course_id: String,
    pub progress_percentage: u8,
    pub enrolled_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    pub fn started(user_id: &str, course_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            progress_percentage: 0,
            enrolled_at: now,
            completed_at: None,
        }
    }
}

/// Course-level completion written back to an enrollment after a lesson is
/// finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub progress_percentage: u8,
    pub completed_at: Option<DateTime<Utc>>,
}

impl CourseProgress {
    /// Rounded share of completed lessons. `completed_at` is set only at 100%.
    pub fn from_counts(completed: u32, total_lessons: u32, now: DateTime<Utc>) -> Self {
        let progress_percentage = if total_lessons == 0 {
            0
        } else {
            let share = f64::from(completed.min(total_lessons)) / f64::from(total_lessons);
            (share * 100.0).round() as u8
        };
        Self {
            progress_percentage,
            completed_at: (progress_percentage == 100).then_some(now),
        }
    }
}

impl Enrollment {
    pub fn apply(&mut self, progress: &CourseProgress) {
        self.progress_percentage = progress.progress_percentage;
        self.completed_at = progress.completed_at;
    }
}

/// One lesson's completion record; unique per user and lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub user_id: String,
    pub course_id: String,
    pub module_id: String,
    pub lesson_id: String,
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl LessonProgress {
    pub fn completed(
        user_id: &str,
        course_id: &str,
        module_id: &str,
        lesson_id: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            module_id: module_id.to_string(),
            lesson_id: lesson_id.to_string(),
            completed: true,
            completed_at: Some(now),
        }
    }
}

/// Budget form values pre-filled from a stored profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDefaults {
    pub monthly_income: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_situation: Option<LivingSituation>,
}

impl ProfileDefaults {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            monthly_income: profile.salary / 12.0,
            age_group: AgeGroup::from_age(profile.age),
            living_situation: profile.relationship_status.living_situation(),
        }
    }
}
