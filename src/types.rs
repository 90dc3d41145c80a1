use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// List responses arrive either paginated or as a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paginated {
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Paginated { results, .. } => results,
            Listing::Plain(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paginated { results, .. } => results,
            Listing::Plain(items) => items,
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            Listing::Paginated { count, .. } => *count,
            Listing::Plain(items) => items.len() as u64,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub bio: String,
    pub institution: String,
    pub academic_title: String,
    pub research_focus: String,
    pub is_researcher: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub status: String,
    pub research_area: String,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Document {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub file_size: Option<u64>,
    pub content_type: String,
    pub language: String,
    pub processing_status: String,
    pub word_count: u64,
    pub total_entities: u64,
    pub verified_entities: u64,
    pub unverified_entities: u64,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct NewDocument {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Entity {
    pub id: u64,
    pub text: String,
    /// Either an id or a nested entity type object, depending on the endpoint.
    pub entity_type: serde_json::Value,
    pub start_position: u64,
    pub end_position: u64,
    pub line_number: u64,
    pub word_position: u64,
    pub confidence_score: Option<f64>,
    pub is_verified: bool,
    pub verified_at: Option<Timestamp>,
    pub source: String,
    pub context_before: String,
    pub context_after: String,
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EntityType {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub color_code: String,
    pub is_active: bool,
    pub sort_order: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Queued,
    Running,
    Paused,
    Completed,
    Failed,
    Cancelled,
    Retrying,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProcessingJob {
    pub id: u64,
    pub job_id: String,
    pub name: String,
    pub job_type: String,
    pub status: JobStatus,
    pub progress: u32,
    pub current_step: String,
    pub priority: u32,
    pub retry_count: u32,
    pub error_message: String,
    pub created_at: Option<Timestamp>,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct JobProgress {
    pub progress: u32,
    pub current_step: String,
    pub estimated_completion: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct JobResult {
    pub result: Option<serde_json::Value>,
    pub error_message: String,
    pub error_details: Option<serde_json::Value>,
    pub memory_usage: Option<u64>,
    pub cpu_usage: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobAction {
    Start,
    Cancel,
    Retry,
    Reset,
    Pause,
    Resume,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct JobActionResponse {
    pub message: String,
    pub job_id: u64,
    pub status: JobStatus,
}
