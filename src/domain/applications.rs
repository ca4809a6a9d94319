use serde::{Deserialize, Serialize};

/// Application lifecycle, owned entirely by the backend:
/// `submitted -> offered -> accepted | rejected`. The client only displays
/// the current state and invokes the transition-triggering endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    Offered,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        Self::Submitted
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Submitted => "submitted",
            Self::Offered => "offered",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Row in the admin application list (`GET /admin/applications`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSummary {
    pub id: i64,
    pub user_email: String,
    pub tender_title: String,
    #[serde(default)]
    pub status: ApplicationStatus,
}

/// Full application as fetched for review (`GET /admin/applications/{id}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationDetail {
    pub id: i64,
    pub user_email: String,
    pub tender_title: String,
    pub applicant_text: String,
    #[serde(default)]
    pub status: ApplicationStatus,
}

/// `POST /applicant/submit_application` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedApplication {
    #[serde(default)]
    pub status: ApplicationStatus,
    pub application_id: i64,
}
