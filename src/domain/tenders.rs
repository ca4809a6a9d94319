use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tender status as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TenderStatus {
    Draft,
    Public,
    #[serde(other)]
    Unknown,
}

impl Default for TenderStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl std::fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Public => "public",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Admin-visible tender (`GET /admin/tenders`).
#[derive(Debug, Clone, Deserialize)]
pub struct Tender {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TenderStatus,
    #[serde(default)]
    pub applicant_count: u64,
    /// Stored attachment names, resolvable via `GET /download/{file}`.
    #[serde(default)]
    pub files: Vec<String>,
}

impl Tender {
    pub fn attachment(&self) -> Option<&str> {
        self.files.first().map(String::as_str)
    }
}

/// Publicly listed tender (`GET /tenders`).
#[derive(Debug, Clone, Deserialize)]
pub struct PublicTender {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TenderStatus,
}

/// `POST /admin/tenders` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTender {
    pub id: i64,
}

/// Input for tender creation. Sent as a multipart form with a `published`
/// flag; the optional attachment is read from disk at submit time.
#[derive(Debug, Clone)]
pub struct NewTender {
    pub title: String,
    pub description: String,
    pub file: Option<PathBuf>,
}
