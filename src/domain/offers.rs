use serde::{Deserialize, Serialize};

use super::ApplicationStatus;

/// Offer body attached to an application by an admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub message: String,
}

/// `POST /admin/applications/{id}/offer` request body.
#[derive(Debug, Clone, Serialize)]
pub struct SendOfferRequest {
    pub message: String,
}

/// Pending offer shown to an applicant (`GET /applicant/notifications`).
/// The offer payload can be absent for legacy rows; rendering falls back to
/// a placeholder instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferNotification {
    pub application_id: i64,
    pub tender_id: i64,
    #[serde(default)]
    pub offer: Option<Offer>,
}

/// Applicant decision on a pending offer, sent as a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferDecision {
    Accept,
    Reject,
}

impl OfferDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for OfferDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OfferDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            other => Err(format!("decision must be 'accept' or 'reject', got '{other}'")),
        }
    }
}

/// Status echo after responding to or sending an offer.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferResponse {
    #[serde(default)]
    pub status: ApplicationStatus,
    pub application_id: i64,
}

/// Accepted-offer report row. The admin variant
/// (`GET /admin/accepted-offers`) carries the applicant email; the applicant
/// variant (`GET /applicant/accepted`) omits it.
#[derive(Debug, Clone, Deserialize)]
pub struct AcceptedOffer {
    pub application_id: i64,
    #[serde(default)]
    pub applicant_email: Option<String>,
    pub tender_title: String,
    #[serde(default)]
    pub offer: Option<Offer>,
    #[serde(default)]
    pub status: ApplicationStatus,
}
