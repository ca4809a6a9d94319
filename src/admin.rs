//! Admin-side operations: tender publishing, application review, offers and
//! the AI summary panel.

use reqwest::multipart;

use crate::domain::summary::SummaryOutcome;
use crate::domain::{
    AcceptedOffer, ApplicationDetail, ApplicationSummary, CreatedTender, NewTender, OfferResponse,
    SendOfferRequest, Tender,
};
use crate::error::{ApiError, ApiResult};
use crate::http::HttpClient;
use crate::session::Route;

/// How many applications the dashboard shows by default.
pub const RECENT_APPLICATIONS_LIMIT: usize = 5;

pub struct AdminClient {
    http: HttpClient,
}

impl AdminClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// All published tenders with applicant counts and attachments.
    pub async fn list_tenders(&self) -> ApiResult<Vec<Tender>> {
        self.http.get("/admin/tenders").await
    }

    /// Most recent applications, capped for the dashboard.
    pub async fn recent_applications(
        &self,
        limit: Option<usize>,
    ) -> ApiResult<Vec<ApplicationSummary>> {
        let mut apps: Vec<ApplicationSummary> = self.http.get("/admin/applications").await?;
        apps.truncate(limit.unwrap_or(RECENT_APPLICATIONS_LIMIT));
        Ok(apps)
    }

    /// Publish a tender. Title and description are required before anything
    /// goes on the wire; success redirects to the admin dashboard.
    pub async fn create_tender(&self, tender: NewTender) -> ApiResult<CreatedTender> {
        let title = tender.title.trim();
        let description = tender.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(ApiError::Validation("Title & description required".into()));
        }

        let mut form = multipart::Form::new()
            .text("title", title.to_string())
            .text("description", description.to_string())
            .text("published", "true");

        if let Some(path) = &tender.file {
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                ApiError::Validation(format!("cannot read attachment {}: {e}", path.display()))
            })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "attachment".to_string());
            form = form.part("file", multipart::Part::bytes(bytes).file_name(file_name));
        }

        let created: CreatedTender = self.http.upload("/admin/tenders", form).await?;
        tracing::info!(tender_id = created.id, "tender published");
        self.http.session().navigate(Route::AdminDashboard);
        Ok(created)
    }

    /// Fetch one application for review. The subject id is an explicit
    /// parameter; nothing is stashed between calls.
    pub async fn application(&self, application_id: i64) -> ApiResult<ApplicationDetail> {
        self.http
            .get(&format!("/admin/applications/{application_id}"))
            .await
    }

    /// Send an offer to an application; success redirects to the dashboard.
    pub async fn send_offer(&self, application_id: i64, message: &str) -> ApiResult<OfferResponse> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ApiError::Validation("Offer text required".into()));
        }

        let response: OfferResponse = self
            .http
            .post(
                &format!("/admin/applications/{application_id}/offer"),
                &SendOfferRequest {
                    message: message.to_string(),
                },
            )
            .await?;

        tracing::info!(application_id, "offer sent");
        self.http.session().navigate(Route::AdminDashboard);
        Ok(response)
    }

    /// Run the AI comparison for a tender. Slow: the backend consults an LLM,
    /// so callers should surface a placeholder before awaiting this.
    pub async fn run_summary(&self, tender_id: i64) -> ApiResult<SummaryOutcome> {
        let value: serde_json::Value = self
            .http
            .post(
                &format!("/admin/tenders/{tender_id}/summary"),
                &serde_json::json!({}),
            )
            .await?;
        SummaryOutcome::from_wire(value)
    }

    /// Offers that applicants have accepted.
    pub async fn accepted_offers(&self) -> ApiResult<Vec<AcceptedOffer>> {
        self.http.get("/admin/accepted-offers").await
    }
}
