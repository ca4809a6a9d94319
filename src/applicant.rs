//! Applicant-side operations: browsing tenders, applying, and responding to
//! offers.

use serde::Serialize;

use crate::domain::{
    AcceptedOffer, OfferDecision, OfferNotification, OfferResponse, PublicTender,
    SubmittedApplication,
};
use crate::error::{ApiError, ApiResult};
use crate::http::HttpClient;

pub struct ApplicantClient {
    http: HttpClient,
}

impl ApplicantClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Tenders open for applications.
    pub async fn list_tenders(&self) -> ApiResult<Vec<PublicTender>> {
        self.http.get("/tenders").await
    }

    /// Apply to a tender. Empty text never reaches the network.
    pub async fn submit_application(
        &self,
        tender_id: i64,
        text: &str,
    ) -> ApiResult<SubmittedApplication> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation("Application text required".into()));
        }

        #[derive(Serialize)]
        struct Request<'a> {
            tender_id: i64,
            text: &'a str,
        }

        let submitted: SubmittedApplication = self
            .http
            .post("/applicant/submit_application", &Request { tender_id, text })
            .await?;

        tracing::info!(
            application_id = submitted.application_id,
            tender_id,
            "application submitted"
        );
        Ok(submitted)
    }

    /// Pending offers for the current applicant.
    pub async fn notifications(&self) -> ApiResult<Vec<OfferNotification>> {
        self.http.get("/applicant/notifications").await
    }

    /// Accept or reject an offer, then refresh the notification list. The
    /// decision travels as a query parameter, not a body.
    pub async fn respond_offer(
        &self,
        application_id: i64,
        decision: OfferDecision,
    ) -> ApiResult<(OfferResponse, Vec<OfferNotification>)> {
        let response: OfferResponse = self
            .http
            .post_empty(&format!(
                "/applicant/offer/{application_id}/respond?decision={decision}"
            ))
            .await?;

        tracing::info!(application_id, %decision, "offer response recorded");
        let remaining = self.notifications().await?;
        Ok((response, remaining))
    }

    /// Offers this applicant has accepted.
    pub async fn accepted(&self) -> ApiResult<Vec<AcceptedOffer>> {
        self.http.get("/applicant/accepted").await
    }
}
