//! Plain-text views for the CLI.
//!
//! These replace the DOM cards of the browser client: one block per entity,
//! an empty-state line for every listing, placeholders instead of failures
//! for absent data.

use crate::domain::summary::SummaryOutcome;
use crate::domain::{
    AcceptedOffer, ApplicationDetail, ApplicationSummary, OfferNotification, PublicTender, Tender,
};

const NO_DETAILS: &str = "No details provided";

/// Truncate a description for list display.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

pub fn tenders(tenders: &[Tender]) -> String {
    if tenders.is_empty() {
        return "No tenders yet.".to_string();
    }

    let mut out = String::new();
    for t in tenders {
        out.push_str(&format!(
            "#{} {}\n  {}\n  status: {}  applications: {}\n",
            t.id,
            t.title,
            truncate(&t.description, 120),
            t.status,
            t.applicant_count,
        ));
        match t.attachment() {
            Some(file) => out.push_str(&format!("  attachment: {file}\n")),
            None => out.push_str("  no attachment\n"),
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

pub fn public_tenders(tenders: &[PublicTender]) -> String {
    if tenders.is_empty() {
        return "No public tenders available.".to_string();
    }

    tenders
        .iter()
        .map(|t| {
            format!(
                "#{} {} ({})\n  {}",
                t.id,
                t.title,
                t.status,
                truncate(&t.description, 120)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn recent_applications(apps: &[ApplicationSummary]) -> String {
    if apps.is_empty() {
        return "No applications yet.".to_string();
    }

    apps.iter()
        .map(|a| {
            format!(
                "#{} {}\n  tender: {}\n  status: {}",
                a.id, a.user_email, a.tender_title, a.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn application(app: &ApplicationDetail) -> String {
    format!(
        "Applicant: {}\nTender: {}\nStatus: {}\n\n{}",
        app.user_email, app.tender_title, app.status, app.applicant_text
    )
}

pub fn notifications(offers: &[OfferNotification]) -> String {
    if offers.is_empty() {
        return "No offers yet.".to_string();
    }

    offers
        .iter()
        .map(|o| {
            let message = o
                .offer
                .as_ref()
                .map(|offer| offer.message.as_str())
                .unwrap_or(NO_DETAILS);
            format!(
                "Offer for tender #{} (application #{})\n  {}\n  respond with: applicant respond {} accept|reject",
                o.tender_id, o.application_id, message, o.application_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn accepted_offers(rows: &[AcceptedOffer]) -> String {
    if rows.is_empty() {
        return "No accepted offers.".to_string();
    }

    rows.iter()
        .map(|r| {
            let mut line = format!("application #{}: {}", r.application_id, r.tender_title);
            if let Some(email) = &r.applicant_email {
                line.push_str(&format!(" ({email})"));
            }
            let message = r
                .offer
                .as_ref()
                .map(|o| o.message.as_str())
                .unwrap_or(NO_DETAILS);
            format!("{line}\n  offer: {message}\n  status: {}", r.status)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Summary panel: best-application highlight plus one row per comparison
/// entry. An unavailable summary renders only the server's message.
pub fn summary(outcome: &SummaryOutcome) -> String {
    let report = match outcome {
        SummaryOutcome::Unavailable(message) => return message.clone(),
        SummaryOutcome::Report(report) => report,
    };

    let best = &report.best_application;
    let mut out = format!(
        "Best application\n  email: {}\n  price: {}\n  sku: {}\n  verdict: {}\n  {}\n",
        best.email, best.price, best.sku, best.verdict, best.brief
    );

    out.push_str("\nAll applications\n");
    if report.comparison.is_empty() {
        out.push_str("  (no comparison data)\n");
    }
    for entry in &report.comparison {
        out.push_str(&format!(
            "  {} (price: {})\n    strengths: {}\n    weaknesses: {}\n",
            entry.email,
            entry.price,
            join_or_dash(&entry.strengths),
            join_or_dash(&entry.weaknesses),
        ));
    }
    out.trim_end().to_string()
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
