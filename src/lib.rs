//! Typed client for the OPTIBOTS tender/procurement API.
//!
//! Admins publish tenders, review applications, send offers and run AI
//! comparisons; applicants browse tenders, apply and respond to offers.
//! Everything talks to the backend through [`http::HttpClient`], which owns
//! bearer-token injection and the forced-logout reaction to a 401.

pub mod admin;
pub mod app;
pub mod applicant;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod logging;
pub mod render;
pub mod session;

pub use admin::AdminClient;
pub use app::App;
pub use applicant::ApplicantClient;
pub use auth::AuthController;
pub use config::Settings;
pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use session::{Route, Session};
