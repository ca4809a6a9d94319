//! Login, signup, logout, and the page-load session check.
//!
//! All input validation happens before any request is issued; every redirect
//! goes through the session's navigator.

use crate::domain::{
    CurrentUser, LoginRequest, LoginResponse, RegisterRequest, RegisteredUser, Role,
};
use crate::error::{ApiError, ApiResult};
use crate::http::HttpClient;
use crate::session::{Route, Session};

pub struct AuthController {
    http: HttpClient,
    session: Session,
}

impl AuthController {
    pub fn new(http: HttpClient) -> Self {
        let session = http.session().clone();
        Self { http, session }
    }

    /// Register a new account and send the user to the login entry point.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm: &str,
        role: Role,
    ) -> ApiResult<RegisteredUser> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation("Email and password required".into()));
        }
        if password != confirm {
            return Err(ApiError::Validation("Passwords do not match".into()));
        }
        if role == Role::Other {
            return Err(ApiError::Validation("Invalid role".into()));
        }

        let registered: RegisteredUser = self
            .http
            .post(
                "/auth/register",
                &RegisterRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                    role,
                },
            )
            .await?;

        tracing::info!(user_id = registered.user_id, "account created");
        self.session.navigate(Route::Login);
        Ok(registered)
    }

    /// Exchange credentials for a token, confirm it against `/auth/me`, and
    /// redirect by role. A failure anywhere after the token was stored clears
    /// it again; no partial session survives.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<CurrentUser> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation("Email and password required".into()));
        }

        let response: LoginResponse = self
            .http
            .post(
                "/auth/login",
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;

        let token = response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Decode("login response carried no access token".into()))?;

        self.session.set_token(&token)?;

        match self.current_user().await {
            Ok(user) => {
                tracing::info!(email = %user.email, role = %user.role, "logged in");
                self.session.navigate(dashboard_for(user.role));
                Ok(user)
            }
            Err(e) => {
                // Token was rejected or the backend vanished mid-login.
                if let Err(clear_err) = self.session.clear_token() {
                    tracing::warn!(error = %clear_err, "failed to clear token after login failure");
                }
                Err(e)
            }
        }
    }

    pub fn logout(&self) -> ApiResult<()> {
        self.session.clear_token()?;
        self.session.navigate(Route::Login);
        Ok(())
    }

    /// Page-load auto-check. Never touches the network without a stored
    /// token (that would 401 and bounce straight back to login, forever).
    /// An invalid token is dropped silently; a valid one redirects away from
    /// the login entry point to the role's dashboard.
    pub async fn bootstrap(&self) -> ApiResult<Option<CurrentUser>> {
        if !self.session.has_token() {
            return Ok(None);
        }

        let user = match self.current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::debug!(error = %e, "stored token rejected, clearing");
                // expire() already cleared on 401; clear again covers the rest
                self.session.clear_token()?;
                return Ok(None);
            }
        };

        if self.session.current_route() == Route::Login {
            self.session.navigate(dashboard_for(user.role));
        }
        Ok(Some(user))
    }

    pub async fn current_user(&self) -> ApiResult<CurrentUser> {
        self.http.get("/auth/me").await
    }
}

fn dashboard_for(role: Role) -> Route {
    if role.is_admin() {
        Route::AdminDashboard
    } else {
        Route::ApplicantDashboard
    }
}
