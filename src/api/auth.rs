//! Authentication endpoints

use crate::api::ApiClient;
use crate::store::{User, UserRole};
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Response of the login endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// The signed-in user
    pub user: User,
    /// Bearer token for subsequent requests
    pub access: String,
}

/// Access/refresh token pair issued at registration
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    /// Bearer token for subsequent requests
    pub access: String,
    /// Refresh token; unused by this client but part of the payload
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Response of the registration endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    /// The freshly created user
    pub user: User,
    /// Issued tokens
    pub tokens: TokenPair,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    password_confirm: &'a str,
    role: &'a str,
}

impl ApiClient {
    /// Sign in with email and password
    ///
    /// The returned token is not installed automatically; callers decide
    /// whether the login sticks (see the auth flow module).
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .authed(self.http.post(self.url("/auth/login/")))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let login: LoginResponse = Self::parse_json(response).await?;
        info!(user_id = login.user.id, "login succeeded");
        Ok(login)
    }

    /// Create a new account
    ///
    /// The password is sent twice; the backend validates the confirmation
    /// field even though this client never lets them differ.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<RegisterResponse> {
        let response = self
            .http
            .post(self.url("/auth/register/"))
            .json(&RegisterRequest {
                username,
                email,
                password,
                password_confirm: password,
                role: role.as_str(),
            })
            .send()
            .await?;

        let registered: RegisterResponse = Self::parse_json(response).await?;
        info!(user_id = registered.user.id, "registration succeeded");
        Ok(registered)
    }

    /// Fetch the signed-in user's profile
    pub async fn get_profile(&self) -> Result<User> {
        let response = self
            .authed(self.http.get(self.url("/auth/profile/")))
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// Notify the server of a sign-out
    ///
    /// Callers treat failures as non-fatal; the local token is cleared
    /// regardless.
    pub async fn logout(&self) -> Result<()> {
        let response = self
            .authed(self.http.post(self.url("/auth/logout/")))
            .send()
            .await?;
        Self::ensure_success(response).await
    }
}
