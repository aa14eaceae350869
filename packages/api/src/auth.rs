//! Authentication endpoints.
//!
//! `/auth/login` and `/auth/register` return the token beside the profile
//! instead of the standard envelope; the rest of the auth surface is
//! enveloped like everything else. Password updates rotate the bearer token,
//! so callers must persist the returned one.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, TokenRefresh, User, UserUpdate};

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/login", &LoginBody { email, password })
            .await
    }

    /// Self-service registration; new accounts always start as `user`.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.post_json(
            "/auth/register",
            &RegisterBody {
                name,
                email,
                password,
                role: "user",
            },
        )
        .await
    }

    /// Best-effort server-side logout. Local cleanup must not depend on this
    /// succeeding.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.get_json::<serde_json::Value>("/auth/logout").await?;
        Ok(())
    }

    /// Fetch the profile belonging to the current token.
    ///
    /// Surfaces [`ApiError::EmptyBody`] when a conditional response arrives
    /// without a body, so the session layer can fall back to its cache.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    pub async fn update_details(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.put("/auth/updatedetails", update).await
    }

    /// Change the password. The server revokes the old token and issues a new
    /// one in the same response.
    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<TokenRefresh, ApiError> {
        self.put_json(
            "/auth/updatepassword",
            &PasswordBody {
                current_password,
                new_password,
            },
        )
        .await
    }

    /// Update a user record directly (profile page).
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        self.put(&format!("/users/{id}"), update).await
    }
}
