use crate::{CliClientResult, ClientError};

use saathi_core::{ProfileUpdate, SignIn, SignupRequest, validation::DEFAULT_MAX_FIELD_LENGTH};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the saathi-server REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Optional bearer token sent with every request
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> CliClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Build a request carrying the bearer token when one is set
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let req = self.client.request(method, url);

        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Execute request and turn error bodies into [`ClientError::Api`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let error = body.get("error");
            let text_of = |key: &str| {
                error
                    .and_then(|e| e.get(key))
                    .and_then(Value::as_str)
                    .map(String::from)
            };

            return Err(ClientError::api_error(
                status.as_u16(),
                text_of("code").unwrap_or_else(|| format!("HTTP_{}", status.as_u16())),
                text_of("message").unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                }),
                text_of("field"),
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> CliClientResult<Value> {
        let url = self.url(path, query)?;
        self.execute(self.request(Method::GET, url)).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> CliClientResult<Value> {
        let url = self.url(path, &[])?;
        let mut req = self.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.execute(req).await
    }

    fn profile_path(uid: Option<&str>) -> String {
        match uid {
            Some(uid) => format!("/api/users/profile/{}", uid),
            None => "/api/users/profile".to_string(),
        }
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Create an account.
    ///
    /// The form is checked locally first; a malformed email, weak password
    /// or bad phone number never reaches the server.
    pub async fn signup(&self, request: &SignupRequest) -> CliClientResult<Value> {
        request.validate(DEFAULT_MAX_FIELD_LENGTH)?;

        self.send(Method::POST, "/api/auth/signup", Some(request))
            .await
    }

    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<SignIn> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        if password.is_empty() {
            return Err(ClientError::validation(
                Some("password"),
                "Password is required",
            ));
        }
        saathi_core::validation::validate_email(email)?;

        let body = LoginRequest { email, password };
        let value = self
            .send(Method::POST, "/api/auth/login", Some(&body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Redeem a verification code
    pub async fn verify_email(&self, code: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct VerifyEmailRequest<'a> {
            code: &'a str,
        }

        let body = VerifyEmailRequest { code };
        self.send(Method::POST, "/api/auth/verify-email", Some(&body))
            .await
    }

    /// Ask the server to send another verification email
    pub async fn resend_verification(&self) -> CliClientResult<Value> {
        self.send::<Value>(Method::POST, "/api/auth/send-verification", None)
            .await
    }

    /// Session summary for the signed-in caller
    pub async fn session(&self) -> CliClientResult<Value> {
        self.get("/api/auth/session", &[]).await
    }

    // =========================================================================
    // Profile Operations
    // =========================================================================

    /// Get a profile; `None` means the caller's own
    pub async fn get_profile(&self, uid: Option<&str>) -> CliClientResult<Value> {
        self.get(&Self::profile_path(uid), &[]).await
    }

    /// Create the caller's profile if it does not exist yet
    pub async fn ensure_profile(&self) -> CliClientResult<Value> {
        self.send::<Value>(Method::POST, "/api/users/profile", None)
            .await
    }

    /// Partial update; only the fields set in `update` are sent
    pub async fn update_profile(
        &self,
        uid: Option<&str>,
        update: &ProfileUpdate,
    ) -> CliClientResult<Value> {
        if update.is_empty() {
            return Err(ClientError::validation(None, "No profile fields to update"));
        }

        self.send(Method::PUT, &Self::profile_path(uid), Some(update))
            .await
    }

    /// Mark a profile complete
    pub async fn complete_profile(&self, uid: Option<&str>) -> CliClientResult<Value> {
        let path = format!("{}/complete", Self::profile_path(uid));
        self.send::<Value>(Method::POST, &path, None).await
    }

    /// Delete a profile together with its account
    pub async fn delete_profile(&self, uid: &str) -> CliClientResult<Value> {
        self.send::<Value>(Method::DELETE, &Self::profile_path(Some(uid)), None)
            .await
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    /// One page of profiles, newest first
    pub async fn list_users(
        &self,
        limit: Option<usize>,
        last_doc_id: Option<&str>,
    ) -> CliClientResult<Value> {
        let limit = limit.map(|l| l.to_string());
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(limit) = &limit {
            query.push(("limit", limit));
        }
        if let Some(last_doc_id) = last_doc_id {
            query.push(("lastDocId", last_doc_id));
        }

        self.get("/api/users/all", &query).await
    }

    /// Find profiles by exact email
    pub async fn search_users(&self, email: &str) -> CliClientResult<Value> {
        self.get("/api/users/search", &[("email", email)]).await
    }

    /// Grant or revoke the admin claim
    pub async fn set_admin(&self, uid: &str, admin: bool) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct SetAdminRequest {
            admin: bool,
        }

        let body = SetAdminRequest { admin };
        self.send(Method::PUT, &format!("/api/users/{}/admin", uid), Some(&body))
            .await
    }
}
