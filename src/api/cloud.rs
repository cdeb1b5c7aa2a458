//! Client for the hosted backend.
//!
//! The backend is a Supabase-style service: passwordless email sign-in
//! (one-time code), a single `entries` table behind a REST interface with
//! row-level security, and an admin account that sees every employee's rows.
//! The session token is cached encrypted on disk between runs.

use crate::api::{EntryRow, SyncError, SyncPort};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::msg_print;
use anyhow::Result;
use chrono::Utc;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Response, StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

const SESSION_FILE: &str = ".session";
const AUTH_OTP_URL: &str = "auth/v1/otp";
const AUTH_VERIFY_URL: &str = "auth/v1/verify";
const AUTH_LOGOUT_URL: &str = "auth/v1/logout";
const ENTRIES_URL: &str = "rest/v1/entries";

/// Connection settings for the hosted backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    /// Base URL of the backend project, e.g. `https://xyz.supabase.co`.
    pub api_url: String,
    /// Public project API key sent with every request.
    pub api_key: String,
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: "Remote sync".to_string(),
        }
    }

    /// Interactive setup, pre-filling existing values.
    pub fn init(config: &Option<RemoteConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or(RemoteConfig {
            api_url: String::new(),
            api_key: String::new(),
        });
        msg_print!(Message::ConfigModuleRemote);
        Ok(RemoteConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteApiKey.to_string())
                .default(default.api_key)
                .interact_text()?,
        })
    }
}

/// An authenticated backend session.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
    /// Unix timestamp after which the token is no longer accepted.
    pub expires_at: i64,
}

#[derive(Deserialize)]
struct VerifyResponse {
    access_token: String,
    expires_in: i64,
    user: VerifyUser,
}

#[derive(Deserialize)]
struct VerifyUser {
    id: String,
    email: String,
}

pub struct CloudClient {
    client: Client,
    config: RemoteConfig,
    secret: Secret,
}

impl CloudClient {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            secret: Secret::new(SESSION_FILE),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Requests a one-time sign-in code for the address. The backend emails
    /// the code; nothing is stored locally yet.
    pub async fn request_code(&self, email: &str) -> Result<(), SyncError> {
        let res = self
            .client
            .post(self.endpoint(AUTH_OTP_URL))
            .header("apikey", &self.config.api_key)
            .json(&json!({ "email": email, "create_user": true }))
            .send()
            .await?;
        expect_success(res).map(|_| ())
    }

    /// Exchanges an emailed code for a session and caches it.
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<Session, SyncError> {
        let res = self
            .client
            .post(self.endpoint(AUTH_VERIFY_URL))
            .header("apikey", &self.config.api_key)
            .json(&json!({ "type": "email", "email": email, "token": code }))
            .send()
            .await?;
        let res = expect_success(res)?;
        let verified: VerifyResponse = res.json().await?;

        let session = Session {
            access_token: verified.access_token,
            user_id: verified.user.id,
            email: verified.user.email,
            expires_at: Utc::now().timestamp() + verified.expires_in,
        };
        self.secret
            .store(&serde_json::to_string(&session)?)
            .map_err(|err| SyncError::SessionCache(err.to_string()))?;
        Ok(session)
    }

    /// The cached session, if one exists and has not expired.
    pub fn session(&self) -> Result<Session, SyncError> {
        let raw = self.secret.load().ok_or(SyncError::NotSignedIn)?;
        let session: Session = serde_json::from_str(&raw)?;
        if session.expires_at <= Utc::now().timestamp() {
            return Err(SyncError::SessionExpired);
        }
        Ok(session)
    }

    pub fn signed_in(&self) -> bool {
        self.session().is_ok()
    }

    /// Ends the backend session and drops the local cache. The cache is
    /// cleared even when the backend call fails; local entries are kept.
    pub async fn sign_out(&self) -> Result<(), SyncError> {
        if let Ok(session) = self.session() {
            let _ = self
                .client
                .post(self.endpoint(AUTH_LOGOUT_URL))
                .headers(self.headers(&session)?)
                .send()
                .await;
        }
        self.secret.clear().map_err(|err| SyncError::SessionCache(err.to_string()))?;
        Ok(())
    }

    fn headers(&self, session: &Session) -> Result<HeaderMap, SyncError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.config.api_key).map_err(|_| SyncError::Status(StatusCode::BAD_REQUEST))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", session.access_token)).map_err(|_| SyncError::Status(StatusCode::BAD_REQUEST))?,
        );
        Ok(headers)
    }
}

impl SyncPort for CloudClient {
    async fn fetch_all(&self, only_mine: bool) -> Result<Vec<EntryRow>, SyncError> {
        let session = self.session()?;
        let mut url = format!("{}?select=*&order=date.asc", self.endpoint(ENTRIES_URL));
        if only_mine {
            url.push_str(&format!("&user_id=eq.{}", session.user_id));
        }
        let res = self.client.get(url).headers(self.headers(&session)?).send().await?;
        let res = expect_success(res)?;
        Ok(res.json().await?)
    }

    async fn insert(&self, row: &EntryRow) -> Result<(), SyncError> {
        let session = self.session()?;
        let mut row = row.clone();
        row.user_id = Some(session.user_id.clone());
        let res = self
            .client
            .post(self.endpoint(ENTRIES_URL))
            .headers(self.headers(&session)?)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;
        expect_success(res).map(|_| ())
    }

    async fn update(&self, id: &str, patch: &serde_json::Value) -> Result<(), SyncError> {
        let session = self.session()?;
        let url = format!("{}?id=eq.{}", self.endpoint(ENTRIES_URL), id);
        let res = self
            .client
            .patch(url)
            .headers(self.headers(&session)?)
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await?;
        expect_success(res).map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), SyncError> {
        let session = self.session()?;
        let url = format!("{}?id=eq.{}", self.endpoint(ENTRIES_URL), id);
        let res = self.client.delete(url).headers(self.headers(&session)?).send().await?;
        expect_success(res).map(|_| ())
    }

    async fn insert_many(&self, rows: &[EntryRow]) -> Result<usize, SyncError> {
        if rows.is_empty() {
            return Ok(0);
        }
        let session = self.session()?;
        let rows: Vec<EntryRow> = rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.user_id = Some(session.user_id.clone());
                row
            })
            .collect();
        let res = self
            .client
            .post(self.endpoint(ENTRIES_URL))
            .headers(self.headers(&session)?)
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await?;
        expect_success(res)?;
        Ok(rows.len())
    }
}

/// Maps an unsuccessful response onto the sync error taxonomy; 401 means the
/// cached session is no longer valid.
fn expect_success(res: Response) -> Result<Response, SyncError> {
    match res.status() {
        status if status.is_success() => Ok(res),
        StatusCode::UNAUTHORIZED => Err(SyncError::SessionExpired),
        status => Err(SyncError::Status(status)),
    }
}
