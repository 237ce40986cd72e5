//! HTTP gateway for network calls to the attendance backend

use crate::{ClientConfig, GatewayError, GatewayResult, RemoteGateway};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};
use shared::client::{RosterResponse, SubmitOutcome, SubmitRequest, SubmitResponse};
use shared::{AttendanceEntry, Member};
use std::sync::RwLock;

/// Cookie the backend issues the anti-forgery token in
const CSRF_COOKIE: &str = "csrftoken";
/// Header the submit endpoint reads the token from
const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP gateway backed by reqwest
///
/// Remembers the latest `csrftoken` cookie seen on any response so
/// submits carry the matching header, the way the browser original read
/// it from `document.cookie`.
#[derive(Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    csrf_token: RwLock<Option<String>>,
}

impl HttpGateway {
    /// Create a new HTTP gateway from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            csrf_token: RwLock::new(config.csrf_token.clone()),
        }
    }

    /// Get the currently known anti-forgery token
    pub fn csrf_token(&self) -> Option<String> {
        self.csrf_token
            .read()
            .expect("csrf token lock poisoned")
            .clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Remember the latest csrftoken carried in response cookies
    fn capture_csrf(&self, headers: &HeaderMap) {
        for value in headers.get_all(SET_COOKIE) {
            if let Some(token) = parse_cookie(value, CSRF_COOKIE) {
                let mut slot = self.csrf_token.write().expect("csrf token lock poisoned");
                *slot = Some(token);
            }
        }
    }
}

/// Extract a cookie value from a `Set-Cookie` header
fn parse_cookie(value: &HeaderValue, name: &str) -> Option<String> {
    let raw = value.to_str().ok()?;
    let pair = raw.split(';').next()?;
    let (key, val) = pair.split_once('=')?;
    (key.trim() == name).then(|| val.trim().to_string())
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn fetch_roster(&self, search: Option<&str>) -> GatewayResult<Vec<Member>> {
        let mut request = self.client.get(self.url("api/members/"));
        if let Some(term) = search.filter(|t| !t.trim().is_empty()) {
            request = request.query(&[("search", term)]);
        }

        let response = request.send().await?.error_for_status()?;
        self.capture_csrf(response.headers());

        let body = response.text().await?;
        let roster: RosterResponse =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;
        let members = roster.into_members();

        tracing::debug!(count = members.len(), "Roster fetched");
        Ok(members)
    }

    async fn submit_batch(
        &self,
        date: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> GatewayResult<SubmitOutcome> {
        let payload = SubmitRequest {
            date,
            entries: entries.to_vec(),
        };

        let mut request = self
            .client
            .post(self.url("api/attendance/submit/"))
            .json(&payload);
        if let Some(token) = self.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?.error_for_status()?;
        self.capture_csrf(response.headers());

        let body = response.text().await?;
        let parsed: SubmitResponse =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;

        if parsed.status != "ok" {
            return Err(GatewayError::ServerRejected(
                parsed
                    .message
                    .unwrap_or_else(|| "Submission failed".to_string()),
            ));
        }

        tracing::info!(
            submitted = parsed.submitted_count,
            total_received = %parsed.total_received,
            "Attendance batch accepted"
        );
        Ok(SubmitOutcome {
            submitted_count: parsed.submitted_count,
            total_received: parsed.total_received,
        })
    }

    fn daily_report_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/api/report/daily/?date={}",
            self.base_url,
            date.format("%Y-%m-%d")
        )
    }
}
