// src/api.rs
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request abandoned: the server did not respond in time.")]
    TimedOut,
    #[error("Network error: {0}")]
    Transport(reqwest::Error),
    #[error("Server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimedOut
        } else {
            Self::Transport(err)
        }
    }
}

/// Request body for creating an activity. Duration and distance are
/// pre-serialized "<value> <unit>" strings; a missing distance is sent as
/// an explicit JSON null.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewActivityPayload {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub duration: String,
    pub distance: Option<String>,
    pub calories: i64,
    pub date: String, // ISO-8601, midnight UTC of the chosen day
}

/// An activity record as returned by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub duration: String,
    pub distance: Option<String>,
    pub calories: i64,
    pub date: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    server_url: String,
}

impl ApiClient {
    /// Builds a client with the configured request timeout. The timeout is
    /// what keeps a hung submission from leaving the form stuck in the
    /// submitting state forever.
    pub fn new(server_url: &str, request_timeout: Duration) -> Result<Self, ApiError> {
        let http_client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http_client,
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Persists a new activity on the server.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::TimedOut` if the request exceeds the configured
    /// timeout, `ApiError::Status` if the server rejects the payload, and
    /// `ApiError::Transport` for any other network failure.
    pub async fn create_activity(&self, payload: &NewActivityPayload) -> Result<(), ApiError> {
        let url = format!("{}/activities", self.server_url);
        info!(
            "Sending POST to {} ({} activity, {} kcal)",
            url, payload.activity_type, payload.calories
        );
        debug!("Pushing payload: {:?}", payload);

        let response = self.http_client.post(&url).json(payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            error!(
                "Create activity request failed with status: {}. Body: {}",
                status, body
            );
            return Err(ApiError::Status { status, body });
        }

        info!("Activity created on server.");
        Ok(())
    }

    /// Fetches the recent activity list for the log view.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, ApiError> {
        let url = format!("{}/activities", self.server_url);
        debug!("Sending GET to {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            error!(
                "List activities request failed with status: {}. Body: {}",
                status, body
            );
            return Err(ApiError::Status { status, body });
        }

        let activities: Vec<Activity> = response.json().await?;
        info!("Received {} activities from server.", activities.len());
        Ok(activities)
    }
}
