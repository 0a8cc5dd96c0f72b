use crate::models::{MatchRecord, MenteeProfile, MentorProfile};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Supabase REST client
///
/// Handles all communication with the platform's Supabase project:
/// - Fetching mentee profiles
/// - Fetching the candidate mentor pool
/// - Persisting match records
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

/// Table names in the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub mentees: String,
    pub mentors: String,
    pub matches: String,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, api_key: String, tables: SupabaseTables) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
            tables,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn check_status(&self, status: StatusCode, context: &str) -> Result<(), SupabaseError> {
        if status == StatusCode::UNAUTHORIZED {
            return Err(SupabaseError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SupabaseError::ApiError(format!("{}: {}", context, status)));
        }
        Ok(())
    }

    /// Fetch a mentee profile by id
    pub async fn get_mentee(&self, mentee_id: &str) -> Result<MenteeProfile, SupabaseError> {
        let url = format!(
            "{}?id=eq.{}&select=*&limit=1",
            self.table_url(&self.tables.mentees),
            urlencoding::encode(mentee_id)
        );

        tracing::debug!("Fetching mentee from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        self.check_status(response.status(), "Failed to fetch mentee")?;

        let rows: Vec<Value> = response.json().await?;
        let row = rows.into_iter().next().ok_or_else(|| {
            SupabaseError::NotFound(format!("Mentee {} not found", mentee_id))
        })?;

        serde_json::from_value(row)
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse mentee: {}", e)))
    }

    /// Fetch the full candidate mentor pool
    ///
    /// Rows that fail to parse are skipped rather than failing the whole
    /// fetch.
    pub async fn list_mentors(&self) -> Result<Vec<MentorProfile>, SupabaseError> {
        let url = format!("{}?select=*", self.table_url(&self.tables.mentors));

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        self.check_status(response.status(), "Failed to fetch mentors")?;

        let rows: Vec<Value> = response.json().await?;
        let total = rows.len();

        let mentors: Vec<MentorProfile> = rows
            .into_iter()
            .filter_map(|row| serde_json::from_value(row).ok())
            .collect();

        tracing::debug!("Fetched {} mentors (of {} rows)", mentors.len(), total);

        Ok(mentors)
    }

    /// Persist pending match records
    ///
    /// Returns the number of records written. A failed insert propagates to
    /// the caller; the in-memory match list it was built from stays valid
    /// either way.
    pub async fn insert_matches(&self, records: &[MatchRecord]) -> Result<usize, SupabaseError> {
        if records.is_empty() {
            return Ok(0);
        }

        let url = self.table_url(&self.tables.matches);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(&records)
            .send()
            .await?;

        self.check_status(response.status(), "Failed to save matches")?;

        tracing::debug!(
            "Saved {} matches for mentee {}",
            records.len(),
            records[0].mentee_id
        );

        Ok(records.len())
    }

    /// Check that the REST endpoint is reachable
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/rest/v1/", self.base_url.trim_end_matches('/'));

        match self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Supabase health check failed: {}", e);
                false
            }
        }
    }
}
