use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use synchrony_core::model::{Email, GroupId, SessionId};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::records::{
    ChallengeRecord, GroupRecord, StudentRecord, select_challenges, select_group, select_student,
};
use crate::source::{ChallengeSource, GroupSource, SourceError, Sources, StudentSource};

mod rows;

pub use rows::parse_rows;

/// Spreadsheet the demo ships with.
pub const DEFAULT_SHEET_ID: &str = "1rpR-E_RSooDkNDh-Q_1BDIeGw4vfgmusNAfwPqATaW4";
pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The three tabs of the study spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Students,
    Groups,
    Challenges,
}

impl Tab {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tab::Students => "Students",
            Tab::Groups => "Groups",
            Tab::Challenges => "Challenges",
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SheetsInitError {
    #[error("invalid sheets base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("sheet id cannot be empty")]
    EmptySheetId,
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetsConfig {
    pub sheet_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SheetsConfig {
    /// Defaults overridden by `SYNCHRONY_SHEET_ID`, `SYNCHRONY_SHEETS_BASE_URL`
    /// and `SYNCHRONY_HTTP_TIMEOUT_SECS`. Blank or unparsable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(sheet_id) = env_non_blank("SYNCHRONY_SHEET_ID") {
            config.sheet_id = sheet_id;
        }
        if let Some(base_url) = env_non_blank("SYNCHRONY_SHEETS_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(secs) =
            env_non_blank("SYNCHRONY_HTTP_TIMEOUT_SECS").and_then(|raw| raw.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    #[must_use]
    pub fn with_sheet_id(mut self, sheet_id: impl Into<String>) -> Self {
        self.sheet_id = sheet_id.into();
        self
    }

    /// CSV export URL of one tab.
    ///
    /// # Errors
    ///
    /// Returns `SheetsInitError` if the base URL or sheet id is unusable.
    pub fn export_url(&self, tab: Tab) -> Result<Url, SheetsInitError> {
        let sheet_id = self.sheet_id.trim();
        if sheet_id.is_empty() {
            return Err(SheetsInitError::EmptySheetId);
        }
        let raw = format!(
            "{}/{sheet_id}/gviz/tq",
            self.base_url.trim_end_matches('/')
        );
        Url::parse_with_params(&raw, &[("tqx", "out:csv"), ("sheet", tab.name())])
            .map_err(|_| SheetsInitError::InvalidBaseUrl(self.base_url.clone()))
    }

    /// Link to the spreadsheet itself, for people rather than for fetching.
    #[must_use]
    pub fn edit_url(&self) -> String {
        format!(
            "{}/{}/edit?usp=sharing",
            self.base_url.trim_end_matches('/'),
            self.sheet_id.trim()
        )
    }
}

fn env_non_blank(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Reads the spreadsheet tabs through their CSV export. Every lookup fetches
/// the whole tab; nothing is cached between calls.
#[derive(Clone)]
pub struct GoogleSheets {
    client: Client,
    students_url: Url,
    groups_url: Url,
    challenges_url: Url,
}

impl GoogleSheets {
    /// # Errors
    ///
    /// Returns `SheetsInitError` if the URLs cannot be built or the HTTP client
    /// fails to initialize.
    pub fn new(config: &SheetsConfig) -> Result<Self, SheetsInitError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            students_url: config.export_url(Tab::Students)?,
            groups_url: config.export_url(Tab::Groups)?,
            challenges_url: config.export_url(Tab::Challenges)?,
        })
    }

    fn url(&self, tab: Tab) -> &Url {
        match tab {
            Tab::Students => &self.students_url,
            Tab::Groups => &self.groups_url,
            Tab::Challenges => &self.challenges_url,
        }
    }

    async fn fetch_tab<T: DeserializeOwned>(&self, tab: Tab) -> Result<Vec<T>, SourceError> {
        debug!(tab = tab.name(), "fetching sheet tab");
        let response = self.client.get(self.url(tab).clone()).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }
        let body = response.text().await?;
        let rows = parse_rows::<T>(&body)?;
        info!(tab = tab.name(), rows = rows.len(), "loaded sheet tab");
        Ok(rows)
    }
}

#[async_trait]
impl StudentSource for GoogleSheets {
    async fn find_student(&self, email: &Email) -> Result<Option<StudentRecord>, SourceError> {
        let rows: Vec<StudentRecord> = self.fetch_tab(Tab::Students).await?;
        Ok(select_student(&rows, email).cloned())
    }
}

#[async_trait]
impl GroupSource for GoogleSheets {
    async fn find_group(&self, group_id: &GroupId) -> Result<Option<GroupRecord>, SourceError> {
        let rows: Vec<GroupRecord> = self.fetch_tab(Tab::Groups).await?;
        Ok(select_group(&rows, group_id).cloned())
    }
}

#[async_trait]
impl ChallengeSource for GoogleSheets {
    async fn challenges_for_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<ChallengeRecord>, SourceError> {
        let rows: Vec<ChallengeRecord> = self.fetch_tab(Tab::Challenges).await?;
        Ok(select_challenges(&rows, session_id))
    }
}

impl Sources {
    /// Build `Sources` that read the published spreadsheet over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `SheetsInitError` if the client cannot be configured.
    pub fn google(config: &SheetsConfig) -> Result<Self, SheetsInitError> {
        let sheets = GoogleSheets::new(config)?;
        Ok(Self {
            students: std::sync::Arc::new(sheets.clone()),
            groups: std::sync::Arc::new(sheets.clone()),
            challenges: std::sync::Arc::new(sheets),
        })
    }
}
