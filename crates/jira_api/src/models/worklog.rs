use crate::models::UserRef;
use serde::{Deserialize, Serialize};

/// A worklog as returned by `GET /issue/{key}/worklog` and `POST /issue/{key}/worklog`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    pub id: String,
    pub issue_id: String,
    #[serde(default)]
    pub author: UserRef,
    #[serde(default)]
    pub update_author: UserRef,
    #[serde(default)]
    pub comment: Option<String>,
    pub created: String,
    pub updated: String,
    pub started: String,
    pub time_spent: String,
    pub time_spent_seconds: u64,
}

/// One page of an issue's worklog listing.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPage {
    pub start_at: u64,
    pub max_results: u64,
    pub total: u64,
    #[serde(default)]
    pub worklogs: Vec<Worklog>,
}

impl WorklogPage {
    /// Offset of the page after this one, if any remain.
    pub fn next_start(&self) -> Option<u64> {
        let next = self.start_at + self.worklogs.len() as u64;
        if self.worklogs.is_empty() || next >= self.total {
            None
        } else {
            Some(next)
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogCreateRequest {
    pub comment: String,
    /// `yyyy-MM-dd'T'HH:mm:ss.SSSZ`, e.g. `2021-02-16T12:29:00.000-0500`.
    pub started: String,
    pub time_spent_seconds: u64,
}
