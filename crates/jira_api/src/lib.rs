//! Typed Jira worklog API client crate used by the sync engine.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod rate_limiter;

pub use client::JiraClient;
pub use config::{AuthMethod, JiraConfig};
pub use error::{JiraError, Result};
pub use models::{UserRef, Worklog, WorklogCreateRequest, WorklogPage};
pub use rate_limiter::RateLimiter;
