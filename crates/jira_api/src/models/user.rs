//! User references embedded in Jira payloads.

use serde::Deserialize;

/// Author or updater of a Jira resource. Cloud instances identify users by
/// `accountId`, Server instances by `name`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
}

impl UserRef {
    /// Returns the most readable identifier Jira gave us.
    pub fn label(&self) -> String {
        self.display_name
            .clone()
            .or_else(|| self.name.clone())
            .or_else(|| self.account_id.clone())
            .unwrap_or_default()
    }
}
