use std::time::Duration;

pub const DEFAULT_API_VERSION: &str = "2";
pub const DEFAULT_USER_AGENT: &str = "jira-worklog";
pub const DEFAULT_COOLDOWN_MS: u64 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Credentials sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Jira Cloud: account email plus API token.
    Basic { user: String, api_token: String },
    /// Jira Server / Data Center personal access token.
    Bearer { token: String },
}

impl std::fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMethod::Basic { user, .. } => f
                .debug_struct("Basic")
                .field("user", user)
                .field("api_token", &"[REDACTED]")
                .finish(),
            AuthMethod::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"[REDACTED]")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct JiraConfig {
    pub base_url: String,
    pub api_version: String,
    pub auth: AuthMethod,
    pub user_agent: String,
    pub cooldown: Duration,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl JiraConfig {
    pub fn new(base_url: impl Into<String>, auth: AuthMethod) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            auth,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_cooldown(mut self, duration: Duration) -> Self {
        self.cooldown = duration;
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Base of every REST path, e.g. `https://example.atlassian.net/rest/api/2/`.
    pub fn api_root(&self) -> String {
        format!(
            "{}/rest/api/{}/",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> AuthMethod {
        AuthMethod::Basic {
            user: "daffy@example.com".to_string(),
            api_token: "s3cret".to_string(),
        }
    }

    #[test]
    fn api_root_joins_base_url_and_version() {
        let config = JiraConfig::new("https://jira.example.com/", basic());
        assert_eq!(config.api_root(), "https://jira.example.com/rest/api/2/");

        let config = config.with_api_version("/3/");
        assert_eq!(config.api_root(), "https://jira.example.com/rest/api/3/");
    }

    #[test]
    fn builders_override_defaults() {
        let config = JiraConfig::new("https://jira.example.com", basic())
            .with_cooldown(Duration::ZERO)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.cooldown, Duration::ZERO);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.connect_timeout,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let rendered = format!("{:?}", JiraConfig::new("https://jira.example.com", basic()));
        assert!(rendered.contains("daffy@example.com"));
        assert!(!rendered.contains("s3cret"));

        let bearer = AuthMethod::Bearer {
            token: "pat-token".to_string(),
        };
        assert!(!format!("{bearer:?}").contains("pat-token"));
    }
}
