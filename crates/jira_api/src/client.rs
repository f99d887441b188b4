use crate::config::{AuthMethod, JiraConfig};
use crate::error::{JiraError, Result};
use crate::models::{UserRef, Worklog, WorklogCreateRequest, WorklogPage};
use crate::rate_limiter::RateLimiter;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

const WORKLOG_PAGE_SIZE: u64 = 1000;

#[derive(Clone)]
pub struct JiraClient {
    http: HttpClient,
    config: JiraConfig,
    limiter: RateLimiter,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let limiter = RateLimiter::new(config.cooldown);
        Self::new_with_limiter(config, limiter)
    }

    pub fn new_with_limiter(config: JiraConfig, limiter: RateLimiter) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self {
            http,
            config,
            limiter,
        })
    }

    pub async fn get_myself(&self) -> Result<UserRef> {
        self.send_json(Method::GET, "myself", &[], None::<&()>).await
    }

    /// Lists every worklog of an issue, following pagination to the end.
    pub async fn list_issue_worklogs(&self, issue_key: &str) -> Result<Vec<Worklog>> {
        let path = format!("issue/{}/worklog", issue_key);
        let page_size = WORKLOG_PAGE_SIZE.to_string();
        let mut worklogs = Vec::new();
        let mut start_at = 0u64;
        loop {
            let start = start_at.to_string();
            let page: WorklogPage = self
                .send_json(
                    Method::GET,
                    &path,
                    &[("startAt", start.as_str()), ("maxResults", page_size.as_str())],
                    None::<&()>,
                )
                .await?;
            let next = page.next_start();
            worklogs.extend(page.worklogs);
            match next {
                Some(offset) => start_at = offset,
                None => break,
            }
        }
        debug!(issue_key, count = worklogs.len(), "listed worklogs");
        Ok(worklogs)
    }

    pub async fn add_worklog(
        &self,
        issue_key: &str,
        request: &WorklogCreateRequest,
    ) -> Result<Worklog> {
        let path = format!("issue/{}/worklog", issue_key);
        self.send_json(Method::POST, &path, &[], Some(request)).await
    }

    pub async fn delete_worklog(&self, issue_key: &str, worklog_id: &str) -> Result<()> {
        let path = format!("issue/{}/worklog/{}", issue_key, worklog_id);
        self.limiter.hit().await;
        debug!(%path, "DELETE");
        let response = self.request(Method::DELETE, &path).send().await?;
        Self::ensure_success(response).await
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.limiter.hit().await;
        debug!(%method, path, "sending request");
        let mut request = self.request(method, path);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.url_for(path));
        match &self.config.auth {
            AuthMethod::Basic { user, api_token } => request.basic_auth(user, Some(api_token)),
            AuthMethod::Bearer { token } => request.bearer_auth(token),
        }
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(JiraError::from)
    }

    async fn ensure_success(response: Response) -> Result<()> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(JiraError::Authentication(format!(
                "Access denied ({}) - {}",
                status,
                body.trim()
            )))
        } else {
            Err(JiraError::from_body(status, &body))
        }
    }
}

fn build_http_client(config: &JiraConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&config.user_agent)
            .map_err(|err| JiraError::Other(err.to_string()))?,
    );

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| JiraError::Other(err.to_string()))
}
