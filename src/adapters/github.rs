//! `Gateway` over the GitHub REST API.
//!
//! Every call is issued once; a transport failure or non-2xx response is
//! returned to the caller as-is.

use crate::config::Settings;
use crate::domain::model::{CreatedIssue, DispatchRequest, IssuePayload, WorkflowDescriptor};
use crate::domain::ports::Gateway;
use crate::utils::error::{Result, TennisError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "2022-11-28";
const WORKFLOWS_PER_PAGE: u32 = 100;

#[derive(Debug, Serialize)]
struct CreateIssueBody<'a> {
    title: &'a str,
    body: &'a str,
    labels: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct WorkflowPage {
    workflows: Vec<WorkflowDescriptor>,
}

#[derive(Debug, Deserialize)]
struct RepositoryInfo {
    default_branch: String,
}

pub struct GitHubGateway {
    settings: Settings,
    client: Client,
}

impl GitHubGateway {
    pub fn new(settings: Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("tennis-cli/", env!("CARGO_PKG_VERSION"))),
        );

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token))
            .map_err(|_| TennisError::config("token contains characters not allowed in a header"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { settings, client })
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.settings.api_url, self.settings.owner, self.settings.repo, path
        )
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("GitHub API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await?;
        Err(TennisError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl Gateway for GitHubGateway {
    async fn create_issue(&self, payload: &IssuePayload) -> Result<CreatedIssue> {
        let url = self.repo_url("/issues");
        tracing::debug!("POST {}", url);

        let body = CreateIssueBody {
            title: &payload.title,
            body: &payload.body,
            labels: [payload.label.as_str()],
        };
        let response = self.send(self.client.post(&url).json(&body)).await?;
        Ok(response.json().await?)
    }

    async fn list_workflows(&self) -> Result<Vec<WorkflowDescriptor>> {
        let mut workflows = Vec::new();
        let mut next_url = Some(format!(
            "{}?per_page={}",
            self.repo_url("/actions/workflows"),
            WORKFLOWS_PER_PAGE
        ));

        while let Some(url) = next_url.take() {
            tracing::debug!("GET {}", url);
            let response = self.send(self.client.get(&url)).await?;

            next_url = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_url);

            let page: WorkflowPage = response.json().await?;
            workflows.extend(page.workflows);
        }

        tracing::debug!("Fetched {} workflows", workflows.len());
        Ok(workflows)
    }

    async fn get_default_branch(&self) -> Result<String> {
        let url = self.repo_url("");
        tracing::debug!("GET {}", url);

        let response = self.send(self.client.get(&url)).await?;
        let info: RepositoryInfo = response.json().await?;
        Ok(info.default_branch)
    }

    async fn dispatch_workflow(&self, workflow_id: u64, request: &DispatchRequest) -> Result<()> {
        let url = self.repo_url(&format!("/actions/workflows/{}/dispatches", workflow_id));
        tracing::debug!("POST {}", url);

        self.send(self.client.post(&url).json(request)).await?;
        Ok(())
    }
}

/// Extracts the `rel="next"` target from an RFC 8288 `Link` header.
fn next_page_url(link_header: &str) -> Option<String> {
    link_header.split(',').find_map(|part| {
        let (target, params) = part.trim().split_once(';')?;
        let is_next = params
            .split(';')
            .any(|param| param.trim() == r#"rel="next""#);
        if !is_next {
            return None;
        }
        target
            .trim()
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}
