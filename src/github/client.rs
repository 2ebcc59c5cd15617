use std::sync::Arc;

use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::github::raw_url::derive_raw_url;
use crate::models::{RepositoryMetadata, RepositoryTree, TreeResponse};

const USER_AGENT: &str = concat!("repo-explainer/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Thin GitHub REST client. One attempt per call; anything but 200 is
/// reported as `AppError::Upstream`.
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    config: Arc<Config>,
}

impl GitHubClient {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.http.get(url);
        match &self.config.github_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_api<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.config.github_api_base.trim_end_matches('/'), path);
        let response = self
            .get(&url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .query(query)
            .send()
            .await?;
        tracing::debug!("GET {} -> {}", url, response.status());

        let response = expect_ok(response, &url).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn default_branch(&self, owner: &str, repo: &str) -> Result<String> {
        let metadata: RepositoryMetadata = self
            .get_api(&format!("/repos/{}/{}", owner, repo), &[])
            .await?;
        tracing::debug!("Default branch for {}/{}: {}", owner, repo, metadata.default_branch);
        Ok(metadata.default_branch)
    }

    /// Resolves the default branch, then lists the whole tree recursively.
    /// A failed branch lookup short-circuits before the tree call.
    pub async fn fetch_tree(&self, owner: &str, repo: &str) -> Result<RepositoryTree> {
        let branch = self.default_branch(owner, repo).await?;
        let response: TreeResponse = self
            .get_api(
                &format!("/repos/{}/{}/git/trees/{}", owner, repo, branch),
                &[("recursive", "1")],
            )
            .await?;

        if response.truncated {
            tracing::warn!("Tree listing for {}/{} was truncated by GitHub", owner, repo);
        }
        tracing::debug!("Found {} tree entries in {}/{}", response.tree.len(), owner, repo);

        Ok(RepositoryTree {
            branch,
            entries: response.tree,
        })
    }

    pub async fn try_fetch_file(&self, file_url: &str) -> Result<String> {
        let raw_url = derive_raw_url(
            file_url,
            &self.config.github_web_base,
            &self.config.raw_content_base,
        )?;
        tracing::debug!("Fetching {} via {}", file_url, raw_url);

        let response = self.get(&raw_url).send().await?;
        let response = expect_ok(response, &raw_url).await?;
        let content = response.text().await?;
        tracing::debug!("Fetched {} bytes", content.len());
        Ok(content)
    }

    /// Boundary form of `try_fetch_file`: failures are logged and become `None`.
    pub async fn fetch_file(&self, file_url: &str) -> Option<String> {
        match self.try_fetch_file(file_url).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Could not fetch {}: {}", file_url, e);
                None
            }
        }
    }
}

async fn expect_ok(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::debug!("Error response from {}: {}", url, body);
    Err(AppError::Upstream {
        status: status.as_u16(),
        url: url.to_string(),
    })
}
