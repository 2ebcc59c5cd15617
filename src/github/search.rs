use crate::error::{AppError, Result};
use crate::github::client::GitHubClient;
use crate::models::{RepositoryCandidate, RepositoryItem, SearchMode, SearchResponse};

const SEARCH_PAGE_SIZE: &str = "5";

impl GitHubClient {
    /// Runs one API-backed search. `DirectPath` never reaches the network
    /// and yields no candidates here; see `search_repositories`.
    pub async fn query_candidates(
        &self,
        mode: SearchMode,
        query: &str,
    ) -> Result<Vec<RepositoryCandidate>> {
        tracing::debug!("Searching repositories ({:?}): {}", mode, query);

        let items: Vec<RepositoryItem> = match mode {
            SearchMode::Topic => {
                let q = format!("topic:{}", query);
                self.search_endpoint(&q).await?
            }
            SearchMode::RepositoryName => self.search_endpoint(query).await?,
            SearchMode::Username => {
                if !is_login(query) {
                    return Err(AppError::InvalidInput(format!("not a GitHub username: {}", query)));
                }
                self.get_api(
                    &format!("/users/{}/repos", query),
                    &[("sort", "stars"), ("order", "desc")],
                )
                .await?
            }
            SearchMode::DirectPath => Vec::new(),
        };

        let candidates: Vec<RepositoryCandidate> =
            items.into_iter().map(RepositoryCandidate::from).collect();
        tracing::debug!("Found {} repositories", candidates.len());
        Ok(candidates)
    }

    async fn search_endpoint(&self, q: &str) -> Result<Vec<RepositoryItem>> {
        let response: SearchResponse = self
            .get_api(
                "/search/repositories",
                &[
                    ("q", q),
                    ("sort", "stars"),
                    ("order", "desc"),
                    ("per_page", SEARCH_PAGE_SIZE),
                ],
            )
            .await?;
        Ok(response.items)
    }

    /// Selector labels for a search. Empty queries, direct paths without a
    /// `/` and every upstream failure produce an empty list.
    pub async fn search_repositories(&self, mode: SearchMode, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        if mode == SearchMode::DirectPath {
            return if query.contains('/') {
                vec![query.to_string()]
            } else {
                Vec::new()
            };
        }

        match self.query_candidates(mode, query).await {
            Ok(candidates) => candidates.iter().map(RepositoryCandidate::label).collect(),
            Err(e) => {
                tracing::warn!("Repository search failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// GitHub logins are ASCII alphanumerics and hyphens.
fn is_login(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
