//! GitHub access: REST client, repository search, tree filtering and
//! raw-content URL derivation.

pub mod client;
pub mod raw_url;
pub mod search;
pub mod tree;

pub use client::GitHubClient;
pub use tree::{build_filtered_tree, count_leaves};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use wiremock::MockServer;

    use crate::config::Config;
    use crate::github::GitHubClient;

    /// Client whose API and raw hosts both point at the mock server.
    pub(crate) fn client_for(server: &MockServer, token: Option<&str>) -> GitHubClient {
        let config = Config {
            github_token: token.map(str::to_string),
            github_api_base: server.uri(),
            raw_content_base: server.uri(),
            ..Config::default()
        };
        GitHubClient::new(Arc::new(config)).unwrap()
    }
}
