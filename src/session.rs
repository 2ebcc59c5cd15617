//! Interactive session state machine.
//!
//! One `Session` per server process. Four events drive it:
//!
//! - `Search` → repository candidates (phase `RepositoriesListed`)
//! - `SelectRepository` → filtered tree markup (phase `StructureShown`)
//! - `SelectFile` → which output panel is visible (phase `FileSelected`)
//! - `Analyze` → annotated output in exactly one panel (phase `Analyzed`)
//!
//! Every event is accepted in every phase. Failures never escape: they are
//! turned into the messages shown in the affected panel.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::annotate::{Annotator, ANNOTATION_ERROR_PREFIX};
use crate::github::{build_filtered_tree, count_leaves, GitHubClient};
use crate::models::{ContentType, Panel, Phase, SearchMode, SessionView};
use crate::render::{error_fragment, render_notebook, render_tree};

pub const MSG_NO_FILE_SELECTED: &str = "Please select a file to analyze";
pub const MSG_FETCH_FAILED: &str = "Error: Could not fetch file content";
pub const MSG_NO_STRUCTURE: &str = "Could not fetch repository structure";
pub const MSG_NO_FILES: &str = "No files found";
pub const MSG_BAD_SELECTION: &str = "Error: invalid repository selection";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Search { mode: SearchMode, query: String },
    SelectRepository { label: String },
    SelectFile { path: String },
    Analyze { path: String },
}

pub type Session = SessionView;
pub type SharedSession = Arc<Mutex<Session>>;

/// Holds the collaborators every transition needs.
#[derive(Clone)]
pub struct Controller {
    github: GitHubClient,
    annotator: Annotator,
}

impl Controller {
    pub fn new(github: GitHubClient, annotator: Annotator) -> Self {
        Self { github, annotator }
    }

    pub async fn dispatch(&self, session: &mut Session, event: Event) {
        tracing::debug!("Session event {:?} in phase {:?}", event, session.phase);
        match event {
            Event::Search { mode, query } => self.search(session, mode, query).await,
            Event::SelectRepository { label } => self.select_repository(session, label).await,
            Event::SelectFile { path } => select_file(session, path),
            Event::Analyze { path } => self.analyze(session, path).await,
        }
    }

    async fn search(&self, session: &mut Session, mode: SearchMode, query: String) {
        session.repositories = self.github.search_repositories(mode, &query).await;
        session.search_mode = mode;
        session.query = query;
        session.selected_repository = None;
        session.structure_html.clear();
        session.phase = Phase::RepositoriesListed;
    }

    async fn select_repository(&self, session: &mut Session, label: String) {
        session.structure_html = self.structure_for(&label).await;
        session.selected_repository = Some(label);
        session.phase = Phase::StructureShown;
    }

    async fn structure_for(&self, label: &str) -> String {
        let Some((owner, repo)) = parse_repository_label(label) else {
            tracing::warn!("Unparseable repository selection: {}", label);
            return MSG_BAD_SELECTION.to_string();
        };

        // Resolved separately so a missing repository and a failed listing
        // get different messages.
        if let Err(e) = self.github.default_branch(owner, repo).await {
            tracing::warn!("Default branch lookup for {}/{} failed: {}", owner, repo, e);
            return MSG_NO_STRUCTURE.to_string();
        }

        let listing = match self.github.fetch_tree(owner, repo).await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!("Tree listing for {}/{} failed: {}", owner, repo, e);
                return MSG_NO_FILES.to_string();
            }
        };

        let tree = build_filtered_tree(
            &listing.entries,
            owner,
            repo,
            &listing.branch,
            &self.github.config().github_web_base,
        );
        tracing::debug!("{}/{}: {} files kept", owner, repo, count_leaves(&tree));
        render_tree(&tree)
    }

    async fn analyze(&self, session: &mut Session, path: String) {
        let path = path.trim().to_string();
        if path.is_empty() {
            show_code(session, MSG_NO_FILE_SELECTED.to_string());
            session.phase = Phase::Analyzed;
            return;
        }
        select_file(session, path.clone());
        session.phase = Phase::Analyzed;

        let Some(content) = self.github.fetch_file(&path).await else {
            show_message(session, MSG_FETCH_FAILED);
            return;
        };

        if ContentType::is_notebook(&path) {
            match self.annotator.annotate(&content, ContentType::Notebook).await {
                Ok(annotated) => show_notebook(session, render_notebook(&annotated)),
                Err(e) => {
                    tracing::warn!("Notebook annotation failed: {}", e);
                    show_notebook(session, error_fragment(ANNOTATION_ERROR_PREFIX, &e.to_string()));
                }
            }
        } else {
            let annotated = self
                .annotator
                .annotate_or_message(&content, ContentType::Source)
                .await;
            show_code(session, annotated);
        }
    }
}

fn select_file(session: &mut Session, path: String) {
    session.visible_panel = if ContentType::is_notebook(&path) {
        Panel::Notebook
    } else {
        Panel::Code
    };
    session.selected_file = path;
    session.phase = Phase::FileSelected;
}

fn show_code(session: &mut Session, text: String) {
    session.visible_panel = Panel::Code;
    session.code_output = Some(text);
    session.notebook_output = None;
}

fn show_notebook(session: &mut Session, html: String) {
    session.visible_panel = Panel::Notebook;
    session.notebook_output = Some(html);
    session.code_output = None;
}

/// Routes a message to whichever panel is currently visible.
fn show_message(session: &mut Session, message: &str) {
    match session.visible_panel {
        Panel::Code => show_code(session, message.to_string()),
        Panel::Notebook => show_notebook(session, error_fragment("Error", message)),
    }
}

/// `owner/repo (⭐ 12) - Python` or a bare `owner/repo` → `(owner, repo)`.
pub fn parse_repository_label(label: &str) -> Option<(&str, &str)> {
    let full_name = label.split(" (").next()?.trim();
    let (owner, repo) = full_name.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner, repo))
}
