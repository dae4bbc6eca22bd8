use super::types::PullRequestItem;

/// Outcome of one pipeline run.
///
/// Built fresh per fetch invocation; a new run replaces the previous one
/// wholesale, and an errored run surfaces nothing from here.
#[derive(Debug, Clone)]
pub struct ContestProgress {
    pub items: Vec<PullRequestItem>,
    pub total_count: usize,
    pub other_repos_count: usize,
    pub user_login: String,
    pub user_avatar: String,
    pub completed: bool,
}
