pub mod github;
pub mod labels;
pub mod ownership;
pub mod pipeline;

pub use github::GithubClient;
pub use labels::{
    drop_invalid, retain_eligible, EligibleByDefault, LabelPredicate, INVALID_LABEL,
};
pub use ownership::{count_other_repos, primary_user, repo_owner};
