pub mod models;
pub mod types;

pub use models::ContestProgress;
pub use types::{ApiErrors, ErrorBody, Label, PullRequestItem, SearchResults, UserItem};
