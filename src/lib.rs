pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use app::{update, App, Command, FetchResult, Message, Status};
pub use config::{github_token, CompletionThresholds, Config, ContestWindow};
pub use data::{ContestProgress, PullRequestItem};
pub use error::FetchError;
