use std::env;
use std::process::Command;

use anyhow::Result;
use chrono::NaiveDate;

pub const GITHUB_API_ROOT: &str = "https://api.github.com";

/// Everything the fetcher and the completion check need, injected explicitly
/// instead of read from process globals at the call sites.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub window: ContestWindow,
    pub thresholds: CompletionThresholds,
    pub api_root: String,
}

impl Config {
    pub fn new(token: String, window: ContestWindow) -> Self {
        Self {
            token,
            window,
            thresholds: CompletionThresholds::default(),
            api_root: GITHUB_API_ROOT.to_string(),
        }
    }
}

/// The fixed date range bounding eligible PRs.
#[derive(Debug, Clone, Copy)]
pub struct ContestWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ContestWindow {
    /// The contest runs through October of the given year.
    pub fn for_year(year: i32) -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(year, 10, 1).expect("October 1 exists"),
            end: NaiveDate::from_ymd_opt(year, 10, 31).expect("October 31 exists"),
        }
    }

    /// Value for the `created:` search qualifier.
    pub fn query_range(&self) -> String {
        format!(
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Named completion thresholds rather than literals buried in the check.
#[derive(Debug, Clone, Copy)]
pub struct CompletionThresholds {
    pub min_pr_count: usize,
    pub min_other_repos_count: usize,
}

impl Default for CompletionThresholds {
    fn default() -> Self {
        Self {
            min_pr_count: 10,
            min_other_repos_count: 4,
        }
    }
}

impl CompletionThresholds {
    /// Both thresholds must be reached.
    pub fn met(&self, total_count: usize, other_repos_count: usize) -> bool {
        total_count >= self.min_pr_count && other_repos_count >= self.min_other_repos_count
    }
}

/// Resolve the API credential: `GITHUB_TOKEN` if set, otherwise the token the
/// `gh` CLI is logged in with.
pub fn github_token() -> Result<String> {
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        let token = token.trim().to_string();
        if !token.is_empty() {
            return Ok(token);
        }
    }

    let output = Command::new("gh").args(["auth", "token"]).output()?;

    if !output.status.success() {
        anyhow::bail!("No credential found. Set GITHUB_TOKEN or run 'gh auth login' first.");
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
