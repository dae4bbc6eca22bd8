use tracing::debug;

use crate::config::Config;
use crate::data::ContestProgress;
use crate::error::FetchError;
use crate::services::github::GithubClient;
use crate::services::labels::{drop_invalid, retain_eligible, LabelPredicate};
use crate::services::ownership::{count_other_repos, primary_user};

/// One full pipeline run for a username: both lookups, both label passes,
/// the ownership count and the completion decision.
///
/// The ownership count runs on the pass-one set, so a PR that the second
/// pass later drops still contributes to `other_repos_count`.
pub async fn run<P>(
    username: &str,
    config: &Config,
    rule: &P,
) -> Result<ContestProgress, FetchError>
where
    P: LabelPredicate + ?Sized,
{
    let client = GithubClient::new(config)?;
    let (prs, users) = client.fetch_user_activity(username, &config.window).await?;

    let user = primary_user(&users, username)?.clone();

    let eligible = retain_eligible(prs.items, rule);
    let other_repos_count = count_other_repos(&eligible, &user.login)?;
    let items = drop_invalid(eligible);
    let total_count = items.len();

    let completed = config.thresholds.met(total_count, other_repos_count);
    debug!(total_count, other_repos_count, completed, "pipeline finished");

    Ok(ContestProgress {
        items,
        total_count,
        other_repos_count,
        user_login: user.login,
        user_avatar: user.avatar_url,
        completed,
    })
}
