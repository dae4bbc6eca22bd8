use crate::data::{PullRequestItem, SearchResults, UserItem};
use crate::error::FetchError;

/// The queried user is the first search item; an empty result set is a
/// data-shape failure, not an index fault.
pub fn primary_user<'a>(
    users: &'a SearchResults<UserItem>,
    username: &str,
) -> Result<&'a UserItem, FetchError> {
    users.items.first().ok_or_else(|| FetchError::MissingUser {
        username: username.to_string(),
    })
}

/// Extract `{owner}` from a `.../repos/{owner}/{repo}` API url.
///
/// Everything after the literal `/repos/` segment must split into a
/// non-empty owner and repo; anything else is a parse error rather than a
/// silently wrong owner.
pub fn repo_owner(url: &str) -> Result<&str, FetchError> {
    let malformed = || FetchError::RepoUrl {
        url: url.to_string(),
    };

    let rest = url.split("/repos/").nth(1).ok_or_else(malformed)?;
    let mut segments = rest.split('/');
    let owner = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(malformed)?;
    segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(malformed)?;

    Ok(owner)
}

/// Count PRs whose repository owner differs from the queried login.
///
/// Comparison is case-sensitive and the count is per PR instance: repeated
/// contributions to the same foreign repository each count.
pub fn count_other_repos(prs: &[PullRequestItem], login: &str) -> Result<usize, FetchError> {
    let mut count = 0;
    for pr in prs {
        if repo_owner(&pr.repository_url)? != login {
            count += 1;
        }
    }
    Ok(count)
}
