use serde::Deserialize;

/// A tag attached to a PR indicating status or category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

/// One pull request from `/search/issues`.
///
/// `repository_url` points back at the owning repository's API resource and
/// carries a `/repos/{owner}/{repo}` segment for well-formed payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestItem {
    pub id: u64,
    pub title: String,
    pub html_url: String,
    pub repository_url: String,
    pub labels: Vec<Label>,
}

/// Envelope shared by both GitHub search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    #[serde(default)]
    pub errors: Option<ApiErrors>,
}

/// Error block GitHub embeds in an otherwise well-formed search body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrors {
    #[serde(default)]
    pub message: Option<String>,
}

/// One user from `/search/users`. The queried user is the first item.
#[derive(Debug, Clone, Deserialize)]
pub struct UserItem {
    pub login: String,
    pub avatar_url: String,
}

/// Body of a non-success response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_pr_search_body_and_ignores_unknown_fields() {
        let body = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "id": 1,
                    "title": "Fix widget",
                    "html_url": "https://github.com/acme/widget/pull/7",
                    "repository_url": "https://api.github.com/repos/acme/widget",
                    "labels": [{"name": "bug", "color": "d73a4a"}],
                    "state": "open"
                }
            ]
        }"#;

        let results: SearchResults<PullRequestItem> = serde_json::from_str(body).unwrap();
        assert_eq!(results.total_count, 2);
        assert_eq!(
            results.items[0].labels,
            vec![Label {
                name: "bug".to_string()
            }]
        );
        assert!(results.errors.is_none());
    }

    #[test]
    fn missing_required_fields_fail_the_decode() {
        let body = r#"{
            "total_count": 1,
            "items": [{"id": 1, "title": "no repository_url", "html_url": "x", "labels": []}]
        }"#;

        assert!(serde_json::from_str::<SearchResults<PullRequestItem>>(body).is_err());
    }

    #[test]
    fn decodes_the_embedded_errors_block() {
        let body = r#"{"total_count": 0, "items": [], "errors": {"message": "Validation Failed"}}"#;

        let results: SearchResults<UserItem> = serde_json::from_str(body).unwrap();
        assert_eq!(
            results.errors.and_then(|e| e.message).as_deref(),
            Some("Validation Failed")
        );
    }
}
