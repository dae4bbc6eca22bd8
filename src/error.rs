use reqwest::StatusCode;
use thiserror::Error;

/// Fallback shown when a failure carries no usable message of its own.
pub const GENERIC_FETCH_ERROR: &str = "Something went wrong, please try again.";

/// Everything that can end a pipeline run early.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("credential is not a valid header value")]
    Credential(#[from] reqwest::header::InvalidHeaderValue),

    #[error("unexpected status {status} from {endpoint} search")]
    BadStatus {
        endpoint: &'static str,
        status: StatusCode,
        error_description: Option<String>,
    },

    #[error("malformed {endpoint} search payload: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("search response reported an error")]
    Api { message: Option<String> },

    #[error("user search returned no items for {username}")]
    MissingUser { username: String },

    #[error("repository url {url:?} has no /repos/{{owner}}/{{repo}} segment")]
    RepoUrl { url: String },
}

impl FetchError {
    /// The single user-facing message for this failure: a description from a
    /// non-success response body wins, then a message reported inside a
    /// search body, then the fixed fallback.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::BadStatus {
                error_description: Some(description),
                ..
            } => description.clone(),
            FetchError::Api {
                message: Some(message),
            } => message.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_precedence_prefers_description_then_api_message() {
        let status = FetchError::BadStatus {
            endpoint: "users",
            status: StatusCode::UNAUTHORIZED,
            error_description: Some("Bad credentials".to_string()),
        };
        assert_eq!(status.user_message(), "Bad credentials");

        let api = FetchError::Api {
            message: Some("Validation Failed".to_string()),
        };
        assert_eq!(api.user_message(), "Validation Failed");
    }

    #[test]
    fn messageless_failures_fall_back_to_the_generic_string() {
        let status = FetchError::BadStatus {
            endpoint: "issues",
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error_description: None,
        };
        assert_eq!(status.user_message(), GENERIC_FETCH_ERROR);

        let missing = FetchError::MissingUser {
            username: "ghost".to_string(),
        };
        assert_eq!(missing.user_message(), GENERIC_FETCH_ERROR);
    }
}
