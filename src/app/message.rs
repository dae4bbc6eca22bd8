use crate::data::ContestProgress;
use crate::error::FetchError;

/// Request handed to the background fetcher. The tag lets late replies for a
/// superseded run be told apart from the current one.
pub struct FetchRequest {
    pub seq: u64,
    pub username: String,
}

/// Result from an async fetch operation, tagged with the run that made it.
pub struct FetchResult {
    pub seq: u64,
    pub username: String,
    pub outcome: Result<ContestProgress, FetchError>,
}

/// All events the state machine reacts to.
pub enum Message {
    SubmitUsername(String),
    Refresh,
    FetchComplete(FetchResult),
}

/// Command to be executed after update.
pub enum Command {
    StartFetch(String),
}
