use tracing::warn;

use super::message::{Command, FetchResult, Message};
use super::model::{App, Status};

/// Update the application state based on a message.
/// Returns an optional command to be executed by the driving loop.
pub fn update(app: &mut App, msg: Message) -> Option<Command> {
    match msg {
        Message::SubmitUsername(username) => Some(Command::StartFetch(username)),

        Message::Refresh => Some(Command::StartFetch(app.username.clone())),

        Message::FetchComplete(result) => {
            handle_fetch_result(app, result);
            None
        }
    }
}

fn handle_fetch_result(app: &mut App, result: FetchResult) {
    if !app.is_current(&result) {
        // Reply from a superseded run; the state belongs to a newer one.
        warn!(username = %result.username, "discarding stale fetch result");
        return;
    }

    match result.outcome {
        Ok(progress) => {
            app.data = Some(progress);
            app.error = None;
            app.status = Status::Ready;
        }
        Err(err) => {
            // No partial success: the item set and user detail go together.
            app.data = None;
            app.error = Some(err);
            app.status = Status::Errored;
        }
    }
}
