use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::config::Config;
use crate::data::ContestProgress;
use crate::error::FetchError;
use crate::services::labels::{EligibleByDefault, LabelPredicate};
use crate::services::pipeline;

use super::message::{FetchRequest, FetchResult};

/// Where the current pipeline run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    Errored,
}

pub struct App {
    // Data state
    pub username: String,
    pub status: Status,
    pub data: Option<ContestProgress>,
    pub error: Option<FetchError>,

    // Async communication
    fetch_tx: Sender<FetchRequest>,
    result_rx: Receiver<FetchResult>,

    // Tag of the run currently considered live
    seq: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_rule(config, EligibleByDefault)
    }

    /// Build the state machine with a specific eligibility rule plugged in.
    pub fn with_rule<P>(config: Config, rule: P) -> Self
    where
        P: LabelPredicate + Send + 'static,
    {
        let (fetch_tx, fetch_rx) = mpsc::channel::<FetchRequest>();
        let (result_tx, result_rx) = mpsc::channel::<FetchResult>();

        // Background thread owning the runtime. Requests arrive over the
        // channel and results go back tagged with the request's seq.
        thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");
            while let Ok(request) = fetch_rx.recv() {
                let outcome = rt.block_on(pipeline::run(&request.username, &config, &rule));
                let msg = FetchResult {
                    seq: request.seq,
                    username: request.username,
                    outcome,
                };
                if result_tx.send(msg).is_err() {
                    break;
                }
            }
        });

        Self {
            username: String::new(),
            status: Status::Loading,
            data: None,
            error: None,
            fetch_tx,
            result_rx,
            seq: 0,
        }
    }

    // Getters

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// User-facing message for the errored state, chosen by the fixed
    /// precedence rules.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(FetchError::user_message)
    }

    pub fn other_repos_count(&self) -> Option<usize> {
        self.data.as_ref().map(|d| d.other_repos_count)
    }

    // Fetch management

    /// Begin a run for `username`, superseding whatever run is in flight.
    pub fn start_fetch(&mut self, username: impl Into<String>) {
        self.username = username.into();
        self.seq += 1;
        self.status = Status::Loading;
        self.error = None;
        let _ = self.fetch_tx.send(FetchRequest {
            seq: self.seq,
            username: self.username.clone(),
        });
    }

    pub fn check_fetch_result(&mut self) -> Option<FetchResult> {
        self.result_rx.try_recv().ok()
    }

    pub(crate) fn is_current(&self, result: &FetchResult) -> bool {
        result.seq == self.seq
    }

    pub(crate) fn current_seq(&self) -> u64 {
        self.seq
    }
}
