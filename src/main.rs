use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use octofest::{github_token, update, App, Command, Config, ContestWindow, Message, Status};

/// Check a GitHub user's contest progress for the October window.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// GitHub login to check
    username: String,

    /// Contest year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Show every counted PR, not just the totals
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let year = cli.year.unwrap_or_else(|| chrono::Utc::now().year());
    let config = Config::new(github_token()?, ContestWindow::for_year(year));
    let thresholds = config.thresholds;

    let mut app = App::new(config);
    app.start_fetch(cli.username);

    while app.is_loading() {
        if let Some(result) = app.check_fetch_result() {
            if let Some(cmd) = update(&mut app, Message::FetchComplete(result)) {
                let Command::StartFetch(username) = cmd;
                app.start_fetch(username);
            }
        } else {
            thread::sleep(Duration::from_millis(50));
        }
    }

    if app.status == Status::Errored {
        anyhow::bail!(app
            .error_message()
            .unwrap_or_else(|| "fetch did not finish".to_string()));
    }

    let progress = app
        .data
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("fetch finished without a result"))?;

    println!("{} <{}>", progress.user_login, progress.user_avatar);
    println!();

    if cli.list {
        for pr in &progress.items {
            println!("  {}  {}", pr.title, pr.html_url);
        }
        if !progress.items.is_empty() {
            println!();
        }
    }

    println!(
        "Eligible PRs:       {:>3}  (need {})",
        progress.total_count, thresholds.min_pr_count
    );
    println!(
        "Other-repo PRs:     {:>3}  (need {})",
        progress.other_repos_count, thresholds.min_other_repos_count
    );
    println!(
        "Challenge complete: {}",
        if progress.completed { "yes" } else { "not yet" }
    );

    Ok(())
}
