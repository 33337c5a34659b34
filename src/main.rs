use clap::Parser;
use slack_inviter::config::{load_settings, verbose_from_env};
use slack_inviter::error::Result;
use slack_inviter::logging;
use slack_inviter::runner::{RunOptions, RunSummary, run};
use slack_inviter::slack::SlackClient;
use std::process::ExitCode;

/// Make sure a set of Slack users are members of a set of Slack channels.
///
/// Configuration comes from SLACK_TOKEN, SLACK_CHANNELS, SLACK_CHANNEL_USERS and
/// INVITER_VERBOSE (a .env file in the working directory is read too).
#[derive(Parser, Debug)]
#[command(name = "slack-inviter", version)]
struct Cli {
    /// Show what would be done without joining, inviting or leaving
    #[arg(short, long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load .env before the verbosity switch is read
    dotenvy::dotenv().ok();
    logging::init(cli.verbose || verbose_from_env());

    match try_main(&cli).await {
        Ok(summary) => {
            tracing::info!(
                channels = summary.channels,
                unchanged = summary.unchanged,
                invited = summary.invited,
                temporary_joins = summary.temporary_joins,
                dry_run = summary.dry_run,
                "All channels processed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            logging::log_error("slack-inviter", &e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main(cli: &Cli) -> Result<RunSummary> {
    // Initialize rustls crypto provider
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let settings = load_settings()?;
    tracing::debug!(
        channels = ?settings.inviter.channels,
        users = ?settings.inviter.users,
        "Configuration loaded"
    );

    let client = SlackClient::new(settings.slack.clone())?;

    run(
        &client,
        &settings.inviter,
        RunOptions {
            dry_run: cli.dry_run,
        },
    )
    .await
}
