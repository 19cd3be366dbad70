//! gitscribe - CLI entry point.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitscribe::clipboard::SystemClipboard;
use gitscribe::completion::OpenAiClient;
use gitscribe::config::CompletionConfig;
use gitscribe::flow::{self, TerminalPrompt};
use gitscribe::generate::MessageWriter;
use gitscribe::git::{GitRepo, check_git_installed};

/// AI-assisted Git commit messages, branch names, and PR summaries.
#[derive(Parser, Debug)]
#[command(name = "gitscribe")]
#[command(about = "Generate commit messages, branch names, and PR summaries with AI")]
#[command(version)]
struct Cli {
    /// OpenAI API key (can also be set via OPENAI_API_KEY or a local .env file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a commit message for staged changes and commit interactively
    Commit,
    /// Suggest branch names for the current changes
    Branch,
    /// Summarize the current branch as a pull-request description
    Pr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Preconditions: git on PATH, credential present. Both checked before
    // any repository interaction.
    check_git_installed()?;
    let config = CompletionConfig::resolve(cli.api_key)?;

    let client = OpenAiClient::new(config);
    let writer = MessageWriter::new(&client);
    let repo = GitRepo::new();
    let clipboard = SystemClipboard::detect();

    match cli.command {
        Command::Commit => {
            flow::commit::run(&repo, &writer, &TerminalPrompt).await?;
        }
        Command::Branch => {
            flow::branch::run(&repo, &writer, &clipboard).await;
        }
        Command::Pr => {
            flow::pr::run(&repo, &writer, &clipboard).await;
        }
    }

    Ok(())
}
