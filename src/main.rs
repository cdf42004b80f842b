//! grapheus - CLI entry point.

use std::future::Future;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use grapheus::config::{LOG_ENV_VAR, operation_timeout};
use grapheus::report::build_review_summary;
use grapheus::{
    ChangesRequest, CommitCategory, CommitMessageRequest, FsWriter, GitReader, ReportRequest,
    draft_commit_message, list_changes, write_report,
};

/// List working-tree changes, draft commit messages, and write review reports.
#[derive(Parser, Debug)]
#[command(name = "grapheus")]
#[command(about = "List working-tree changes, draft commit messages, and write review reports")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List changed files with their unified diffs
    Changes {
        /// Repository root (or any directory inside it)
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draft a conventional commit message from pending changes
    CommitMessage {
        /// Repository root (or any directory inside it)
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Commit type to use instead of inferring one
        #[arg(long = "type")]
        commit_type: Option<CommitCategory>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write content into a markdown report
    Report {
        /// Directory to write the report into (must exist)
        #[arg(long, default_value = ".")]
        dir: String,

        /// Report file name, without the .md extension
        #[arg(long)]
        name: String,

        /// Report content
        #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
        content: Option<String>,

        /// Read report content from a file
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List changes, draft a commit message, and write both into a report
    Review {
        /// Repository root (or any directory inside it)
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Directory to write the report into (must exist)
        #[arg(long, default_value = ".")]
        dir: String,

        /// Report file name, without the .md extension
        #[arg(long, default_value = "review")]
        name: String,

        /// Commit type to use instead of inferring one
        #[arg(long = "type")]
        commit_type: Option<CommitCategory>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Changes { repo, json } => {
            let request = ChangesRequest::new(repo);
            let changes = with_deadline("Listing changes", list_changes(&GitReader, &request))
                .await?
                .context("Failed to list changes")?;

            if json {
                print_json(&changes)?;
            } else if changes.is_empty() {
                println!("No changes found.");
            } else {
                println!("Found {} changed files\n", changes.len());
                for change in &changes {
                    println!("=== {} ===", change.file);
                    println!("{}", change.diff);
                }
            }
        }

        Command::CommitMessage {
            repo,
            commit_type,
            json,
        } => {
            let request = CommitMessageRequest::new(repo, commit_type);
            let draft =
                with_deadline("Drafting commit message", draft_commit_message(&GitReader, &request))
                    .await?
                    .context("Failed to draft commit message")?;

            if json {
                print_json(&draft)?;
            } else {
                println!("{}", draft.message);
            }
        }

        Command::Report {
            dir,
            name,
            content,
            content_file,
            json,
        } => {
            let content = match (content, content_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => bail!("Either --content or --content-file is required"),
            };

            let request = ReportRequest::new(dir, name, content);
            let result = with_deadline("Writing report", write_report(&FsWriter, &request)).await?;

            if json {
                print_json(&result)?;
            } else if result.success {
                println!("✓ {}", result.message);
            }
            if !result.success {
                bail!(
                    "{}: {}",
                    result.message,
                    result.error.unwrap_or_default()
                );
            }
        }

        Command::Review {
            repo,
            dir,
            name,
            commit_type,
        } => {
            println!("Analyzing changes in {}...", repo.display());
            let changes_request = ChangesRequest::new(&repo);
            let changes =
                with_deadline("Listing changes", list_changes(&GitReader, &changes_request))
                    .await?
                    .context("Failed to list changes")?;
            println!("Found {} changed files", changes.len());

            let commit_request = CommitMessageRequest::new(&repo, commit_type);
            let draft =
                with_deadline("Drafting commit message", draft_commit_message(&GitReader, &commit_request))
                    .await?
                    .context("Failed to draft commit message")?;
            println!("Suggested commit: {}", draft.subject());

            let body = build_review_summary(&changes, Some(&draft));
            let result = with_deadline(
                "Writing report",
                write_report(&FsWriter, &ReportRequest::new(dir, name, body)),
            )
            .await?;

            match (result.success, result.file_path, result.error) {
                (true, Some(path), _) => println!("✓ Report written to {}", path),
                (_, _, error) => bail!(
                    "Failed to write report: {}",
                    error.unwrap_or_else(|| "unknown error".to_string())
                ),
            }
        }
    }

    Ok(())
}

/// Race an operation against the configured deadline.
async fn with_deadline<T>(label: &str, operation: impl Future<Output = T>) -> Result<T> {
    let limit = operation_timeout();
    tokio::time::timeout(limit, operation)
        .await
        .map_err(|_| anyhow!("{} timed out after {}s", label, limit.as_secs()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

/// Initialize tracing on stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
