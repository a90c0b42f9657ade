// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fb: submit fuzzing builds and publish their status

mod commands;
mod exit_error;
mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use exit_error::{ExitError, EXIT_FAILURE, EXIT_USAGE};
use fb_core::BuildTag;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fb", version, about = "Submit fuzzing builds and publish build status")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a project under every supported engine and sanitizer
    BuildProject {
        /// Project directory containing project.yaml and Dockerfile
        project_dir: PathBuf,
        /// Print the build request instead of submitting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Rebuild the shared base images
    BuildBaseImages,
    /// Publish fuzzing and coverage status, then badges
    UpdateStatus {
        /// Publish only this build tag's status; badges are skipped
        #[arg(long, value_enum)]
        tag: Option<Tag>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Tag {
    Fuzzing,
    Coverage,
}

impl From<Tag> for BuildTag {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Fuzzing => BuildTag::Fuzzing,
            Tag::Coverage => BuildTag::Coverage,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and succeed
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    logging::init();

    if let Err(err) = run(cli) {
        let code = err.downcast_ref::<ExitError>().map_or(EXIT_FAILURE, |e| e.code);
        eprintln!("error: {:#}", err);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = runtime.block_on(async {
        match cli.command {
            Commands::BuildProject { project_dir, dry_run } => {
                commands::build::build_project(&project_dir, dry_run).await
            }
            Commands::BuildBaseImages => commands::build::build_base_images_command().await,
            Commands::UpdateStatus { tag } => {
                commands::status::update_status(tag.map(BuildTag::from)).await
            }
        }
    });
    result.map_err(|e| ExitError::from(e).into())
}
