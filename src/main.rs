use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use snippety::config::Config;
use snippety::pipeline::{FallbackReason, GeneratedMessage, MessagePipeline, MessageSource, PipelineOutcome};
use snippety::ticket::{extract_ticket_prefix, is_default_branch};
use snippety::{Cli, git, logging, setup};

/// Ask the user a question and return a trimmed input line.
fn prompt_input(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner());
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Branch name for ticket extraction; an unknown branch just means no prefix.
fn branch_or_warn() -> String {
    let branch = match git::current_branch() {
        Ok(branch) => branch,
        Err(e) => {
            log::debug!("{e}");
            println!(
                "{}",
                "Warning: Could not determine current branch, commit message will not include ticket prefix"
                    .yellow()
            );
            return String::new();
        }
    };

    if !branch.is_empty() && extract_ticket_prefix(&branch).is_empty() && !is_default_branch(&branch) {
        println!(
            "{}",
            format!(
                "Warning: Branch '{branch}' does not match ticket pattern, commit message will not include ticket prefix"
            )
            .yellow()
        );
    }

    branch
}

fn print_fallback(reason: &FallbackReason) {
    if matches!(reason, FallbackReason::Disabled) {
        return;
    }
    println!("{}", reason.to_string().red());
    println!("Falling back to basic analysis...");
}

fn print_preview(generated: &GeneratedMessage) {
    println!("{}", "Generated commit message:".bold().blue());
    println!("{} {}", "Title:".bold().cyan(), generated.message.title.green());
    println!(
        "{} {}",
        "Description:".bold().cyan(),
        generated.message.description.yellow()
    );
}

fn generate(pipeline: &MessagePipeline, diff: &str, branch: &str, with_model: bool) -> PipelineOutcome {
    if !with_model {
        return pipeline.generate(diff, branch);
    }

    let bar = spinner(&format!("Generating commit message ({} tone)...", pipeline.tone()));
    let outcome = pipeline.generate(diff, branch);
    bar.finish_and_clear();
    outcome
}

fn commit_and_push(generated: &GeneratedMessage) -> Result<()> {
    let answer = prompt_input("\nDo you want to create a commit with this message? (y/N): ")?;
    if !is_yes(&answer) {
        println!("Commit not created.");
        return Ok(());
    }

    git::create_commit(&generated.message.title, &generated.message.description)
        .context("Error creating commit")?;
    println!("{}", "Commit created successfully!".green());

    git::push().context("Error pushing commit")?;
    println!("{}", "Commit pushed successfully!".cyan());
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = Config::from_sources(cli);
    log::debug!("Resolved config: {cfg:?}");

    if cli.auto_stage {
        log::debug!("Staging all changes...");
        git::stage_all().context("Error staging changes")?;
    }

    let diff = git::staged_diff().context("Error getting staged diff")?;

    if diff.trim().is_empty() {
        let msg = if cli.auto_stage {
            "No changes found to stage and commit."
        } else {
            "No staged changes found. Please stage your changes with 'git add' first."
        };
        println!("{}", msg.yellow());
        return Ok(());
    }

    if cli.show_diff {
        println!("{}", "Git diff output:".bold().blue());
        println!("{}", "================".blue());
        println!("{diff}");
        println!("{}", "================".blue());
        println!();
    }

    let branch = branch_or_warn();
    let pipeline = setup::build_pipeline(&cfg)?;

    let generated = match generate(&pipeline, &diff, &branch, cfg.model.is_some()) {
        PipelineOutcome::NoChanges => return Ok(()),
        PipelineOutcome::Generated(generated) => generated,
    };

    if let MessageSource::Heuristic(reason) = &generated.source {
        print_fallback(reason);
    }

    print_preview(&generated);

    if cli.interactive {
        commit_and_push(&generated)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbosity());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("{e:#}").red());
            ExitCode::FAILURE
        }
    }
}
