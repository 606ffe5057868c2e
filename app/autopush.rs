//! One-shot git helper: stage everything, commit with a timestamped message,
//! rename the branch, and push.
//!
//! Command exit statuses are reported but do not stop the sequence; only a
//! failure to run git at all aborts.

use chrono::Local;
use clap::Parser;
use std::process::{Command, exit};

/// autopush — stage, commit, and push with a timestamped message
#[derive(Parser)]
#[command(name = "autopush", version, about, long_about = None)]
struct Cli {
    /// Remote to push to
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Branch to rename to and push
    #[arg(long, default_value = "main")]
    branch: String,
}

fn main() {
    let cli = Cli::parse();
    let stamp = Local::now().format("%d.%m.%y - %H.%M.%S").to_string();
    let message = format!("Auto commit {}", stamp);

    let steps: [&[&str]; 4] = [
        &["add", "."],
        &["commit", "-m", message.as_str()],
        &["branch", "-M", cli.branch.as_str()],
        &["push", "-u", cli.remote.as_str(), cli.branch.as_str()],
    ];
    for args in steps {
        if let Err(e) = run_git(args) {
            eprintln!("Error while running git commands: {}", e);
            exit(1);
        }
    }
    println!("Commands completed.");
}

fn run_git(args: &[&str]) -> std::io::Result<()> {
    let status = Command::new("git").args(args).status()?;
    if !status.success() {
        eprintln!("git {} exited with {}", args.join(" "), status);
    }
    Ok(())
}
