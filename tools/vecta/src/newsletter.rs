use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use vecta_data::Newsletter;

use crate::config::Config;
use crate::error::CliError;

#[derive(Debug, Subcommand, Clone)]
pub enum NewsletterCommand {
    /// Save a newsletter issue to the archive
    Add(AddArgs),
    /// Print every saved issue
    Show(ShowArgs),
}

#[derive(Debug, Args, Clone, Default)]
pub struct AddArgs {
    /// Issue text
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the issue text from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Archive to append to (configured path by default)
    #[arg(long, value_name = "FILE")]
    pub archive: Option<PathBuf>,
}

#[derive(Debug, Args, Clone, Default)]
pub struct ShowArgs {
    /// Archive to read (configured path by default)
    #[arg(long, value_name = "FILE")]
    pub archive: Option<PathBuf>,
}

pub fn run_newsletter(cmd: &NewsletterCommand, config: &Config) -> Result<String, CliError> {
    match cmd {
        NewsletterCommand::Add(args) => {
            let text = match (&args.text, &args.file) {
                (Some(t), _) => t.clone(),
                (None, Some(path)) => fs::read_to_string(path)?,
                (None, None) => {
                    return Err(CliError::Usage(
                        "newsletter text or --file is required".to_string(),
                    ))
                }
            };
            let news = Newsletter::new(args.archive.as_ref().unwrap_or(&config.newsletter));
            news.append(&text)?;
            Ok(format!("Newsletter saved to {}\n", news.path().display()))
        }
        NewsletterCommand::Show(args) => {
            let news = Newsletter::new(args.archive.as_ref().unwrap_or(&config.newsletter));
            Ok(news.read()?)
        }
    }
}
