//! clipmark CLI — clip web pages to Markdown notes.
//!
//! Fetches a page through the Tavily extraction API, strips comment sections
//! and social-follow boilerplate, and saves the result as a Markdown file
//! with YAML frontmatter.

mod commands;
mod prompt;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
