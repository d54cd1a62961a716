//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use clipmark_core::pipeline::{self, ClipOutcome, ProgressReporter};
use clipmark_extract::TavilyClient;
use clipmark_markdown::CleanFilter;
use clipmark_shared::{
    AppConfig, ClipRequest, init_config, load_config, resolve_api_key, resolve_base_dir,
};

use crate::prompt;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// clipmark — save web pages as clean Markdown notes.
#[derive(Parser)]
#[command(
    name = "clipmark",
    version,
    about = "Clip web pages to Markdown files with YAML frontmatter.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Clip a single URL to a Markdown file.
    Clip {
        /// URL to clip (must include http:// or https://).
        url: String,

        /// Directory to save the clip in, relative to the base directory.
        #[arg(short, long)]
        dir: String,

        /// Comma-separated tags for the frontmatter.
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Override the configured base directory.
        #[arg(long)]
        base: Option<String>,
    },

    /// Prompt for URLs interactively and clip them one by one.
    Interactive {
        /// Override the configured base directory.
        #[arg(long)]
        base: Option<String>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "clipmark=info",
        1 => "clipmark=debug",
        _ => "clipmark=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Clip {
            url,
            dir,
            tags,
            base,
        } => cmd_clip(&url, &dir, &tags, base.as_deref()).await,
        Command::Interactive { base } => cmd_interactive(base.as_deref()).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

/// Shared setup: config, API key, client, cleaner, base directory.
fn setup(base_override: Option<&str>) -> Result<(TavilyClient, CleanFilter, PathBuf)> {
    let config = load_config()?;

    // A missing API key is fatal before any request is attempted.
    let api_key = resolve_api_key(&config)?;
    let client = TavilyClient::new(api_key, &config.tavily)?;

    let filter = CleanFilter::new(&config.cleaner)?;

    let base_dir = match base_override {
        Some(p) => PathBuf::from(p),
        None => resolve_base_dir(&config)?,
    };

    Ok((client, filter, base_dir))
}

async fn cmd_clip(url: &str, dir: &str, tags: &str, base: Option<&str>) -> Result<()> {
    if dir.trim().is_empty() {
        return Err(eyre!("directory name cannot be empty"));
    }
    if !prompt::is_valid_url(url) {
        return Err(eyre!("invalid URL '{url}': must include http:// or https://"));
    }

    let (client, filter, base_dir) = setup(base)?;
    let request = ClipRequest::new(url, tags, dir.trim());

    info!(url, dir, "clipping URL");

    let reporter = CliProgress::new();
    match pipeline::clip_url(&client, &request, &base_dir, &filter, &reporter).await? {
        Some(outcome) => print_outcome(&outcome),
        None => {
            reporter.spinner.finish_and_clear();
            warn!(url, "no content extracted, nothing saved");
        }
    }

    Ok(())
}

async fn cmd_interactive(base: Option<&str>) -> Result<()> {
    let (client, filter, base_dir) = setup(base)?;

    println!("\n--- clipmark ---");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    loop {
        let Some(request) = prompt::read_request(&mut input, &mut output)? else {
            break;
        };

        let reporter = CliProgress::new();
        match pipeline::clip_url(&client, &request, &base_dir, &filter, &reporter).await {
            Ok(Some(outcome)) => print_outcome(&outcome),
            Ok(None) => {
                reporter.spinner.finish_and_clear();
                warn!(url = %request.url, "no content extracted, nothing saved");
            }
            // Per-URL failures are terminal for that request only.
            Err(e) => {
                reporter.spinner.finish_and_clear();
                error!(url = %request.url, error = %e, "failed to clip URL");
            }
        }

        if !prompt::read_yes_no(
            &mut input,
            &mut output,
            "\nWould you like to clip another URL? (y/n): ",
        )? {
            info!("exiting clipper");
            break;
        }
    }

    Ok(())
}

fn print_outcome(outcome: &ClipOutcome) {
    println!();
    println!("  Clip saved!");
    println!("  Title: {}", outcome.title);
    println!("  Path:  {}", outcome.path.display());
    println!("  Time:  {:.1}s", outcome.elapsed.as_secs_f64());
    println!();
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _outcome: &ClipOutcome) {
        self.spinner.finish_and_clear();
    }
}
