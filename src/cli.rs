use crate::commands::{self, RunOptions};
use crate::log_debug;
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, crate_version};

const LOG_FILE: &str = "release-herald-debug.log";

/// Default changelog location, relative to the working directory
const DEFAULT_CHANGELOG: &str = "./changes.md";

/// CLI structure defining the available arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "Release Herald: announce a release to Discord",
    long_about = "Release Herald reads a changelog, reformats it into emoji bullets, \
optionally translates it via OpenAI, and posts a rich embed with download links to a Discord webhook.",
    disable_version_flag = true,
    styles = get_styles(),
)]
pub struct Cli {
    /// Changelog file to read
    #[arg(
        long = "changelog",
        default_value = DEFAULT_CHANGELOG,
        help = "Changelog file to read"
    )]
    pub changelog: String,

    /// Skip translation even if OPENAI_API_KEY is set
    #[arg(
        long = "no-translate",
        help = "Skip translation even if OPENAI_API_KEY is set"
    )]
    pub no_translate: bool,

    /// Print the webhook payload as JSON instead of sending it
    #[arg(
        long = "dry-run",
        help = "Print the webhook payload as JSON instead of sending it"
    )]
    pub dry_run: bool,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(long = "log-file", help = "Specify a custom log file path")]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, status messages, etc.)
    #[arg(short = 'q', long = "quiet", help = "Suppress non-essential output")]
    pub quiet: bool,

    /// Display the version
    #[arg(short = 'v', long = "version", help = "Display the version")]
    pub version: bool,
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Main CLI entry point
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;
        log_debug!("Debug logging enabled, writing to {}", log_file);
    } else {
        crate::logger::disable_logging();
    }

    // Set quiet mode in the UI module
    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    commands::run(&RunOptions {
        changelog_path: cli.changelog,
        no_translate: cli.no_translate,
        dry_run: cli.dry_run,
    })
    .await
}
