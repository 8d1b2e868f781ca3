use anyhow::Result;
use clap::{CommandFactory, Parser};
use git_shortcuts::areas::runner::SystemRunner;
use git_shortcuts::areas::session::Session;
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "git-shortcuts",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Short mnemonic shortcuts for everyday git commands",
    long_about = "Maps short keys such as gaa, gcm or gco to the git command they stand for, \
    printing git's output and colorizing `git status` and `git log`. \
    Run with `gsh` for the list of shortcuts.",
    disable_help_flag = true,
    disable_version_flag = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    // Flags after the key are never interpreted here, so `gcm -h` commits
    // the message "-h".
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "SHORTCUT [ARGS]...",
        help = "The shortcut to run (e.g. gs or gcm) and its arguments; -h/--help and \
        -V/--version are only recognized in place of the shortcut"
    )]
    tokens: Vec<String>,
}

/// Help and version requests, recognized only where the shortcut key goes.
enum LeadingFlag {
    Help,
    Version,
}

impl Cli {
    fn leading_flag(&self) -> Option<LeadingFlag> {
        match self.tokens.first().map(String::as_str) {
            Some("-h" | "--help") => Some(LeadingFlag::Help),
            Some("-V" | "--version") => Some(LeadingFlag::Version),
            _ => None,
        }
    }

    fn split(&self) -> (Option<&str>, &[String]) {
        match self.tokens.split_first() {
            Some((key, args)) => (Some(key.as_str()), args),
            None => (None, &[]),
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn init_colors() {
    if !std::io::stdout().is_terminal() && std::env::var_os("CLICOLOR_FORCE").is_none() {
        colored::control::set_override(false);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.leading_flag() {
        Some(LeadingFlag::Help) => {
            Cli::command().print_help()?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(LeadingFlag::Version) => {
            print!("{}", Cli::command().render_version());
            return Ok(ExitCode::SUCCESS);
        }
        None => {}
    }

    init_tracing();
    init_colors();

    let session = Session::new(
        SystemRunner,
        Box::new(std::io::stdout()),
        Box::new(std::io::stderr()),
    );

    let (key, args) = cli.split();
    let outcome = session.dispatch(key, args).await?;
    session.flush()?;

    Ok(ExitCode::from(outcome.exit_code()))
}
