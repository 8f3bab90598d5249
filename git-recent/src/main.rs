mod cli;
mod logging;

use clap::Parser;
use cli::{CliError, CliResult};
use git_recent_core::{
    config,
    git::{self, CliGitProvider, GitProvider, Scope},
    state::{Outcome, SelectorState},
};
use git_recent_tui::Theme;
use std::process::ExitCode;

#[derive(Parser)]
#[command(about = "Pick a recently used git branch and check it out")]
struct Cli {
    /// List remote-tracking branches instead of local ones
    #[arg(short, long)]
    remote: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::setup_logging(logging::level_from_env()) {
        eprintln!("Warning: could not set up logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            cli::print_error(&error);
            ExitCode::from(error.code())
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = config::load_config().map_err(|e| CliError::system(format!("{e:#}")))?;
    let scope = Scope::from_remote_flag(cli.remote);
    let provider = CliGitProvider::default();
    log::info!("listing {scope} branches (page size {})", config.page_size);

    let mut state =
        SelectorState::from_source(provider.list_recent_branches(scope), config.page_size);

    // A failed listing never reaches the terminal
    if let Some(Outcome::Errored(message)) = state.outcome() {
        return Err(CliError::user(message.clone()));
    }

    let theme = Theme::from_config(&config.theme);
    let mut terminal = if should_disable_alt_screen() {
        // Inline viewport keeps the picker in the primary screen buffer
        ratatui::init_with_options(ratatui::TerminalOptions {
            viewport: ratatui::Viewport::Inline(inline_height(config.page_size)),
        })
    } else {
        ratatui::init()
    };
    let result = git_recent_tui::run(&mut terminal, &mut state, scope, &theme);
    ratatui::restore();

    match result? {
        Outcome::Selected(branch) => {
            println!("Checking out: {branch}");
            let local = git::checkout(&provider, &branch, scope)?;
            println!("Switched to {local}");
            Ok(())
        }
        Outcome::Cancelled => {
            log::info!("selection cancelled");
            Ok(())
        }
        Outcome::Errored(message) => Err(CliError::user(message)),
    }
}

/// Header, blank line, one page of branches, blank line, and two footer lines
fn inline_height(page_size: usize) -> u16 {
    u16::try_from(page_size.saturating_add(5)).unwrap_or(u16::MAX)
}

fn should_disable_alt_screen() -> bool {
    match std::env::var("GIT_RECENT_NO_ALT_SCREEN") {
        Ok(value) => {
            let value = value.trim().to_ascii_lowercase();
            !matches!(value.as_str(), "" | "0" | "false" | "no" | "off")
        }
        Err(_) => false,
    }
}
