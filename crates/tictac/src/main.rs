//! tictac - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictac::{
    Cli, Command, FileThemeStore, MatchController, Settings, SoundBoard, Theme, ThemePreference,
};
use tictac_rules::{Mark, Mode, RandomOpponent};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    let store = FileThemeStore::new(settings.theme_file().clone());

    match cli.command {
        Command::Duo => play(&settings, store, Mode::HumanVsHuman, None, None).await,
        Command::Solo { mark, seed } => {
            let human = mark.map(Mark::from);
            let mode = Mode::HumanVsComputer {
                human: human.unwrap_or(Mark::X),
            };
            play(&settings, store, mode, human, seed).await
        }
        Command::Theme { set, toggle } => theme(store, set, toggle),
    }
}

/// Play a match on stdin/stdout.
#[instrument(skip(settings, store))]
async fn play(
    settings: &Settings,
    store: FileThemeStore,
    mode: Mode,
    chosen: Option<Mark>,
    seed: Option<u64>,
) -> Result<()> {
    let opponent = match seed {
        Some(seed) => RandomOpponent::from_seed(seed),
        None => RandomOpponent::from_entropy(),
    };
    let mut controller = MatchController::new(
        mode,
        opponent,
        *settings.timing(),
        SoundBoard::new(*settings.muted()),
    );
    // Solo without a mark on the command line asks first.
    if matches!(mode, Mode::HumanVsComputer { .. }) && chosen.is_none() {
        controller.new_game();
    }

    let mut theme = ThemePreference::load(store);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    tictac::run(&mut controller, &mut theme, stdin, &mut stdout).await
}

/// Show, set or toggle the saved theme.
#[instrument(skip(store))]
fn theme(store: FileThemeStore, set: Option<Theme>, toggle: bool) -> Result<()> {
    let path: PathBuf = store.path().to_path_buf();
    let mut preference = ThemePreference::load(store);
    let theme = match (set, toggle) {
        (Some(theme), _) => {
            preference.set(theme)?;
            theme
        }
        (None, true) => preference.toggle()?,
        (None, false) => preference.theme(),
    };
    info!(%theme, path = %path.display(), "Theme");
    println!("{}", theme);
    Ok(())
}
