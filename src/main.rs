use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use tracing::warn;

use qb_season_browser::app::App;
use qb_season_browser::browser::SeasonBrowser;
use qb_season_browser::data;
use qb_season_browser::model::{Era, FilterState, PlayerFilter};
use qb_season_browser::theme::Theme;

/// QB Season Browser: filterable terminal table of quarterback seasons.
#[derive(Parser, Debug)]
#[command(name = "qb-season-browser", version, about)]
struct Cli {
    /// Season data file (.json, .yaml or .yml). Uses the bundled sample when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Initial search text
    #[arg(long, default_value = "")]
    search: String,

    /// Initial player filter
    #[arg(long, default_value = "All")]
    player: String,

    /// Initial era filter: All, "Modern (2020s)", 2010s, 2000s, 1990s, 1980s
    #[arg(long, default_value = "All")]
    era: String,

    /// Colour theme: gridiron or program
    #[arg(long, default_value = "gridiron")]
    theme: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Set up logging to file (we own the terminal)
    let log_dir = std::env::var("QB_SEASON_BROWSER_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("qb-season-browser"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "browser.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("qb_season_browser=info".parse()?),
        )
        .init();

    // Data problems are fatal before the terminal is taken over
    let records = data::load_seasons(cli.data.as_deref())?;

    let mut player = PlayerFilter::from_label(&cli.player);
    if let PlayerFilter::Named(name) = &player {
        if !records.iter().any(|r| &r.player == name) {
            warn!(player = %name, "unknown player filter, showing all players");
            player = PlayerFilter::All;
        }
    }
    let filter = FilterState {
        search: cli.search,
        player,
        era: Era::from_str_loose(&cli.era),
    };
    let browser = SeasonBrowser::with_filter(records, filter);

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // Set up terminal with mouse capture enabled
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = ratatui::init();

    let mut app = App::new(browser, Theme::from_name(&cli.theme));
    let result = app.run(&mut terminal).await;

    // Restore terminal. Disable mouse capture before restoring
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    ratatui::restore();

    result
}
