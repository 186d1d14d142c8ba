mod app;
mod article;
mod config;
mod home;
mod input;
mod insets;
mod navigation;
mod post;
mod repository;
mod scope;
mod sections;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(about = "Terminal news reader with history and popular sections")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/newsdesk/config.toml")]
    config: String,

    /// Posts JSON file (overrides feed.posts_file)
    #[arg(long)]
    posts: Option<String>,

    /// Theme preset (overrides appearance.theme)
    #[arg(long)]
    theme: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newsdesk")
        .join("newsdesk.log")
}

/// Log to a file; stderr would draw over the alternate screen
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsdesk=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    // Load config
    let mut config = Config::load(&cli.config)?;
    if let Some(posts) = cli.posts {
        config.feed.posts_file = Some(posts);
    }
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme;
    }

    let repository = repository::from_path(config.feed.posts_file.as_deref());

    // Enter home before touching the terminal so feed errors print cleanly
    let mut app = App::new(repository, config).context("Failed to load home feed")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {:#}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // Let view-scoped tasks such as the drawer dispatch run
        tokio::task::yield_now().await;
        app.process_actions();

        if app.should_quit() {
            return Ok(());
        }
    }
}
