use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, sync::Arc, sync::Mutex, time::Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

use syncpanel::api::SyncClient;
use syncpanel::config::{self, Config};
use syncpanel::{handlers, ui, utils, App};

/// Sync job status panel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/syncpanel-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Sync service base URL (overrides config)
    #[arg(short, long)]
    url: Option<String>,

    /// Status poll interval in milliseconds (overrides config)
    #[arg(short, long)]
    interval: Option<u64>,
}

/// Route tracing output to the debug log file; stdout belongs to the TUI
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("syncpanel=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    info!("Debug mode enabled, logging to {}", path.display());
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            Config::load(&path)?
        }
        None => {
            info!("No config file found, using defaults");
            Config::default()
        }
    };

    Ok(config.with_overrides(args.url.clone(), args.interval))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug)?;

    let config = load_config(&args)?;
    let client = SyncClient::new(&config.base_url, config.request_timeout())?;
    let base_url = client.base_url().to_string();

    // Spawns the API worker and issues the first status request immediately
    let mut app = App::connect(Arc::new(client), base_url, config.poll_interval());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.stop_polling();
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.process_responses();
        app.tick();

        terminal.draw(|f| ui::render(f, app))?;

        if app.model.ui.should_quit {
            break;
        }

        // Short poll keeps responses flowing onto the screen between key presses
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
