mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::File, io, sync::Mutex};
use tracing_subscriber::EnvFilter;

use chic_storefront::{Config, DataStore};

fn init_logging(config: &Config) -> Result<()> {
    // stdout belongs to the terminal UI, so logs go to a file.
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env_and_args();
    init_logging(&config)?;
    tracing::info!(?config, "starting");

    let store = DataStore::load(&config.data_file).map_err(|e| {
        tracing::warn!(error = %e, "catalog unavailable, product pages disabled");
        format!("Failed to load products from {}: {e}", config.data_file.display())
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(config, store);
    let res = ui::run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "ui exited with error");
        println!("{:?}", err)
    }

    Ok(())
}
