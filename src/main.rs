// src/main.rs
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{fs, io, sync::Mutex, time::Duration};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use activity_log::{app::App, config, ui, ApiClient};

fn main() -> Result<()> {
    let (config, _config_path) = config::load().context("Failed to load configuration")?;
    init_tracing();

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let client = ApiClient::new(
        &config.server_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("Failed to build API client")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(runtime.handle().clone(), client);
    app.request_activity_refresh();
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err); // Print errors to stderr
    }

    Ok(())
}

// The terminal owns stdout, so traces go to a log file in the data dir.
fn init_tracing() {
    let Some(base_dir) = dirs::data_local_dir() else {
        return;
    };
    let log_dir = base_dir.join("activity-log");
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(log_file) = fs::File::create(log_dir.join("activity-log.log")) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .try_init();
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Apply completed API requests and drop expired toasts before drawing
        app.refresh();

        terminal.draw(|f| ui::render_ui(f, app))?;

        // Poll for events with a timeout so in-flight request outcomes are
        // picked up even without input
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key)?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
