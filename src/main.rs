use std::io;
use std::time::Duration;

use agyal::config::AppConfig;
use agyal::tui::app::AppState;
use agyal::AppError;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let config = AppConfig::load();

    // Initialize logging (file only; the terminal belongs to the TUI)
    let _log_guard = agyal::core::logging::init_tui(&config.data_dir());
    log::info!("{} v{} starting", agyal::NAME, agyal::VERSION);

    let data = agyal::seed::load_dashboard_data(&config)?;
    let mut app = AppState::new(data, &config).map_err(AppError::InvalidData)?;

    // Setup terminal
    enable_raw_mode().map_err(AppError::Terminal)?;
    let mut stdout = io::stdout();
    if config.tui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(AppError::Terminal)?;
    } else {
        execute!(stdout, EnterAlternateScreen).map_err(AppError::Terminal)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(AppError::Terminal)?;

    // Run the app
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    let restored = restore_terminal(&mut terminal, config.tui.mouse_enabled);

    result.map_err(AppError::Terminal)?;
    restored.map_err(AppError::Terminal)?;
    log::info!("{} exiting", agyal::NAME);
    Ok(())
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mouse_enabled: bool,
) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()
}
