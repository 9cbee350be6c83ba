use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use kynseed_rating::config::AppConfig;
use kynseed_rating::core::catalog::Catalog;
use kynseed_rating::tui::app::AppState;
use kynseed_rating::tui::events::AppEvent;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _log_guard = kynseed_rating::core::logging::init_tui();
    tracing::info!(version = kynseed_rating::VERSION, "Kynseed Rating starting");

    let config = AppConfig::load();

    // Fail before touching the terminal so the error stays readable
    let catalog_path = config.catalog_path();
    let catalog = match Catalog::load(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Catalog load failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut app = AppState::new(catalog, &config);

    // SIGINT from outside the terminal (raw mode swallows Ctrl+C as a key)
    let tx = app.sender();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(AppEvent::Quit);
        }
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("TUI exited with error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Kynseed Rating exiting");
    Ok(())
}
