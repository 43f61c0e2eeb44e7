//! Listing Board - Entry Point
//!
//! Initializes logging and the terminal, then runs the event loop until the
//! user quits.

use std::fs::OpenOptions;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use listing_board::config::Settings;
use listing_board::ui::App;

const LOG_FILE: &str = "listing-board.log";

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Listing Board v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load();
    let mouse_capture = settings.mouse_capture;
    let poll_interval = Duration::from_millis(settings.poll_interval_ms.max(1));

    // Restore the terminal before the panic message is printed
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(mouse_capture);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let result = run_event_loop(&mut terminal, &mut app, poll_interval);

    let restored = restore_terminal(mouse_capture).and_then(|()| terminal.show_cursor());

    log::info!(
        "Listing Board shutting down ({} listings this session)",
        app.form().len()
    );
    finish(result, restored)
}

/// Report errors once the terminal is back to normal.
///
/// The event loop's error wins over a failed restore; both are logged.
fn finish(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    if let Err(ref e) = restored {
        log::error!("Failed to restore terminal: {}", e);
    }
    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    result?;
    restored?;
    Ok(())
}

/// Log to a file so output never lands on the alternate screen
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE)
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // No writable log file; drop everything rather than corrupt the screen
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn restore_terminal(mouse_capture: bool) -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_capture {
        execute!(stdout, DisableMouseCapture)?;
    }
    execute!(stdout, LeaveAlternateScreen)
}

/// Main event loop: redraw when dirty, then wait for the next event
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()> {
    loop {
        if app.needs_redraw() {
            terminal.draw(|frame| app.render(frame))?;
        }

        if !event::poll(poll_interval)? {
            continue;
        }

        match event::read()? {
            // Only handle key press events, not releases
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) {
                    break;
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => {
                log::debug!("Terminal resized to {}x{}", width, height);
                app.request_redraw();
            }
            _ => {}
        }
    }

    Ok(())
}
