use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use showreel_core::{AppConfig, Catalog};
use showreel_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets, App,
};

type Backend = CrosstermBackend<io::Stdout>;

pub fn run(config: Arc<AppConfig>, catalog: Catalog) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Showreel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, catalog);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<Backend>, config: Arc<AppConfig>, catalog: Catalog) -> Result<()> {
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.transition.fps);
    let mut app = App::new(config, catalog, area);
    info!(
        slides = app.catalog.len(),
        mode = app.nav_mode().label(),
        "showreel started"
    );

    loop {
        let offset = app.tick();
        terminal.draw(|frame| widgets::draw(frame, &app, offset))?;

        // Poll at animation rate while the track is still moving
        match event_handler.next(app.needs_fast_update())? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, &app);
                app.dispatch(action);
            }
            Some(AppEvent::Mouse(mouse)) => {
                let action = handle_mouse_event(mouse, &app);
                app.dispatch(action);
            }
            Some(AppEvent::Resize(width, height)) => app.resize(width, height),
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
